//! List loaders, statistics and filter cascades.
//!
//! Every loader swallows request failures: it logs a warning and leaves the
//! previously rendered table in place.

use campus_client::departments::DepartmentQuery;
use campus_client::users::UserQuery;
use campus_client::{ClientError, Transport};
use campus_core::entities::{Admin, Department, Faculty, University, User};
use campus_core::enums::{Dashboard, Tab};
use campus_core::stats::{DashboardStats, SystemStats};
use tracing::warn;

use crate::console::Console;
use crate::error::ConsoleError;
use crate::filters::{parse_id, parse_status};
use crate::render;
use crate::view::{SelectOption, StatCard, TableView};

/// Whichever stats payload the dashboard shows.
#[derive(Debug, Clone, PartialEq)]
pub enum StatsSnapshot {
    System(SystemStats),
    Dashboard(DashboardStats),
}

impl StatsSnapshot {
    #[must_use]
    pub fn cards(&self) -> Vec<StatCard> {
        let card = |label, value| StatCard { label, value };
        match self {
            Self::System(stats) => vec![
                card("Universities", stats.universities_count),
                card("Faculties", stats.faculties_count),
                card("Departments", stats.departments_count),
                card("Users", stats.users_count),
                card("Admins", stats.admins_count),
            ],
            Self::Dashboard(stats) => vec![
                card("Faculties", stats.faculties_count),
                card("Departments", stats.departments_count),
                card("Users", stats.users_count),
                card("Active Users", stats.active_users_count),
                card("Pending Users", stats.pending_users_count),
            ],
        }
    }
}

fn options<R>(all: &str, records: &[R], option: impl Fn(&R) -> SelectOption) -> Vec<SelectOption> {
    std::iter::once(SelectOption::all(all))
        .chain(records.iter().map(option))
        .collect()
}

fn named_option(id: i64, name: Option<&str>) -> SelectOption {
    SelectOption {
        value: id.to_string(),
        label: name.map_or_else(|| format!("#{id}"), str::to_string),
    }
}

impl<T: Transport> Console<T> {
    // ── Scoping ────────────────────────────────────────────────────

    /// The university a request is scoped to: always the session's
    /// university on the university dashboard, the selected one otherwise.
    fn scope(&self, selected: Option<i64>) -> Result<Option<i64>, ConsoleError> {
        let session = self.session()?;
        Ok(match self.page.dashboard {
            Dashboard::University => session.university_id(),
            Dashboard::Super => selected,
        })
    }

    pub(crate) fn faculty_scope(&self) -> Result<Option<i64>, ConsoleError> {
        self.scope(self.page.filters.faculty_university)
    }

    pub(crate) fn department_query(&self) -> Result<DepartmentQuery, ConsoleError> {
        Ok(DepartmentQuery {
            university_id: self.scope(self.page.filters.department_university)?,
            faculty_id: self.page.filters.department_faculty,
        })
    }

    pub(crate) fn user_query(&self) -> Result<UserQuery, ConsoleError> {
        Ok(UserQuery {
            status: self.page.filters.user_status,
            university_id: self.scope(self.page.filters.user_university)?,
        })
    }

    fn set_table(&mut self, tab: Tab, table: TableView) {
        self.page.tables.insert(tab, table);
    }

    // ── Stats ──────────────────────────────────────────────────────

    pub(crate) async fn fetch_stats(&self) -> Result<StatsSnapshot, ClientError> {
        match self.page.dashboard {
            Dashboard::Super => self.client.system_stats().await.map(StatsSnapshot::System),
            Dashboard::University => self.client.dashboard_stats().await.map(StatsSnapshot::Dashboard),
        }
    }

    pub(crate) fn apply_stats(&mut self, result: Result<StatsSnapshot, ClientError>) {
        match result {
            Ok(snapshot) => self.page.stats = snapshot.cards(),
            Err(error) => warn!(%error, "failed to load dashboard stats"),
        }
    }

    /// Reload the statistics cards.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::NoSession`] before bootstrap.
    pub async fn refresh_stats(&mut self) -> Result<(), ConsoleError> {
        self.session()?;
        let result = self.fetch_stats().await;
        self.apply_stats(result);
        Ok(())
    }

    // ── Universities ───────────────────────────────────────────────

    pub(crate) fn apply_universities(&mut self, result: Result<Vec<University>, ClientError>) {
        match result {
            Ok(universities) => {
                self.set_table(
                    Tab::Universities,
                    render::table(Tab::Universities, &universities, render::university_row),
                );
                self.page.university_options = options("All Universities", &universities, |u| {
                    named_option(u.id, u.name.as_deref())
                });
            }
            Err(error) => warn!(%error, "failed to load universities"),
        }
    }

    /// Reload the universities table and every university select.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::UnknownTab`] on the university dashboard.
    pub async fn load_universities(&mut self) -> Result<(), ConsoleError> {
        self.ensure_tab(Tab::Universities)?;
        self.session()?;
        let result = self.client.list_universities().await;
        self.apply_universities(result);
        Ok(())
    }

    // ── Faculties ──────────────────────────────────────────────────

    pub(crate) fn apply_faculties(&mut self, result: Result<Vec<Faculty>, ClientError>, with_options: bool) {
        match result {
            Ok(faculties) => {
                self.set_table(
                    Tab::Faculties,
                    render::table(Tab::Faculties, &faculties, render::faculty_row),
                );
                if with_options {
                    self.apply_faculty_options(&faculties);
                }
            }
            Err(error) => warn!(%error, "failed to load faculties"),
        }
    }

    fn apply_faculty_options(&mut self, faculties: &[Faculty]) {
        self.page.faculty_options = options("All Faculties", faculties, |f| named_option(f.id, f.name.as_deref()));
    }

    /// Reload the faculties table with the faculty filter's university.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::NoSession`] before bootstrap.
    pub async fn load_faculties(&mut self) -> Result<(), ConsoleError> {
        let scope = self.faculty_scope()?;
        let result = self.client.list_faculties(scope).await;
        self.apply_faculties(result, false);
        Ok(())
    }

    /// Reload the department filter's faculty options for its university.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::NoSession`] before bootstrap.
    pub async fn load_faculty_options(&mut self) -> Result<(), ConsoleError> {
        let scope = self.scope(self.page.filters.department_university)?;
        match self.client.list_faculties(scope).await {
            Ok(faculties) => self.apply_faculty_options(&faculties),
            Err(error) => warn!(%error, "failed to load faculty options"),
        }
        Ok(())
    }

    // ── Departments ────────────────────────────────────────────────

    pub(crate) fn apply_departments(&mut self, result: Result<Vec<Department>, ClientError>) {
        match result {
            Ok(departments) => self.set_table(
                Tab::Departments,
                render::table(Tab::Departments, &departments, render::department_row),
            ),
            Err(error) => warn!(%error, "failed to load departments"),
        }
    }

    /// Reload the departments table with the department filters.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::NoSession`] before bootstrap.
    pub async fn load_departments(&mut self) -> Result<(), ConsoleError> {
        let query = self.department_query()?;
        let result = self.client.list_departments(query).await;
        self.apply_departments(result);
        Ok(())
    }

    // ── Users ──────────────────────────────────────────────────────

    pub(crate) fn apply_users(&mut self, result: Result<Vec<User>, ClientError>) {
        match result {
            Ok(users) => self.set_table(Tab::Users, render::table(Tab::Users, &users, render::user_row)),
            Err(error) => warn!(%error, "failed to load users"),
        }
    }

    /// Reload the users table with the status and university filters.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::NoSession`] before bootstrap.
    pub async fn load_users(&mut self) -> Result<(), ConsoleError> {
        let query = self.user_query()?;
        let result = self.client.list_users(query).await;
        self.apply_users(result);
        Ok(())
    }

    // ── Admins ─────────────────────────────────────────────────────

    pub(crate) fn apply_admins(&mut self, result: Result<Vec<Admin>, ClientError>) {
        match result {
            Ok(admins) => self.set_table(Tab::Admins, render::table(Tab::Admins, &admins, render::admin_row)),
            Err(error) => warn!(%error, "failed to load admins"),
        }
    }

    /// Reload the admins table.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::UnknownTab`] on the university dashboard.
    pub async fn load_admins(&mut self) -> Result<(), ConsoleError> {
        self.ensure_tab(Tab::Admins)?;
        self.session()?;
        let result = self.client.list_admins().await;
        self.apply_admins(result);
        Ok(())
    }

    /// Reload the table behind `tab`.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::UnknownTab`] if the dashboard has no such tab.
    pub async fn reload(&mut self, tab: Tab) -> Result<(), ConsoleError> {
        self.ensure_tab(tab)?;
        match tab {
            Tab::Universities => self.load_universities().await,
            Tab::Faculties => self.load_faculties().await,
            Tab::Departments => self.load_departments().await,
            Tab::Users => self.load_users().await,
            Tab::Admins => self.load_admins().await,
        }
    }

    // ── Filter cascades ────────────────────────────────────────────

    fn ensure_university_filter(&self) -> Result<(), ConsoleError> {
        match self.page.dashboard {
            Dashboard::Super => Ok(()),
            Dashboard::University => Err(ConsoleError::Unsupported {
                action: "filtering by university",
                entity: "the university dashboard",
            }),
        }
    }

    /// Faculty filter's university select changed.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::InvalidSelection`] for a non-id value and
    /// [`ConsoleError::Unsupported`] on the university dashboard.
    pub async fn select_faculty_university(&mut self, value: &str) -> Result<(), ConsoleError> {
        self.ensure_university_filter()?;
        self.page.filters.faculty_university = parse_id(value)?;
        self.load_faculties().await
    }

    /// Department filter's university select changed: repopulate its
    /// faculty options, then the departments table. The faculty selection
    /// is cleared.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::InvalidSelection`] for a non-id value and
    /// [`ConsoleError::Unsupported`] on the university dashboard.
    pub async fn select_department_university(&mut self, value: &str) -> Result<(), ConsoleError> {
        self.ensure_university_filter()?;
        self.page.filters.department_university = parse_id(value)?;
        self.page.filters.department_faculty = None;
        self.load_faculty_options().await?;
        self.load_departments().await
    }

    /// Department filter's faculty select changed.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::InvalidSelection`] for a non-id value.
    pub async fn select_department_faculty(&mut self, value: &str) -> Result<(), ConsoleError> {
        self.page.filters.department_faculty = parse_id(value)?;
        self.load_departments().await
    }

    /// Users filter's university select changed.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::InvalidSelection`] for a non-id value and
    /// [`ConsoleError::Unsupported`] on the university dashboard.
    pub async fn select_user_university(&mut self, value: &str) -> Result<(), ConsoleError> {
        self.ensure_university_filter()?;
        self.page.filters.user_university = parse_id(value)?;
        self.load_users().await
    }

    /// Users filter's status select changed.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Core`] for an unknown status.
    pub async fn select_user_status(&mut self, value: &str) -> Result<(), ConsoleError> {
        self.page.filters.user_status = parse_status(value)?;
        self.load_users().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_counters_render_as_zero_cards() {
        let cards = StatsSnapshot::Dashboard(DashboardStats::default()).cards();
        assert_eq!(cards.len(), 5);
        assert!(cards.iter().all(|card| card.value == 0));
        assert_eq!(cards[3].label, "Active Users");
    }

    #[test]
    fn university_options_lead_with_all() {
        let universities: Vec<University> =
            serde_json::from_value(serde_json::json!([{"id": 2, "name": "Batna 2"}, {"id": 3}])).unwrap();
        let opts = options("All Universities", &universities, |u| named_option(u.id, u.name.as_deref()));
        assert_eq!(opts.len(), 3);
        assert_eq!(opts[0].value, "");
        assert_eq!(opts[1].label, "Batna 2");
        assert_eq!(opts[2].label, "#3");
    }
}
