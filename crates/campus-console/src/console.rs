//! The dashboard controller: bootstrap, page init, tabs, logout.

use campus_client::{CampusClient, Transport};
use campus_config::ConsoleConfig;
use campus_core::enums::{Dashboard, Tab};
use tracing::{debug, info, warn};

use crate::error::ConsoleError;
use crate::page::PageState;
use crate::session::SessionContext;
use crate::toast::Toast;
use crate::view::SelectOption;

/// View-sync controller for one dashboard page view.
///
/// Operations take `&mut self`; the page model is only ever written from
/// here. A failed bootstrap leaves `page().redirect` set and every other
/// operation then fails with [`ConsoleError::NoSession`].
#[derive(Debug)]
pub struct Console<T> {
    pub(crate) client: CampusClient<T>,
    pub(crate) login_path: String,
    pub(crate) concurrent_init: bool,
    pub(crate) page: PageState,
    pub(crate) session: Option<SessionContext>,
}

impl<T: Transport> Console<T> {
    pub fn new(client: CampusClient<T>, config: &ConsoleConfig) -> Self {
        Self {
            client,
            login_path: config.login_path.clone(),
            concurrent_init: config.concurrent_init,
            page: PageState::new(config.dashboard),
            session: None,
        }
    }

    pub const fn client(&self) -> &CampusClient<T> {
        &self.client
    }

    pub const fn page(&self) -> &PageState {
        &self.page
    }

    pub const fn page_mut(&mut self) -> &mut PageState {
        &mut self.page
    }

    pub const fn dashboard(&self) -> Dashboard {
        self.page.dashboard
    }

    /// The bootstrapped session.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::NoSession`] before a successful bootstrap.
    pub fn session(&self) -> Result<&SessionContext, ConsoleError> {
        self.session.as_ref().ok_or(ConsoleError::NoSession)
    }

    /// Check who is signed in and set up the header.
    ///
    /// Anything other than an identity whose role the dashboard allows
    /// (request error, 401, no user, wrong role, a university admin without
    /// a university) records a redirect to the login page and issues no
    /// further request.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Redirected`] when the page was sent to login.
    pub async fn bootstrap(&mut self) -> Result<&SessionContext, ConsoleError> {
        let dashboard = self.page.dashboard;
        let identity = match self.client.me().await {
            Ok(Some(identity)) if dashboard.allows(identity.role) => identity,
            Ok(Some(identity)) => {
                info!(role = %identity.role, %dashboard, "role not allowed on this dashboard");
                return Err(self.redirect_to_login());
            }
            Ok(None) => {
                info!("no signed-in user");
                return Err(self.redirect_to_login());
            }
            Err(error) => {
                info!(%error, "session check failed");
                return Err(self.redirect_to_login());
            }
        };

        let university = match dashboard {
            Dashboard::Super => None,
            Dashboard::University => {
                let Some(university_id) = identity.university_id else {
                    info!(user = identity.id, "university admin has no university");
                    return Err(self.redirect_to_login());
                };
                match self.client.get_university(university_id).await {
                    Ok(university) => Some(university),
                    Err(error) => {
                        warn!(%error, university_id, "failed to load the admin's university");
                        None
                    }
                }
            }
        };

        self.page.header = Some(identity.display_name().to_string());
        self.page.subtitle = university.as_ref().and_then(|u| u.name.clone());
        if dashboard == Dashboard::University
            && let Some(id) = identity.university_id
        {
            let label = self.page.subtitle.clone().unwrap_or_else(|| format!("University #{id}"));
            self.page.university_options = vec![SelectOption {
                value: id.to_string(),
                label,
            }];
        }
        self.page.redirect = None;
        debug!(user = identity.id, %dashboard, "session bootstrapped");
        Ok(&*self.session.insert(SessionContext { identity, university }))
    }

    pub(crate) fn redirect_to_login(&mut self) -> ConsoleError {
        self.session = None;
        self.page.redirect = Some(self.login_path.clone());
        info!(to = %self.login_path, "redirecting to login");
        ConsoleError::Redirected {
            to: self.login_path.clone(),
        }
    }

    /// Bootstrap, then load stats, every table and the filter options.
    ///
    /// With `concurrent_init` the independent requests are fanned out with
    /// `tokio::join!`; results are applied in the same fixed order either
    /// way.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Redirected`] when bootstrap fails. Loader
    /// failures are only logged.
    pub async fn init(&mut self) -> Result<(), ConsoleError> {
        self.bootstrap().await?;
        let super_page = self.page.dashboard == Dashboard::Super;
        let faculty_scope = self.faculty_scope()?;
        let department_query = self.department_query()?;
        let user_query = self.user_query()?;

        let client = &self.client;
        let stats = self.fetch_stats();
        let universities = async {
            if super_page {
                Some(client.list_universities().await)
            } else {
                None
            }
        };
        let faculties = client.list_faculties(faculty_scope);
        let departments = client.list_departments(department_query);
        let users = client.list_users(user_query);
        let admins = async {
            if super_page {
                Some(client.list_admins().await)
            } else {
                None
            }
        };

        let (stats, universities, faculties, departments, users, admins) = if self.concurrent_init {
            tokio::join!(stats, universities, faculties, departments, users, admins)
        } else {
            (
                stats.await,
                universities.await,
                faculties.await,
                departments.await,
                users.await,
                admins.await,
            )
        };

        self.apply_stats(stats);
        if let Some(universities) = universities {
            self.apply_universities(universities);
        }
        // Both faculty selects start unscoped (or scoped to the session's
        // university), so one response fills the table and the options.
        self.apply_faculties(faculties, true);
        self.apply_departments(departments);
        self.apply_users(users);
        if let Some(admins) = admins {
            self.apply_admins(admins);
        }
        Ok(())
    }

    /// Show `tab`'s panel.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::UnknownTab`] if the dashboard has no such tab.
    pub fn activate_tab(&mut self, tab: Tab) -> Result<(), ConsoleError> {
        self.page.tabs.activate(tab)
    }

    pub(crate) fn ensure_tab(&self, tab: Tab) -> Result<(), ConsoleError> {
        if self.page.tabs.contains(tab) {
            Ok(())
        } else {
            Err(ConsoleError::UnknownTab {
                tab,
                dashboard: self.page.dashboard,
            })
        }
    }

    pub(crate) fn toast(&mut self, toast: Toast) {
        if toast.is_error() {
            info!(message = %toast.message, "error toast");
        } else {
            info!(message = %toast.message, "success toast");
        }
        self.page.toasts.push(toast);
    }

    /// End the session and go to the login page.
    ///
    /// The redirect happens whether or not the logout request succeeds.
    pub async fn logout(&mut self) -> String {
        if let Err(error) = self.client.logout().await {
            warn!(%error, "logout request failed");
        }
        self.page.form = None;
        self.redirect_to_login();
        self.login_path.clone()
    }
}
