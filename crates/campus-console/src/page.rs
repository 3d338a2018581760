//! Headless page model.
//!
//! [`PageState`] is everything a dashboard page shows: header, tabs,
//! statistics cards, one table per tab, filter options, the open form,
//! toasts, and a pending redirect. The controller is the only writer.

use std::collections::BTreeMap;

use campus_core::enums::{Dashboard, Tab};
use serde::Serialize;

use crate::filters::Filters;
use crate::forms::FormState;
use crate::render;
use crate::tabs::TabSwitcher;
use crate::toast::Toast;
use crate::view::{SelectOption, StatCard, TableView};

#[derive(Debug, Clone, Serialize)]
pub struct PageState {
    pub dashboard: Dashboard,
    /// Display name of the signed-in admin.
    pub header: Option<String>,
    /// University name on the university dashboard.
    pub subtitle: Option<String>,
    pub tabs: TabSwitcher,
    pub stats: Vec<StatCard>,
    pub tables: BTreeMap<Tab, TableView>,
    pub filters: Filters,
    /// Options of every university select (filters and forms).
    pub university_options: Vec<SelectOption>,
    /// Options of the department filter's faculty select.
    pub faculty_options: Vec<SelectOption>,
    pub form: Option<FormState>,
    pub toasts: Vec<Toast>,
    pub redirect: Option<String>,
}

impl PageState {
    #[must_use]
    pub fn new(dashboard: Dashboard) -> Self {
        let tables = dashboard
            .tabs()
            .iter()
            .map(|&tab| (tab, TableView::loading(render::columns(tab))))
            .collect();
        Self {
            dashboard,
            header: None,
            subtitle: None,
            tabs: TabSwitcher::new(dashboard),
            stats: Vec::new(),
            tables,
            filters: Filters::default(),
            university_options: vec![SelectOption::all("All Universities")],
            faculty_options: vec![SelectOption::all("All Faculties")],
            form: None,
            toasts: Vec::new(),
            redirect: None,
        }
    }

    #[must_use]
    pub fn table(&self, tab: Tab) -> Option<&TableView> {
        self.tables.get(&tab)
    }

    /// Toasts pushed since the last drain, oldest first.
    pub fn drain_toasts(&mut self) -> Vec<Toast> {
        std::mem::take(&mut self.toasts)
    }

    #[must_use]
    pub fn last_toast(&self) -> Option<&Toast> {
        self.toasts.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_page_has_loading_table_per_tab() {
        let page = PageState::new(Dashboard::University);
        assert_eq!(page.tables.len(), 3);
        assert!(page.table(Tab::Universities).is_none());
        assert!(page.table(Tab::Users).unwrap().is_placeholder());
        assert_eq!(page.university_options[0].value, "");
    }
}
