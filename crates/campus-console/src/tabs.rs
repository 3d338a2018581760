//! Panel switching.

use campus_core::enums::{Dashboard, Tab};
use serde::Serialize;

use crate::error::ConsoleError;

/// A tab button and its content panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabPanel {
    pub tab: Tab,
    pub button_active: bool,
    pub panel_active: bool,
}

/// Mutually exclusive tab state for one dashboard.
///
/// Exactly one button/panel pair is active at any time. The first tab of
/// the dashboard starts active.
#[derive(Debug, Clone, Serialize)]
pub struct TabSwitcher {
    dashboard: Dashboard,
    panels: Vec<TabPanel>,
}

impl TabSwitcher {
    #[must_use]
    pub fn new(dashboard: Dashboard) -> Self {
        let panels = dashboard
            .tabs()
            .iter()
            .enumerate()
            .map(|(index, &tab)| TabPanel {
                tab,
                button_active: index == 0,
                panel_active: index == 0,
            })
            .collect();
        Self { dashboard, panels }
    }

    /// Deactivate every panel and button, then activate `tab`'s pair.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::UnknownTab`] when the dashboard has no such
    /// tab; the current state is left untouched.
    pub fn activate(&mut self, tab: Tab) -> Result<(), ConsoleError> {
        if !self.panels.iter().any(|panel| panel.tab == tab) {
            return Err(ConsoleError::UnknownTab {
                tab,
                dashboard: self.dashboard,
            });
        }
        for panel in &mut self.panels {
            panel.button_active = false;
            panel.panel_active = false;
        }
        for panel in self.panels.iter_mut().filter(|panel| panel.tab == tab) {
            panel.button_active = true;
            panel.panel_active = true;
        }
        Ok(())
    }

    /// The tab whose panel is currently shown.
    #[must_use]
    pub fn active(&self) -> Option<Tab> {
        self.panels
            .iter()
            .find(|panel| panel.panel_active)
            .map(|panel| panel.tab)
    }

    #[must_use]
    pub fn panels(&self) -> &[TabPanel] {
        &self.panels
    }

    #[must_use]
    pub fn contains(&self, tab: Tab) -> bool {
        self.panels.iter().any(|panel| panel.tab == tab)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn active_counts(switcher: &TabSwitcher) -> (usize, usize) {
        let buttons = switcher.panels().iter().filter(|p| p.button_active).count();
        let panels = switcher.panels().iter().filter(|p| p.panel_active).count();
        (buttons, panels)
    }

    #[test]
    fn first_tab_starts_active() {
        assert_eq!(TabSwitcher::new(Dashboard::Super).active(), Some(Tab::Universities));
        assert_eq!(TabSwitcher::new(Dashboard::University).active(), Some(Tab::Faculties));
    }

    #[rstest]
    #[case(Tab::Universities)]
    #[case(Tab::Faculties)]
    #[case(Tab::Departments)]
    #[case(Tab::Users)]
    #[case(Tab::Admins)]
    fn activating_leaves_exactly_one_pair(#[case] tab: Tab) {
        let mut switcher = TabSwitcher::new(Dashboard::Super);
        switcher.activate(Tab::Users).unwrap();
        switcher.activate(tab).unwrap();
        assert_eq!(switcher.active(), Some(tab));
        assert_eq!(active_counts(&switcher), (1, 1));
        let pair = switcher.panels().iter().find(|p| p.tab == tab).unwrap();
        assert!(pair.button_active && pair.panel_active);
    }

    #[test]
    fn unknown_tab_keeps_state() {
        let mut switcher = TabSwitcher::new(Dashboard::University);
        switcher.activate(Tab::Users).unwrap();
        let err = switcher.activate(Tab::Admins).unwrap_err();
        assert!(matches!(err, ConsoleError::UnknownTab { tab: Tab::Admins, .. }));
        assert_eq!(switcher.active(), Some(Tab::Users));
        assert_eq!(active_counts(&switcher), (1, 1));
    }
}
