//! Dashboard controller settings.

use campus_core::enums::Dashboard;
use serde::{Deserialize, Serialize};

const fn default_dashboard() -> Dashboard {
    Dashboard::Super
}

fn default_login_path() -> String {
    "/login".to_string()
}

const fn default_concurrent_init() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConsoleConfig {
    /// Which dashboard page to drive when the CLI does not say.
    #[serde(default = "default_dashboard")]
    pub dashboard: Dashboard,

    /// Where a failed bootstrap or a logout redirects to.
    #[serde(default = "default_login_path")]
    pub login_path: String,

    /// Fan page-initialization loads out concurrently instead of one by one.
    #[serde(default = "default_concurrent_init")]
    pub concurrent_init: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            dashboard: default_dashboard(),
            login_path: default_login_path(),
            concurrent_init: default_concurrent_init(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = ConsoleConfig::default();
        assert_eq!(config.dashboard, Dashboard::Super);
        assert_eq!(config.login_path, "/login");
        assert!(config.concurrent_init);
    }
}
