use anyhow::Context;
use campus_client::{CampusClient, HttpTransport};
use campus_config::CampusConfig;
use campus_console::Console;

use crate::cli::GlobalFlags;

pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<CampusConfig> {
    let mut config = CampusConfig::load_with_dotenv().context("failed to load campus configuration")?;
    apply_overrides(&mut config, flags);
    config
        .api
        .validate()
        .context("invalid configuration after applying command-line flags")?;

    if !config.api.has_session() {
        tracing::warn!("no session cookie configured; set CAMPUS_API__SESSION_COOKIE");
    }
    Ok(config)
}

/// Command-line flags win over every configuration layer.
fn apply_overrides(config: &mut CampusConfig, flags: &GlobalFlags) {
    if let Some(base_url) = &flags.base_url {
        config.api.base_url.clone_from(base_url);
    }
    if let Some(dashboard) = flags.dashboard {
        config.console.dashboard = dashboard;
    }
}

pub fn build_console(config: &CampusConfig) -> anyhow::Result<Console<HttpTransport>> {
    let client = CampusClient::from_config(&config.api).context("failed to build the admin API client")?;
    Ok(Console::new(client, &config.console))
}
