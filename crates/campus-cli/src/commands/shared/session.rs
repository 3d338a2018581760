use campus_client::Transport;
use campus_console::{Console, ConsoleError};

fn signed_out(error: ConsoleError, dashboard: &str) -> anyhow::Error {
    match error {
        ConsoleError::Redirected { to } => anyhow::anyhow!(
            "not signed in as a {dashboard} dashboard admin (redirected to {to}); \
             sign in through the web login and set CAMPUS_API__SESSION_COOKIE"
        ),
        other => other.into(),
    }
}

/// Bootstrap the session only.
pub async fn start<T: Transport>(console: &mut Console<T>) -> anyhow::Result<()> {
    let dashboard = console.dashboard();
    match console.bootstrap().await {
        Ok(session) => {
            tracing::debug!(user = session.identity.display_name(), "session ready");
            Ok(())
        }
        Err(error) => Err(signed_out(error, dashboard.as_str())),
    }
}

/// Bootstrap and load every panel of the page.
pub async fn load_page<T: Transport>(console: &mut Console<T>) -> anyhow::Result<()> {
    let dashboard = console.dashboard();
    console
        .init()
        .await
        .map_err(|error| signed_out(error, dashboard.as_str()))
}
