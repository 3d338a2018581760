use campus_client::Transport;
use serde_json::json;

use crate::commands::shared::CommandContext;
use crate::output::output;

/// Logout needs no bootstrap: the redirect happens either way.
pub async fn handle<T: Transport>(ctx: &mut CommandContext<'_, T>) -> anyhow::Result<()> {
    let redirect = ctx.console.logout().await;
    output(&json!({ "redirect": redirect }), ctx.flags.format)
}
