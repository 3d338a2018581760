use anyhow::bail;
use campus_client::Transport;

use crate::commands::shared::CommandContext;
use crate::commands::shared::session::start;
use crate::output::output;

pub async fn handle<T: Transport>(ctx: &mut CommandContext<'_, T>) -> anyhow::Result<()> {
    start(ctx.console).await?;
    ctx.console.refresh_stats().await?;
    let stats = &ctx.console.page().stats;
    if stats.is_empty() {
        bail!("failed to load dashboard stats; rerun with --verbose for details");
    }
    output(stats, ctx.flags.format)
}
