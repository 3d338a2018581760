use campus_client::Transport;
use campus_core::enums::Tab;

use crate::cli::root_commands::TabArgs;
use crate::commands::shared::CommandContext;
use crate::commands::shared::session::start;
use crate::commands::shared::view::print_tab;

/// Switch to one tab and print only its table.
pub async fn handle<T: Transport>(args: &TabArgs, ctx: &mut CommandContext<'_, T>) -> anyhow::Result<()> {
    let tab: Tab = args.name.parse()?;
    start(ctx.console).await?;
    ctx.console.activate_tab(tab)?;
    ctx.console.reload(tab).await?;
    print_tab(ctx, tab)
}
