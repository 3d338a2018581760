use campus_client::Transport;
use campus_core::enums::Tab;

use crate::cli::subcommands::UserCommands;
use crate::commands::shared::CommandContext;
use crate::commands::shared::session::start;
use crate::commands::shared::view::print_tab;

pub async fn handle<T: Transport>(action: &UserCommands, ctx: &mut CommandContext<'_, T>) -> anyhow::Result<()> {
    start(ctx.console).await?;
    match action {
        UserCommands::List { status, university } => {
            if let Some(status) = status {
                ctx.console.page_mut().filters.user_status = Some(*status);
            }
            match university {
                Some(id) => ctx.console.select_user_university(&id.to_string()).await?,
                None => ctx.console.load_users().await?,
            }
            print_tab(ctx, Tab::Users)
        }
    }
}
