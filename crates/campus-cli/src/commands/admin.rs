use campus_client::Transport;
use campus_console::FormKind;
use campus_core::enums::Tab;

use crate::cli::subcommands::AdminCommands;
use crate::commands::shared::CommandContext;
use crate::commands::shared::form;
use crate::commands::shared::session::start;
use crate::commands::shared::view::print_tab;

pub async fn handle<T: Transport>(action: &AdminCommands, ctx: &mut CommandContext<'_, T>) -> anyhow::Result<()> {
    start(ctx.console).await?;
    match action {
        AdminCommands::List => {
            ctx.console.load_admins().await?;
            print_tab(ctx, Tab::Admins)
        }
        AdminCommands::Get { id } => form::show(ctx, FormKind::Admin, *id).await,
        AdminCommands::Create(fields) => form::create(ctx, FormKind::Admin, &fields.pairs()).await,
        AdminCommands::Update { id, fields } => form::update(ctx, FormKind::Admin, *id, &fields.pairs()).await,
        AdminCommands::Delete { id } => form::delete(ctx, FormKind::Admin, *id).await,
    }
}
