use campus_client::Transport;
use campus_console::FormKind;
use campus_core::enums::Tab;

use crate::cli::subcommands::UniversityCommands;
use crate::commands::shared::CommandContext;
use crate::commands::shared::form;
use crate::commands::shared::session::start;
use crate::commands::shared::view::print_tab;

pub async fn handle<T: Transport>(action: &UniversityCommands, ctx: &mut CommandContext<'_, T>) -> anyhow::Result<()> {
    start(ctx.console).await?;
    match action {
        UniversityCommands::List => {
            ctx.console.load_universities().await?;
            print_tab(ctx, Tab::Universities)
        }
        UniversityCommands::Get { id } => form::show(ctx, FormKind::University, *id).await,
        UniversityCommands::Create(fields) => form::create(ctx, FormKind::University, &fields.pairs()).await,
        UniversityCommands::Update { id, fields } => {
            form::update(ctx, FormKind::University, *id, &fields.pairs()).await
        }
        UniversityCommands::Delete { id } => form::delete(ctx, FormKind::University, *id).await,
    }
}
