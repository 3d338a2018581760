use campus_client::Transport;
use campus_console::FormKind;
use campus_core::enums::Tab;

use crate::cli::subcommands::FacultyCommands;
use crate::commands::shared::CommandContext;
use crate::commands::shared::form;
use crate::commands::shared::session::start;
use crate::commands::shared::view::print_tab;

pub async fn handle<T: Transport>(action: &FacultyCommands, ctx: &mut CommandContext<'_, T>) -> anyhow::Result<()> {
    start(ctx.console).await?;
    match action {
        FacultyCommands::List { university } => {
            match university {
                Some(id) => ctx.console.select_faculty_university(&id.to_string()).await?,
                None => ctx.console.load_faculties().await?,
            }
            print_tab(ctx, Tab::Faculties)
        }
        FacultyCommands::Get { id } => form::show(ctx, FormKind::Faculty, *id).await,
        FacultyCommands::Create(fields) => form::create(ctx, FormKind::Faculty, &fields.pairs()).await,
        FacultyCommands::Update { id, fields } => form::update(ctx, FormKind::Faculty, *id, &fields.pairs()).await,
    }
}
