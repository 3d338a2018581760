use campus_client::Transport;
use campus_console::FormKind;
use campus_core::enums::Tab;

use crate::cli::subcommands::DepartmentCommands;
use crate::commands::shared::CommandContext;
use crate::commands::shared::form;
use crate::commands::shared::session::start;
use crate::commands::shared::view::print_tab;

pub async fn handle<T: Transport>(action: &DepartmentCommands, ctx: &mut CommandContext<'_, T>) -> anyhow::Result<()> {
    start(ctx.console).await?;
    match action {
        DepartmentCommands::List { university, faculty } => {
            // Same order as the page: university first, which resets the faculty.
            if let Some(id) = university {
                ctx.console.select_department_university(&id.to_string()).await?;
            }
            match faculty {
                Some(id) => ctx.console.select_department_faculty(&id.to_string()).await?,
                None if university.is_none() => ctx.console.load_departments().await?,
                None => {}
            }
            print_tab(ctx, Tab::Departments)
        }
        DepartmentCommands::Get { id } => form::show(ctx, FormKind::Department, *id).await,
        DepartmentCommands::Create(fields) => form::create(ctx, FormKind::Department, &fields.pairs()).await,
        DepartmentCommands::Update { id, fields } => {
            form::update(ctx, FormKind::Department, *id, &fields.pairs()).await
        }
    }
}
