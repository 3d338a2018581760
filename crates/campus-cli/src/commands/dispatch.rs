use campus_client::Transport;
use campus_config::CampusConfig;
use campus_console::Console;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands::shared::CommandContext;
use crate::commands::shared::limit::effective_limit;

/// Route a parsed command to its handler.
pub async fn dispatch<T: Transport>(
    command: Commands,
    console: &mut Console<T>,
    config: &CampusConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut ctx = CommandContext {
        console,
        flags,
        limit: effective_limit(flags.limit, config.general.default_limit),
    };

    match command {
        Commands::Dashboard => super::dashboard::handle(&mut ctx).await,
        Commands::Tab(args) => super::tab::handle(&args, &mut ctx).await,
        Commands::Stats => super::stats::handle(&mut ctx).await,
        Commands::University { action } => super::university::handle(&action, &mut ctx).await,
        Commands::Faculty { action } => super::faculty::handle(&action, &mut ctx).await,
        Commands::Department { action } => super::department::handle(&action, &mut ctx).await,
        Commands::User { action } => super::user::handle(&action, &mut ctx).await,
        Commands::Admin { action } => super::admin::handle(&action, &mut ctx).await,
        Commands::Logout => super::logout::handle(&mut ctx).await,
    }
}
