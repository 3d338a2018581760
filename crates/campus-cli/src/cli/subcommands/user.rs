use campus_core::enums::UserStatus;
use clap::Subcommand;

/// User commands.
#[derive(Clone, Debug, Subcommand)]
pub enum UserCommands {
    /// List users.
    List {
        /// active, pending, inactive or suspended
        #[arg(long)]
        status: Option<UserStatus>,
        #[arg(long)]
        university: Option<i64>,
    },
}
