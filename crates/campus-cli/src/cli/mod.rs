use campus_core::enums::Dashboard;
use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `campus` binary.
#[derive(Debug, Parser)]
#[command(name = "campus", version, about = "Campus admin dashboards from the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Max rows to print for list commands
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (suppress toasts and progress)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Answer yes to confirmation prompts
    #[arg(short, long, global = true)]
    pub yes: bool,

    /// Dashboard to drive: super or university (defaults to config)
    #[arg(short, long, global = true)]
    pub dashboard: Option<Dashboard>,

    /// Backend base URL (defaults to config)
    #[arg(long, global = true)]
    pub base_url: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
            yes: self.yes,
            dashboard: self.dashboard,
            base_url: self.base_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use campus_core::enums::{Dashboard, Role, UserStatus};
    use clap::{CommandFactory, Parser};

    use super::subcommands::{AdminCommands, DepartmentCommands, UniversityCommands, UserCommands};
    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "campus",
            "--format",
            "json",
            "--limit",
            "10",
            "--dashboard",
            "university",
            "stats",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.limit, Some(10));
        assert_eq!(cli.dashboard, Some(Dashboard::University));
        assert!(matches!(cli.command, Commands::Stats));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["campus", "logout", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Logout));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["campus", "--format", "xml", "stats"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn dashboard_rejects_unknown_value() {
        let parsed = Cli::try_parse_from(["campus", "--dashboard", "faculty", "stats"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn university_create_collects_fields() {
        let cli = Cli::try_parse_from([
            "campus", "university", "create", "--name", "Batna 2", "--code", "UB2", "--active", "false",
        ])
        .expect("cli should parse");
        let Commands::University {
            action: UniversityCommands::Create(fields),
        } = cli.command
        else {
            panic!("expected university create");
        };
        assert_eq!(
            fields.pairs(),
            vec![
                ("name", "Batna 2".to_string()),
                ("code", "UB2".to_string()),
                ("is_active", "false".to_string()),
            ]
        );
    }

    #[test]
    fn admin_update_takes_typed_role() {
        let cli = Cli::try_parse_from([
            "campus", "admin", "update", "5", "--role", "university-admin", "--university", "4", "--yes",
        ])
        .expect("cli should parse");
        assert!(cli.yes);
        let Commands::Admin {
            action: AdminCommands::Update { id, fields },
        } = cli.command
        else {
            panic!("expected admin update");
        };
        assert_eq!(id, 5);
        assert_eq!(fields.role, Some(Role::UniversityAdmin));
        assert!(fields.pairs().contains(&("university_id", "4".to_string())));
    }

    #[test]
    fn user_list_filters_parse() {
        let cli = Cli::try_parse_from(["campus", "user", "list", "--status", "pending", "--university", "3"])
            .expect("cli should parse");
        let Commands::User {
            action: UserCommands::List { status, university },
        } = cli.command
        else {
            panic!("expected user list");
        };
        assert_eq!(status, Some(UserStatus::Pending));
        assert_eq!(university, Some(3));
    }

    #[test]
    fn department_delete_is_not_a_command() {
        assert!(Cli::try_parse_from(["campus", "department", "delete", "3"]).is_err());
        let cli = Cli::try_parse_from(["campus", "department", "list", "--faculty", "3"]).expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Department {
                action: DepartmentCommands::List {
                    university: None,
                    faculty: Some(3)
                }
            }
        ));
    }
}
