use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    AdminCommands, DepartmentCommands, FacultyCommands, UniversityCommands, UserCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Load the whole dashboard and show the active tab.
    Dashboard,
    /// Load the dashboard and show one tab.
    Tab(TabArgs),
    /// Show the statistics cards.
    Stats,
    /// Universities (super dashboard).
    University {
        #[command(subcommand)]
        action: UniversityCommands,
    },
    /// Faculties.
    Faculty {
        #[command(subcommand)]
        action: FacultyCommands,
    },
    /// Departments.
    Department {
        #[command(subcommand)]
        action: DepartmentCommands,
    },
    /// Users (read-only).
    User {
        #[command(subcommand)]
        action: UserCommands,
    },
    /// Admin accounts (super dashboard).
    Admin {
        #[command(subcommand)]
        action: AdminCommands,
    },
    /// End the backend session.
    Logout,
}

#[derive(Clone, Debug, Args)]
pub struct TabArgs {
    /// universities, faculties, departments, users or admins
    pub name: String,
}
