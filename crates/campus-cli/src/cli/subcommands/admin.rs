use campus_core::enums::Role;
use clap::{Args, Subcommand};

/// Admin account commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AdminCommands {
    /// List admins.
    List,
    /// Show an admin as its edit form.
    Get { id: i64 },
    /// Create an admin.
    Create(AdminFields),
    /// Update an admin. An omitted password is left unchanged.
    Update {
        id: i64,
        #[command(flatten)]
        fields: AdminFields,
    },
    /// Delete an admin.
    Delete { id: i64 },
}

#[derive(Clone, Debug, Default, Args)]
pub struct AdminFields {
    #[arg(long)]
    pub username: Option<String>,
    #[arg(long)]
    pub full_name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub password: Option<String>,
    /// super_admin, admin or university_admin
    #[arg(long)]
    pub role: Option<Role>,
    /// University id, used only for university admins
    #[arg(long)]
    pub university: Option<i64>,
    #[arg(long)]
    pub active: Option<bool>,
}

impl AdminFields {
    #[must_use]
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        field_pairs![
            "username" => self.username,
            "full_name" => self.full_name,
            "email" => self.email,
            "password" => self.password,
            "role" => self.role,
            "university_id" => self.university,
            "is_active" => self.active,
        ]
    }
}
