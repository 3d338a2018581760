use clap::{Args, Subcommand};

/// University commands.
#[derive(Clone, Debug, Subcommand)]
pub enum UniversityCommands {
    /// List universities.
    List,
    /// Show a university as its edit form.
    Get { id: i64 },
    /// Create a university.
    Create(UniversityFields),
    /// Update a university.
    Update {
        id: i64,
        #[command(flatten)]
        fields: UniversityFields,
    },
    /// Delete a university.
    Delete { id: i64 },
}

#[derive(Clone, Debug, Default, Args)]
pub struct UniversityFields {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub name_ar: Option<String>,
    #[arg(long)]
    pub name_fr: Option<String>,
    #[arg(long)]
    pub code: Option<String>,
    #[arg(long)]
    pub city: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub website: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub active: Option<bool>,
}

impl UniversityFields {
    #[must_use]
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        field_pairs![
            "name" => self.name,
            "name_ar" => self.name_ar,
            "name_fr" => self.name_fr,
            "code" => self.code,
            "city" => self.city,
            "address" => self.address,
            "website" => self.website,
            "email" => self.email,
            "phone" => self.phone,
            "is_active" => self.active,
        ]
    }
}
