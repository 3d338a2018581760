use clap::{Args, Subcommand};

/// Faculty commands.
#[derive(Clone, Debug, Subcommand)]
pub enum FacultyCommands {
    /// List faculties, optionally of one university.
    List {
        #[arg(long)]
        university: Option<i64>,
    },
    /// Show a faculty as its edit form.
    Get { id: i64 },
    /// Create a faculty.
    Create(FacultyFields),
    /// Update a faculty.
    Update {
        id: i64,
        #[command(flatten)]
        fields: FacultyFields,
    },
}

#[derive(Clone, Debug, Default, Args)]
pub struct FacultyFields {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub name_ar: Option<String>,
    #[arg(long)]
    pub name_fr: Option<String>,
    #[arg(long)]
    pub code: Option<String>,
    /// Owning university id
    #[arg(long)]
    pub university: Option<i64>,
    #[arg(long)]
    pub dean: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub building: Option<String>,
    #[arg(long)]
    pub website: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub active: Option<bool>,
}

impl FacultyFields {
    #[must_use]
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        field_pairs![
            "name" => self.name,
            "name_ar" => self.name_ar,
            "name_fr" => self.name_fr,
            "code" => self.code,
            "university_id" => self.university,
            "dean" => self.dean,
            "email" => self.email,
            "phone" => self.phone,
            "building" => self.building,
            "official_website" => self.website,
            "description" => self.description,
            "is_active" => self.active,
        ]
    }
}
