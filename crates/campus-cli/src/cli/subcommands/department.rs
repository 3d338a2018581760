use clap::{Args, Subcommand};

/// Department commands.
#[derive(Clone, Debug, Subcommand)]
pub enum DepartmentCommands {
    /// List departments, optionally of one university and/or faculty.
    List {
        #[arg(long)]
        university: Option<i64>,
        #[arg(long)]
        faculty: Option<i64>,
    },
    /// Show a department as its edit form.
    Get { id: i64 },
    /// Create a department.
    Create(DepartmentFields),
    /// Update a department.
    Update {
        id: i64,
        #[command(flatten)]
        fields: DepartmentFields,
    },
}

#[derive(Clone, Debug, Default, Args)]
pub struct DepartmentFields {
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
    /// Owning faculty id
    #[arg(long)]
    pub faculty: Option<i64>,
    /// Head of department
    #[arg(long)]
    pub head: Option<String>,
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

impl DepartmentFields {
    #[must_use]
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        field_pairs![
            "name" => self.name,
            "name_ar" => self.name_ar,
            "name_fr" => self.name_fr,
            "code" => self.code,
            "university_id" => self.university,
            "faculty_id" => self.faculty,
            "head_of_department" => self.head,
            "email" => self.email,
            "phone" => self.phone,
            "building" => self.building,
            "official_website" => self.website,
            "description" => self.description,
            "is_active" => self.active,
        ]
    }
}
