/// Collect the flags that were given as `(form field, raw value)` pairs.
macro_rules! field_pairs {
    ($($field:literal => $value:expr),* $(,)?) => {{
        let mut pairs: Vec<(&'static str, String)> = Vec::new();
        $(
            if let Some(value) = &$value {
                pairs.push(($field, value.to_string()));
            }
        )*
        pairs
    }};
}

mod admin;
mod department;
mod faculty;
mod university;
mod user;

pub use admin::AdminCommands;
pub use department::DepartmentCommands;
pub use faculty::FacultyCommands;
pub use university::UniversityCommands;
pub use user::UserCommands;
