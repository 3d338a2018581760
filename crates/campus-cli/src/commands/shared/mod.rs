pub mod confirm;
pub mod form;
pub mod limit;
pub mod session;
pub mod view;

use campus_console::Console;

use crate::cli::GlobalFlags;

/// Everything a command handler needs.
pub struct CommandContext<'a, T> {
    pub console: &'a mut Console<T>,
    pub flags: &'a GlobalFlags,
    /// Max rows printed per table.
    pub limit: usize,
}
