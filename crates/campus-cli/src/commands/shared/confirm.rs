use std::io::{BufRead, Write};

use campus_console::Confirm;

/// `[y/N]` prompt on stderr, answered from stdin. `--yes` skips it.
pub struct StdinConfirm {
    assume_yes: bool,
}

impl StdinConfirm {
    #[must_use]
    pub const fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Confirm for StdinConfirm {
    fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        eprint!("{message} [y/N] ");
        // An unflushed prompt still reads the answer.
        std::io::stderr().flush().ok();
        let mut answer = String::new();
        if std::io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        is_yes(&answer)
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
