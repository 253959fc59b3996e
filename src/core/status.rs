//! Status lines
//!
//! Progress and summary lines go to stderr so stdout stays a clean table or
//! JSON stream.

use colored::Colorize;
use std::fmt::Display;

/// Verbosity-aware handle for status output
#[derive(Debug, Clone, Copy, Default)]
pub struct Status {
    quiet: bool,
    verbose: bool,
}

impl Status {
    pub fn new(quiet: bool, verbose: bool, color: bool) -> Self {
        if !color {
            colored::control::set_override(false);
        }
        Self { quiet, verbose }
    }

    /// A handle that prints nothing except warnings
    #[cfg(test)]
    pub fn silent() -> Self {
        Self {
            quiet: true,
            verbose: false,
        }
    }

    /// Regular progress line (hidden with --quiet)
    pub fn info(&self, message: impl Display) {
        if !self.quiet {
            eprintln!("{}", message);
        }
    }

    /// Diagnostic detail (only with --verbose)
    pub fn detail(&self, message: impl Display) {
        if self.is_verbose() {
            eprintln!("{} {}", "·".dimmed(), message.to_string().dimmed());
        }
    }

    /// Warnings are always shown
    pub fn warn(&self, message: impl Display) {
        eprintln!("{} {}", "warning:".yellow().bold(), message);
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose && !self.quiet
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_overrides_verbose() {
        let status = Status {
            quiet: true,
            verbose: true,
        };
        assert!(!status.is_verbose());
    }

    #[test]
    fn test_default_is_not_verbose() {
        assert!(!Status::default().is_verbose());
        assert!(!Status::silent().is_verbose());
    }
}
