//! User-facing output formatting.
//!
//! Status messages go to stdout, warnings and errors to stderr, with ANSI
//! colors when the terminal supports them.

use std::io::{self, IsTerminal, Write};

/// Level of output message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// Informational message.
    Info,
    /// Success message.
    Success,
    /// Warning message.
    Warning,
    /// Error message.
    Error,
}

/// Output formatter for CLI status messages.
#[derive(Debug, Clone)]
pub struct OutputFormatter {
    /// Whether to use colored output.
    colored: bool,
}

impl OutputFormatter {
    /// Create a new output formatter with automatic color detection.
    pub fn new() -> Self {
        Self {
            colored: Self::should_use_color(),
        }
    }

    /// Create a formatter that never colors its output.
    pub fn plain() -> Self {
        Self { colored: false }
    }

    /// Detect if colored output should be used.
    ///
    /// Returns true if stdout is a TTY and TERM is set.
    fn should_use_color() -> bool {
        io::stdout().is_terminal() && std::env::var("TERM").is_ok()
    }

    /// Print an informational message.
    pub fn info(&self, message: &str) {
        self.print_message(MessageLevel::Info, message);
    }

    /// Print a success message.
    pub fn success(&self, message: &str) {
        self.print_message(MessageLevel::Success, message);
    }

    /// Print a warning message.
    pub fn warning(&self, message: &str) {
        self.print_message(MessageLevel::Warning, message);
    }

    /// Print an error message.
    pub fn error(&self, message: &str) {
        self.print_message(MessageLevel::Error, message);
    }

    /// Print a message with level-appropriate formatting.
    fn print_message(&self, level: MessageLevel, message: &str) {
        let (prefix, color_code) = match level {
            MessageLevel::Info => ("", "\x1b[0m"),
            MessageLevel::Success => ("✓ ", "\x1b[32m"),
            MessageLevel::Warning => ("⚠ ", "\x1b[33m"),
            MessageLevel::Error => ("✗ ", "\x1b[31m"),
        };

        let line = if self.colored {
            format!("{color_code}{prefix}{message}\x1b[0m")
        } else {
            format!("{prefix}{message}")
        };

        match level {
            MessageLevel::Warning | MessageLevel::Error => {
                eprintln!("{line}");
                io::stderr().flush().ok();
            }
            _ => {
                println!("{line}");
                io::stdout().flush().ok();
            }
        }
    }
}

impl Default for OutputFormatter {
    fn default() -> Self {
        Self::new()
    }
}
