//! Error category classification.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Host called an input out of order. Indicates a programming error.
    Client,

    /// Missing or malformed configuration.
    Configuration,

    /// Filesystem errors.
    System,

    /// Malformed user-supplied input such as a replay script.
    User,
}

impl ErrorCategory {
    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Client => "client",
            ErrorCategory::Configuration => "configuration",
            ErrorCategory::System => "system",
            ErrorCategory::User => "user",
        }
    }

    /// Returns suggested recovery actions for this category.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Client => "Check the order in which gesture inputs are delivered.",
            ErrorCategory::Configuration => "Fix the config file or remove it to use defaults.",
            ErrorCategory::System => "Check that the file exists and is readable.",
            ErrorCategory::User => "Fix the input file and try again.",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
