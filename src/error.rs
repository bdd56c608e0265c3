//! Global error handling for codedump
//!
//! Per-file read failures are not represented here: the content extractor
//! turns them into placeholder text so that one bad file never aborts a report.

use std::io;
use thiserror::Error;

/// Global error type for codedump operations
#[derive(Error, Debug)]
pub enum CodeDumpError {
    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// No project path was given on the command line
    #[error("Missing project path argument.")]
    MissingArgument,

    /// Path not found
    #[error("Project directory '{0}' does not exist.")]
    PathNotFound(String),

    /// Path exists but is not a directory
    #[error("'{0}' is not a directory.")]
    NotADirectory(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Writer errors
    #[error("Writer error: {0}")]
    Writer(String),

    /// Unexpected error
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Specialized Result type for codedump operations
pub type Result<T> = std::result::Result<T, CodeDumpError>;

/// Creates a CodeDumpError with a formatted message
#[macro_export]
macro_rules! error {
    ($error_type:ident, $($arg:tt)*) => {
        $crate::error::CodeDumpError::$error_type(format!($($arg)*))
    };
}

/// Returns an error result with a formatted message
#[macro_export]
macro_rules! bail {
    ($error_type:ident, $($arg:tt)*) => {
        return Err($crate::error!($error_type, $($arg)*))
    };
}

/// Ensures a condition is true, otherwise returns an error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $error_type:ident, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($error_type, $($arg)*)
        }
    };
}

/// Extension trait for adding context to errors
pub trait ResultExt<T, E> {
    /// Add additional context to an error
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display;
}

impl<T, E: std::error::Error + 'static> ResultExt<T, E> for std::result::Result<T, E> {
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display,
    {
        self.map_err(|e| {
            let context = f();
            CodeDumpError::Unexpected(format!("{}: {}", context, e))
        })
    }
}

// Lets tests and callers working in `io::Result` use `?` on crate results
impl From<CodeDumpError> for io::Error {
    fn from(err: CodeDumpError) -> Self {
        match err {
            CodeDumpError::Io(e) => e,
            other => io::Error::new(io::ErrorKind::Other, other.to_string()),
        }
    }
}
