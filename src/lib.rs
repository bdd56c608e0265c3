/*!
 * codedump - Snapshot a project directory into a single text report
 *
 * The report holds a header, an ASCII tree of the project structure and the
 * concatenated contents of its source files.
 */

pub mod config;
pub mod content;
pub mod error;
pub mod ignore;
pub mod paths;
pub mod report;
pub mod scanner;
pub mod tree;
pub mod types;
pub mod writer;

#[cfg(test)]
mod tests;

// Re-export main components for easier access
pub use config::{Args, Config};
pub use content::{extract_content, read_file_content, Decoding, ExtractedContent};
pub use error::{CodeDumpError, Result};
pub use ignore::IgnorePolicy;
pub use paths::{normalize_path, output_path, project_name, sanitize_name};
pub use report::{ReportFormat, Reporter, RunReport};
pub use scanner::Scanner;
pub use tree::render_tree;
pub use types::{ContentFile, EntryKind, PathEntry, ScanResult, TreeGroups};
pub use writer::{ReportSummary, ReportWriter};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
