/*!
 * Configuration handling for codedump
 */

use std::path::PathBuf;

use clap::Parser;

use crate::ensure;
use crate::error::{CodeDumpError, Result};
use crate::ignore::IgnorePolicy;
use crate::paths::{normalize_path, output_file_name, output_path, project_name};

/// Usage text printed when no project path is given
pub const USAGE: &str = "Usage: codedump <project_path>\nExample: codedump ~/work/my project";

/// Command-line arguments for codedump
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "codedump",
    version = env!("CARGO_PKG_VERSION"),
    about = "Snapshot a project directory into a single text report",
    long_about = "Writes <project>_full_code.txt inside the project directory, containing a tree of the project structure followed by the contents of its source files."
)]
pub struct Args {
    /// Project directory. Unquoted paths containing spaces are joined back together
    #[clap(
        value_name = "PROJECT_PATH",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub path: Vec<String>,
}

impl Args {
    /// The single logical path formed by joining all tokens with a space
    pub fn project_path(&self) -> Option<String> {
        let joined = self.path.join(" ");
        let trimmed = joined.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Normalized project directory
    pub target_dir: PathBuf,

    /// Sanitized project name
    pub project_name: String,

    /// Report file path, inside `target_dir`
    pub output_file: PathBuf,

    /// Traversal and inclusion rules
    pub policy: IgnorePolicy,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args(args: &Args) -> Result<Self> {
        let path = args.project_path().ok_or(CodeDumpError::MissingArgument)?;
        Self::from_path(&path)
    }

    /// Create and validate configuration for a raw project path
    pub fn from_path(raw: &str) -> Result<Self> {
        let target_dir = normalize_path(raw);
        let project_name = project_name(&target_dir);
        let output_file = output_path(&target_dir);
        let policy = IgnorePolicy::new(output_file_name(&project_name));

        let config = Self {
            target_dir,
            project_name,
            output_file,
            policy,
        };
        config.validate()?;

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.target_dir.exists(),
            PathNotFound,
            "{}",
            self.target_dir.display()
        );
        ensure!(
            self.target_dir.is_dir(),
            NotADirectory,
            "{}",
            self.target_dir.display()
        );

        Ok(())
    }
}
