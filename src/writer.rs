/*!
 * Text report writer for codedump
 */

use std::fs::File;
use std::io::{BufWriter, Write};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use indicatif::ProgressBar;
use tracing::{debug, info};

use crate::config::Config;
use crate::content::{extract_content, Decoding};
use crate::error::{Result, ResultExt};
use crate::paths::absolute_path;
use crate::scanner::Scanner;
use crate::tree::render_tree;

/// Separator line used under every heading
pub const RULE: &str = "# ======================================================";

/// Timestamp format of the `Generated on` header line
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Counts describing a written report
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportSummary {
    /// Directories listed in the structure block
    pub directories: usize,
    /// Files listed in the structure block
    pub files: usize,
    /// Files whose contents were copied
    pub included_files: usize,
    /// Included files decoded with the Latin-1 fallback
    pub latin1_files: usize,
    /// Included files replaced by a read-error placeholder
    pub unreadable_files: usize,
}

/// Writer producing the report document
pub struct ReportWriter {
    /// Writer configuration
    config: Config,
    /// Progress bar
    progress: Arc<ProgressBar>,
}

impl ReportWriter {
    /// Create a new report writer
    pub fn new(config: Config, progress: Arc<ProgressBar>) -> Self {
        Self { config, progress }
    }

    /// Write the report to the configured output file, replacing any previous one
    pub fn write(&self) -> Result<ReportSummary> {
        info!("Writing report to {}", self.config.output_file.display());

        let file = File::create(&self.config.output_file).map_err(|e| {
            crate::error!(
                Writer,
                "cannot create {}: {}",
                self.config.output_file.display(),
                e
            )
        })?;
        let mut writer = BufWriter::new(file);
        let summary = self.write_report(&mut writer, Utc::now())?;
        writer
            .flush()
            .with_context(|| format!("failed to flush {}", self.config.output_file.display()))?;

        Ok(summary)
    }

    /// Write the full report document to any sink
    pub fn write_report<W: Write>(
        &self,
        out: &mut W,
        generated_at: DateTime<Utc>,
    ) -> Result<ReportSummary> {
        let scanner = Scanner::new(&self.config.target_dir, self.config.policy.clone());
        let scan = scanner.scan();

        let mut summary = ReportSummary {
            directories: scan.directory_count(),
            files: scan.file_count(),
            ..ReportSummary::default()
        };

        self.write_header(out, generated_at)?;

        writeln!(out, "## Project Structure")?;
        writeln!(out, "{}\n", RULE)?;
        write!(out, "{}", render_tree(&self.root_name(), &scan.entries))?;
        write!(out, "\n\n")?;

        writeln!(out, "## File Contents")?;
        writeln!(out, "{}\n", RULE)?;

        self.progress.set_length(scan.content_files.len() as u64);
        for file in &scan.content_files {
            self.progress.set_message(file.display_path.clone());
            debug!("Including {}", file.display_path);

            let content = extract_content(&file.path);
            match content.decoding {
                Decoding::Utf8 => {}
                Decoding::Latin1 => summary.latin1_files += 1,
                Decoding::Failed => summary.unreadable_files += 1,
            }

            writeln!(out, "### File: {}", file.display_path)?;
            writeln!(out, "{}\n", RULE)?;
            write!(out, "{}", content.text)?;
            write!(out, "\n\n")?;

            summary.included_files += 1;
            self.progress.inc(1);
        }

        Ok(summary)
    }

    /// Write the project header block
    fn write_header<W: Write>(&self, out: &mut W, generated_at: DateTime<Utc>) -> Result<()> {
        writeln!(out, "# Project: {}", self.config.project_name)?;
        writeln!(out, "# Generated on: {}", generated_at.format(TIMESTAMP_FORMAT))?;
        writeln!(out, "# Source Path: {}", self.config.target_dir.display())?;
        writeln!(out, "{}\n", RULE)?;
        Ok(())
    }

    /// Name shown on the first line of the structure block
    fn root_name(&self) -> String {
        absolute_path(&self.config.target_dir)
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string()
    }
}
