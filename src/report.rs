/*!
 * Console summary of a finished run
 *
 * Rendered with the tabled library after the report file has been written.
 */

use std::time::Duration;

use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::writer::ReportSummary;

/// Everything shown in the run summary
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Output file path
    pub output_file: String,
    /// Time taken to scan and write
    pub duration: Duration,
    /// Counts from the report writer
    pub summary: ReportSummary,
}

/// Format of the report output
pub enum ReportFormat {
    /// Console table output
    ConsoleTable,
}

/// Report generator for run results
pub struct Reporter {
    format: ReportFormat,
}

impl Reporter {
    /// Create a new reporter
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    /// Format a number with human-readable units
    fn format_number(&self, num: usize) -> String {
        if num >= 1_000_000 {
            format!("{:.1}M", num as f64 / 1_000_000.0)
        } else if num >= 1_000 {
            format!("{:.1}K", num as f64 / 1_000.0)
        } else {
            num.to_string()
        }
    }

    /// Generate a report string
    pub fn generate_report(&self, report: &RunReport) -> String {
        match self.format {
            ReportFormat::ConsoleTable => self.create_summary_table(report),
        }
    }

    /// Print the report to stdout
    pub fn print_report(&self, report: &RunReport) {
        println!("\n{}", self.generate_report(report));
    }

    fn create_summary_table(&self, report: &RunReport) -> String {
        #[derive(Tabled)]
        struct SummaryRow {
            #[tabled(rename = "Metric")]
            key: String,

            #[tabled(rename = "Value")]
            value: String,
        }

        let summary = &report.summary;
        let mut rows = vec![
            SummaryRow {
                key: "Output File".to_string(),
                value: report.output_file.clone(),
            },
            SummaryRow {
                key: "Process Time".to_string(),
                value: format!("{:.4?}", report.duration),
            },
            SummaryRow {
                key: "Directories".to_string(),
                value: self.format_number(summary.directories),
            },
            SummaryRow {
                key: "Files Listed".to_string(),
                value: self.format_number(summary.files),
            },
            SummaryRow {
                key: "Files Included".to_string(),
                value: self.format_number(summary.included_files),
            },
        ];

        // Only surface decoding trouble when there was some
        if summary.latin1_files > 0 {
            rows.push(SummaryRow {
                key: "Latin-1 Fallbacks".to_string(),
                value: self.format_number(summary.latin1_files),
            });
        }
        if summary.unreadable_files > 0 {
            rows.push(SummaryRow {
                key: "Unreadable Files".to_string(),
                value: self.format_number(summary.unreadable_files),
            });
        }

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }
}
