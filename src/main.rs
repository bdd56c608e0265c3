/*!
 * Command-line interface for codedump
 */

use std::process::ExitCode;
use std::sync::Arc;
use std::time::{Duration, Instant};

use clap::error::ErrorKind;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use codedump::config::{Args, Config, USAGE};
use codedump::error::{CodeDumpError, Result};
use codedump::report::{ReportFormat, Reporter, RunReport};
use codedump::writer::ReportWriter;

fn main() -> ExitCode {
    setup_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if matches!(e, CodeDumpError::MissingArgument) {
                eprintln!("{}", USAGE);
            }
            ExitCode::FAILURE
        }
    }
}

fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .compact()
        .init();
}

fn run() -> Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.print()?;
            return Ok(());
        }
        Err(e) => return Err(CodeDumpError::InvalidArgument(e.to_string())),
    };
    debug!("Parsed CLI arguments: {args:?}");

    let project_path = args.project_path().ok_or(CodeDumpError::MissingArgument)?;
    println!("Project Path: {}", project_path);

    let config = Config::from_path(&project_path)?;
    println!("Project Name: {}", config.project_name);
    println!("Output File: {}", config.output_file.display());

    let progress = ProgressBar::new(0);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} {prefix:.bold.cyan} {wide_msg:.dim.white} {pos}/{len}")
    {
        progress.set_style(style);
    }
    progress.set_prefix("Copying");
    progress.enable_steady_tick(Duration::from_millis(100));

    let start_time = Instant::now();
    let writer = ReportWriter::new(config.clone(), Arc::new(progress.clone()));
    let result = writer.write();
    progress.finish_and_clear();
    let summary = result?;

    println!(
        "✓ Output successfully written to: {}",
        config.output_file.display()
    );

    let run_report = RunReport {
        output_file: config.output_file.display().to_string(),
        duration: start_time.elapsed(),
        summary,
    };
    Reporter::new(ReportFormat::ConsoleTable).print_report(&run_report);

    Ok(())
}
