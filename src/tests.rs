/*!
 * Tests for codedump functionality
 */

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use chrono::{TimeZone, Utc};
use indicatif::ProgressBar;
use tempfile::tempdir;

use crate::config::{Args, Config};
use crate::error::CodeDumpError;
use crate::paths::display_path;
use crate::scanner::Scanner;
use crate::writer::{ReportWriter, RULE};
use clap::Parser;

// Helper function to create the sample project layout
//
// repo/
//   a.py, README.md, sub/b.py, sub/.git/config
fn setup_sample_repo(parent: &Path) -> io::Result<std::path::PathBuf> {
    let repo = parent.join("repo");
    fs::create_dir_all(repo.join("sub").join(".git"))?;

    fs::write(repo.join("a.py"), "x=1")?;
    fs::write(repo.join("sub").join("b.py"), "y=2")?;
    fs::write(repo.join("README.md"), "# Readme")?;

    let mut git_config = File::create(repo.join("sub").join(".git").join("config"))?;
    writeln!(git_config, "[core]\n\trepositoryformatversion = 0")?;

    Ok(repo)
}

fn config_for(dir: &Path) -> Config {
    Config::from_path(&dir.to_string_lossy()).expect("valid project directory")
}

fn writer_for(config: Config) -> ReportWriter {
    ReportWriter::new(config, Arc::new(ProgressBar::hidden()))
}

fn write_report_to_string(config: Config) -> io::Result<String> {
    let generated_at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
    let mut buffer = Vec::new();
    writer_for(config).write_report(&mut buffer, generated_at)?;
    Ok(String::from_utf8(buffer).expect("report is UTF-8"))
}

// The sample scenario end to end
#[test]
fn test_sample_scenario() -> io::Result<()> {
    let temp_dir = tempdir()?;
    let repo = setup_sample_repo(temp_dir.path())?;
    let config = config_for(&repo);
    let root = display_path(&config.target_dir);

    let report = write_report_to_string(config)?;

    let expected_lines = [
        "# Project: repo".to_string(),
        "# Generated on: 2024-01-02 03:04:05 UTC".to_string(),
        format!("# Source Path: {}", root),
        RULE.to_string(),
        String::new(),
        "## Project Structure".to_string(),
        RULE.to_string(),
        String::new(),
        "repo/".to_string(),
        "├── README.md".to_string(),
        "├── a.py".to_string(),
        "└── sub/".to_string(),
        "    └── b.py".to_string(),
        String::new(),
        "## File Contents".to_string(),
        RULE.to_string(),
        String::new(),
        format!("### File: {}/a.py", root),
        RULE.to_string(),
        String::new(),
        "x=1".to_string(),
        String::new(),
        format!("### File: {}/sub/b.py", root),
        RULE.to_string(),
        String::new(),
        "y=2".to_string(),
        String::new(),
    ];
    let expected = format!("{}\n", expected_lines.join("\n"));
    assert_eq!(report, expected);

    Ok(())
}

// Ignored directories are pruned from both blocks
#[test]
fn test_ignored_directories_are_pruned() -> io::Result<()> {
    let temp_dir = tempdir()?;
    let repo = setup_sample_repo(temp_dir.path())?;
    fs::create_dir_all(repo.join(".venv").join("lib"))?;
    fs::write(repo.join(".venv").join("lib").join("site.py"), "venv = True")?;
    fs::create_dir_all(repo.join("__pycache__"))?;
    fs::write(repo.join("__pycache__").join("a.cpython.pyc"), "")?;

    let report = write_report_to_string(config_for(&repo))?;

    assert!(!report.contains(".git"));
    assert!(!report.contains(".venv"));
    assert!(!report.contains("site.py"));
    assert!(!report.contains("venv = True"));
    assert!(!report.contains("__pycache__"));

    Ok(())
}

// Files with an ignored extension are listed but not copied
#[test]
fn test_markdown_listed_but_not_copied() -> io::Result<()> {
    let temp_dir = tempdir()?;
    let repo = setup_sample_repo(temp_dir.path())?;

    let report = write_report_to_string(config_for(&repo))?;
    let (structure, contents) = report
        .split_once("## File Contents")
        .expect("contents block present");

    assert!(structure.contains("README.md"));
    assert!(!contents.contains("README.md"));
    assert!(!contents.contains("# Readme"));

    Ok(())
}

// Files outside the inclusion filter appear only in the structure block
#[test]
fn test_inclusion_filter() -> io::Result<()> {
    let temp_dir = tempdir()?;
    let project = temp_dir.path().join("proj");
    fs::create_dir_all(&project)?;
    fs::write(project.join("requirements.txt"), "requests==2.0")?;
    fs::write(project.join(".env"), "KEY=value")?;
    fs::write(project.join("app.ts"), "export {}")?;
    fs::write(project.join("package.json"), "{}")?;
    fs::write(project.join("notes.txt"), "private notes")?;
    fs::write(project.join("main.py.bak"), "old code")?;

    let report = write_report_to_string(config_for(&project))?;
    let (structure, contents) = report
        .split_once("## File Contents")
        .expect("contents block present");

    for name in ["requirements.txt", ".env", "app.ts", "package.json"] {
        assert!(structure.contains(name), "{} listed", name);
        assert!(contents.contains(&format!("/{}\n", name)), "{} copied", name);
    }
    for name in ["notes.txt", "main.py.bak"] {
        assert!(structure.contains(name), "{} listed", name);
        assert!(!contents.contains(name), "{} not copied", name);
    }
    assert!(!contents.contains("private notes"));

    Ok(())
}

// The report never lists itself, even after repeated runs
#[test]
fn test_output_file_excluded_on_rerun() -> io::Result<()> {
    let temp_dir = tempdir()?;
    let repo = setup_sample_repo(temp_dir.path())?;
    let config = config_for(&repo);
    let output_file = config.output_file.clone();
    assert_eq!(output_file, repo.join("repo_full_code.txt"));

    writer_for(config.clone()).write()?;
    let first = fs::read_to_string(&output_file)?;
    writer_for(config).write()?;
    let second = fs::read_to_string(&output_file)?;

    assert!(!first.contains("repo_full_code.txt"));
    assert!(!second.contains("repo_full_code.txt"));

    // Identical apart from the timestamp line
    let strip = |report: &str| -> Vec<String> {
        report
            .lines()
            .filter(|line| !line.starts_with("# Generated on: "))
            .map(str::to_string)
            .collect()
    };
    assert_eq!(strip(&first), strip(&second));

    Ok(())
}

// The written header carries a UTC timestamp in the fixed format
#[test]
fn test_written_header() -> io::Result<()> {
    let temp_dir = tempdir()?;
    let repo = setup_sample_repo(temp_dir.path())?;
    let config = config_for(&repo);

    let summary = writer_for(config.clone()).write()?;
    let report = fs::read_to_string(&config.output_file)?;
    let lines: Vec<&str> = report.lines().collect();

    assert_eq!(lines[0], "# Project: repo");
    let timestamp = lines[1]
        .strip_prefix("# Generated on: ")
        .expect("timestamp line");
    assert!(timestamp.ends_with(" UTC"));
    assert_eq!(timestamp.len(), "2024-01-02 03:04:05 UTC".len());
    assert_eq!(
        lines[2],
        format!("# Source Path: {}", config.target_dir.display())
    );

    assert_eq!(summary.directories, 1);
    assert_eq!(summary.files, 3);
    assert_eq!(summary.included_files, 2);

    Ok(())
}

// Undecodable UTF-8 falls back to Latin-1 instead of a placeholder
#[test]
fn test_latin1_content_in_report() -> io::Result<()> {
    let temp_dir = tempdir()?;
    let project = temp_dir.path().join("legacy");
    fs::create_dir_all(&project)?;
    fs::write(project.join("old.py"), b"name = 'Jos\xe9'\n")?;

    let config = config_for(&project);
    let mut buffer = Vec::new();
    let summary = writer_for(config).write_report(&mut buffer, Utc::now())?;
    let report = String::from_utf8(buffer).expect("report is UTF-8");

    assert!(report.contains("name = 'José'"));
    assert!(!report.contains("Error reading file"));
    assert_eq!(summary.latin1_files, 1);
    assert_eq!(summary.unreadable_files, 0);

    Ok(())
}

// Directories without reportable files still show up in the tree
#[test]
fn test_empty_directories_in_structure() -> io::Result<()> {
    let temp_dir = tempdir()?;
    let project = temp_dir.path().join("proj");
    fs::create_dir_all(project.join("docs"))?;
    fs::create_dir_all(project.join("empty"))?;
    fs::write(project.join("docs").join("guide.md"), "guide")?;

    let report = write_report_to_string(config_for(&project))?;

    assert!(report.contains("├── docs/\n│   └── guide.md\n└── empty/\n"));

    Ok(())
}

// Contents follow traversal order: a directory's files, then its subdirectories
#[test]
fn test_content_order() -> io::Result<()> {
    let temp_dir = tempdir()?;
    let project = temp_dir.path().join("proj");
    fs::create_dir_all(project.join("pkg"))?;
    fs::write(project.join("z.py"), "z")?;
    fs::write(project.join("a.py"), "a")?;
    fs::write(project.join("pkg").join("m.py"), "m")?;

    let config = config_for(&project);
    let scan = Scanner::new(&config.target_dir, config.policy.clone()).scan();
    let names: Vec<&str> = scan
        .content_files
        .iter()
        .map(|f| f.display_path.rsplit('/').next().unwrap_or_default())
        .collect();

    assert_eq!(names, vec!["a.py", "z.py", "m.py"]);

    Ok(())
}

// Unquoted paths with spaces are rebuilt from separate tokens
#[test]
fn test_args_join_tokens() {
    let args = Args::try_parse_from(["codedump", "my", "proj/app"]).unwrap();
    assert_eq!(args.project_path().as_deref(), Some("my proj/app"));

    let args = Args::try_parse_from(["codedump"]).unwrap();
    assert_eq!(args.project_path(), None);
}

#[test]
fn test_config_rejects_missing_argument() {
    let args = Args::try_parse_from(["codedump"]).unwrap();
    assert!(matches!(
        Config::from_args(&args),
        Err(CodeDumpError::MissingArgument)
    ));
}

#[test]
fn test_config_rejects_missing_directory() -> io::Result<()> {
    let temp_dir = tempdir()?;
    let missing = temp_dir.path().join("nope");

    let err = Config::from_path(&missing.to_string_lossy()).unwrap_err();
    assert!(matches!(err, CodeDumpError::PathNotFound(_)));
    assert!(err.to_string().contains("does not exist"));

    Ok(())
}

#[test]
fn test_config_rejects_file() -> io::Result<()> {
    let temp_dir = tempdir()?;
    let file = temp_dir.path().join("file.py");
    fs::write(&file, "")?;

    let err = Config::from_path(&file.to_string_lossy()).unwrap_err();
    assert!(matches!(err, CodeDumpError::NotADirectory(_)));

    Ok(())
}

#[test]
fn test_config_derives_names() -> io::Result<()> {
    let temp_dir = tempdir()?;
    let project = temp_dir.path().join("My Project");
    fs::create_dir_all(&project)?;

    let raw = format!("{}/", project.display());
    let config = Config::from_path(&raw).expect("valid project directory");

    assert_eq!(config.target_dir, project);
    assert_eq!(config.project_name, "My_Project");
    assert_eq!(
        config.output_file,
        project.join("My_Project_full_code.txt")
    );
    assert_eq!(
        config.policy.output_file_name(),
        Some("My_Project_full_code.txt")
    );

    Ok(())
}
