/// Template Linter — validates template and word bank files.
///
/// Usage: template_linter <templates>... [--words <file>]

use anyhow::{bail, Result};
use clap::Parser;
use mad_libs::core::lint::LintReport;
use mad_libs::core::template::TemplateSet;
use mad_libs::core::word_bank::WordBank;
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "template_linter")]
#[command(about = "Check story templates and word banks for problems", long_about = None)]
struct Cli {
    /// Template RON files or directories to scan for .ron files
    #[arg(required = true)]
    templates: Vec<PathBuf>,

    /// Word bank RON file to check as well
    #[arg(short, long)]
    words: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut report = LintReport::new();

    let mut files = Vec::new();
    for path in &cli.templates {
        if path.is_file() {
            files.push(path.clone());
        } else if path.is_dir() {
            collect_ron_files(path, &mut files);
        } else {
            bail!("path '{}' does not exist", path.display());
        }
    }
    files.sort();

    let mut template_count = 0;
    for file in &files {
        match TemplateSet::load_from_ron(file) {
            Ok(set) => {
                println!("  Loaded: {} ({} templates)", file.display(), set.len());
                template_count += set.len();
                report.lint_templates(file, &set);
            }
            Err(e) => report
                .errors
                .push(format!("{}: failed to load: {}", file.display(), e)),
        }
    }

    if template_count == 0 {
        report.errors.push("no templates found".to_string());
    }

    if let Some(ref path) = cli.words {
        match WordBank::load_from_ron(path) {
            Ok(bank) => report.lint_word_bank(path, &bank),
            Err(e) => report
                .errors
                .push(format!("{}: failed to load: {}", path.display(), e)),
        }
    }

    println!("\n=== Template Lint Report ===\n");

    if report.is_clean() {
        println!("All checks passed!");
    }

    for warning in &report.warnings {
        println!("WARNING: {}", warning);
    }

    for error in &report.errors {
        println!("ERROR: {}", error);
    }

    println!(
        "\nSummary: {} templates, {} errors, {} warnings",
        template_count,
        report.errors.len(),
        report.warnings.len()
    );

    if !report.errors.is_empty() {
        process::exit(1);
    }
    Ok(())
}

fn collect_ron_files(dir: &Path, files: &mut Vec<PathBuf>) {
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                collect_ron_files(&path, files);
            } else if path.extension().and_then(|s| s.to_str()) == Some("ron") {
                files.push(path);
            }
        }
    }
}
