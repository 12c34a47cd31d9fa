//! hdoc: build an interactive HTML API reference from documentation
//! comments in C-style header files.
//!
//! With no arguments, scans the current directory for header files and
//! writes `doc/index.html`. File arguments may be paths, directories
//! (scanned one level deep) or glob patterns.

mod model;
mod parser;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, warn};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "hdoc",
    about = "Generate an interactive HTML API reference from header doc comments"
)]
struct Cli {
    /// Input files (glob patterns supported). If omitted, scans the
    /// current directory for header files.
    files: Vec<String>,

    /// Output file
    #[arg(short = 'o', long, default_value = "doc/index.html")]
    output: PathBuf,

    /// Comment dialect: named (@name identifies entries) or brief
    #[arg(long, default_value = "named")]
    dialect: String,

    /// Page title
    #[arg(long, default_value = "Client API Reference")]
    title: String,

    /// Enable debug logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    let dialect = model::Dialect::from_name(&cli.dialect)?;

    let inputs = if cli.files.is_empty() {
        scan_headers(Path::new("."))?
    } else {
        expand_inputs(&cli.files)?
    };

    let doc = build_model(&inputs, dialect);
    write_output(&cli.output, &doc, dialect, &cli.title)
}

/// Substring marking a file name as a header file.
const HEADER_MARKER: &str = ".h";

/// Scan one directory (non-recursive) for header files, sorted by name
/// so enumeration order is deterministic.
fn scan_headers(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?;
    let mut files = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_file() {
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                if name.contains(HEADER_MARKER) {
                    files.push(path);
                }
            }
        }
    }
    files.sort();
    Ok(files)
}

/// Expand command-line arguments into the input file list. A plain file
/// path is used as given, a directory is scanned for header files,
/// anything else is tried as a glob pattern. Argument order is
/// preserved; duplicates keep their first position.
fn expand_inputs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            push_unique(&mut files, path.to_path_buf());
            continue;
        }
        if path.is_dir() {
            for found in scan_headers(path)? {
                push_unique(&mut files, found);
            }
            continue;
        }
        let mut matches: Vec<PathBuf> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            warn!("no files matched: {}", pattern);
        }
        matches.sort();
        for found in matches {
            push_unique(&mut files, found);
        }
    }
    Ok(files)
}

fn push_unique(files: &mut Vec<PathBuf>, path: PathBuf) {
    if !files.contains(&path) {
        files.push(path);
    }
}

/// Parse every input file into the document model. A file that cannot
/// be read is skipped with a warning and contributes nothing; malformed
/// tag lines are reported with their source path.
fn build_model(inputs: &[PathBuf], dialect: model::Dialect) -> model::DocumentModel {
    let mut doc = model::DocumentModel::default();
    for path in inputs {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                warn!("skipping {}: {}", path.display(), e);
                continue;
            }
        };
        let parsed = parser::parse_header(&text, dialect);
        for warning in &parsed.warnings {
            warn!("{}: {}", path.display(), warning);
        }
        let header = model::HeaderDoc {
            source: path.display().to_string(),
            records: parsed.records,
        };
        debug!("{}: {} records", header.source, header.records.len());
        doc.headers.push(header);
    }
    doc
}

/// Write the rendered page through a temporary file in the destination
/// directory, renaming into place on success, so a failed run never
/// leaves a truncated destination behind.
fn write_output(
    output: &Path,
    doc: &model::DocumentModel,
    dialect: model::Dialect,
    title: &str,
) -> Result<()> {
    let dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory: {}", dir.display()))?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("failed to create temporary file in {}", dir.display()))?;
    {
        let mut out = BufWriter::new(tmp.as_file_mut());
        render::write_page(&mut out, doc, dialect, title)
            .with_context(|| format!("failed to write {}", output.display()))?;
        out.flush()
            .with_context(|| format!("failed to write {}", output.display()))?;
    }
    tmp.persist(output)
        .with_context(|| format!("failed to write {}", output.display()))?;
    debug!("wrote {}", output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn scan_picks_header_files_sorted() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("zeta.h"), "").unwrap();
        fs::write(dir.path().join("alpha.h"), "").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        fs::create_dir(dir.path().join("sub.h")).unwrap();

        let files = scan_headers(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["alpha.h", "zeta.h"]);
    }

    #[test]
    fn scan_matches_marker_anywhere_in_name() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("api.hpp"), "").unwrap();
        fs::write(dir.path().join("readme.md"), "").unwrap();

        let files = scan_headers(dir.path()).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("api.hpp"));
    }

    #[test]
    fn explicit_files_keep_argument_order() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a.h");
        let b = dir.path().join("b.h");
        fs::write(&a, "").unwrap();
        fs::write(&b, "").unwrap();

        let args = vec![
            b.to_str().unwrap().to_string(),
            a.to_str().unwrap().to_string(),
            b.to_str().unwrap().to_string(),
        ];
        let files = expand_inputs(&args).unwrap();
        assert_eq!(files, vec![b, a]);
    }

    #[test]
    fn directory_argument_scans_for_headers() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("one.h"), "").unwrap();
        fs::write(dir.path().join("two.c"), "").unwrap();

        let args = vec![dir.path().to_str().unwrap().to_string()];
        let files = expand_inputs(&args).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("one.h"));
    }

    #[test]
    fn unmatched_pattern_expands_to_nothing() {
        let args = vec!["no-such-file-anywhere-*.h".to_string()];
        let files = expand_inputs(&args).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn unreadable_file_is_skipped() {
        let dir = TempDir::new().unwrap();
        let good = dir.path().join("good.h");
        let bad = dir.path().join("bad.h");
        fs::write(&good, "/** @name kept */\n").unwrap();
        fs::write(&bad, [0xffu8, 0xfe, 0x00, 0x01]).unwrap();

        let doc = build_model(&[bad, good], model::Dialect::Named);
        assert_eq!(doc.headers.len(), 1);
        assert_eq!(doc.headers[0].records[0].name, "kept");
    }
}
