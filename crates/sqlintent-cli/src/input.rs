//! Statement input

use std::fs;
use std::path::PathBuf;

use miette::{IntoDiagnostic, Result};

/// A statement and where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub source: String,
    pub sql: String,
}

/// Expand glob patterns; plain paths pass through unchanged
pub fn expand_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        if pattern.contains('*') {
            for path in glob::glob(pattern).into_diagnostic()?.flatten() {
                files.push(path);
            }
        } else {
            files.push(PathBuf::from(pattern));
        }
    }
    Ok(files)
}

/// Split a statement log into statements, one per line.
/// Blank lines and `--` comment lines are skipped.
pub fn split_lines(source: &str, content: &str) -> Vec<Statement> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with("--")
        })
        .map(|(i, line)| Statement {
            source: format!("{}:{}", source, i + 1),
            sql: line.to_string(),
        })
        .collect()
}

/// Collect statements from files followed by inline ones
pub fn collect(files: &[PathBuf], inline: &[String]) -> Result<Vec<Statement>> {
    let mut statements = Vec::new();
    for file in files {
        let content = fs::read_to_string(file).into_diagnostic()?;
        statements.extend(split_lines(&file.display().to_string(), &content));
    }
    statements.extend(inline.iter().enumerate().map(|(i, sql)| Statement {
        source: format!("<arg {}>", i + 1),
        sql: sql.clone(),
    }));
    Ok(statements)
}
