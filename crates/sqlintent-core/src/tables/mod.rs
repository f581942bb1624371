//! Table reference extraction
//!
//! Finds the names that follow `FROM` and `JOIN` in a statement, for routing
//! by data locality. This is a token scan, not a parser: it keeps source
//! names (never aliases), can pick up punctuation the delimiter set does not
//! cover, and only recognizes the keywords in upper case.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

/// Shortest `/* ... */` span, across newlines
static BLOCK_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("block comment pattern is valid"));

/// Keywords whose next token is a table reference
const TABLE_KEYWORDS: [&str; 2] = ["FROM", "JOIN"];

/// Remove every `/* ... */` block comment.
///
/// The first `*/` closes the nearest preceding `/*`; nesting is not
/// supported. An opening `/*` without a close is kept as text.
pub fn remove_comments(sql: &str) -> Cow<'_, str> {
    BLOCK_COMMENT.replace_all(sql, "")
}

fn is_delimiter(c: char) -> bool {
    matches!(c, ' ' | '(' | ')' | ';' | ',')
}

/// Split on runs of spaces, parentheses, semicolons and commas
pub fn tokenize(sql: &str) -> impl Iterator<Item = &str> {
    sql.split(is_delimiter).filter(|token| !token.is_empty())
}

/// Table references of a statement, in order of appearance.
///
/// One entry per `FROM`/`JOIN` keyword; duplicates are kept. A keyword at the
/// very end of the statement contributes nothing.
pub fn table_names(sql: &str) -> Vec<String> {
    let sql = remove_comments(sql);
    let mut tokens = tokenize(&sql).peekable();
    let mut tables = Vec::new();

    while let Some(token) = tokens.next() {
        if TABLE_KEYWORDS.contains(&token) {
            if let Some(&table) = tokens.peek() {
                tables.push(table.to_string());
            }
        }
    }

    tables
}
