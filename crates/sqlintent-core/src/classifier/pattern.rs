//! Pattern-based classifier

use regex::bytes::{Regex, RegexBuilder};

use super::{Classification, SqlClassifier};
use crate::error::ClassifierError;

/// Leading whitespace, at most one block comment, then `select` and whitespace.
/// The comment body cannot contain `*/`, so the first close ends it.
const SELECT_PATTERN: &str =
    r"(?i)^\s*(?s:/\*(?:[^*]|\*+[^*/])*\*+/)?\s*select\s+";

/// A select that also contains, on any later line, `for update` or `nextval`,
/// each followed by whitespace or the end of the text so that `for updateX`
/// and `nextvalue` do not count
const LOCKING_SELECT_PATTERN: &str = r"(?i)^\s*(?s:/\*(?:[^*]|\*+[^*/])*\*+/)?\s*select\s+(?s:.*)(?:for\s+update(?:\s|$)|nextval(?:\s|$))";

/// Classifier built on two precompiled patterns.
///
/// The engine has no lookaround, so "a select that is not for update" takes
/// two passes: the select test first, and the locking test only for
/// statements that passed it. Matching runs over the raw bytes with ASCII
/// classes and ASCII case folding only.
#[derive(Debug, Clone)]
pub struct RegexClassifier {
    select: Regex,
    locking_select: Regex,
}

impl RegexClassifier {
    pub fn new() -> Result<Self, ClassifierError> {
        let select = compile("select", SELECT_PATTERN)?;
        let locking_select = compile("locking select", LOCKING_SELECT_PATTERN)?;
        tracing::debug!("compiled statement classifier patterns");
        Ok(Self {
            select,
            locking_select,
        })
    }
}

fn compile(name: &'static str, pattern: &str) -> Result<Regex, ClassifierError> {
    RegexBuilder::new(pattern)
        .unicode(false)
        .build()
        .map_err(|source| ClassifierError::Pattern { name, source })
}

impl SqlClassifier for RegexClassifier {
    fn parse(&self, sql: &str) -> Classification {
        let sql = sql.as_bytes();
        if !self.select.is_match(sql) {
            return Classification::CONSERVATIVE;
        }
        if self.locking_select.is_match(sql) {
            Classification::LOCKING_READ
        } else {
            Classification::READ
        }
    }

    fn is_read(&self, sql: &str) -> bool {
        let sql = sql.as_bytes();
        self.select.is_match(sql) && !self.locking_select.is_match(sql)
    }
}
