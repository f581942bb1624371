//! Fixed-answer classifier

use super::{Classification, SqlClassifier};

/// Classifier used when read/write differentiation is disabled.
///
/// Every statement is reported as a non-read that does not start a
/// transaction. This differs from [`RegexClassifier`](super::RegexClassifier),
/// whose answer for an unknown statement does start one.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullClassifier;

impl NullClassifier {
    pub fn new() -> Self {
        Self
    }
}

impl SqlClassifier for NullClassifier {
    fn parse(&self, _sql: &str) -> Classification {
        Classification::UNCLASSIFIED
    }

    fn is_read(&self, _sql: &str) -> bool {
        false
    }
}
