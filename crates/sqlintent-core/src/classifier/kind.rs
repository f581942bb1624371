//! Classifier selection

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::{NullClassifier, RegexClassifier, SqlClassifier};
use crate::error::ClassifierError;

/// Available classifier implementations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassifierKind {
    /// Pattern-based read/write detection
    #[default]
    Regex,
    /// Read/write differentiation disabled
    Null,
}

impl ClassifierKind {
    /// Construct the classifier.
    ///
    /// A pattern failure is returned as is; callers that cannot run without
    /// read/write detection must refuse to start rather than fall back to
    /// [`ClassifierKind::Null`].
    pub fn build(self) -> Result<Box<dyn SqlClassifier>, ClassifierError> {
        match self {
            ClassifierKind::Regex => Ok(Box::new(RegexClassifier::new()?)),
            ClassifierKind::Null => Ok(Box::new(NullClassifier::new())),
        }
    }
}

impl FromStr for ClassifierKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "regex" | "pattern" => Ok(ClassifierKind::Regex),
            "null" | "none" | "dummy" | "off" => Ok(ClassifierKind::Null),
            _ => Err(format!(
                "Unknown classifier: '{}'. Supported classifiers: regex, null.",
                s
            )),
        }
    }
}

impl std::fmt::Display for ClassifierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClassifierKind::Regex => write!(f, "regex"),
            ClassifierKind::Null => write!(f, "null"),
        }
    }
}
