//! Read/write statement classification
//!
//! A classifier looks at raw statement text and answers two questions for the
//! routing layer: may this statement go to a read replica, and does it leave
//! the connection inside a transaction. Neither answer involves a SQL grammar.

mod kind;
mod null;
mod pattern;

use serde::{Deserialize, Serialize};

pub use kind::ClassifierKind;
pub use null::NullClassifier;
pub use pattern::RegexClassifier;

/// Result of classifying one statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Classification {
    /// The statement is syntactically a `SELECT`
    pub is_select: bool,
    /// The connection must be treated as holding an open transaction afterwards
    pub starts_transaction: bool,
}

impl Classification {
    /// A plain read
    pub const READ: Self = Self::new(true, false);
    /// A `SELECT` that takes locks or consumes a sequence value
    pub const LOCKING_READ: Self = Self::new(true, true);
    /// Anything not recognized as a read
    pub const CONSERVATIVE: Self = Self::new(false, true);
    /// The answer given when classification is disabled
    pub const UNCLASSIFIED: Self = Self::new(false, false);

    pub const fn new(is_select: bool, starts_transaction: bool) -> Self {
        Self {
            is_select,
            starts_transaction,
        }
    }

    /// Safe to route to a read replica
    pub const fn is_read(&self) -> bool {
        self.is_select && !self.starts_transaction
    }
}

impl From<Classification> for (bool, bool) {
    fn from(c: Classification) -> Self {
        (c.is_select, c.starts_transaction)
    }
}

/// Capability shared by every classifier variant.
///
/// Implementations hold no mutable state after construction and are shared
/// freely between threads.
pub trait SqlClassifier: Send + Sync {
    /// Classify a statement
    fn parse(&self, sql: &str) -> Classification;

    /// Whether the statement is a read: a `SELECT` that is neither
    /// `FOR UPDATE` nor a `nextval` call.
    fn is_read(&self, sql: &str) -> bool {
        self.parse(sql).is_read()
    }
}

impl<T: SqlClassifier + ?Sized> SqlClassifier for Box<T> {
    fn parse(&self, sql: &str) -> Classification {
        (**self).parse(sql)
    }

    fn is_read(&self, sql: &str) -> bool {
        (**self).is_read(sql)
    }
}

impl<T: SqlClassifier + ?Sized> SqlClassifier for std::sync::Arc<T> {
    fn parse(&self, sql: &str) -> Classification {
        (**self).parse(sql)
    }

    fn is_read(&self, sql: &str) -> bool {
        (**self).is_read(sql)
    }
}
