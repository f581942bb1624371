//! sqlintent-core: heuristic SQL intent classification
//!
//! This library tells a database proxy, without a SQL grammar, whether a
//! statement is a read, whether it leaves the connection in a transaction,
//! and which tables it names. Unknown statements are treated as writes.

pub mod classifier;
pub mod config;
pub mod error;
pub mod tables;

pub use classifier::{
    Classification, ClassifierKind, NullClassifier, RegexClassifier, SqlClassifier,
};
pub use config::{Config, OpsConfig, TxtConfig};
pub use error::{ClassifierError, ConfigError};
pub use tables::{remove_comments, table_names};
