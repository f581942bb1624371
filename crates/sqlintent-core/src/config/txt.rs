//! Line-oriented `key=value` files

use std::fmt::Write as _;
use std::path::Path;

use indexmap::IndexMap;

use super::Config;
use crate::error::ConfigError;

/// Configuration read from a text file of `<key>=<value>` lines.
///
/// Lines starting with `#` and lines without `=` are ignored. Keys and values
/// are trimmed of spaces and tabs. Values cannot contain `=`: anything after a
/// second `=` is dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TxtConfig {
    entries: IndexMap<String, String>,
}

impl TxtConfig {
    /// Read and parse a config file
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&contents))
    }

    pub fn parse(contents: &str) -> Self {
        let mut entries = IndexMap::new();
        for line in contents.lines() {
            if line.starts_with('#') {
                continue;
            }
            let mut parts = line.split('=');
            let (Some(key), Some(value)) = (parts.next(), parts.next()) else {
                continue;
            };
            entries.insert(trim(key).to_string(), trim(value).to_string());
        }
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in file order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

fn trim(s: &str) -> &str {
    s.trim_matches(|c| c == ' ' || c == '\t')
}

impl Config for TxtConfig {
    fn get_string(&self, key: &str) -> Result<String, ConfigError> {
        self.get(key)
            .map(str::to_string)
            .ok_or_else(|| ConfigError::NotFound(key.to_string()))
    }

    fn dump(&self) -> String {
        let mut out = String::new();
        for (key, value) in self.iter() {
            let _ = writeln!(out, "{}: {}", key, value);
        }
        out
    }
}
