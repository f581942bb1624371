//! Output formatting

use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use sqlintent_core::Classification;

use crate::args::OutputFormat;

/// Where the proxy would send a statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    Replica,
    Primary,
}

impl From<Classification> for Route {
    fn from(c: Classification) -> Self {
        if c.is_read() {
            Route::Replica
        } else {
            Route::Primary
        }
    }
}

/// Everything known about one statement
#[derive(Debug, Serialize)]
pub struct StatementReport<'a> {
    pub source: &'a str,
    pub sql: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification: Option<Classification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<Route>,
    pub tables: Vec<String>,
}

/// Output formatter for statement reports
pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Print reports in the configured format
    pub fn print_reports(&self, reports: &[StatementReport<'_>]) -> Result<()> {
        match self.format {
            OutputFormat::Human => {
                self.print_human(reports);
                Ok(())
            }
            OutputFormat::Json => self.print_json(reports),
        }
    }

    fn print_human(&self, reports: &[StatementReport<'_>]) {
        for report in reports {
            let route = match report.route {
                Some(Route::Replica) => "\x1b[32mreplica\x1b[0m ",
                Some(Route::Primary) => "\x1b[33mprimary\x1b[0m ",
                None => "",
            };
            let flags = match report.classification {
                Some(c) => format!(
                    " (select: {}, starts transaction: {})",
                    c.is_select, c.starts_transaction
                ),
                None => String::new(),
            };
            println!("{}{}{}", route, report.source, flags);
            println!("   | {}", report.sql.trim());
            if report.tables.is_empty() {
                println!("   = tables: -");
            } else {
                println!("   = tables: {}", report.tables.join(", "));
            }
        }
    }

    fn print_json(&self, reports: &[StatementReport<'_>]) -> Result<()> {
        let output = serde_json::json!({ "statements": reports });
        println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
        Ok(())
    }
}

/// Tally of routing decisions
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub replica: usize,
    pub primary: usize,
}

impl Summary {
    pub fn from_reports(reports: &[StatementReport<'_>]) -> Self {
        let mut summary = Self::default();
        for route in reports.iter().filter_map(|r| r.route) {
            match route {
                Route::Replica => summary.replica += 1,
                Route::Primary => summary.primary += 1,
            }
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(classification: Classification) -> StatementReport<'static> {
        StatementReport {
            source: "<arg 1>",
            sql: "select a from t",
            classification: Some(classification),
            route: Some(classification.into()),
            tables: vec!["t".to_string()],
        }
    }

    #[test]
    fn test_route_from_classification() {
        assert_eq!(Route::from(Classification::READ), Route::Replica);
        assert_eq!(Route::from(Classification::LOCKING_READ), Route::Primary);
        assert_eq!(Route::from(Classification::CONSERVATIVE), Route::Primary);
        assert_eq!(Route::from(Classification::UNCLASSIFIED), Route::Primary);
    }

    #[test]
    fn test_summary() {
        let reports = vec![
            report(Classification::READ),
            report(Classification::LOCKING_READ),
            report(Classification::CONSERVATIVE),
        ];
        assert_eq!(
            Summary::from_reports(&reports),
            Summary {
                replica: 1,
                primary: 2
            }
        );
    }

    #[test]
    fn test_json_shape() {
        let value = serde_json::to_value(report(Classification::READ)).unwrap();
        assert_eq!(value["route"], "replica");
        assert_eq!(value["classification"]["is_select"], true);
        assert_eq!(value["tables"][0], "t");
    }
}
