//! sqlintent CLI - SQL read/write classification tool

mod args;
mod config;
mod input;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use clap::Parser;
use miette::Result;
use sqlintent_core::config::Config as _;
use sqlintent_core::{table_names, ClassifierKind, OpsConfig, SqlClassifier};

use crate::args::{Args, Command};
use crate::config::Config;
use crate::input::Statement;
use crate::output::{OutputFormatter, Route, StatementReport, Summary};

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(args) {
        Ok(denied) => {
            if denied {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            eprintln!("Error: {:?}", e);
            ExitCode::from(2)
        }
    }
}

fn run(args: Args) -> Result<bool> {
    let quiet = args.quiet;
    match args.command {
        Command::Classify {
            files,
            sql,
            classifier,
            config: config_path,
            format,
            deny_writes,
        } => {
            let config = Config::resolve(config_path.as_deref())?;
            let config = config.merge_with_args(&files, &classifier, &format, deny_writes);

            let kind: ClassifierKind = match &config.classifier {
                Some(name) => name.parse().map_err(|e: String| miette::miette!(e))?,
                None => ClassifierKind::default(),
            };
            // Refuse to run rather than fall back to the null classifier
            let classifier = kind.build()?;
            tracing::info!(classifier = %kind, "classifier ready");

            let statements = load_statements(&config.files, &sql)?;
            let reports: Vec<_> = statements
                .iter()
                .map(|s| {
                    let classification = classifier.parse(&s.sql);
                    StatementReport {
                        source: &s.source,
                        sql: &s.sql,
                        classification: Some(classification),
                        route: Some(Route::from(classification)),
                        tables: table_names(&s.sql),
                    }
                })
                .collect();

            OutputFormatter::new(config.output_format()).print_reports(&reports)?;

            let summary = Summary::from_reports(&reports);
            if !quiet {
                eprintln!();
                eprintln!(
                    "{} statement(s): {} to replica, {} to primary",
                    reports.len(),
                    summary.replica,
                    summary.primary
                );
            }

            Ok(config.deny_writes && summary.primary > 0)
        }

        Command::Tables { files, sql, format } => {
            let patterns: Vec<String> = files.iter().map(|p| p.display().to_string()).collect();
            let statements = load_statements(&patterns, &sql)?;
            let reports: Vec<_> = statements
                .iter()
                .map(|s| StatementReport {
                    source: &s.source,
                    sql: &s.sql,
                    classification: None,
                    route: None,
                    tables: table_names(&s.sql),
                })
                .collect();

            OutputFormatter::new(format.unwrap_or_default()).print_reports(&reports)?;
            Ok(false)
        }

        Command::Ops { file, keys, watch } => {
            let mut ops = OpsConfig::open(file)?;
            print_ops(&ops, &keys);

            let Some(secs) = watch else {
                return Ok(false);
            };
            watch_ops(&mut ops, &keys, Duration::from_secs(secs.max(1)))
        }
    }
}

fn load_statements(patterns: &[String], inline: &[String]) -> Result<Vec<Statement>> {
    let files: Vec<PathBuf> = input::expand_patterns(patterns)?;
    let statements = input::collect(&files, inline)?;
    if statements.is_empty() {
        miette::bail!(
            "No statements to read. Pass files, use --sql, or configure files in sqlintent.toml"
        );
    }
    Ok(statements)
}

fn print_ops(ops: &OpsConfig, keys: &[String]) {
    if keys.is_empty() {
        print!("{}", ops.dump());
        return;
    }
    for key in keys {
        match ops.get_string(key) {
            Ok(value) => println!("{} = {}", key, value),
            Err(e) => println!("{} : {}", key, e),
        }
    }
}

fn watch_ops(ops: &mut OpsConfig, keys: &[String], interval: Duration) -> Result<bool> {
    tracing::info!(path = %ops.path().display(), "watching ops config");
    loop {
        thread::sleep(interval);
        if !ops.changed() {
            continue;
        }
        match ops.load() {
            Ok(()) => {
                println!("--- reloaded {}", ops.path().display());
                print_ops(ops, keys);
            }
            Err(e) => tracing::warn!(error = %e, "failed to reload ops config"),
        }
    }
}
