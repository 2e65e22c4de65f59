// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ahrs - command-line front end for the release summary harvester.
//!
//! Reads a TOML configuration, connects to Jira, and hands the project's
//! query to [`ah_core::Pipeline`], which classifies the matching tickets and
//! writes the report.
//!
//! # Main Components
//!
//! - [`Cli`] - command-line arguments
//! - [`config::Settings`] - connection details, query and rules for one project
//! - [`jira::JiraClient`] - the HTTP tracker implementation
//! - [`Error`] - failures with their process exit codes

mod cli;
pub mod colors;
pub mod env;
pub mod help;
mod password;

pub mod config;
pub mod error;
pub mod jira;
pub mod report;

pub use cli::{Cli, DEFAULT_PROJECT};
pub use error::{exit_codes, Error, Result};

use std::path::{Path, PathBuf};

use ah_core::{Pipeline, RunSummary, SectionTable};
use chrono::Local;

use config::{resolve_config_path, Settings};
use jira::JiraClient;

/// Run one harvest: load config, query Jira, write the report.
pub fn run(cli: Cli) -> Result<RunSummary> {
    let config_path = resolve_config_path(cli.config.as_deref());
    tracing::debug!("reading config from {}", config_path.display());
    let settings = Settings::load(&config_path, &cli.project)?;

    let report_path = cli
        .output
        .unwrap_or_else(|| report::default_report_name(&settings.output_prefix, &Local::now()));
    let password = password::resolve(settings.password.as_deref())?;

    let client = JiraClient::new(&settings.host, &settings.username, &password)
        .map_err(|e| run_failure(e, &settings.host, &report_path))?;
    tracing::info!("querying {} for project {}", client.host(), cli.project);

    let pipeline = Pipeline::new(settings.rules, SectionTable::default());
    let summary = pipeline
        .run(&client, &settings.query, || report::create(&report_path))
        .map_err(|e| run_failure(e, client.host(), &report_path))?;

    tracing::info!("wrote {}", report_path.display());
    Ok(summary)
}

/// Attribute a pipeline failure: io errors come from the report sink,
/// everything else from the tracker.
fn run_failure(e: ah_core::Error, host: &str, report_path: &Path) -> Error {
    match e {
        ah_core::Error::Io(source) => Error::Report {
            path: PathBuf::from(report_path),
            source,
        },
        source => Error::Tracker {
            host: host.to_string(),
            source,
        },
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
