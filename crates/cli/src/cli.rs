// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use clap::Parser;

use crate::help;

/// Project stanza used when `--project` is not given.
pub const DEFAULT_PROJECT: &str = "Finna";

#[derive(Debug, Parser)]
#[command(name = "alliharvester")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Summarize resolved Jira tickets into a release report")]
#[command(
    long_about = "Summarize resolved Jira tickets into a release report.\n\n\
    Runs the project's JQL query, sorts every ticket into improvements, fixes, \
    ignorable and suspicious groups, and writes a plain-text summary file."
)]
#[command(help_template = help::template())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
pub struct Cli {
    /// Configuration file [default: alliharvester.toml]
    #[arg(short = 'c', long = "config", value_name = "file")]
    pub config: Option<PathBuf>,

    /// Project stanza to read the query and rules from
    #[arg(short = 'p', long = "project", value_name = "name", default_value = DEFAULT_PROJECT)]
    pub project: String,

    /// Report file [default: <outputPrefix>-<YYYYMMDD-HHMM>.txt]
    #[arg(short = 'o', long = "output", value_name = "file")]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
