// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use thiserror::Error;

/// Process exit codes.
pub mod exit_codes {
    /// Unreadable config, missing credentials, report write failure.
    pub const GENERAL: i32 = 1;
    /// The tracker could not be reached or refused the credentials.
    pub const CONNECTIVITY: i32 = 2;
    /// The config is readable but lacks a required stanza or key.
    pub const CONFIG: i32 = 3;
}

/// All possible errors that can occur in the ahrs library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read config {}: {reason}", path.display())]
    ConfigRead { path: PathBuf, reason: String },

    #[error("no host or username in [jira] of {}\n  hint: both `host` and `username` must be non-empty", path.display())]
    MissingCredentials { path: PathBuf },

    #[error("no [{stanza}] stanza in {}", path.display())]
    MissingStanza { stanza: String, path: PathBuf },

    #[error("no jql query in [{project}] of {}\n  hint: add `jql = \"...\"` to the [{project}] stanza", path.display())]
    MissingQuery { project: String, path: PathBuf },

    #[error("invalid rules in [{project}]: {source}")]
    InvalidRules {
        project: String,
        #[source]
        source: ah_core::Error,
    },

    #[error("no password available\n  hint: set `password` in [jira] or the ALLIHARVESTER_PASSWORD environment variable")]
    PasswordRequired,

    #[error("failed to read password: {0}")]
    PasswordPrompt(#[source] std::io::Error),

    #[error("failed to connect to Jira at \"{host}\": {source}")]
    Tracker {
        host: String,
        #[source]
        source: ah_core::Error,
    },

    #[error("failed to write report {}: {source}", path.display())]
    Report {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// The process exit code for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::MissingStanza { .. } | Error::MissingQuery { .. } | Error::InvalidRules { .. } => {
                exit_codes::CONFIG
            }
            Error::Tracker { .. } => exit_codes::CONNECTIVITY,
            Error::ConfigRead { .. }
            | Error::MissingCredentials { .. }
            | Error::PasswordRequired
            | Error::PasswordPrompt(_)
            | Error::Report { .. } => exit_codes::GENERAL,
        }
    }
}

/// A specialized Result type for ahrs operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
