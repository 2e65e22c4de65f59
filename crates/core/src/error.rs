// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for ah-core operations.

use thiserror::Error;

/// All possible errors that can occur while harvesting and reporting.
#[derive(Debug, Error)]
pub enum Error {
    #[error("issue not found: {0}")]
    IssueNotFound(String),

    #[error("issue {key} is missing required field '{field}'")]
    MissingField { key: String, field: &'static str },

    #[error("issue record has no key")]
    MissingKey,

    #[error("invalid verdict '{value}' for {table} rule '{name}'\n  hint: valid verdicts are: {valid}")]
    InvalidRule {
        table: &'static str,
        name: String,
        value: String,
        valid: &'static str,
    },

    #[error("tracker unreachable: {0}")]
    Connection(String),

    #[error("tracker rejected credentials: {0}")]
    Unauthorized(String),

    #[error("unexpected tracker response: {0}")]
    Protocol(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns true for failures confined to a single ticket.
    ///
    /// The aggregator skips the ticket and keeps going on these; everything
    /// else aborts the run.
    pub fn is_per_ticket(&self) -> bool {
        matches!(
            self,
            Error::IssueNotFound(_) | Error::MissingField { .. } | Error::MissingKey
        )
    }
}

/// A specialized Result type for ah-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
