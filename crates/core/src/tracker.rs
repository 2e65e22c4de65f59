// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The seam between the harvesting pipeline and an issue tracker.
//!
//! The pipeline needs exactly two things from a tracker:
//! - run a saved query and walk the matching issues lazily, in order
//! - fetch one issue by key with its comments expanded
//!
//! The HTTP client lives in the CLI crate; tests use an in-memory tracker.

use serde::Deserialize;
use serde_json::Value;

use crate::error::Result;

/// A search hit. Listings are incomplete, so only the key is kept and the
/// full record is fetched separately.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IssueHandle {
    pub key: String,
}

/// A full issue record as returned by the tracker.
///
/// `fields` is kept as a dynamic JSON document; [`crate::extract`] is the
/// only place that reads it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawIssue {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub fields: Value,
}

/// A lazy, forward-only walk over query results.
///
/// Each `next` may block on a page fetch.
pub type Walk<'a> = Box<dyn Iterator<Item = Result<IssueHandle>> + 'a>;

/// Read access to an issue tracker.
pub trait Tracker {
    /// Run `query` and return a walker over the matching issues.
    fn search(&self, query: &str) -> Result<Walk<'_>>;

    /// Fetch one issue with comments expanded.
    ///
    /// Returns `Ok(None)` when the tracker has no such issue.
    fn fetch_issue(&self, key: &str) -> Result<Option<RawIssue>>;
}
