// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Normalized ticket values produced by the field extractor.
//!
//! Everything downstream of extraction works on these types; the loosely
//! typed tracker document never leaves [`crate::extract`].

/// One tracker issue, flattened for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    /// Tracker key (e.g. "FINNA-1234"). Never empty.
    pub key: String,
    /// Priority name; empty when the tracker omits it.
    pub priority: String,
    /// Issue type name (Bug, Story, ...).
    pub issue_type: String,
    /// Resolution name (Fixed, Won't Fix, ...). Empty for unresolved issues.
    pub resolution: String,
    /// Assignee display name; empty when unassigned.
    pub assignee: String,
    pub creator: String,
    pub reporter: String,
    /// Single-line summary.
    pub title: String,
    /// Creation date, `YYYY-MM-DD`.
    pub created: String,
    /// Resolution date, `YYYY-MM-DD`.
    pub resolved: String,
    /// Body text with carriage returns removed.
    pub description: String,
    pub links: Vec<Link>,
    pub comments: Vec<Comment>,
}

/// An outward link to a related issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub key: String,
    pub title: String,
    pub issue_type: String,
    pub priority: String,
    pub status: String,
}

/// A comment on a ticket, in tracker (chronological) order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub author: String,
    /// Comment body with carriage returns removed.
    pub title: String,
    /// Last update date, `YYYY-MM-DD`.
    pub time: String,
}

impl Ticket {
    /// Test helper: a ticket with the given key and classification inputs,
    /// every other field empty.
    #[cfg(test)]
    pub fn new(key: &str, resolution: &str, issue_type: &str) -> Self {
        Ticket {
            key: key.to_string(),
            priority: String::new(),
            issue_type: issue_type.to_string(),
            resolution: resolution.to_string(),
            assignee: String::new(),
            creator: String::new(),
            reporter: String::new(),
            title: String::new(),
            created: String::new(),
            resolved: String::new(),
            description: String::new(),
            links: Vec::new(),
            comments: Vec::new(),
        }
    }
}

/// Keep only the calendar date of a tracker timestamp.
///
/// The tracker reports `2024-03-11T10:15:00.000+0200`; everything from the
/// first `T` on is dropped. Values without a `T` pass through unchanged.
pub fn date_only(timestamp: &str) -> &str {
    match timestamp.split_once('T') {
        Some((date, _)) if !date.is_empty() => date,
        _ => timestamp,
    }
}

/// Remove carriage returns from free text.
pub fn strip_cr(text: &str) -> String {
    text.replace('\r', "")
}

#[cfg(test)]
#[path = "ticket_tests.rs"]
mod tests;
