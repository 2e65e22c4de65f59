// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared fixtures for unit tests: an in-memory tracker and record builders.

#![allow(clippy::unwrap_used)]

use std::cell::RefCell;
use std::collections::HashMap;

use serde_json::{json, Value};

use crate::error::{Error, Result};
use crate::tracker::{IssueHandle, RawIssue, Tracker, Walk};

/// Tracker backed by a fixed list of records.
///
/// Keys listed in `missing` show up in search results but have no detail
/// record, like an issue deleted between the search and the fetch.
#[derive(Default)]
pub struct MemoryTracker {
    order: Vec<String>,
    records: HashMap<String, RawIssue>,
    /// Fail the walk with a connection error after this many hits.
    pub fail_after: Option<usize>,
    /// Every key passed to `fetch_issue`, in call order.
    pub fetched: RefCell<Vec<String>>,
}

impl MemoryTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_issue(mut self, raw: RawIssue) -> Self {
        self.order.push(raw.key.clone());
        self.records.insert(raw.key.clone(), raw);
        self
    }

    pub fn with_missing(mut self, key: &str) -> Self {
        self.order.push(key.to_string());
        self
    }
}

impl Tracker for MemoryTracker {
    fn search(&self, _query: &str) -> Result<Walk<'_>> {
        let fail_after = self.fail_after;
        Ok(Box::new(self.order.iter().enumerate().map(
            move |(i, key)| match fail_after {
                Some(limit) if i >= limit => Err(Error::Connection("connection reset".into())),
                _ => Ok(IssueHandle { key: key.clone() }),
            },
        )))
    }

    fn fetch_issue(&self, key: &str) -> Result<Option<RawIssue>> {
        self.fetched.borrow_mut().push(key.to_string());
        Ok(self.records.get(key).cloned())
    }
}

/// A detail record with the fields the extractor reads.
pub fn raw_issue(key: &str, resolution: &str, issue_type: &str) -> RawIssue {
    RawIssue {
        key: key.to_string(),
        fields: json!({
            "priority": { "name": "Major" },
            "issuetype": { "name": issue_type },
            "resolution": { "name": resolution },
            "assignee": { "displayName": "Aino Assignee" },
            "creator": { "displayName": "Carl Creator" },
            "reporter": { "displayName": "Rita Reporter" },
            "summary": format!("Summary of {key}"),
            "created": "2024-03-01T08:00:00.000+0200",
            "resolutiondate": "2024-03-11T10:15:00.000+0200",
            "description": "First line\r\nSecond line",
            "issuelinks": [],
            "comment": { "comments": [] },
        }),
    }
}

/// Replace one top-level field of a raw record.
pub fn with_field(mut raw: RawIssue, name: &str, value: Value) -> RawIssue {
    if let Some(fields) = raw.fields.as_object_mut() {
        fields.insert(name.to_string(), value);
    }
    raw
}

/// An outward link entry as the tracker nests it.
pub fn outward_link(key: &str, summary: &str) -> Value {
    json!({
        "type": { "name": "Relates", "outward": "relates to" },
        "outwardIssue": {
            "key": key,
            "fields": {
                "summary": summary,
                "status": { "name": "Closed" },
                "priority": { "name": "Minor" },
                "issuetype": { "name": "Task" },
            }
        }
    })
}

/// A complete comment entry.
pub fn comment(author: &str, body: &str, updated: &str) -> Value {
    json!({
        "author": { "displayName": author },
        "body": body,
        "updated": updated,
    })
}
