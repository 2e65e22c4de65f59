// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Field extraction: tracker document → [`Ticket`].
//!
//! Extraction is atomic. A record either yields a complete ticket or an
//! error; no partially populated ticket escapes this module.

use serde_json::Value;

use crate::error::{Error, Result};
use crate::ticket::{date_only, strip_cr, Comment, Link, Ticket};
use crate::tracker::{IssueHandle, RawIssue, Tracker};

/// Fetch the full record behind a search hit and extract it.
///
/// The listing returned by a search is incomplete (comments are not
/// expanded), so every ticket costs one extra round-trip.
///
/// # Errors
///
/// Returns [`Error::IssueNotFound`] when the tracker has no record for the
/// key, the extraction errors of [`extract`], or whatever the tracker
/// reports for transport failures.
pub fn fetch_ticket<T: Tracker + ?Sized>(tracker: &T, handle: &IssueHandle) -> Result<Ticket> {
    let raw = tracker
        .fetch_issue(&handle.key)?
        .ok_or_else(|| Error::IssueNotFound(handle.key.clone()))?;
    extract(&raw)
}

/// Convert one full tracker record into a [`Ticket`].
///
/// Scalar fields the tracker leaves out become empty strings. Comments must
/// be complete: a comment without author, body or timestamp fails the whole
/// record.
pub fn extract(raw: &RawIssue) -> Result<Ticket> {
    if raw.key.is_empty() {
        return Err(Error::MissingKey);
    }
    let fields = &raw.fields;

    let comments = extract_comments(&raw.key, fields)?;

    Ok(Ticket {
        key: raw.key.clone(),
        priority: str_at(fields, "/priority/name").to_string(),
        issue_type: str_at(fields, "/issuetype/name").to_string(),
        resolution: str_at(fields, "/resolution/name").to_string(),
        assignee: str_at(fields, "/assignee/displayName").to_string(),
        creator: str_at(fields, "/creator/displayName").to_string(),
        reporter: str_at(fields, "/reporter/displayName").to_string(),
        title: str_at(fields, "/summary").to_string(),
        created: date_only(str_at(fields, "/created")).to_string(),
        resolved: date_only(str_at(fields, "/resolutiondate")).to_string(),
        description: strip_cr(str_at(fields, "/description")),
        links: extract_links(&raw.key, fields),
        comments,
    })
}

/// String at a JSON pointer, or "" when absent, null or not a string.
fn str_at<'a>(doc: &'a Value, pointer: &str) -> &'a str {
    doc.pointer(pointer).and_then(Value::as_str).unwrap_or_default()
}

fn extract_links(key: &str, fields: &Value) -> Vec<Link> {
    let Some(entries) = fields.get("issuelinks").and_then(Value::as_array) else {
        return Vec::new();
    };

    let mut links = Vec::new();
    for target in entries.iter().filter_map(|entry| entry.get("outwardIssue")) {
        match outward_link(target) {
            Some(link) => links.push(link),
            None => tracing::debug!("{}: dropping outward link without target metadata", key),
        }
    }
    links
}

fn outward_link(target: &Value) -> Option<Link> {
    let meta = target.get("fields")?;
    Some(Link {
        key: target.get("key")?.as_str()?.to_string(),
        title: meta.get("summary")?.as_str()?.to_string(),
        issue_type: meta.pointer("/issuetype/name")?.as_str()?.to_string(),
        priority: meta.pointer("/priority/name")?.as_str()?.to_string(),
        status: meta.pointer("/status/name")?.as_str()?.to_string(),
    })
}

fn extract_comments(key: &str, fields: &Value) -> Result<Vec<Comment>> {
    let Some(entries) = fields.pointer("/comment/comments").and_then(Value::as_array) else {
        return Ok(Vec::new());
    };

    entries
        .iter()
        .map(|entry| {
            let required = |pointer: &str, field: &'static str| {
                entry
                    .pointer(pointer)
                    .and_then(Value::as_str)
                    .ok_or_else(|| Error::MissingField {
                        key: key.to_string(),
                        field,
                    })
            };
            Ok(Comment {
                author: required("/author/displayName", "comment.author")?.to_string(),
                title: strip_cr(required("/body", "comment.body")?),
                time: date_only(required("/updated", "comment.updated")?).to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "extract_tests.rs"]
mod tests;
