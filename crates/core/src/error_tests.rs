// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    issue_not_found = { Error::IssueNotFound("FINNA-12".into()), "FINNA-12" },
    missing_key = { Error::MissingKey, "no key" },
    connection = { Error::Connection("refused".into()), "unreachable" },
    unauthorized = { Error::Unauthorized("401".into()), "credentials" },
    protocol = { Error::Protocol("bad page".into()), "bad page" },
)]
fn error_display_contains(err: Error, expected: &str) {
    assert!(err.to_string().contains(expected));
}

#[test]
fn error_missing_field_names_issue_and_field() {
    let err = Error::MissingField {
        key: "FINNA-7".into(),
        field: "comment.body",
    };
    let msg = err.to_string();
    assert!(msg.contains("FINNA-7"));
    assert!(msg.contains("comment.body"));
}

#[test]
fn error_invalid_rule_has_hint() {
    let err = Error::InvalidRule {
        table: "resolution",
        name: "Released".into(),
        value: "shipped".into(),
        valid: "done, fixes",
    };
    let msg = err.to_string();
    assert!(msg.contains("Released"));
    assert!(msg.contains("shipped"));
    assert!(msg.contains("hint: valid verdicts are: done, fixes"));
}

#[parameterized(
    not_found = { Error::IssueNotFound("A-1".into()), true },
    missing_key = { Error::MissingKey, true },
    missing_field = { Error::MissingField { key: "A-1".into(), field: "comment.updated" }, true },
    connection = { Error::Connection("timeout".into()), false },
    unauthorized = { Error::Unauthorized("denied".into()), false },
    protocol = { Error::Protocol("garbage".into()), false },
)]
fn error_per_ticket_classification(err: Error, expected: bool) {
    assert_eq!(err.is_per_ticket(), expected);
}

#[test]
fn error_from_io() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err: Error = io_err.into();
    assert!(matches!(err, Error::Io(_)));
    assert!(!err.is_per_ticket());
}
