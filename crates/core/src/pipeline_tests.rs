// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::error::Error;
use crate::testing::{comment, outward_link, raw_issue, with_field, MemoryTracker};
use serde_json::json;

fn run_to_string(tracker: &MemoryTracker) -> (RunSummary, String) {
    let mut out = Vec::new();
    let summary = Pipeline::default()
        .run(tracker, "project = FINNA", || Ok(&mut out))
        .unwrap();
    (summary, String::from_utf8(out).unwrap())
}

#[test]
fn zero_tickets() {
    let (summary, report) = run_to_string(&MemoryTracker::new());

    assert_eq!(
        summary.to_string(),
        "Done. 0 improvements, 0 fixes, 0 to be ignored.  0 issues total."
    );
    for title in [
        "Parannukset",
        "Vikakorjaukset",
        "Ei tarvitse välittää",
        "Tarkista nämä!",
    ] {
        assert!(!report.contains(title));
    }
    assert!(report.ends_with(
        "Yhteensä 0 parannusta, 0 vikakorjausta ja 0 tarpeetonta muutospyyntöä, kaikkiaan 0 kappaletta.\n\n"
    ));
}

#[test]
fn fixed_bug_is_rendered_in_full() {
    let raw = with_field(
        raw_issue("FINNA-1", "Fixed", "Bug"),
        "comment",
        json!({ "comments": [comment("Bob", "Deployed to production", "2024-03-12T08:00:00.000+0200")] }),
    );
    let (summary, report) = run_to_string(&MemoryTracker::new().with_issue(raw));

    assert_eq!(summary.tally.fixes, 1);
    assert!(report.contains("Vikakorjaukset\n\nFINNA-1"));
    assert!(report.contains("First line\nSecond line"));
    assert!(report.contains("Bob (2024-03-12): Deployed to production"));
}

#[test]
fn spam_is_excluded_everywhere() {
    let tracker = MemoryTracker::new()
        .with_issue(raw_issue("FINNA-1", "Spam", "Bug"))
        .with_issue(raw_issue("FINNA-2", "Done", "Story"));
    let (summary, report) = run_to_string(&tracker);

    assert!(!report.contains("FINNA-1"));
    assert_eq!(summary.skipped, 1);
    assert_eq!(
        summary.to_string(),
        "Done. 1 improvements, 0 fixes, 0 to be ignored.  1 issues total."
    );
}

#[test]
fn no_action_required_is_key_only() {
    let raw = with_field(
        with_field(
            raw_issue("FINNA-3", "No action required", "Bug"),
            "issuelinks",
            json!([outward_link("FINNA-30", "Linked elsewhere")]),
        ),
        "comment",
        json!({ "comments": [comment("Bob", "Works as intended", "2024-03-12T08:00:00.000+0200")] }),
    );
    let (summary, report) = run_to_string(&MemoryTracker::new().with_issue(raw));

    assert_eq!(summary.tally.noop, 1);
    assert!(report.contains("Ei tarvitse välittää\n\nFINNA-3"));
    assert!(!report.contains("First line"));
    assert!(!report.contains("Works as intended"));
    assert!(!report.contains("FINNA-30"));
    assert!(!report.contains("Aiheeseen"));
}

#[test]
fn unknown_resolution_is_listed_but_not_counted() {
    let tracker = MemoryTracker::new()
        .with_issue(raw_issue("FINNA-4", "Escalated", "Bug"))
        .with_issue(raw_issue("FINNA-5", "Fixed", "Bug"));
    let (summary, report) = run_to_string(&tracker);

    assert!(report.contains("Tarkista nämä!\n\nFINNA-4"));
    assert_eq!(summary.unclassified, 1);
    assert_eq!(summary.tally.total(), 1);
    assert!(report.contains("kaikkiaan 1 kappaletta"));
    assert_eq!(
        summary.to_string(),
        "Done. 0 improvements, 1 fixes, 0 to be ignored.  1 issues total."
    );
}

#[test]
fn tally_matches_between_report_and_summary() {
    let tracker = MemoryTracker::new()
        .with_issue(raw_issue("FINNA-1", "Done", "Story"))
        .with_issue(raw_issue("FINNA-2", "Fixed", "Bug"))
        .with_issue(raw_issue("FINNA-3", "Duplicate", "Bug"))
        .with_issue(raw_issue("FINNA-4", "Won't Do", "Story"))
        .with_issue(raw_issue("FINNA-5", "Escalated", "Bug"))
        .with_missing("FINNA-6");
    let (summary, report) = run_to_string(&tracker);

    let tally = summary.tally;
    assert_eq!((tally.done, tally.fixes, tally.noop), (1, 1, 2));
    assert_eq!(tally.done + tally.fixes + tally.noop, tally.total());
    assert_eq!(summary.failed, 1);
    assert!(report.contains(
        "Yhteensä 1 parannusta, 1 vikakorjausta ja 2 tarpeetonta muutospyyntöä, kaikkiaan 4 kappaletta."
    ));
    assert!(summary.to_string().ends_with("4 issues total."));
}

#[test]
fn failed_walk_never_opens_sink() {
    let mut tracker = MemoryTracker::new().with_issue(raw_issue("FINNA-1", "Fixed", "Bug"));
    tracker.fail_after = Some(0);

    let mut opened = false;
    let result = Pipeline::default().run(&tracker, "q", || {
        opened = true;
        Ok(Vec::new())
    });

    assert!(matches!(result, Err(Error::Connection(_))));
    assert!(!opened);
}

#[test]
fn sink_open_failure_is_reported() {
    let tracker = MemoryTracker::new();
    let result = Pipeline::default().run(&tracker, "q", || -> std::io::Result<Vec<u8>> {
        Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "read-only",
        ))
    });
    assert!(matches!(result, Err(Error::Io(_))));
}
