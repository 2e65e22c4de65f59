// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ah-core: ticket classification and release-report assembly.
//!
//! The pipeline runs strictly left to right:
//!
//! - [`Tracker`] walks a saved query lazily, one issue at a time
//! - [`extract`] turns each full record into a [`Ticket`]
//! - [`classify`] sorts it into a [`Bucket`] using a [`RuleSet`]
//! - [`Aggregator`] appends it to [`Buckets`] in arrival order
//! - [`render`] writes the grouped report and the closing tally
//!
//! [`Pipeline`] wires these together. Nothing here performs network I/O
//! itself; the tracker implementation is supplied by the caller.

pub mod aggregate;
pub mod classify;
pub mod error;
pub mod extract;
pub mod pipeline;
pub mod render;
pub mod rules;
pub mod ticket;
pub mod tracker;

#[cfg(test)]
mod testing;

pub use aggregate::{aggregate, Aggregate, Aggregator, Buckets, Tally};
pub use classify::{classify, Anomaly, Classification, Placement};
pub use error::{Error, Result};
pub use extract::{extract, fetch_ticket};
pub use pipeline::{Pipeline, RunSummary};
pub use render::{render, DisplayMode, Section, SectionTable};
pub use rules::{Bucket, Outcome, ResolutionRule, RuleSet, TypeRule};
pub use ticket::{Comment, Link, Ticket};
pub use tracker::{IssueHandle, RawIssue, Tracker, Walk};
