// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Aggregation: drain the tracker walk into ordered buckets.

use crate::classify::{Anomaly, Placement};
use crate::error::Result;
use crate::extract::fetch_ticket;
use crate::rules::{Bucket, RuleSet};
use crate::ticket::Ticket;
use crate::tracker::Tracker;

/// The four report sections, each in arrival order. Append-only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Buckets {
    done: Vec<Ticket>,
    fixes: Vec<Ticket>,
    noop: Vec<Ticket>,
    weird: Vec<Ticket>,
}

impl Buckets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, bucket: Bucket, ticket: Ticket) {
        self.slot_mut(bucket).push(ticket);
    }

    pub fn get(&self, bucket: Bucket) -> &[Ticket] {
        match bucket {
            Bucket::Done => &self.done,
            Bucket::Fixes => &self.fixes,
            Bucket::Noop => &self.noop,
            Bucket::Weird => &self.weird,
        }
    }

    fn slot_mut(&mut self, bucket: Bucket) -> &mut Vec<Ticket> {
        match bucket {
            Bucket::Done => &mut self.done,
            Bucket::Fixes => &mut self.fixes,
            Bucket::Noop => &mut self.noop,
            Bucket::Weird => &mut self.weird,
        }
    }

    /// Counts of the reportable sections. `weird` is not part of the tally.
    pub fn tally(&self) -> Tally {
        Tally {
            done: self.done.len(),
            fixes: self.fixes.len(),
            noop: self.noop.len(),
        }
    }
}

/// Reportable counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub done: usize,
    pub fixes: usize,
    pub noop: usize,
}

impl Tally {
    pub fn total(&self) -> usize {
        self.done + self.fixes + self.noop
    }
}

/// Everything one pass over the tracker produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregate {
    pub buckets: Buckets,
    /// Diagnostics raised while classifying, in arrival order.
    pub anomalies: Vec<Anomaly>,
    /// Tickets dropped by a `skip` verdict.
    pub skipped: usize,
    /// Keys of tickets that could not be extracted.
    pub failed: Vec<String>,
}

/// Incremental classifier feeding [`Buckets`].
pub struct Aggregator<'r> {
    rules: &'r RuleSet,
    out: Aggregate,
}

impl<'r> Aggregator<'r> {
    pub fn new(rules: &'r RuleSet) -> Self {
        Aggregator {
            rules,
            out: Aggregate::default(),
        }
    }

    /// Classify `ticket` and append it to its bucket.
    pub fn accept(&mut self, ticket: Ticket) -> Placement {
        let classification = self.rules.classify(&ticket);
        if let Some(anomaly) = classification.anomaly {
            tracing::warn!("{}", anomaly);
            self.out.anomalies.push(anomaly);
        }
        match classification.placement {
            Placement::Skip => {
                tracing::debug!("{}: skipped ({})", ticket.key, ticket.resolution);
                self.out.skipped += 1;
            }
            Placement::Into(bucket) => {
                tracing::debug!("{}: {}", ticket.key, bucket);
                self.out.buckets.push(bucket, ticket);
            }
        }
        classification.placement
    }

    /// Note a ticket that could not be extracted.
    pub fn record_failure(&mut self, key: &str, reason: &dyn std::fmt::Display) {
        tracing::warn!("skipping issue {}: {}", key, reason);
        self.out.failed.push(key.to_string());
    }

    pub fn finish(self) -> Aggregate {
        self.out
    }
}

/// Walk `query` once, in order, and sort every ticket into its bucket.
///
/// Per-ticket extraction failures are logged and skipped. A failure of the
/// walk itself (page fetch, authentication) aborts the whole pass.
pub fn aggregate<T: Tracker + ?Sized>(tracker: &T, query: &str, rules: &RuleSet) -> Result<Aggregate> {
    let mut aggregator = Aggregator::new(rules);

    for handle in tracker.search(query)? {
        let handle = handle?;
        match fetch_ticket(tracker, &handle) {
            Ok(ticket) => {
                aggregator.accept(ticket);
            }
            Err(e) if e.is_per_ticket() => aggregator.record_failure(&handle.key, &e),
            Err(e) => return Err(e),
        }
    }

    Ok(aggregator.finish())
}

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod tests;
