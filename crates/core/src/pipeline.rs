// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The harvesting pipeline: walk, classify, aggregate, render.

use std::fmt;
use std::io::{self, Write};

use crate::aggregate::{aggregate, Aggregate, Tally};
use crate::error::Result;
use crate::render::{render, SectionTable};
use crate::rules::{Bucket, RuleSet};
use crate::tracker::Tracker;

/// Counts reported to the operator after a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub tally: Tally,
    /// Tickets in the `weird` section. Not part of the tally.
    pub unclassified: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl From<&Aggregate> for RunSummary {
    fn from(aggregate: &Aggregate) -> Self {
        RunSummary {
            tally: aggregate.buckets.tally(),
            unclassified: aggregate.buckets.get(Bucket::Weird).len(),
            skipped: aggregate.skipped,
            failed: aggregate.failed.len(),
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Done. {} improvements, {} fixes, {} to be ignored.  {} issues total.",
            self.tally.done,
            self.tally.fixes,
            self.tally.noop,
            self.tally.total()
        )
    }
}

/// Immutable settings for one run.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    pub rules: RuleSet,
    pub sections: SectionTable,
}

impl Pipeline {
    pub fn new(rules: RuleSet, sections: SectionTable) -> Self {
        Pipeline { rules, sections }
    }

    /// Run `query` against `tracker` and write the report.
    ///
    /// The sink is opened only after the tracker walk has completed, so a
    /// failed walk never leaves a half-written report behind. The sink is
    /// flushed before it is dropped.
    pub fn run<T, W, F>(&self, tracker: &T, query: &str, open_sink: F) -> Result<RunSummary>
    where
        T: Tracker + ?Sized,
        W: Write,
        F: FnOnce() -> io::Result<W>,
    {
        let aggregate = aggregate(tracker, query, &self.rules)?;
        tracing::info!(
            "classified {} issues ({} skipped, {} failed)",
            aggregate.buckets.tally().total(),
            aggregate.skipped,
            aggregate.failed.len()
        );

        let mut sink = open_sink()?;
        render(&mut sink, &aggregate.buckets, &self.sections)?;
        sink.flush()?;

        Ok(RunSummary::from(&aggregate))
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
