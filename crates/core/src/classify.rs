// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ticket classification.
//!
//! Resolution tells whether something shipped; issue type tells what kind
//! of change it was. Both axes are needed, but the second one only for
//! tickets that represent completed work.

use std::fmt;

use crate::rules::{Bucket, Outcome, ResolutionRule, RuleSet, TypeRule};
use crate::ticket::Ticket;

/// Where a classified ticket goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Excluded from every section and every count.
    Skip,
    Into(Bucket),
}

/// Tracker vocabulary the rule tables do not cover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Anomaly {
    UnknownResolution { key: String, resolution: String },
    UnknownType { key: String, issue_type: String },
}

impl fmt::Display for Anomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Anomaly::UnknownResolution { key, resolution } => write!(
                f,
                "unexpected resolution for issue {}, please check: \"{}\"",
                key, resolution
            ),
            Anomaly::UnknownType { key, issue_type } => write!(
                f,
                "unexpected issue type for resolved issue {}, please check: \"{}\"",
                key, issue_type
            ),
        }
    }
}

/// Result of [`classify`]: the placement plus any diagnostic raised on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub placement: Placement,
    pub anomaly: Option<Anomaly>,
}

impl Classification {
    fn into_bucket(bucket: Bucket) -> Self {
        Classification {
            placement: Placement::Into(bucket),
            anomaly: None,
        }
    }

    fn weird(anomaly: Anomaly) -> Self {
        Classification {
            placement: Placement::Into(Bucket::Weird),
            anomaly: Some(anomaly),
        }
    }
}

/// Decide the report bucket for `ticket`.
///
/// Total over all tickets: unknown vocabulary degrades to
/// [`Bucket::Weird`] with an [`Anomaly`] attached, never to an error.
pub fn classify(ticket: &Ticket, resolutions: &ResolutionRule, types: &TypeRule) -> Classification {
    let Some(outcome) = resolutions.get(&ticket.resolution) else {
        return Classification::weird(Anomaly::UnknownResolution {
            key: ticket.key.clone(),
            resolution: ticket.resolution.clone(),
        });
    };

    match outcome {
        Outcome::Skip => Classification {
            placement: Placement::Skip,
            anomaly: None,
        },
        Outcome::Noop => Classification::into_bucket(Bucket::Noop),
        Outcome::Weird => Classification::into_bucket(Bucket::Weird),
        Outcome::Done | Outcome::Fixes => match types.get(&ticket.issue_type) {
            Some(bucket) => Classification::into_bucket(bucket),
            None => Classification::weird(Anomaly::UnknownType {
                key: ticket.key.clone(),
                issue_type: ticket.issue_type.clone(),
            }),
        },
    }
}

impl RuleSet {
    /// Classify with both tables of this set.
    pub fn classify(&self, ticket: &Ticket) -> Classification {
        classify(ticket, &self.resolutions, &self.types)
    }
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
