// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rule tables mapping tracker vocabulary onto report buckets.
//!
//! Classification is two-stage:
//! - [`ResolutionRule`]: resolution name → [`Outcome`]
//! - [`TypeRule`]: issue type name → `done`/`fixes`, consulted only for
//!   resolutions that mean the work actually shipped
//!
//! Tables are built once at startup (defaults plus configured overrides)
//! and are read-only afterwards.

use std::collections::HashMap;
use std::fmt;

use crate::error::{Error, Result};

/// Report section a ticket ends up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    /// Implemented improvements.
    Done,
    /// Implemented bug fixes.
    Fixes,
    /// Closed without a reportable change.
    Noop,
    /// Could not be classified; needs manual review.
    Weird,
}

impl Bucket {
    /// Report order.
    pub const ALL: [Bucket; 4] = [Bucket::Done, Bucket::Fixes, Bucket::Noop, Bucket::Weird];

    /// Returns the string representation used in config and diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Bucket::Done => "done",
            Bucket::Fixes => "fixes",
            Bucket::Noop => "noop",
            Bucket::Weird => "weird",
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Verdict of the resolution table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Completed work; refined by issue type.
    Done,
    /// Completed work; refined by issue type.
    Fixes,
    Noop,
    Weird,
    /// Not reported at all.
    Skip,
}

impl Outcome {
    const VALID: &'static str = "done, fixes, noop, weird, skip";

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Done => "done",
            Outcome::Fixes => "fixes",
            Outcome::Noop => "noop",
            Outcome::Weird => "weird",
            Outcome::Skip => "skip",
        }
    }

    /// Parse a verdict word (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "done" => Some(Outcome::Done),
            "fixes" => Some(Outcome::Fixes),
            "noop" => Some(Outcome::Noop),
            "weird" => Some(Outcome::Weird),
            "skip" => Some(Outcome::Skip),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

const DEFAULT_RESOLUTIONS: &[(&str, Outcome)] = &[
    ("Fixed", Outcome::Fixes),
    ("Answered", Outcome::Noop),
    ("Partly fixed", Outcome::Fixes),
    ("Won't Fix", Outcome::Noop),
    ("Duplicate", Outcome::Noop),
    ("Incomplete", Outcome::Noop),
    ("Continued in another issue", Outcome::Noop),
    ("Noted for Later Evaluation", Outcome::Noop),
    ("Not Ours", Outcome::Noop),
    ("Cannot Reproduce", Outcome::Noop),
    ("Spam", Outcome::Skip),
    ("No action required", Outcome::Noop),
    ("Done", Outcome::Done),
    ("Won't Do", Outcome::Noop),
    ("To be reviewed for development (Melinda)", Outcome::Skip),
];

// Task, Sub-task and Problem come from a sibling project's workflow.
const DEFAULT_TYPES: &[(&str, Bucket)] = &[
    ("Story", Bucket::Done),
    ("Feature", Bucket::Done),
    ("Epic", Bucket::Done),
    ("Improvement", Bucket::Done),
    ("Bug", Bucket::Fixes),
    ("Feature Request", Bucket::Done),
    ("Task", Bucket::Done),
    ("Sub-task", Bucket::Done),
    ("Problem", Bucket::Fixes),
];

/// Resolution name → verdict. Names are matched exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionRule {
    verdicts: HashMap<String, Outcome>,
}

impl ResolutionRule {
    /// A table with no entries; every resolution is unknown.
    pub fn empty() -> Self {
        ResolutionRule {
            verdicts: HashMap::new(),
        }
    }

    pub fn insert(&mut self, name: impl Into<String>, outcome: Outcome) {
        self.verdicts.insert(name.into(), outcome);
    }

    pub fn get(&self, name: &str) -> Option<Outcome> {
        self.verdicts.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.verdicts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verdicts.is_empty()
    }

    /// Merge `(name, verdict word)` pairs into the table.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRule`] for a verdict word that is not one of
    /// done, fixes, noop, weird, skip. The table is left unchanged.
    pub fn apply_overrides<'a, I>(&mut self, overrides: I) -> Result<()>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let parsed = overrides
            .into_iter()
            .map(|(name, value)| {
                Outcome::parse(value)
                    .map(|outcome| (name.to_string(), outcome))
                    .ok_or_else(|| Error::InvalidRule {
                        table: "resolution",
                        name: name.to_string(),
                        value: value.to_string(),
                        valid: Outcome::VALID,
                    })
            })
            .collect::<Result<Vec<_>>>()?;
        self.verdicts.extend(parsed);
        Ok(())
    }
}

impl Default for ResolutionRule {
    fn default() -> Self {
        let mut rule = ResolutionRule::empty();
        for (name, outcome) in DEFAULT_RESOLUTIONS {
            rule.insert(*name, *outcome);
        }
        rule
    }
}

/// Issue type name → `done` or `fixes`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRule {
    buckets: HashMap<String, Bucket>,
}

impl TypeRule {
    const VALID: &'static str = "done, fixes";

    pub fn empty() -> Self {
        TypeRule {
            buckets: HashMap::new(),
        }
    }

    /// Add or replace an entry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRule`] unless `bucket` is `done` or `fixes`.
    pub fn insert(&mut self, name: impl Into<String>, bucket: Bucket) -> Result<()> {
        let name = name.into();
        if !matches!(bucket, Bucket::Done | Bucket::Fixes) {
            return Err(Error::InvalidRule {
                table: "issue type",
                name,
                value: bucket.to_string(),
                valid: Self::VALID,
            });
        }
        self.buckets.insert(name, bucket);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<Bucket> {
        self.buckets.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Merge `(type name, "done" | "fixes")` pairs into the table.
    pub fn apply_overrides<'a, I>(&mut self, overrides: I) -> Result<()>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut merged = self.clone();
        for (name, value) in overrides {
            let bucket = match value.to_lowercase().as_str() {
                "done" => Bucket::Done,
                "fixes" => Bucket::Fixes,
                _ => {
                    return Err(Error::InvalidRule {
                        table: "issue type",
                        name: name.to_string(),
                        value: value.to_string(),
                        valid: Self::VALID,
                    })
                }
            };
            merged.insert(name, bucket)?;
        }
        *self = merged;
        Ok(())
    }
}

impl Default for TypeRule {
    fn default() -> Self {
        let buckets = DEFAULT_TYPES
            .iter()
            .map(|(name, bucket)| (name.to_string(), *bucket))
            .collect();
        TypeRule { buckets }
    }
}

/// Both tables, as handed to the classifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    pub resolutions: ResolutionRule,
    pub types: TypeRule,
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
