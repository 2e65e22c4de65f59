// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report file naming and creation.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};

/// `<prefix>-<YYYYMMDD>-<HHMM>.txt`, stamped with local time.
pub fn default_report_name<Tz: TimeZone>(prefix: &str, now: &DateTime<Tz>) -> PathBuf
where
    Tz::Offset: std::fmt::Display,
{
    PathBuf::from(format!("{}-{}.txt", prefix, now.format("%Y%m%d-%H%M")))
}

/// Create (or truncate) the report file.
pub fn create(path: &Path) -> io::Result<BufWriter<File>> {
    File::create(path).map(BufWriter::new)
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
