// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Jira REST access: an HTTP client and a paginated search walker.

mod client;
mod walker;

pub use client::{normalize_host, JiraClient, PAGE_SIZE};
pub use walker::{PageSource, SearchPage, SearchWalker};
