// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::collections::VecDeque;

use ah_core::{IssueHandle, Result};
use serde::Deserialize;

/// One page of search results.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchPage {
    #[serde(default, rename = "startAt")]
    pub start_at: usize,
    #[serde(default)]
    pub total: usize,
    #[serde(default)]
    pub issues: Vec<IssueHandle>,
}

/// Something that can serve search result pages.
pub trait PageSource {
    fn fetch_page(&self, query: &str, start_at: usize, max_results: usize) -> Result<SearchPage>;
}

/// Lazy iterator over all hits of a query, one page at a time.
///
/// The walk ends after a page that reaches `total` or comes back empty. A
/// page error is yielded once and ends the walk.
pub struct SearchWalker<'a, S: PageSource + ?Sized> {
    source: &'a S,
    query: String,
    page_size: usize,
    buffer: VecDeque<IssueHandle>,
    next_start: usize,
    exhausted: bool,
}

impl<'a, S: PageSource + ?Sized> SearchWalker<'a, S> {
    /// Fetch the first page and return a walker positioned before its first
    /// hit.
    pub fn start(source: &'a S, query: &str, page_size: usize) -> Result<Self> {
        let mut walker = SearchWalker {
            source,
            query: query.to_string(),
            page_size: page_size.max(1),
            buffer: VecDeque::new(),
            next_start: 0,
            exhausted: false,
        };
        let first = walker.source.fetch_page(&walker.query, 0, walker.page_size)?;
        tracing::debug!("query matched {} issues", first.total);
        walker.load(first);
        Ok(walker)
    }

    fn load(&mut self, page: SearchPage) {
        if page.issues.is_empty() {
            self.exhausted = true;
            return;
        }
        self.next_start += page.issues.len();
        if self.next_start >= page.total {
            self.exhausted = true;
        }
        self.buffer.extend(page.issues);
    }
}

impl<S: PageSource + ?Sized> Iterator for SearchWalker<'_, S> {
    type Item = Result<IssueHandle>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(handle) = self.buffer.pop_front() {
                return Some(Ok(handle));
            }
            if self.exhausted {
                return None;
            }
            tracing::debug!("fetching results from {}", self.next_start);
            match self
                .source
                .fetch_page(&self.query, self.next_start, self.page_size)
            {
                Ok(page) => self.load(page),
                Err(e) => {
                    self.exhausted = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
