// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use ah_core::Error;
use std::cell::RefCell;

/// Serves `keys` in pages, optionally failing at a given offset.
struct Pages {
    keys: Vec<String>,
    total: Option<usize>,
    fail_at: Option<usize>,
    calls: RefCell<Vec<(usize, usize)>>,
}

impl Pages {
    fn new(n: usize) -> Self {
        Pages {
            keys: (1..=n).map(|i| format!("FINNA-{i}")).collect(),
            total: None,
            fail_at: None,
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl PageSource for Pages {
    fn fetch_page(&self, query: &str, start_at: usize, max_results: usize) -> Result<SearchPage> {
        assert_eq!(query, "project = FINNA");
        self.calls.borrow_mut().push((start_at, max_results));
        if self.fail_at == Some(start_at) {
            return Err(Error::Connection("reset by peer".into()));
        }
        let issues = self
            .keys
            .iter()
            .skip(start_at)
            .take(max_results)
            .map(|key| IssueHandle { key: key.clone() })
            .collect();
        Ok(SearchPage {
            start_at,
            total: self.total.unwrap_or(self.keys.len()),
            issues,
        })
    }
}

fn keys(walker: SearchWalker<'_, Pages>) -> Vec<String> {
    walker.map(|h| h.unwrap().key).collect()
}

#[test]
fn walks_every_page_in_order() {
    let pages = Pages::new(7);
    let walker = SearchWalker::start(&pages, "project = FINNA", 3).unwrap();
    let got = keys(walker);
    assert_eq!(got.len(), 7);
    assert_eq!(got.first().unwrap(), "FINNA-1");
    assert_eq!(got.last().unwrap(), "FINNA-7");
    assert_eq!(*pages.calls.borrow(), vec![(0, 3), (3, 3), (6, 3)]);
}

#[test]
fn exact_multiple_stops_without_extra_request() {
    let pages = Pages::new(6);
    let got = keys(SearchWalker::start(&pages, "project = FINNA", 3).unwrap());
    assert_eq!(got.len(), 6);
    assert_eq!(pages.calls.borrow().len(), 2);
}

#[test]
fn empty_result_is_one_request() {
    let pages = Pages::new(0);
    let got = keys(SearchWalker::start(&pages, "project = FINNA", 50).unwrap());
    assert!(got.is_empty());
    assert_eq!(pages.calls.borrow().len(), 1);
}

#[test]
fn empty_page_ends_walk_when_total_overstates() {
    let mut pages = Pages::new(4);
    pages.total = Some(100);
    let got = keys(SearchWalker::start(&pages, "project = FINNA", 3).unwrap());
    assert_eq!(got.len(), 4);
    assert_eq!(*pages.calls.borrow(), vec![(0, 3), (3, 3), (4, 3)]);
}

#[test]
fn first_page_is_fetched_eagerly() {
    let pages = Pages::new(5);
    let _walker = SearchWalker::start(&pages, "project = FINNA", 2).unwrap();
    assert_eq!(*pages.calls.borrow(), vec![(0, 2)]);
}

#[test]
fn first_page_error_fails_start() {
    let mut pages = Pages::new(5);
    pages.fail_at = Some(0);
    assert!(matches!(
        SearchWalker::start(&pages, "project = FINNA", 2),
        Err(Error::Connection(_))
    ));
}

#[test]
fn later_page_error_is_yielded_once() {
    let mut pages = Pages::new(5);
    pages.fail_at = Some(2);
    let mut walker = SearchWalker::start(&pages, "project = FINNA", 2).unwrap();
    assert_eq!(walker.next().unwrap().unwrap().key, "FINNA-1");
    assert_eq!(walker.next().unwrap().unwrap().key, "FINNA-2");
    assert!(matches!(walker.next(), Some(Err(Error::Connection(_)))));
    assert!(walker.next().is_none());
}

#[test]
fn zero_page_size_is_clamped() {
    let pages = Pages::new(2);
    let got = keys(SearchWalker::start(&pages, "project = FINNA", 0).unwrap());
    assert_eq!(got.len(), 2);
    assert_eq!(pages.calls.borrow()[0], (0, 1));
}

#[test]
fn page_deserializes_from_search_response() {
    let json = r#"{"startAt":50,"maxResults":50,"total":51,"issues":[{"id":"1","key":"FINNA-51","self":"x"}]}"#;
    let page: SearchPage = serde_json::from_str(json).unwrap();
    assert_eq!(page.start_at, 50);
    assert_eq!(page.total, 51);
    assert_eq!(page.issues, vec![IssueHandle { key: "FINNA-51".into() }]);
}
