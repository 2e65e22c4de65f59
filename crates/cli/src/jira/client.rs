// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::time::Duration;

use ah_core::{Error, RawIssue, Result, Tracker, Walk};
use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;

use super::walker::{PageSource, SearchPage, SearchWalker};

/// Search results requested per page.
pub const PAGE_SIZE: usize = 50;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const API_PREFIX: &str = "rest/api/2";

/// Blocking Jira REST client with basic authentication.
pub struct JiraClient {
    http: Client,
    host: String,
    username: String,
    password: String,
}

impl JiraClient {
    pub fn new(host: &str, username: &str, password: &str) -> Result<Self> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::Connection(e.to_string()))?;
        Ok(JiraClient {
            http,
            host: normalize_host(host),
            username: username.to_string(),
            password: password.to_string(),
        })
    }

    /// Base URL requests go to.
    pub fn host(&self) -> &str {
        &self.host
    }

    fn search_url(&self) -> String {
        format!("{}/{}/search", self.host, API_PREFIX)
    }

    fn issue_url(&self, key: &str) -> String {
        format!("{}/{}/issue/{}", self.host, API_PREFIX, key)
    }

    fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<Response> {
        tracing::debug!("GET {url}");
        self.http
            .get(url)
            .basic_auth(&self.username, Some(&self.password))
            .query(query)
            .send()
            .map_err(transport_error)
    }
}

/// Prepend `https://` when the scheme is missing and drop trailing slashes.
pub fn normalize_host(host: &str) -> String {
    let host = host.trim().trim_end_matches('/');
    if host.starts_with("http://") || host.starts_with("https://") {
        host.to_string()
    } else {
        format!("https://{host}")
    }
}

fn transport_error(e: reqwest::Error) -> Error {
    if e.is_decode() {
        Error::Protocol(e.to_string())
    } else {
        Error::Connection(e.to_string())
    }
}

fn status_error(status: StatusCode, url: &str) -> Error {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Error::Unauthorized(status.to_string()),
        _ => Error::Protocol(format!("{status} from {url}")),
    }
}

impl PageSource for JiraClient {
    fn fetch_page(&self, query: &str, start_at: usize, max_results: usize) -> Result<SearchPage> {
        let url = self.search_url();
        let start_at = start_at.to_string();
        let max_results = max_results.to_string();
        let response = self.get(
            &url,
            &[
                ("jql", query),
                ("startAt", &start_at),
                ("maxResults", &max_results),
                ("fields", "key"),
            ],
        )?;
        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status, &url));
        }
        response.json().map_err(transport_error)
    }
}

impl Tracker for JiraClient {
    fn search(&self, query: &str) -> Result<Walk<'_>> {
        Ok(Box::new(SearchWalker::start(self, query, PAGE_SIZE)?))
    }

    fn fetch_issue(&self, key: &str) -> Result<Option<RawIssue>> {
        let url = self.issue_url(key);
        let response = self.get(&url, &[("expand", "comment")])?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(status_error(status, &url));
        }
        response.json().map(Some).map_err(transport_error)
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
