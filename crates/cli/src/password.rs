// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Password lookup: config file, then environment, then an interactive
//! prompt.

use std::io::IsTerminal;

use crate::env;
use crate::error::{Error, Result};

const PROMPT: &str = "Password: ";

/// Resolve the Jira password.
///
/// The prompt is only offered when stdin is a terminal; a non-interactive
/// run without a password fails instead of blocking.
pub fn resolve(configured: Option<&str>) -> Result<String> {
    resolve_with(configured, env::password(), || {
        if !std::io::stdin().is_terminal() {
            return Ok(None);
        }
        rpassword::prompt_password(PROMPT).map(Some)
    })
}

fn resolve_with<P>(configured: Option<&str>, from_env: Option<String>, prompt: P) -> Result<String>
where
    P: FnOnce() -> std::io::Result<Option<String>>,
{
    if let Some(password) = configured.filter(|p| !p.is_empty()) {
        return Ok(password.to_string());
    }
    if let Some(password) = from_env {
        tracing::debug!("using password from {}", env::vars::ALLIHARVESTER_PASSWORD);
        return Ok(password);
    }
    match prompt().map_err(Error::PasswordPrompt)? {
        Some(password) if !password.is_empty() => Ok(password),
        _ => Err(Error::PasswordRequired),
    }
}

#[cfg(test)]
#[path = "password_tests.rs"]
mod tests;
