// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration file handling.
//!
//! The file is TOML with one `[jira]` stanza holding connection details and
//! one stanza per project:
//! - `jql`: the query selecting the release's tickets (required)
//! - `outputPrefix`: report file name prefix (optional)
//! - `[<project>.resolutions]` / `[<project>.types]`: rule overrides (optional)

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use ah_core::RuleSet;
use serde::Deserialize;

use crate::error::{Error, Result};

/// File name looked up in the working directory, then the user config dir.
pub const CONFIG_FILE_NAME: &str = "alliharvester.toml";
const CONFIG_DIR_NAME: &str = "alliharvester";
const JIRA_STANZA: &str = "jira";
/// Report prefix used when the project stanza has no `outputPrefix`.
pub const DEFAULT_OUTPUT_PREFIX: &str = "Finna-release-summary";

#[derive(Debug, Deserialize)]
struct JiraStanza {
    #[serde(default)]
    host: String,
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProjectStanza {
    #[serde(default)]
    jql: Option<String>,
    #[serde(default, rename = "outputPrefix", alias = "output_prefix")]
    output_prefix: Option<String>,
    #[serde(default)]
    resolutions: BTreeMap<String, String>,
    #[serde(default)]
    types: BTreeMap<String, String>,
}

/// Everything one run needs, resolved from the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub host: String,
    pub username: String,
    /// `None` when the file leaves the password empty or out.
    pub password: Option<String>,
    pub query: String,
    pub output_prefix: String,
    pub rules: RuleSet,
}

impl Settings {
    /// Read `path` and resolve the `project` stanza.
    pub fn load(path: &Path, project: &str) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::ConfigRead {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::parse(&content, path, project)
    }

    /// Resolve settings from file contents. `path` is only used in messages.
    ///
    /// Checks run in a fixed order so the first problem a user hits is the
    /// one reported: syntax, `[jira]`, credentials, project stanza, query,
    /// rule overrides.
    pub fn parse(content: &str, path: &Path, project: &str) -> Result<Self> {
        let parse_err = |e: toml::de::Error| Error::ConfigRead {
            path: path.to_path_buf(),
            reason: e.to_string(),
        };

        let mut table: toml::Table = toml::from_str(content).map_err(parse_err)?;

        let jira: JiraStanza = table
            .remove(JIRA_STANZA)
            .ok_or_else(|| Error::MissingStanza {
                stanza: JIRA_STANZA.to_string(),
                path: path.to_path_buf(),
            })?
            .try_into()
            .map_err(parse_err)?;

        if jira.host.trim().is_empty() || jira.username.trim().is_empty() {
            return Err(Error::MissingCredentials {
                path: path.to_path_buf(),
            });
        }

        let stanza: ProjectStanza = table
            .remove(project)
            .ok_or_else(|| Error::MissingStanza {
                stanza: project.to_string(),
                path: path.to_path_buf(),
            })?
            .try_into()
            .map_err(parse_err)?;

        let query = stanza
            .jql
            .filter(|q| !q.trim().is_empty())
            .ok_or_else(|| Error::MissingQuery {
                project: project.to_string(),
                path: path.to_path_buf(),
            })?;

        let mut rules = RuleSet::default();
        let invalid = |source| Error::InvalidRules {
            project: project.to_string(),
            source,
        };
        rules
            .resolutions
            .apply_overrides(stanza.resolutions.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .map_err(invalid)?;
        rules
            .types
            .apply_overrides(stanza.types.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .map_err(invalid)?;

        Ok(Settings {
            host: jira.host.trim().to_string(),
            username: jira.username,
            password: jira.password.filter(|p| !p.is_empty()),
            query,
            output_prefix: stanza
                .output_prefix
                .filter(|p| !p.is_empty())
                .unwrap_or_else(|| DEFAULT_OUTPUT_PREFIX.to_string()),
            rules,
        })
    }
}

/// Pick the config file: an explicit path wins, then `./alliharvester.toml`,
/// then `<config dir>/alliharvester/alliharvester.toml`.
///
/// When neither default exists the working-directory name is returned so the
/// read error names the file users are expected to create.
pub fn resolve_config_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.is_file() {
        return local;
    }
    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
        .filter(|p| p.is_file())
        .unwrap_or(local)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
