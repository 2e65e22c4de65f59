// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// The binary, isolated from the caller's config dir and password.
pub fn ah(temp: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("alliharvester");
    cmd.current_dir(temp.path())
        .env("XDG_CONFIG_HOME", temp.path().join("xdg"))
        .env("HOME", temp.path())
        .env("NO_COLOR", "1")
        .env_remove("ALLIHARVESTER_PASSWORD")
        .env_remove("RUST_LOG");
    cmd
}

pub const JIRA: &str = "[jira]\nhost = \"http://127.0.0.1:9\"\nusername = \"release-bot\"\npassword = \"pw\"\n";

/// Temp dir holding `alliharvester.toml` with `content`.
pub fn with_config(content: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("alliharvester.toml"), content).unwrap();
    temp
}
