// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let header = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::HEADER))));
    let literal = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::LITERAL))));
    let context = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::CONTEXT))));

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(literal)
        .placeholder(context)
        .valid(context)
}

/// Main help template with colorized Options header.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{}
{{options}}{{after-help}}",
        colors::header("Options:")
    )
}

/// Examples and environment notes shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(QUICKSTART)
}

const QUICKSTART: &str = "\
Examples:
  alliharvester                         Summarize the Finna project
  alliharvester -p Kirjasto             Use the [Kirjasto] stanza
  alliharvester -o summary.txt          Write the report to summary.txt
  alliharvester -c ~/release.toml       Read another configuration file

Environment:
  ALLIHARVESTER_PASSWORD                Password when the config has none
  RUST_LOG                              Log filter, default warn";

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
