// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color utilities for help output.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use std::io::IsTerminal;

use crate::env;

/// ANSI 256-color codes used by the help screens.
pub mod codes {
    /// Section headers: pastel cyan/steel blue
    pub const HEADER: u8 = 74;
    /// Commands/literals: light grey
    pub const LITERAL: u8 = 250;
    /// Descriptions/context: medium grey
    pub const CONTEXT: u8 = 245;

    pub const RESET: &str = "\x1b[0m";
}

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    if env::no_color() {
        return false;
    }
    if env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

fn paint(code: u8, text: &str) -> String {
    format!("\x1b[38;5;{code}m{text}{}", codes::RESET)
}

/// Apply header color (section titles) to text.
pub fn header(text: &str) -> String {
    paint(codes::HEADER, text)
}

/// Apply literal color (commands, options) to text.
pub fn literal(text: &str) -> String {
    paint(codes::LITERAL, text)
}

/// Apply context color (descriptions, hints) to text.
pub fn context(text: &str) -> String {
    paint(codes::CONTEXT, text)
}

/// Colorize a help block made of `Title:` lines and indented
/// `command    description` rows.
///
/// Returns the text untouched when colors are disabled.
pub fn examples(text: &str) -> String {
    if !should_colorize() {
        return text.to_string();
    }
    colorize_block(text)
}

fn colorize_block(text: &str) -> String {
    let mut out = String::new();
    for (i, line) in text.lines().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&colorize_line(line));
    }
    out
}

fn colorize_line(line: &str) -> String {
    let trimmed = line.trim_start();
    if trimmed.is_empty() {
        return line.to_string();
    }
    if !line.starts_with(' ') && trimmed.ends_with(':') {
        return header(line);
    }

    let indent = &line[..line.len() - trimmed.len()];
    match find_description_start(trimmed) {
        Some(pos) => {
            let (command, rest) = trimmed.split_at(pos);
            let description = rest.trim_start();
            let gap = &rest[..rest.len() - description.len()];
            format!("{indent}{}{gap}{}", literal(command), context(description))
        }
        None => format!("{indent}{}", literal(trimmed)),
    }
}

/// Byte offset of the first run of two or more spaces.
pub(crate) fn find_description_start(text: &str) -> Option<usize> {
    text.find("  ")
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
