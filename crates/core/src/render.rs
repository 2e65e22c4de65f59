// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report rendering.
//!
//! Report text is fixed Finnish. Sections come in [`Bucket::ALL`] order;
//! each bucket has a title and a [`DisplayMode`].

use std::io::{self, Write};

use crate::aggregate::{Buckets, Tally};
use crate::rules::Bucket;
use crate::ticket::{Comment, Link, Ticket};

const RELATED_HEADER: &str = "Aiheeseen liittyvät tiketit:";
const ENTRY_RULE: &str = "-----------------------------------------------------";

/// How much of a ticket a section prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Dates, assignee, description, related tickets and comments.
    FullDetail,
    /// Key, title, type, priority and resolution only.
    KeyOnly,
}

/// Title and display mode of one report section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub mode: DisplayMode,
}

impl Section {
    pub fn new(title: impl Into<String>, mode: DisplayMode) -> Self {
        Section {
            title: title.into(),
            mode,
        }
    }
}

/// Per-bucket section settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionTable {
    done: Section,
    fixes: Section,
    noop: Section,
    weird: Section,
}

impl SectionTable {
    pub fn new(done: Section, fixes: Section, noop: Section, weird: Section) -> Self {
        SectionTable {
            done,
            fixes,
            noop,
            weird,
        }
    }

    pub fn get(&self, bucket: Bucket) -> &Section {
        match bucket {
            Bucket::Done => &self.done,
            Bucket::Fixes => &self.fixes,
            Bucket::Noop => &self.noop,
            Bucket::Weird => &self.weird,
        }
    }
}

impl Default for SectionTable {
    fn default() -> Self {
        SectionTable::new(
            Section::new("Parannukset", DisplayMode::FullDetail),
            Section::new("Vikakorjaukset", DisplayMode::FullDetail),
            Section::new("Ei tarvitse välittää", DisplayMode::KeyOnly),
            Section::new("Tarkista nämä!", DisplayMode::KeyOnly),
        )
    }
}

/// Format one ticket entry, including its trailing rule.
///
/// Output format (full detail):
/// ```text
/// FINNA-1       Crash on login
/// Bug           Major             Fixed
/// 2024-03-01    Aino              2024-03-11
///
/// description
///
/// Aiheeseen liittyvät tiketit:
/// \tFINNA-9             Related thing
/// \tTask/Minor/Closed
///
/// Bob (2024-03-05): comment body
///
///
/// -----------------------------------------------------
///
/// ```
///
/// Link rows start with a tab character, shown as `\t` above. Columns are
/// padded by `char` count, so a name such as "Päivi" takes five columns
/// where a byte-padded `%-14s` would count six.
pub fn format_ticket(ticket: &Ticket, mode: DisplayMode) -> String {
    let mut out = String::new();

    out.push_str(&format!("{:<14}{}\n", ticket.key, ticket.title));
    out.push_str(&format!(
        "{:<14}{:<18}{}\n",
        ticket.issue_type, ticket.priority, ticket.resolution
    ));

    if mode == DisplayMode::FullDetail {
        out.push_str(&format!(
            "{:<14}{:<18}{}\n\n{}\n\n",
            ticket.created, ticket.assignee, ticket.resolved, ticket.description
        ));
        if !ticket.links.is_empty() {
            out.push_str(RELATED_HEADER);
            out.push('\n');
        }
        for link in &ticket.links {
            out.push_str(&format_link(link));
        }
        for comment in &ticket.comments {
            out.push_str(&format_comment(comment));
        }
    }

    out.push_str(&format!("\n{}\n\n", ENTRY_RULE));
    out
}

fn format_link(link: &Link) -> String {
    format!(
        "\t{:<20}{}\n\t{}/{}/{}\n\n",
        link.key, link.title, link.issue_type, link.priority, link.status
    )
}

fn format_comment(comment: &Comment) -> String {
    format!("{} ({}): {}\n\n", comment.author, comment.time, comment.title)
}

/// The closing line of the report.
pub fn format_tally(tally: &Tally) -> String {
    format!(
        "Yhteensä {} parannusta, {} vikakorjausta ja {} tarpeetonta muutospyyntöä, kaikkiaan {} kappaletta.\n\n",
        tally.done,
        tally.fixes,
        tally.noop,
        tally.total()
    )
}

/// Write the whole report to `sink`.
///
/// Empty buckets print no title, but every section is followed by the same
/// separator so the layout does not depend on which buckets are populated.
pub fn render<W: Write + ?Sized>(sink: &mut W, buckets: &Buckets, sections: &SectionTable) -> io::Result<()> {
    for bucket in Bucket::ALL {
        let tickets = buckets.get(bucket);
        let section = sections.get(bucket);

        if !tickets.is_empty() {
            write!(sink, "{}\n\n", section.title)?;
        }
        for ticket in tickets {
            sink.write_all(format_ticket(ticket, section.mode).as_bytes())?;
        }
        sink.write_all(b"\n\n\n")?;
    }

    sink.write_all(format_tally(&buckets.tally()).as_bytes())
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
