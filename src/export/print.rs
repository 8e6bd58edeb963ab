//! Printable plain-text rendering of the journal
//!
//! The layout is fixed so printed journals look the same regardless of where
//! they were generated. Dates render as "March 9, 2025".

use chrono::{DateTime, NaiveDate, Utc};
use std::io::Write;

use crate::error::{JournalError, JournalResult};
use crate::models::JournalEntry;
use crate::storage::Storage;

const HEAVY_RULE: &str = "=================================================================";
const LIGHT_RULE: &str = "-----------------------------------------------------------------";

/// Long-form date used throughout the printout
pub fn long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Suggested file name for a printout made on `date`
pub fn print_file_name(date: NaiveDate) -> String {
    format!("heal-journal-{}.txt", date.format("%Y-%m-%d"))
}

/// Render the whole collection as printable text
pub fn render_printable(entries: &[JournalEntry], generated_on: DateTime<Utc>) -> String {
    let sections = entries
        .iter()
        .map(render_section)
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "\nH.E.A.L. JOURNAL\nPersonal Healing Journey\nGenerated on {}\n\n{}\n",
        long_date(generated_on.date_naive()),
        sections
    )
}

fn render_section(entry: &JournalEntry) -> String {
    let beliefs = if entry.beliefs.is_empty() {
        String::new()
    } else {
        let items = entry
            .beliefs
            .iter()
            .enumerate()
            .map(|(i, b)| {
                format!(
                    "{}. Belief: {}\n   Understanding: {}",
                    i + 1,
                    b.belief,
                    b.how_is_it_a_lie
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n");
        format!("\nBELIEFS EXPLORED\n{}\n{}", LIGHT_RULE, items)
    };

    let victories = if entry.victories.is_empty() {
        String::new()
    } else {
        let items = entry
            .victories
            .iter()
            .map(|v| {
                format!(
                    "• {} ({})\n  {}\n  Date: {}",
                    v.title,
                    v.category.as_str(),
                    v.description,
                    long_date(v.date)
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n");
        format!("\nVICTORIES CELEBRATED\n{}\n{}", LIGHT_RULE, items)
    };

    format!(
        "\n{heavy}\nHEALING JOURNEY ENTRY - {date}\n{heavy}\n\n\
         Thread: {thread}\nColor: {color}\nNumber: {number}\n\n\
         REFLECTION\n{light}\n{content}\n\n{beliefs}\n\n{victories}\n",
        heavy = HEAVY_RULE,
        light = LIGHT_RULE,
        date = long_date(entry.created_at.date_naive()),
        thread = entry.thread_title,
        color = entry.color.as_str(),
        number = entry.number,
        content = entry.content,
        beliefs = beliefs,
        victories = victories,
    )
}

/// Write the printable journal for everything in storage
pub fn export_printable<W: Write + ?Sized>(
    storage: &Storage,
    writer: &mut W,
    generated_on: DateTime<Utc>,
) -> JournalResult<()> {
    let text = render_printable(&storage.entries.get_all(), generated_on);
    writer
        .write_all(text.as_bytes())
        .map_err(|e| JournalError::Export(e.to_string()))
}
