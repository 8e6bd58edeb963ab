//! Entry display formatting
//!
//! Formats journal entries and victories for terminal output in table and
//! detail views.

use crate::models::JournalEntry;
use crate::services::VictoryRecord;

/// Format a list of entries as a table
pub fn format_entry_list(entries: &[JournalEntry], date_format: &str) -> String {
    if entries.is_empty() {
        return "No entries found.".to_string();
    }

    let thread_width = entries
        .iter()
        .map(|e| e.thread_title.chars().count().min(40))
        .max()
        .unwrap_or(6)
        .max(6);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<10}  {:<thread_width$}  {:<6}  {:>3}  {:>9}\n",
        "ID",
        "Date",
        "Thread",
        "Color",
        "No.",
        "Victories",
        thread_width = thread_width,
    ));
    output.push_str(&format!(
        "{:-<12}  {:-<10}  {:-<thread_width$}  {:-<6}  {:->3}  {:->9}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        thread_width = thread_width,
    ));

    for entry in entries {
        output.push_str(&format!(
            "{:<12}  {:<10}  {:<thread_width$}  {:<6}  {:>3}  {:>9}\n",
            entry.id.short(),
            entry.created_at.format(date_format).to_string(),
            truncate(&entry.thread_title, 40),
            entry.color.as_str(),
            entry.number,
            entry.victories.len(),
            thread_width = thread_width,
        ));
    }

    output.push_str(&format!("\nTotal: {} entries\n", entries.len()));
    output
}

/// Format one entry with its reflection, beliefs and victories
pub fn format_entry_details(entry: &JournalEntry, date_format: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Entry:   {}\n", entry.id.short()));
    output.push_str(&format!("Thread:  {}\n", entry.thread_title));
    output.push_str(&format!("Color:   {}\n", entry.color));
    output.push_str(&format!("Number:  {}\n", entry.number));
    output.push_str(&format!(
        "Created: {}\n",
        entry.created_at.format(&format!("{} %H:%M", date_format))
    ));
    if entry.updated_at != entry.created_at {
        output.push_str(&format!(
            "Updated: {}\n",
            entry.updated_at.format(&format!("{} %H:%M", date_format))
        ));
    }

    output.push_str("\nReflection\n----------\n");
    output.push_str(&entry.content);
    output.push('\n');

    if !entry.beliefs.is_empty() {
        output.push_str("\nBeliefs\n-------\n");
        for (i, belief) in entry.beliefs.iter().enumerate() {
            output.push_str(&format!("{}. {}\n", i + 1, belief.belief));
            output.push_str(&format!("   Why it's a lie: {}\n", belief.how_is_it_a_lie));
        }
    }

    if !entry.victories.is_empty() {
        output.push_str("\nVictories\n---------\n");
        for victory in &entry.victories {
            output.push_str(&format!(
                "{}  {}  [{}] {}\n",
                victory.id.short(),
                victory.date.format(date_format),
                victory.category.label(),
                victory.title
            ));
        }
    }

    output
}

/// Format victories across entries as a table
pub fn format_victory_list(records: &[VictoryRecord], date_format: &str) -> String {
    if records.is_empty() {
        return "No victories found.".to_string();
    }

    let title_width = records
        .iter()
        .map(|r| r.victory.title.chars().count().min(40))
        .max()
        .unwrap_or(5)
        .max(5);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<10}  {:<13}  {:<title_width$}  {}\n",
        "ID",
        "Date",
        "Category",
        "Title",
        "Thread",
        title_width = title_width,
    ));
    output.push_str(&format!(
        "{:-<12}  {:-<10}  {:-<13}  {:-<title_width$}  {:-<10}\n",
        "",
        "",
        "",
        "",
        "",
        title_width = title_width,
    ));

    for record in records {
        output.push_str(&format!(
            "{:<12}  {:<10}  {:<13}  {:<title_width$}  {}\n",
            record.victory.id.short(),
            record.victory.date.format(date_format).to_string(),
            record.victory.category.as_str(),
            truncate(&record.victory.title, 40),
            record.thread_title,
            title_width = title_width,
        ));
    }

    output.push_str(&format!("\nTotal: {} victories\n", records.len()));
    output
}

/// Truncate to `max` characters, marking the cut with "..."
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
