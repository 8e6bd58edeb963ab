//! CSV export of victories
//!
//! One row per victory across all entries, in entry order.

use serde::Serialize;
use std::io::Write;

use crate::error::{JournalError, JournalResult};
use crate::services::JournalService;
use crate::storage::Storage;

#[derive(Serialize)]
struct VictoryRow<'a> {
    #[serde(rename = "Entry ID")]
    entry_id: String,
    #[serde(rename = "Thread")]
    thread: &'a str,
    #[serde(rename = "Victory")]
    title: &'a str,
    #[serde(rename = "Category")]
    category: &'a str,
    #[serde(rename = "Description")]
    description: &'a str,
    #[serde(rename = "Date")]
    date: String,
}

/// Export all victories to CSV
pub fn export_victories_csv<W: Write>(storage: &Storage, writer: W) -> JournalResult<usize> {
    let records = JournalService::new(storage).victories();
    let mut csv_writer = csv::Writer::from_writer(writer);

    if records.is_empty() {
        csv_writer
            .write_record(["Entry ID", "Thread", "Victory", "Category", "Description", "Date"])
            .map_err(|e| JournalError::Export(e.to_string()))?;
    }

    for record in &records {
        csv_writer
            .serialize(VictoryRow {
                entry_id: record.entry_id.to_string(),
                thread: &record.thread_title,
                title: &record.victory.title,
                category: record.victory.category.as_str(),
                description: &record.victory.description,
                date: record.victory.date.format("%Y-%m-%d").to_string(),
            })
            .map_err(|e| JournalError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| JournalError::Export(e.to_string()))?;

    Ok(records.len())
}
