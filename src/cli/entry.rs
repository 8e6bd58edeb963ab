//! Journal entry CLI commands

use chrono::Utc;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_entry_details, format_entry_list};
use crate::error::{JournalError, JournalResult};
use crate::models::{Belief, NewEntry, ThreadColor};
use crate::services::{JournalService, TimeFrame};
use crate::storage::Storage;

/// Entry subcommands
#[derive(Subcommand)]
pub enum EntryCommands {
    /// Write a new entry
    New {
        /// What thread are you working on?
        #[arg(short, long)]
        thread: String,
        /// Thread color (red, orange, yellow, green, blue, indigo, violet,
        /// black, white, brown, grey)
        #[arg(short, long)]
        color: String,
        /// Session number (1-6)
        #[arg(short, long)]
        number: u8,
        /// Reflection text
        content: String,
        /// A belief you explored (repeatable, pair with --truth)
        #[arg(long)]
        belief: Vec<String>,
        /// How that belief is a lie (one per --belief)
        #[arg(long)]
        truth: Vec<String>,
    },
    /// List entries
    List {
        /// Time frame: all, week, month, year or YYYY-MM
        #[arg(short, long, default_value = "all")]
        frame: String,
    },
    /// Show an entry
    Show {
        /// Entry ID
        entry: String,
    },
    /// Replace an entry's reflection
    Edit {
        /// Entry ID
        entry: String,
        /// New reflection text
        content: String,
    },
    /// Delete an entry
    Delete {
        /// Entry ID
        entry: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
    /// Search thread titles, reflections and beliefs
    Search {
        /// Text to look for (case-insensitive)
        query: String,
    },
    /// Months that have entries
    Months,
}

/// Handle an entry command
pub fn handle_entry_command(
    storage: &Storage,
    settings: &Settings,
    cmd: EntryCommands,
) -> JournalResult<()> {
    let service = JournalService::new(storage);

    match cmd {
        EntryCommands::New {
            thread,
            color,
            number,
            content,
            belief,
            truth,
        } => {
            let color = ThreadColor::parse(&color).ok_or_else(|| {
                JournalError::Validation(format!("Unknown color '{}'", color))
            })?;

            if belief.len() != truth.len() {
                return Err(JournalError::Validation(
                    "Each --belief needs a matching --truth".into(),
                ));
            }

            let mut new_entry = NewEntry::new(thread.trim(), color, number, content.trim());
            new_entry.beliefs = belief
                .iter()
                .zip(truth.iter())
                .map(|(b, t)| Belief::new(b.trim(), t.trim()))
                .collect();

            let entry = service.create(new_entry)?;
            println!("Saved entry {} ({})", entry.id.short(), entry);
        }

        EntryCommands::List { frame } => {
            let time_frame = TimeFrame::parse(&frame).ok_or_else(|| {
                JournalError::Validation(format!(
                    "Unknown time frame '{}' (use all, week, month, year or YYYY-MM)",
                    frame
                ))
            })?;

            let entries = service.list_in(time_frame, Utc::now());
            print!("{}", format_entry_list(&entries, &settings.date_format));
            if entries.is_empty() {
                println!();
            }
        }

        EntryCommands::Show { entry } => {
            let entry = service.get(&entry)?;
            print!("{}", format_entry_details(&entry, &settings.date_format));
        }

        EntryCommands::Edit { entry, content } => {
            let updated = service.edit_content(&entry, &content)?;
            println!("Updated entry {}", updated.id.short());
        }

        EntryCommands::Delete { entry, force } => {
            let found = service.get(&entry)?;

            if !force {
                println!(
                    "About to delete entry {}: {}",
                    found.id.short(),
                    found.thread_title
                );
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            let deleted = service.delete(&entry)?;
            println!("Deleted entry {}", deleted.id.short());
        }

        EntryCommands::Search { query } => {
            let entries = service.search(&query);
            print!("{}", format_entry_list(&entries, &settings.date_format));
            if entries.is_empty() {
                println!();
            }
        }

        EntryCommands::Months => {
            let months = service.available_months();
            if months.is_empty() {
                println!("No entries yet.");
            }
            for (year, month) in months {
                println!("{:04}-{:02}", year, month);
            }
        }
    }

    Ok(())
}

