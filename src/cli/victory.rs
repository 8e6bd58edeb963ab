//! Victory CLI commands

use chrono::{NaiveDate, Utc};
use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_victory_list;
use crate::error::{JournalError, JournalResult};
use crate::models::{Victory, VictoryCategory};
use crate::services::JournalService;
use crate::storage::Storage;

/// Victory subcommands
#[derive(Subcommand)]
pub enum VictoryCommands {
    /// Celebrate a victory on an entry
    Add {
        /// Entry ID
        entry: String,
        /// What happened
        title: String,
        /// Tell the story
        description: String,
        /// Category (spiritual, personal, relationships, health, career, other)
        #[arg(short, long, default_value = "spiritual")]
        category: String,
        /// Date of the victory (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List victories across all entries
    List {
        /// Only victories whose title or description match
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Delete a victory
    Delete {
        /// Victory ID
        victory: String,
    },
}

/// Handle a victory command
pub fn handle_victory_command(
    storage: &Storage,
    settings: &Settings,
    cmd: VictoryCommands,
) -> JournalResult<()> {
    let service = JournalService::new(storage);

    match cmd {
        VictoryCommands::Add {
            entry,
            title,
            description,
            category,
            date,
        } => {
            let category = VictoryCategory::parse(&category).ok_or_else(|| {
                JournalError::Validation(format!("Unknown category '{}'", category))
            })?;
            let date = match date {
                Some(d) => NaiveDate::parse_from_str(&d, "%Y-%m-%d").map_err(|_| {
                    JournalError::Validation(format!("Invalid date '{}' (use YYYY-MM-DD)", d))
                })?,
                None => Utc::now().date_naive(),
            };

            let victory = Victory::new(title, description, date, category);
            let victory_id = victory.id.clone();
            let updated = service.add_victory(&entry, victory)?;
            println!(
                "Victory {} celebrated on entry {}",
                victory_id.short(),
                updated.id.short()
            );
        }

        VictoryCommands::List { search } => {
            let records = match search {
                Some(query) => service.search_victories(&query),
                None => service.victories(),
            };
            print!("{}", format_victory_list(&records, &settings.date_format));
            if records.is_empty() {
                println!();
            }
        }

        VictoryCommands::Delete { victory } => {
            let removed = service.delete_victory(&victory)?;
            println!(
                "Deleted victory '{}' from entry {}",
                removed.victory.title,
                removed.entry_id.short()
            );
        }
    }

    Ok(())
}
