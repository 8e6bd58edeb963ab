//! Manifestation and daily action CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_action_list, format_manifestation_list};
use crate::error::JournalResult;
use crate::services::{DailyActionService, ManifestationService};
use crate::storage::Storage;

/// Manifestation subcommands
#[derive(Subcommand)]
pub enum ManifestCommands {
    /// Add a manifestation
    Add { content: String },
    /// List manifestations
    List,
    /// Change a manifestation
    Edit { id: String, content: String },
    /// Remove a manifestation
    Delete { id: String },
}

/// Daily action subcommands
#[derive(Subcommand)]
pub enum ActionCommands {
    /// Add an action step
    Add { content: String },
    /// List action steps
    List,
    /// Change an action step
    Edit { id: String, content: String },
    /// Document the results of an action step
    Results { id: String, results: String },
    /// Remove an action step
    Delete { id: String },
}

pub fn handle_manifest_command(storage: &Storage, cmd: ManifestCommands) -> JournalResult<()> {
    let service = ManifestationService::new(storage);

    match cmd {
        ManifestCommands::Add { content } => {
            let item = service.add(&content)?;
            println!("Added manifestation {}", item.id.short());
        }
        ManifestCommands::List => {
            let items = service.list();
            print!("{}", format_manifestation_list(&items));
            if items.is_empty() {
                println!();
            }
        }
        ManifestCommands::Edit { id, content } => {
            let item = service.edit(&id, &content)?;
            println!("Updated manifestation {}", item.id.short());
        }
        ManifestCommands::Delete { id } => {
            let item = service.delete(&id)?;
            println!("Deleted manifestation {}", item.id.short());
        }
    }

    Ok(())
}

pub fn handle_action_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ActionCommands,
) -> JournalResult<()> {
    let service = DailyActionService::new(storage);

    match cmd {
        ActionCommands::Add { content } => {
            let item = service.add(&content)?;
            println!("Added action {}", item.id.short());
        }
        ActionCommands::List => {
            let items = service.list();
            print!("{}", format_action_list(&items, &settings.date_format));
            if items.is_empty() {
                println!();
            }
        }
        ActionCommands::Edit { id, content } => {
            let item = service.edit(&id, &content)?;
            println!("Updated action {}", item.id.short());
        }
        ActionCommands::Results { id, results } => {
            let item = service.record_results(&id, &results)?;
            println!("Recorded results for action {}", item.id.short());
        }
        ActionCommands::Delete { id } => {
            let item = service.delete(&id)?;
            println!("Deleted action {}", item.id.short());
        }
    }

    Ok(())
}
