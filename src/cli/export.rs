//! CLI commands for export and import

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;
use clap::Subcommand;

use crate::error::{JournalError, JournalResult};
use crate::export::{csv, json, print, yaml};
use crate::storage::Storage;

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// JSON backup that can be imported again
    Json {
        /// Output file ("-" for stdout, defaults to heal-journal-backup-<date>.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Plain-text journal for printing
    Print {
        /// Output file ("-" for stdout, defaults to heal-journal-<date>.txt)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Human-readable YAML copy
    Yaml {
        /// Output file ("-" for stdout, defaults to heal-journal-<date>.yaml)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Victories as CSV
    Victories {
        /// Output file ("-" for stdout, defaults to heal-journal-victories-<date>.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle export commands
pub fn handle_export_command(storage: &Storage, cmd: ExportCommands) -> JournalResult<()> {
    let now = Utc::now();
    let today = now.date_naive();

    match cmd {
        ExportCommands::Json { output } => {
            let output = output.unwrap_or_else(|| json::backup_file_name(today).into());
            write_to(&output, |w| json::export_json(storage, w))?;
            report(&output, &format!("Exported {} entries", storage.entries.count()));
        }
        ExportCommands::Print { output } => {
            let output = output.unwrap_or_else(|| print::print_file_name(today).into());
            write_to(&output, |w| print::export_printable(storage, w, now))?;
            report(&output, "Printable journal written");
        }
        ExportCommands::Yaml { output } => {
            let output = output
                .unwrap_or_else(|| format!("heal-journal-{}.yaml", today.format("%Y-%m-%d")).into());
            write_to(&output, |w| yaml::export_yaml(storage, w, now))?;
            report(&output, &format!("Exported {} entries", storage.entries.count()));
        }
        ExportCommands::Victories { output } => {
            let output = output.unwrap_or_else(|| {
                format!("heal-journal-victories-{}.csv", today.format("%Y-%m-%d")).into()
            });
            let mut count = 0;
            write_to(&output, |w| {
                count = csv::export_victories_csv(storage, w)?;
                Ok(())
            })?;
            report(&output, &format!("Exported {} victories", count));
        }
    }

    Ok(())
}

/// Replace all entries with a JSON backup
pub fn handle_import_command(storage: &Storage, file: &Path, force: bool) -> JournalResult<()> {
    let contents = std::fs::read_to_string(file).map_err(|e| {
        JournalError::Import(format!("Failed to read {}: {}", file.display(), e))
    })?;

    if !force {
        println!(
            "Importing will replace all {} current entries.",
            storage.entries.count()
        );
        println!("Use --force to confirm the import");
        return Ok(());
    }

    let count = json::import_json(storage, &contents)?;
    println!("Imported {} entries from {}", count, file.display());
    Ok(())
}

fn is_stdout(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn write_to<F>(output: &Path, export: F) -> JournalResult<()>
where
    F: FnOnce(&mut dyn Write) -> JournalResult<()>,
{
    if is_stdout(output) {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        export(&mut lock)?;
        return lock.flush().map_err(|e| JournalError::Export(e.to_string()));
    }

    let file = File::create(output).map_err(|e| {
        JournalError::Export(format!("Failed to create file {}: {}", output.display(), e))
    })?;
    let mut writer = BufWriter::new(file);
    export(&mut writer)?;
    writer
        .flush()
        .map_err(|e| JournalError::Export(e.to_string()))
}

fn report(output: &Path, message: &str) {
    if is_stdout(output) {
        tracing::info!("{}", message);
    } else {
        println!("{} to: {}", message, output.display());
    }
}
