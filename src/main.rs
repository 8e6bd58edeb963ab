use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use heal_journal::auth::AuthManager;
use heal_journal::cli::{
    ensure_session, handle_action_command, handle_auth_command, handle_backup_command,
    handle_entry_command, handle_export_command, handle_import_command, handle_manifest_command,
    handle_remind_command, handle_victory_command, ActionCommands, AuthCommands, BackupCommands,
    EntryCommands, ExportCommands, ManifestCommands, RemindCommands, VictoryCommands,
};
use heal_journal::config::{JournalPaths, Settings};
use heal_journal::storage::Storage;

#[derive(Parser)]
#[command(
    name = "heal",
    version,
    about = "Private, local-first H.E.A.L. healing journal",
    long_about = "H.E.A.L. Journal keeps your healing sessions, beliefs and victories \
                  on your own machine, protected by a password and a recovery question."
)]
struct Cli {
    /// Journal password for non-interactive use
    #[arg(
        long,
        global = true,
        env = "HEAL_JOURNAL_PASSWORD",
        hide_env_values = true
    )]
    password: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Password, login and recovery
    #[command(subcommand)]
    Auth(AuthCommands),

    /// Journal entries
    #[command(subcommand, alias = "entries")]
    Entry(EntryCommands),

    /// Victories across your entries
    #[command(subcommand, alias = "victories")]
    Victory(VictoryCommands),

    /// Manifestation list
    #[command(subcommand, alias = "manifestation")]
    Manifest(ManifestCommands),

    /// Daily action steps
    #[command(subcommand, alias = "actions")]
    Action(ActionCommands),

    /// Export the journal
    #[command(subcommand)]
    Export(ExportCommands),

    /// Replace all entries with a JSON backup
    Import {
        /// Backup file
        file: PathBuf,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },

    /// Rolling backups
    #[command(subcommand)]
    Backup(BackupCommands),

    /// Push reminders
    #[command(subcommand)]
    Remind(RemindCommands),

    /// Show configuration
    Config,
}

impl Commands {
    /// Commands that read or change journal data
    fn needs_session(&self) -> bool {
        !matches!(self, Self::Auth(_) | Self::Remind(_) | Self::Config)
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("HEAL_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let paths = JournalPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let storage = Storage::new(paths.clone())?;
    let mut auth = AuthManager::open(&paths)?;
    let password = cli.password.as_deref();

    if cli.command.as_ref().map_or(false, Commands::needs_session) {
        ensure_session(&mut auth, password)?;
    }

    match cli.command {
        Some(Commands::Auth(cmd)) => handle_auth_command(&mut auth, password, cmd)?,
        Some(Commands::Remind(cmd)) => handle_remind_command(&paths, &settings, cmd)?,
        Some(Commands::Config) => {
            println!("H.E.A.L. Journal Configuration");
            println!("==============================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Backup directory: {}", paths.backup_dir().display());
            println!();
            println!("Settings:");
            println!("  Date format:       {}", settings.date_format);
            println!("  Backups kept:      {}", settings.backup_retention.keep_count);
            println!("  Reminder interval: {}h", settings.reminders.interval_hours);
            println!("  Reminder after:    {}h", settings.reminders.threshold_hours);
        }
        Some(Commands::Entry(cmd)) => handle_entry_command(&storage, &settings, cmd)?,
        Some(Commands::Victory(cmd)) => handle_victory_command(&storage, &settings, cmd)?,
        Some(Commands::Manifest(cmd)) => handle_manifest_command(&storage, cmd)?,
        Some(Commands::Action(cmd)) => handle_action_command(&storage, &settings, cmd)?,
        Some(Commands::Export(cmd)) => handle_export_command(&storage, cmd)?,
        Some(Commands::Import { file, force }) => handle_import_command(&storage, &file, force)?,
        Some(Commands::Backup(cmd)) => handle_backup_command(&paths, &settings, cmd)?,
        None => {
            println!("H.E.A.L. Journal");
            println!();
            if auth.is_initialized() {
                println!("Run 'heal entry new --help' to write an entry.");
            } else {
                println!("Run 'heal auth setup' to protect your journal with a password.");
            }
            println!("Run 'heal --help' for usage information.");
        }
    }

    Ok(())
}
