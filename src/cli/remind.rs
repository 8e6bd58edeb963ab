//! Reminder CLI commands
//!
//! Manage reminder subscribers and run the scheduler, either once per
//! external trigger or as a long-running loop.

use chrono::Utc;
use clap::Subcommand;

use crate::config::{JournalPaths, Settings};
use crate::error::JournalResult;
use crate::reminder::{file_scheduler, BatchReport, FileSubscriberStore};

/// Reminder subcommands
#[derive(Subcommand)]
pub enum RemindCommands {
    /// Turn reminders on for a user
    Subscribe {
        /// User ID
        user: String,
        /// Push notification token
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Turn reminders off for a user
    Unsubscribe {
        /// User ID
        user: String,
    },
    /// List subscribers
    List,
    /// Run a single batch now
    Run,
    /// Run a batch every interval
    Watch {
        /// Stop after this many batches
        #[arg(long)]
        batches: Option<usize>,
    },
}

/// Handle a reminder command
pub fn handle_remind_command(
    paths: &JournalPaths,
    settings: &Settings,
    cmd: RemindCommands,
) -> JournalResult<()> {
    let store = FileSubscriberStore::new(paths.subscribers_file());

    match cmd {
        RemindCommands::Subscribe { user, token } => {
            let subscriber = store.subscribe(&user, token)?;
            println!("Reminders enabled for {}", subscriber.user_id);
            if subscriber.notification_token.is_none() {
                println!("Note: no notification token yet, reminders will fail until one is set");
            }
        }

        RemindCommands::Unsubscribe { user } => {
            store.unsubscribe(&user)?;
            println!("Reminders disabled for {}", user);
        }

        RemindCommands::List => {
            let subscribers = store.get_all()?;
            if subscribers.is_empty() {
                println!("No subscribers.");
                return Ok(());
            }

            println!("{:<20}  {:<8}  {:<5}  {}", "User", "Enabled", "Token", "Last reminder");
            println!("{:-<20}  {:-<8}  {:-<5}  {:-<20}", "", "", "", "");
            for s in &subscribers {
                println!(
                    "{:<20}  {:<8}  {:<5}  {}",
                    s.user_id,
                    if s.notifications_enabled { "yes" } else { "no" },
                    if s.notification_token.is_some() { "yes" } else { "no" },
                    s.last_notification_time
                        .map(|t| t.format("%Y-%m-%d %H:%M UTC").to_string())
                        .unwrap_or_else(|| "never".to_string())
                );
            }
        }

        RemindCommands::Run => {
            let scheduler = file_scheduler(paths, settings)?;
            print_report(&scheduler.run_batch(Utc::now()));
        }

        RemindCommands::Watch { batches } => {
            let scheduler = file_scheduler(paths, settings)?;
            println!(
                "Sending reminders every {} hours (Ctrl-C to stop)",
                settings.reminders.interval_hours
            );
            scheduler.watch(batches, print_report);
        }
    }

    Ok(())
}

fn print_report(report: &BatchReport) {
    for outcome in &report.outcomes {
        println!("  {:<20}  {}", outcome.user_id, outcome.outcome);
    }
    println!("{}", report.summary());
}
