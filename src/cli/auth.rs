//! Authentication CLI commands
//!
//! Setup, login, logout, recovery and the gate every journal command passes
//! through.

use std::io::{self, BufRead, Write};

use clap::Subcommand;

use crate::auth::validation::{validate_password, validate_recovery_answer, validate_setup};
use crate::auth::AuthManager;
use crate::crypto::SecureString;
use crate::error::{JournalError, JournalResult};

/// Auth subcommands
#[derive(Subcommand)]
pub enum AuthCommands {
    /// Set up the journal password and recovery question
    Setup {
        /// Recovery question (prompted if omitted)
        #[arg(short, long)]
        question: Option<String>,
        /// Answer to the recovery question (prompted if omitted)
        #[arg(short, long)]
        answer: Option<String>,
        /// Replace existing credentials (requires an open session)
        #[arg(long)]
        force: bool,
    },
    /// Log in with your password
    Login,
    /// Log out
    Logout,
    /// Show setup and session state
    Status,
    /// Reset a forgotten password using the recovery question
    Recover {
        /// Answer to the recovery question (prompted if omitted)
        #[arg(short, long)]
        answer: Option<String>,
        /// New password (prompted if omitted)
        #[arg(long, env = "HEAL_JOURNAL_NEW_PASSWORD", hide_env_values = true)]
        new_password: Option<String>,
    },
}

/// Handle an auth command
pub fn handle_auth_command(
    auth: &mut AuthManager,
    password: Option<&str>,
    cmd: AuthCommands,
) -> JournalResult<()> {
    match cmd {
        AuthCommands::Setup {
            question,
            answer,
            force,
        } => {
            if auth.is_initialized() {
                if !force {
                    return Err(JournalError::AlreadyInitialized);
                }
                auth.require_authenticated()?;
            }

            let password = match password {
                Some(p) => SecureString::from(p),
                None => prompt_new_password()?,
            };
            let question = match question {
                Some(q) => q,
                None => prompt_line("Recovery question: ")?,
            };
            let answer = match answer {
                Some(a) => SecureString::from(a),
                None => prompt_secret("Answer: ")?,
            };

            validate_setup(&password, &question, &answer)?;

            if force {
                auth.reinitialize(&password, question.trim(), &answer)?;
            } else {
                auth.initialize(&password, question.trim(), &answer)?;
            }

            println!("Journal set up. You are logged in.");
            println!("Keep your recovery answer safe: it is the only way back in.");
        }

        AuthCommands::Login => {
            if !auth.is_initialized() {
                return Err(JournalError::NotInitialized);
            }
            let password = match password {
                Some(p) => SecureString::from(p),
                None => prompt_secret("Password: ")?,
            };

            if !auth.login(&password)? {
                return Err(JournalError::Validation("Incorrect password".into()));
            }
            println!("Logged in.");
        }

        AuthCommands::Logout => {
            auth.logout()?;
            println!("Logged out.");
        }

        AuthCommands::Status => {
            println!("Initialized:   {}", yes_no(auth.is_initialized()));
            println!("Authenticated: {}", yes_no(auth.is_authenticated()));
            if let Some(question) = auth.recovery_question() {
                println!("Recovery question: {}", question);
            }
        }

        AuthCommands::Recover {
            answer,
            new_password,
        } => {
            let question = auth
                .recovery_question()
                .ok_or(JournalError::NotInitialized)?
                .to_string();
            println!("Recovery question: {}", question);

            let answer = match answer {
                Some(a) => SecureString::from(a),
                None => prompt_secret("Answer: ")?,
            };
            validate_recovery_answer(&answer)?;

            if !auth.verify_recovery_answer(&answer)? {
                return Err(JournalError::Validation("Incorrect answer".into()));
            }

            let new_password = match new_password {
                Some(p) => SecureString::from(p),
                None => prompt_new_password()?,
            };
            validate_password(&new_password)?;

            auth.reset_password(&new_password)?;
            println!("Password reset. You are logged in.");
        }
    }

    Ok(())
}

/// Make sure a session is open, logging in with `password` if one is given
pub fn ensure_session(auth: &mut AuthManager, password: Option<&str>) -> JournalResult<()> {
    if !auth.is_initialized() {
        return Err(JournalError::NotInitialized);
    }
    if auth.is_authenticated() {
        return Ok(());
    }

    match password {
        Some(password) if auth.login(password)? => Ok(()),
        Some(_) => Err(JournalError::Validation("Incorrect password".into())),
        None => Err(JournalError::NotAuthenticated),
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

/// Prompt for a new password with confirmation
fn prompt_new_password() -> JournalResult<SecureString> {
    loop {
        let first = prompt_secret("New password: ")?;

        if let Err(e) = validate_password(&first) {
            println!("{}. Please try again.", e);
            continue;
        }

        let second = prompt_secret("Confirm password: ")?;
        if first.as_str() != second.as_str() {
            println!("Passwords do not match. Please try again.");
            continue;
        }

        return Ok(first);
    }
}

/// Prompt for hidden input
fn prompt_secret(prompt: &str) -> JournalResult<SecureString> {
    rpassword::prompt_password(prompt)
        .map(SecureString::from)
        .map_err(|e| JournalError::Io(format!("Failed to read input: {}", e)))
}

/// Prompt for a visible line of input
fn prompt_line(prompt: &str) -> JournalResult<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
