//! Auth session manager
//!
//! Single-user setup, login, recovery and session tracking. One manager is
//! built at startup from the resolved paths and handed to whatever needs to
//! gate access; there is no process-wide instance.

use crate::config::JournalPaths;
use crate::crypto::{generate_salt, hash_secret, verify_secret, HashParams};
use crate::error::{JournalError, JournalResult};

use super::credentials::{CredentialRecord, CredentialStore};
use super::session::{SessionState, SessionStore};

/// Owns the credential record and the session state
pub struct AuthManager {
    credentials: CredentialStore,
    sessions: SessionStore,
    params: HashParams,
    config: Option<CredentialRecord>,
    state: SessionState,
}

impl AuthManager {
    /// Open the manager over the journal's records
    pub fn open(paths: &JournalPaths) -> JournalResult<Self> {
        Self::open_with_params(paths, HashParams::default())
    }

    /// Open with explicit hashing costs for new credentials
    pub fn open_with_params(paths: &JournalPaths, params: HashParams) -> JournalResult<Self> {
        let credentials = CredentialStore::new(paths.credentials_file());
        let sessions = SessionStore::new(paths.session_file());

        let config = credentials.load()?;
        let mut state = sessions.load();
        if config.is_some() && !state.is_initialized {
            tracing::debug!("credential present without session record; marking initialized");
            state.is_initialized = true;
        }

        Ok(Self {
            credentials,
            sessions,
            params,
            config,
            state,
        })
    }

    pub fn is_initialized(&self) -> bool {
        self.state.is_initialized
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated
    }

    /// Current session state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// First-time setup
    ///
    /// Refuses with `AlreadyInitialized` if a credential exists; use
    /// [`AuthManager::reinitialize`] to overwrite deliberately. Input lengths
    /// are the caller's responsibility (see `auth::validation`).
    pub fn initialize(
        &mut self,
        password: &str,
        recovery_question: &str,
        recovery_answer: &str,
    ) -> JournalResult<()> {
        if self.config.is_some() {
            return Err(JournalError::AlreadyInitialized);
        }
        self.reinitialize(password, recovery_question, recovery_answer)
    }

    /// Set up credentials, silently replacing any existing ones
    pub fn reinitialize(
        &mut self,
        password: &str,
        recovery_question: &str,
        recovery_answer: &str,
    ) -> JournalResult<()> {
        let salt = generate_salt();
        let password_hash = hash_secret(password, &salt, &self.params)?;
        let recovery_answer_hash =
            hash_secret(&recovery_answer.to_lowercase(), &salt, &self.params)?;

        let record = CredentialRecord {
            password_hash,
            recovery_question: recovery_question.to_string(),
            recovery_answer_hash,
            salt,
            params: self.params,
        };

        self.credentials.save(&record)?;
        self.config = Some(record);

        self.state = SessionState {
            is_initialized: true,
            is_authenticated: true,
        };
        self.sessions.save(&self.state)?;

        tracing::info!("journal credentials initialized");
        Ok(())
    }

    /// Check the password and open a session on success
    ///
    /// Returns false when uninitialized or on mismatch; a mismatch leaves the
    /// session untouched. There is no lockout.
    pub fn login(&mut self, password: &str) -> JournalResult<bool> {
        let Some(config) = &self.config else {
            return Ok(false);
        };

        let valid = verify_secret(password, &config.salt, &config.params, &config.password_hash)?;
        if valid {
            self.state.is_authenticated = true;
            self.sessions.save(&self.state)?;
        } else {
            tracing::debug!("login attempt with wrong password");
        }

        Ok(valid)
    }

    /// Case-insensitive check of the recovery answer; never mutates state
    pub fn verify_recovery_answer(&self, answer: &str) -> JournalResult<bool> {
        let Some(config) = &self.config else {
            return Ok(false);
        };

        verify_secret(
            &answer.to_lowercase(),
            &config.salt,
            &config.params,
            &config.recovery_answer_hash,
        )
    }

    /// Replace the password, keeping salt and recovery fields
    ///
    /// The caller must already have verified the recovery answer and the new
    /// password's length.
    pub fn reset_password(&mut self, new_password: &str) -> JournalResult<()> {
        let Some(config) = self.config.as_mut() else {
            return Err(JournalError::NotInitialized);
        };

        config.password_hash = hash_secret(new_password, &config.salt, &config.params)?;
        self.credentials.save(config)?;

        self.state.is_authenticated = true;
        self.sessions.save(&self.state)?;

        tracing::info!("journal password reset");
        Ok(())
    }

    /// End the session; setup state is kept
    pub fn logout(&mut self) -> JournalResult<()> {
        self.state.is_authenticated = false;
        self.sessions.save(&self.state)
    }

    pub fn recovery_question(&self) -> Option<&str> {
        self.config.as_ref().map(|c| c.recovery_question.as_str())
    }

    /// Fail with the right error unless a session is open
    pub fn require_authenticated(&self) -> JournalResult<()> {
        if !self.is_initialized() {
            return Err(JournalError::NotInitialized);
        }
        if !self.is_authenticated() {
            return Err(JournalError::NotAuthenticated);
        }
        Ok(())
    }
}
