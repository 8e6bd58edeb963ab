//! Local authentication for H.E.A.L. Journal
//!
//! A single user protects the journal with a password and a recovery
//! question. The pieces:
//!
//! - `CredentialStore`: salt, password digest and recovery-answer digest
//! - `SessionStore`: initialized / authenticated flags
//! - `AuthManager`: setup, login, recovery, reset and logout over both
//! - `validation`: length rules callers apply before calling the manager
//!
//! Access control is a gate in front of the journal commands; entries
//! themselves are stored as plain JSON.

pub mod credentials;
pub mod manager;
pub mod session;
pub mod validation;

pub use credentials::{CredentialRecord, CredentialStore};
pub use manager::AuthManager;
pub use session::{SessionState, SessionStore};
