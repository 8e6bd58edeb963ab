//! Configuration module for H.E.A.L. Journal
//!
//! This module provides configuration management including:
//! - Platform path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::JournalPaths;
pub use settings::Settings;
