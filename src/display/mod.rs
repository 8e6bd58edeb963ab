//! Display formatting for terminal output
//!
//! Plain-text tables and detail views for entries, victories and the
//! personal lists.

pub mod entry;
pub mod lists;

pub use entry::{format_entry_details, format_entry_list, format_victory_list, truncate};
pub use lists::{format_action_list, format_manifestation_list};
