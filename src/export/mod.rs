//! Export module for H.E.A.L. Journal
//!
//! - JSON: the backup format, importable again
//! - Print: plain-text journal for printing
//! - YAML: human-readable copy of the backup
//! - CSV: victories, spreadsheet-compatible

pub mod csv;
pub mod json;
pub mod print;
pub mod yaml;

pub use self::csv::export_victories_csv;
pub use json::{backup_file_name, export_json, import_json};
pub use print::{export_printable, print_file_name, render_printable};
pub use yaml::export_yaml;
