//! Rendering module for projecting output rows to external formats.

mod csv;
mod json;

pub use self::csv::{csv_filename, to_csv, write_csv_file};
pub use self::json::{to_json, JsonFormat};
