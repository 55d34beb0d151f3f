//! Normalize text produced by language models to what a person on a standard keyboard would type.
//!
//! [`humanize_string`] cleans one string; [`humanize_json`] cleans every string (keys included)
//! inside a JSON value. Both return how many input characters were affected.

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod keyboard;
pub mod logger;
pub mod rules;
pub mod structure;

pub use config::HumanizeOptions;
pub use engine::{humanize_report, humanize_string, Humanized, Report};
pub use error::HumanizeError;
pub use structure::humanize_json;

use std::io::{self, Read};
use std::path::Path;

/// Reads all of `reader`, the way the binaries take stdin.
pub fn read_all<R: Read>(mut reader: R) -> Result<String, HumanizeError> {
    let mut buf = String::new();
    reader
        .read_to_string(&mut buf)
        .map_err(HumanizeError::ReadInput)?;
    Ok(buf)
}

/// Reads a JSON document from `path`, or from stdin when there is none.
pub fn read_json(path: Option<&Path>) -> Result<serde_json::Value, HumanizeError> {
    let text = match path {
        Some(p) => std::fs::read_to_string(p).map_err(HumanizeError::ReadInput)?,
        None => read_all(io::stdin().lock())?,
    };
    serde_json::from_str(&text).map_err(HumanizeError::ParseInput)
}

pub fn count_summary(count: usize) -> String {
    format!("Transformed {} characters.", count)
}
