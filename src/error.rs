//! Errors raised at the I/O edges. The engine and the traversal themselves cannot fail.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum HumanizeError {
    #[error("cannot read config {}: {source}", .path.display())]
    ReadConfig {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config JSON in {}: {source}", .path.display())]
    ParseConfig {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid config JSON: {0}")]
    InvalidConfig(serde_json::Error),

    #[error("cannot read input: {0}")]
    ReadInput(#[source] std::io::Error),

    #[error("invalid JSON input: {0}")]
    ParseInput(#[source] serde_json::Error),

    #[error("cannot write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
