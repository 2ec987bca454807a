//! All error types for the xcresgen crate.
//!
//! These are returned from all fallible operations (registration, JSON item
//! parsing, artifact emission).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("no items given for section `{0}`")]
    MissingItems(String),

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no output path set")]
    MissingOutputPath,
}
