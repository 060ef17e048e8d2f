use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to open '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to map '{path}': {source}")]
    Map {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: expected two ';'-separated fields, found no delimiter")]
    MissingDelimiter { line: u64 },

    #[error("line {line}: expected two ';'-separated fields, found more")]
    ExtraDelimiter { line: u64 },

    #[error("line {line}: empty key field")]
    EmptyKey { line: u64 },

    #[error("line {line}: invalid measurement '{text}'")]
    BadMeasurement { line: u64, text: String },
}

pub type Result<T> = std::result::Result<T, Error>;
