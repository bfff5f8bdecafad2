use std::io;

use crate::config::types::Format;
use thiserror::Error;

// Errors raised before (or while) handing control to pg_dump / pg_restore.
#[derive(Debug, Error)]
pub enum Error {
    #[error("connection options are missing: {}", .0.join(", "))]
    MissingConnectionOptions(Vec<&'static str>),

    #[error("needs file_path in the options")]
    MissingFilePath,

    #[error("pg_restore does not read the {0} format")]
    UnsupportedRestoreFormat(Format),

    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
