//! Failure kinds surfaced by the fetcher and the report updater.
//!
//! Callers work with `anyhow::Result` and downcast to [`TrackerError`] when
//! a failure needs its own handling (malformed input, a report without the
//! latest-updates section).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("fetch error: {0}")]
    FetchError(String),

    #[error("invalid entry: {0}")]
    EntryError(String),

    #[error("report structure error: {0}")]
    StructureError(String),

    #[error("config error: {0}")]
    ConfigError(String),

    #[error("io error")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = anyhow::Result<T>;
