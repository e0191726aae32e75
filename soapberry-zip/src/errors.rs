use thiserror::Error;

/// Errors raised while writing an archive.
#[derive(Error, Debug)]
pub enum Error {
    /// Underlying writer failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An entry with the same name was already written
    #[error("duplicate entry name: {0}")]
    DuplicateEntry(String),

    /// Entry names must be non-empty relative paths using `/`
    #[error("invalid entry name: {0:?}")]
    InvalidName(String),

    /// Entry or archive exceeds the 4 GiB / 65535-entry limits of plain ZIP
    #[error("archive limit exceeded: {0}")]
    LimitExceeded(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
