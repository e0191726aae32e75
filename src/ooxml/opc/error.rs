/// Error types for OPC package operations
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OpcError {
    #[error("Invalid pack URI: {0}")]
    InvalidPackUri(String),

    #[error("Duplicate part: {0}")]
    DuplicatePart(String),

    #[error("Invalid relationship: {0}")]
    InvalidRelationship(String),

    #[error("ZIP error: {0}")]
    ZipError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<soapberry_zip::Error> for OpcError {
    fn from(err: soapberry_zip::Error) -> Self {
        match err {
            soapberry_zip::Error::Io(io) => OpcError::IoError(io),
            other => OpcError::ZipError(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, OpcError>;
