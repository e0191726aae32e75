//! Crate-wide error type.
//!
//! A deck build fails in exactly one of two ways: the document-authoring
//! capability is missing, or something else went wrong while constructing or
//! saving the deck. Lower-layer errors are flattened into [`Error::Build`]
//! with their message preserved.
use thiserror::Error;

/// Main error type for deck operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The document-authoring capability is not compiled in
    #[error("{feature} support is not available. {remediation}")]
    DependencyMissing {
        /// Name of the missing capability
        feature: &'static str,
        /// Install instructions shown to the user verbatim
        remediation: &'static str,
    },

    /// Any other failure during slide construction or save
    #[error("{0}")]
    Build(String),
}

impl Error {
    /// Error raised when a build is attempted without the `ooxml` feature.
    pub const fn ooxml_missing() -> Self {
        Error::DependencyMissing {
            feature: "PowerPoint (ooxml)",
            remediation: "Rebuild with: cargo build --features ooxml",
        }
    }

    pub fn build(msg: impl Into<String>) -> Self {
        Error::Build(msg.into())
    }

    /// Process exit code for this failure kind.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::DependencyMissing { .. } => 2,
            Error::Build(_) => 1,
        }
    }
}

/// Result type for deck operations.
pub type Result<T> = std::result::Result<T, Error>;
