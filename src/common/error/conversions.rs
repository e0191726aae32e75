//! Error conversion implementations.
//!
//! Everything below the builder collapses into [`Error::Build`]; only the
//! builder itself raises [`Error::DependencyMissing`].

use super::types::Error;

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Build(format!("IO error: {err}"))
    }
}

#[cfg(feature = "ooxml")]
impl From<crate::ooxml::OoxmlError> for Error {
    fn from(err: crate::ooxml::OoxmlError) -> Self {
        Error::Build(err.to_string())
    }
}

#[cfg(feature = "ooxml")]
impl From<crate::ooxml::opc::error::OpcError> for Error {
    fn from(err: crate::ooxml::opc::error::OpcError) -> Self {
        Error::Build(err.to_string())
    }
}

impl From<crate::presentation::config::ConfigError> for Error {
    fn from(err: crate::presentation::config::ConfigError) -> Self {
        Error::Build(err.to_string())
    }
}
