//! YAML deck files.
//!
//! A deck file carries everything a build needs:
//!
//! ```yaml
//! metadata:
//!   title: OPD-EMR
//! palette:
//!   primary: "#1E40AF"
//! slides:
//!   - title: OPD-EMR
//!     layout_kind: TITLE
//!     title_style: { color: primary, size_pt: 44, bold: true }
//!   - title: Summary
//!     layout_kind: TITLE_AND_BODY
//!     body_text: |-
//!       Point A
//!       Point B
//! ```
//!
//! `palette` defaults to [`StylePalette::healthcare`] and `metadata` to empty.

use super::palette::StylePalette;
use super::types::{DeckMetadata, SlideSpec};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read deck file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid deck file {origin}: {message}")]
    Parse { origin: String, message: String },
}

/// Parsed deck file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeckFile {
    #[serde(default)]
    pub metadata: DeckMetadata,
    #[serde(default)]
    pub palette: StylePalette,
    pub slides: Vec<SlideSpec>,
}

impl DeckFile {
    /// Load a deck file from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&source, &path.display().to_string())
    }

    /// Parse deck YAML. `origin` names the source in error messages.
    pub fn parse(yaml: &str, origin: &str) -> Result<Self, ConfigError> {
        serde_saphyr::from_str(yaml).map_err(|e| ConfigError::Parse {
            origin: origin.to_string(),
            message: e.to_string(),
        })
    }
}
