//! ZIP archive writer for Office Open XML packages.
//!
//! Office documents (.docx, .xlsx, .pptx) are plain ZIP archives whose entries
//! are either stored or Deflate-compressed. This crate writes exactly that
//! subset: no ZIP64, no encryption, no data descriptors.
//!
//! # Quick Start
//!
//! ```rust
//! use soapberry_zip::office::StreamingArchiveWriter;
//!
//! let mut writer = StreamingArchiveWriter::new();
//! writer.write_stored("mimetype", b"application/test")?;
//! writer.write_deflated("content.xml", b"<root/>")?;
//! let bytes = writer.finish_to_bytes()?;
//! assert_eq!(&bytes[..4], b"PK\x03\x04");
//! # Ok::<(), soapberry_zip::Error>(())
//! ```
#![forbid(unsafe_code)]

mod crc;
mod errors;
mod headers;
pub mod office;

pub use crc::crc32;
pub use errors::{Error, Result};
pub use headers::CompressionMethod;
