//! High-level ZIP writer used for Office document packages.
//!
//! ```rust
//! use soapberry_zip::office::StreamingArchiveWriter;
//!
//! let mut writer = StreamingArchiveWriter::new();
//! writer.write_deflated("[Content_Types].xml", b"<Types/>")?;
//! let bytes = writer.finish_to_bytes()?;
//! # Ok::<(), soapberry_zip::Error>(())
//! ```

use crate::headers::{end_of_central_directory, CompressionMethod, EntryRecord};
use crate::{crc32, Error, Result};
use flate2::write::DeflateEncoder;
use flate2::Compression;
use std::collections::HashSet;
use std::io::Write;

/// Streaming ZIP archive writer.
///
/// Each entry is compressed in memory, then its local header and data are
/// written in one go; the central directory is emitted by [`finish`].
///
/// [`finish`]: StreamingArchiveWriter::finish
pub struct StreamingArchiveWriter<W: Write> {
    writer: W,
    offset: u64,
    entries: Vec<EntryRecord>,
    names: HashSet<String>,
}

impl StreamingArchiveWriter<std::io::Cursor<Vec<u8>>> {
    /// Create a new streaming archive writer that writes to memory.
    pub fn new() -> Self {
        Self::with_writer(std::io::Cursor::new(Vec::new()))
    }

    /// Finish writing and return the ZIP archive bytes.
    pub fn finish_to_bytes(self) -> Result<Vec<u8>> {
        let cursor = self.finish()?;
        Ok(cursor.into_inner())
    }
}

impl<W: Write> StreamingArchiveWriter<W> {
    /// Create a new streaming archive writer with a custom writer.
    pub fn with_writer(writer: W) -> Self {
        Self {
            writer,
            offset: 0,
            entries: Vec::new(),
            names: HashSet::new(),
        }
    }

    /// Number of entries written so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write a file without compression (stored).
    pub fn write_stored(&mut self, name: &str, data: &[u8]) -> Result<()> {
        self.write_entry(name, data, data.to_vec(), CompressionMethod::Stored)
    }

    /// Write a file with Deflate compression.
    pub fn write_deflated(&mut self, name: &str, data: &[u8]) -> Result<()> {
        let mut encoder = DeflateEncoder::new(Vec::with_capacity(data.len() / 2), Compression::default());
        encoder.write_all(data)?;
        let compressed = encoder.finish()?;
        self.write_entry(name, data, compressed, CompressionMethod::Deflate)
    }

    fn write_entry(
        &mut self,
        name: &str,
        data: &[u8],
        payload: Vec<u8>,
        method: CompressionMethod,
    ) -> Result<()> {
        validate_name(name)?;
        if self.names.contains(name) {
            return Err(Error::DuplicateEntry(name.to_string()));
        }
        if self.entries.len() >= u16::MAX as usize {
            return Err(Error::LimitExceeded("too many entries"));
        }

        let record = EntryRecord {
            name: name.to_string(),
            method,
            crc32: crc32(data),
            compressed_size: to_u32(payload.len() as u64, "entry too large")?,
            uncompressed_size: to_u32(data.len() as u64, "entry too large")?,
            local_header_offset: to_u32(self.offset, "archive too large")?,
        };

        let header = record.local_header();
        self.writer.write_all(&header)?;
        self.writer.write_all(&payload)?;
        self.offset += (header.len() + payload.len()) as u64;

        self.names.insert(record.name.clone());
        self.entries.push(record);
        Ok(())
    }

    /// Write the central directory and return the underlying writer.
    pub fn finish(mut self) -> Result<W> {
        let cd_offset = to_u32(self.offset, "archive too large")?;
        let mut cd_size: u64 = 0;
        for entry in &self.entries {
            let header = entry.central_header();
            self.writer.write_all(&header)?;
            cd_size += header.len() as u64;
        }
        let eocd = end_of_central_directory(
            self.entries.len() as u16,
            to_u32(cd_size, "central directory too large")?,
            cd_offset,
        );
        self.writer.write_all(&eocd)?;
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl Default for StreamingArchiveWriter<std::io::Cursor<Vec<u8>>> {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_name(name: &str) -> Result<()> {
    let invalid = name.is_empty()
        || name.starts_with('/')
        || name.contains('\\')
        || name.len() > u16::MAX as usize;
    if invalid {
        return Err(Error::InvalidName(name.to_string()));
    }
    Ok(())
}

fn to_u32(value: u64, what: &'static str) -> Result<u32> {
    u32::try_from(value).map_err(|_| Error::LimitExceeded(what))
}
