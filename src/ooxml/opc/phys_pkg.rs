//! Physical package writer: maps part names onto ZIP members.
//!
//! Uses the workspace's soapberry-zip writer.

use crate::ooxml::opc::error::Result;
use crate::ooxml::opc::packuri::PackURI;
use soapberry_zip::office::StreamingArchiveWriter;

/// Writes parts into an in-memory ZIP archive.
pub struct PhysPkgWriter {
    archive: StreamingArchiveWriter<std::io::Cursor<Vec<u8>>>,
}

impl PhysPkgWriter {
    pub fn new() -> Self {
        Self {
            archive: StreamingArchiveWriter::new(),
        }
    }

    /// Write a part with Deflate compression.
    pub fn write(&mut self, pack_uri: &PackURI, blob: &[u8]) -> Result<()> {
        self.archive.write_deflated(pack_uri.membername(), blob)?;
        Ok(())
    }

    /// Finish the archive and return its bytes.
    pub fn finish(self) -> Result<Vec<u8>> {
        Ok(self.archive.finish_to_bytes()?)
    }
}

impl Default for PhysPkgWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::error::OpcError;

    #[test]
    fn test_writes_member_without_leading_slash() {
        let mut writer = PhysPkgWriter::new();
        writer
            .write(&PackURI::new("/ppt/presentation.xml").unwrap(), b"<p:presentation/>")
            .unwrap();
        writer
            .write(&PackURI::new("/docProps/app.xml").unwrap(), b"<Properties/>")
            .unwrap();

        let bytes = writer.finish().unwrap();
        assert_eq!(&bytes[..4], b"PK\x03\x04");
        let name_len = u16::from_le_bytes([bytes[26], bytes[27]]) as usize;
        assert_eq!(&bytes[30..30 + name_len], b"ppt/presentation.xml");
    }

    #[test]
    fn test_duplicate_member_is_zip_error() {
        let mut writer = PhysPkgWriter::new();
        let uri = PackURI::new("/ppt/presProps.xml").unwrap();
        writer.write(&uri, b"<a/>").unwrap();
        assert!(matches!(writer.write(&uri, b"<a/>"), Err(OpcError::ZipError(_))));
    }
}
