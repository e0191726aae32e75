//! Binary layout of the ZIP records this crate emits.
//!
//! All multi-byte fields are little-endian (APPNOTE.TXT 4.3).

pub(crate) const LOCAL_FILE_HEADER_SIG: u32 = 0x0403_4b50;
pub(crate) const CENTRAL_DIRECTORY_SIG: u32 = 0x0201_4b50;
pub(crate) const END_OF_CENTRAL_DIRECTORY_SIG: u32 = 0x0605_4b50;

/// Version 2.0: Deflate and folders.
const VERSION_NEEDED: u16 = 20;
/// General purpose bit 11: file name is UTF-8.
const FLAG_UTF8: u16 = 0x0800;
/// 1980-01-01 in MS-DOS date format; time is 00:00:00.
const DOS_EPOCH_DATE: u16 = (1 << 5) | 1;
const DOS_EPOCH_TIME: u16 = 0;

/// Compression method of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMethod {
    Stored,
    Deflate,
}

impl CompressionMethod {
    fn code(self) -> u16 {
        match self {
            CompressionMethod::Stored => 0,
            CompressionMethod::Deflate => 8,
        }
    }
}

/// Metadata of one written entry, kept until the central directory is emitted.
#[derive(Debug, Clone)]
pub(crate) struct EntryRecord {
    pub name: String,
    pub method: CompressionMethod,
    pub crc32: u32,
    pub compressed_size: u32,
    pub uncompressed_size: u32,
    pub local_header_offset: u32,
}

impl EntryRecord {
    fn flags(&self) -> u16 {
        if self.name.is_ascii() { 0 } else { FLAG_UTF8 }
    }

    /// Serialize the local file header that precedes the entry data.
    pub fn local_header(&self) -> Vec<u8> {
        let name = self.name.as_bytes();
        let mut buf = Vec::with_capacity(30 + name.len());
        put_u32(&mut buf, LOCAL_FILE_HEADER_SIG);
        put_u16(&mut buf, VERSION_NEEDED);
        put_u16(&mut buf, self.flags());
        put_u16(&mut buf, self.method.code());
        put_u16(&mut buf, DOS_EPOCH_TIME);
        put_u16(&mut buf, DOS_EPOCH_DATE);
        put_u32(&mut buf, self.crc32);
        put_u32(&mut buf, self.compressed_size);
        put_u32(&mut buf, self.uncompressed_size);
        put_u16(&mut buf, name.len() as u16);
        put_u16(&mut buf, 0); // extra field length
        buf.extend_from_slice(name);
        buf
    }

    /// Serialize this entry's central directory file header.
    pub fn central_header(&self) -> Vec<u8> {
        let name = self.name.as_bytes();
        let mut buf = Vec::with_capacity(46 + name.len());
        put_u32(&mut buf, CENTRAL_DIRECTORY_SIG);
        put_u16(&mut buf, VERSION_NEEDED); // version made by
        put_u16(&mut buf, VERSION_NEEDED);
        put_u16(&mut buf, self.flags());
        put_u16(&mut buf, self.method.code());
        put_u16(&mut buf, DOS_EPOCH_TIME);
        put_u16(&mut buf, DOS_EPOCH_DATE);
        put_u32(&mut buf, self.crc32);
        put_u32(&mut buf, self.compressed_size);
        put_u32(&mut buf, self.uncompressed_size);
        put_u16(&mut buf, name.len() as u16);
        put_u16(&mut buf, 0); // extra field length
        put_u16(&mut buf, 0); // comment length
        put_u16(&mut buf, 0); // disk number start
        put_u16(&mut buf, 0); // internal attributes
        put_u32(&mut buf, 0); // external attributes
        put_u32(&mut buf, self.local_header_offset);
        buf.extend_from_slice(name);
        buf
    }
}

/// Serialize the end of central directory record.
pub(crate) fn end_of_central_directory(entries: u16, cd_size: u32, cd_offset: u32) -> Vec<u8> {
    let mut buf = Vec::with_capacity(22);
    put_u32(&mut buf, END_OF_CENTRAL_DIRECTORY_SIG);
    put_u16(&mut buf, 0); // this disk
    put_u16(&mut buf, 0); // disk with central directory
    put_u16(&mut buf, entries);
    put_u16(&mut buf, entries);
    put_u32(&mut buf, cd_size);
    put_u32(&mut buf, cd_offset);
    put_u16(&mut buf, 0); // comment length
    buf
}

#[inline]
fn put_u16(buf: &mut Vec<u8>, v: u16) {
    buf.extend_from_slice(&v.to_le_bytes());
}

#[inline]
fn put_u32(buf: &mut Vec<u8>, v: u32) {
    buf.extend_from_slice(&v.to_le_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> EntryRecord {
        EntryRecord {
            name: name.to_string(),
            method: CompressionMethod::Deflate,
            crc32: 0xDEAD_BEEF,
            compressed_size: 10,
            uncompressed_size: 20,
            local_header_offset: 99,
        }
    }

    #[test]
    fn test_local_header_layout() {
        let header = record("a.xml").local_header();
        assert_eq!(header.len(), 30 + 5);
        assert_eq!(&header[0..4], b"PK\x03\x04");
        assert_eq!(u16::from_le_bytes([header[8], header[9]]), 8);
        assert_eq!(u32::from_le_bytes([header[14], header[15], header[16], header[17]]), 0xDEAD_BEEF);
        assert_eq!(&header[30..], b"a.xml");
    }

    #[test]
    fn test_central_header_offset() {
        let header = record("a.xml").central_header();
        assert_eq!(&header[0..4], b"PK\x01\x02");
        assert_eq!(u32::from_le_bytes([header[42], header[43], header[44], header[45]]), 99);
    }

    #[test]
    fn test_utf8_flag_only_for_non_ascii_names() {
        assert_eq!(record("plain.xml").flags(), 0);
        assert_eq!(record("café.xml").flags(), FLAG_UTF8);
    }

    #[test]
    fn test_eocd() {
        let eocd = end_of_central_directory(3, 120, 400);
        assert_eq!(eocd.len(), 22);
        assert_eq!(&eocd[0..4], b"PK\x05\x06");
        assert_eq!(u16::from_le_bytes([eocd[10], eocd[11]]), 3);
        assert_eq!(u32::from_le_bytes([eocd[16], eocd[17], eocd[18], eocd[19]]), 400);
    }
}
