/// Compute the CRC32 (IEEE) of a byte slice.
///
/// Uses `crc32fast`, which picks a SIMD/PCLMULQDQ implementation when the CPU
/// supports it.
#[inline]
pub fn crc32(data: &[u8]) -> u32 {
    crc32fast::hash(data)
}
