//! Big-endian encode/decode shared by every integer width.
//!
//! Byte `k` of an `N`-byte field holds bits `(N-1-k)*8 ..= (N-1-k)*8+7`,
//! most significant byte first. Callers pass a slice that is exactly the
//! field; widths above 8 bytes are not supported.

/// Decode a big-endian field into the low bits of a `u64`.
///
/// Signed readers truncate and cast the result; the bit pattern is the same.
#[inline(always)]
pub(crate) fn decode_be(src: &[u8]) -> u64 {
    debug_assert!(src.len() <= 8);
    src.iter().fold(0u64, |acc, &byte| (acc << 8) | (byte as u64 & 0xFF))
}

/// Encode the low `dst.len()` bytes of `value` big-endian into `dst`.
#[inline(always)]
pub(crate) fn encode_be(dst: &mut [u8], value: u64) {
    debug_assert!(dst.len() <= 8);
    let width = dst.len();
    for (k, slot) in dst.iter_mut().enumerate() {
        *slot = ((value >> ((width - 1 - k) * 8)) & 0xFF) as u8;
    }
}
