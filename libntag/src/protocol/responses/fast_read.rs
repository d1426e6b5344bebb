// libntag/src/protocol/responses/fast_read.rs
//! FAST_READ page data.

use crate::constants::PAGE_SIZE;
use crate::error::ParseError;
use crate::protocol::parser;

/// Response length of `FAST_READ start..=end`.
pub fn expected_fast_read_len(start: u8, end: u8) -> usize {
    (end as usize + 1).saturating_sub(start as usize) * PAGE_SIZE
}

/// Decode a FAST_READ response. The page bytes are returned as-is; only the
/// length is validated.
pub fn decode_fast_read(data: &[u8], expected_len: usize) -> Result<Vec<u8>, ParseError> {
    parser::ensure_exact_len(data, expected_len)?;
    Ok(data.to_vec())
}
