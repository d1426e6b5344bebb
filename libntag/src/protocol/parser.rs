// libntag/src/protocol/parser.rs
//! Bounds-checked slicing helpers for response decoding.

use crate::constants::PAGE_SIZE;
use crate::error::ParseError;

/// Ensure the slice has exactly `len` bytes.
pub fn ensure_exact_len(data: &[u8], len: usize) -> Result<(), ParseError> {
    if data.len() != len {
        return Err(ParseError::InvalidLength {
            expected: len,
            actual: data.len(),
            raw: data.to_vec(),
        });
    }
    Ok(())
}

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<(), ParseError> {
    if data.len() < min {
        return Err(ParseError::InvalidLength {
            expected: min,
            actual: data.len(),
            raw: data.to_vec(),
        });
    }
    Ok(())
}

/// Return a subslice with bounds checking.
pub fn slice_at(data: &[u8], idx: usize, len: usize) -> Result<&[u8], ParseError> {
    ensure_len(data, idx + len)?;
    Ok(&data[idx..idx + len])
}

/// Copy `N` bytes starting at `idx` into a fixed array.
pub fn array_at<const N: usize>(data: &[u8], idx: usize) -> Result<[u8; N], ParseError> {
    let s = slice_at(data, idx, N)?;
    let mut arr = [0u8; N];
    arr.copy_from_slice(s);
    Ok(arr)
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8, ParseError> {
    ensure_len(data, idx + 1)?;
    Ok(data[idx])
}

/// Byte offset of `page` within a dump that starts at page 0.
pub fn page_offset(page: u8) -> usize {
    page as usize * PAGE_SIZE
}

/// Return pages `first..=last` of a dump that starts at page 0.
pub fn pages_at(data: &[u8], first: u8, last: u8) -> Result<&[u8], ParseError> {
    let count = (last as usize + 1).saturating_sub(first as usize);
    slice_at(data, page_offset(first), count * PAGE_SIZE)
}
