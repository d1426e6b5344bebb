// libntag/src/protocol/checksum.rs
//! Serial number check bytes (BCC0/BCC1).

use crate::constants::{CASCADE_TAG, SERIAL_WITH_BCC_LEN};
use crate::error::ParseError;
use crate::protocol::parser;
use crate::types::{CheckByte, SerialNumber};

/// Compute BCC0 for the first cascade level
/// BCC0 = CT ^ SN0 ^ SN1 ^ SN2
pub fn bcc0(sn: &[u8; 3]) -> u8 {
    sn.iter().fold(CASCADE_TAG, |acc, &b| acc ^ b)
}

/// Compute BCC1 for the second cascade level
/// BCC1 = SN3 ^ SN4 ^ SN5 ^ SN6
pub fn bcc1(sn: &[u8; 4]) -> u8 {
    sn.iter().fold(0u8, |acc, &b| acc ^ b)
}

/// Verify the 9-byte serial number block stored on pages 0..2 and strip its
/// check bytes.
/// Layout: SN0 SN1 SN2 BCC0 SN3 SN4 SN5 SN6 BCC1
pub fn verify_serial_number(block: &[u8]) -> Result<SerialNumber, ParseError> {
    parser::ensure_exact_len(block, SERIAL_WITH_BCC_LEN)?;
    let [sn0, sn1, sn2, actual_bcc0, sn3, sn4, sn5, sn6, actual_bcc1] =
        parser::array_at::<SERIAL_WITH_BCC_LEN>(block, 0)?;

    let expected = bcc0(&[sn0, sn1, sn2]);
    if actual_bcc0 != expected {
        return Err(ParseError::ChecksumMismatch {
            check_byte: CheckByte::Bcc0,
            expected,
            actual: actual_bcc0,
            raw: block.to_vec(),
        });
    }

    let expected = bcc1(&[sn3, sn4, sn5, sn6]);
    if actual_bcc1 != expected {
        return Err(ParseError::ChecksumMismatch {
            check_byte: CheckByte::Bcc1,
            expected,
            actual: actual_bcc1,
            raw: block.to_vec(),
        });
    }

    Ok(SerialNumber::from_bytes([sn0, sn1, sn2, sn3, sn4, sn5, sn6]))
}
