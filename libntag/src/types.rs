// libntag/src/types.rs
//! Newtypes shared by requests and responses.

use std::convert::TryFrom;

use derive_more::Display;

use crate::constants::{PAGE_SIZE, SERIAL_NUMBER_LEN, SERIAL_WITH_BCC_LEN};
use crate::error::{BuildError, ParseError};

/// 7-byte factory serial number (UID) with check bytes stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SerialNumber([u8; SERIAL_NUMBER_LEN]);

impl SerialNumber {
    /// Wrap raw serial number bytes (no check bytes).
    pub fn from_bytes(bytes: [u8; SERIAL_NUMBER_LEN]) -> Self {
        Self(bytes)
    }

    /// Serial number bytes `SN0..SN6`
    pub fn as_bytes(&self) -> &[u8; SERIAL_NUMBER_LEN] {
        &self.0
    }

    /// Lowercase hex, e.g. `04123456789abc`
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }

    /// BCC0 = SN0 ^ SN1 ^ SN2 ^ CT
    pub fn bcc0(&self) -> u8 {
        crate::protocol::checksum::bcc0(&[self.0[0], self.0[1], self.0[2]])
    }

    /// BCC1 = SN3 ^ SN4 ^ SN5 ^ SN6
    pub fn bcc1(&self) -> u8 {
        crate::protocol::checksum::bcc1(&[self.0[3], self.0[4], self.0[5], self.0[6]])
    }

    /// Serial number laid out as stored on pages 0..2.
    pub fn with_check_bytes(&self) -> [u8; SERIAL_WITH_BCC_LEN] {
        let sn = &self.0;
        [
            sn[0],
            sn[1],
            sn[2],
            self.bcc0(),
            sn[3],
            sn[4],
            sn[5],
            sn[6],
            self.bcc1(),
        ]
    }
}

impl TryFrom<&[u8]> for SerialNumber {
    type Error = ParseError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; SERIAL_NUMBER_LEN] =
            bytes.try_into().map_err(|_| ParseError::InvalidLength {
                expected: SERIAL_NUMBER_LEN,
                actual: bytes.len(),
                raw: bytes.to_vec(),
            })?;
        Ok(Self(arr))
    }
}

/// Data for a single page write (4 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageData([u8; PAGE_SIZE]);

impl PageData {
    /// Wrap one page of data.
    pub fn from_bytes(bytes: [u8; PAGE_SIZE]) -> Self {
        Self(bytes)
    }

    /// Page bytes
    pub fn as_bytes(&self) -> &[u8; PAGE_SIZE] {
        &self.0
    }
}

impl TryFrom<&[u8]> for PageData {
    type Error = BuildError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; PAGE_SIZE] =
            bytes.try_into().map_err(|_| BuildError::InvalidDataLength {
                expected: PAGE_SIZE,
                actual: bytes.len(),
            })?;
        Ok(Self(arr))
    }
}

/// Which serial number check byte failed verification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum CheckByte {
    /// Check byte over the cascade tag and `SN0..SN2`
    #[display(fmt = "BCC0")]
    Bcc0,
    /// Check byte over `SN3..SN6`
    #[display(fmt = "BCC1")]
    Bcc1,
}

/// Lock bytes exposed as opaque ranges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LockBytes {
    /// Page 2, bytes 2..4
    pub static_bytes: [u8; 2],
    /// Page just before the configuration pages
    pub dynamic_bytes: [u8; 4],
}
