// libntag/src/error.rs
//! Error types for request building and response decoding.

use thiserror::Error;

use crate::types::CheckByte;

/// Raised while building a request, before any byte reaches the wire.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// Variant name outside the NTAG21x table
    #[error("unknown IC type: {0}")]
    UnknownVariant(String),

    /// FAST_READ range not within `start <= end <= max_page`
    #[error("invalid page range: start={start:#04x}, end={end:#04x}, max={max_page:#04x}")]
    InvalidPageRange {
        /// Requested first page
        start: u8,
        /// Requested last page
        end: u8,
        /// Last addressable page of the variant
        max_page: u8,
    },

    /// WRITE target outside the writable pages
    #[error("invalid page {page:#04x}: writable pages are {min_page:#04x}..={max_page:#04x}")]
    InvalidPage {
        /// Requested page
        page: u8,
        /// First writable page
        min_page: u8,
        /// Last writable page
        max_page: u8,
    },

    /// WRITE payload is not exactly one page
    #[error("invalid data length: expected {expected}, got {actual}")]
    InvalidDataLength {
        /// Required length in bytes
        expected: usize,
        /// Length supplied
        actual: usize,
    },
}

/// Raised while decoding a response. Every variant keeps the bytes that
/// failed to decode, see [`ParseError::raw`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Response length differs from what the request implies
    #[error("invalid response length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Length the request implies
        expected: usize,
        /// Length received
        actual: usize,
        /// Received bytes
        raw: Vec<u8>,
    },

    /// FAST_READ parse without a prior successful build
    #[error("response parsed before a request was built")]
    BuildNotCalled {
        /// Received bytes
        raw: Vec<u8>,
    },

    /// GET_VERSION vendor byte is not NXP
    #[error("unknown vendor id: {value:#04x}")]
    UnknownVendor {
        /// Offending byte
        value: u8,
    },

    /// GET_VERSION product type is not NTAG
    #[error("unknown product type: {value:#04x}")]
    UnknownProductType {
        /// Offending byte
        value: u8,
    },

    /// GET_VERSION product subtype is not 50 pF
    #[error("unknown product subtype: {value:#04x}")]
    UnknownProductSubtype {
        /// Offending byte
        value: u8,
    },

    /// GET_VERSION storage size matches no NTAG21x variant
    #[error("unknown storage size: {value:#04x}")]
    UnknownStorageSize {
        /// Offending byte
        value: u8,
    },

    /// GET_VERSION protocol is not ISO/IEC 14443-3A
    #[error("unknown protocol type: {value:#04x}")]
    UnknownProtocolType {
        /// Offending byte
        value: u8,
    },

    /// Serial number check byte does not match its computed value
    #[error("{check_byte} mismatch: expected {expected:#04x}, got {actual:#04x}")]
    ChecksumMismatch {
        /// Which check byte failed
        check_byte: CheckByte,
        /// Computed value
        expected: u8,
        /// Value read from the tag
        actual: u8,
        /// Serial number block as read (9 bytes)
        raw: Vec<u8>,
    },
}

impl ParseError {
    /// Bytes that failed to decode. Unknown-value errors report the single
    /// offending byte.
    pub fn raw(&self) -> &[u8] {
        match self {
            Self::InvalidLength { raw, .. }
            | Self::BuildNotCalled { raw }
            | Self::ChecksumMismatch { raw, .. } => raw,
            Self::UnknownVendor { value }
            | Self::UnknownProductType { value }
            | Self::UnknownProductSubtype { value }
            | Self::UnknownStorageSize { value }
            | Self::UnknownProtocolType { value } => std::slice::from_ref(value),
        }
    }
}

/// 共通エラー型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Request could not be built
    #[error("build error: {0}")]
    Build(#[from] BuildError),

    /// Response could not be decoded
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

impl Error {
    /// `true` for [`Error::Build`]
    pub fn is_build_error(&self) -> bool {
        matches!(self, Self::Build(_))
    }

    /// `true` for [`Error::Parse`]
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Parse(_))
    }

    /// Raw response bytes attached to a parse failure.
    pub fn raw(&self) -> Option<&[u8]> {
        match self {
            Self::Build(_) => None,
            Self::Parse(e) => Some(e.raw()),
        }
    }
}

/// Result alias over [`Error`]
pub type Result<T> = std::result::Result<T, Error>;
