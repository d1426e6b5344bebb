// libntag/src/constants.rs
//! Common protocol constants used across the crate

/// Size of a single tag page in bytes
pub const PAGE_SIZE: usize = 4;

/// GET_VERSION command code
pub const CMD_GET_VERSION: u8 = 0x60;

/// FAST_READ command code (start page, end page)
pub const CMD_FAST_READ: u8 = 0x3A;

/// WRITE command code (page, 4 bytes of data)
pub const CMD_WRITE: u8 = 0xA2;

/// GET_VERSION always answers with 8 bytes
pub const VERSION_RESPONSE_LEN: usize = 8;

/// Pages below this index hold manufacturer data and are not writable
pub const MIN_WRITABLE_PAGE: u8 = 0x02;

/// First page of user memory on every NTAG21x variant
pub const USER_MEMORY_START_PAGE: u8 = 0x04;

/// Cascade tag folded into BCC0 (ISO/IEC 14443-3)
pub const CASCADE_TAG: u8 = 0x88;

/// Serial number bytes including both check bytes (pages 0..2)
pub const SERIAL_WITH_BCC_LEN: usize = 9;

/// Serial number length once check bytes are stripped
pub const SERIAL_NUMBER_LEN: usize = 7;

/// Configuration pages at the end of memory
pub const CONFIG_PAGE_COUNT: usize = 4;

/// Meaningful configuration bytes (last byte of the last page is RFUI)
pub const CONFIG_LEN: usize = 15;

/// Nominal GET_VERSION response timeout handed to the transport
pub const GET_VERSION_TIMEOUT_MS: u64 = 5;

/// Nominal FAST_READ response timeout (also used for full dumps)
pub const FAST_READ_TIMEOUT_MS: u64 = 5;

/// Nominal WRITE acknowledgement timeout
pub const WRITE_TIMEOUT_MS: u64 = 10;
