// libntag/src/lib.rs

//! libntag
//!
//! Pure Rust command codec for NXP NTAG213/215/216 tags (NFC Forum Type 2).
//!
//! Each command turns typed arguments into the exact bytes to put on the
//! wire and validates the bytes that come back. Sending them is left to the
//! caller's reader/transport.
//!
//! ```
//! use libntag::prelude::*;
//!
//! let mut read = FastReadCommand::new(IcType::Ntag213);
//! let request = read.build(0x04, 0x05)?;
//! assert_eq!(request, [0x3a, 0x04, 0x05]);
//!
//! // ... transmit `request`, receive 8 bytes ...
//! let response = [0u8; 8];
//! let pages = read.parse(&response)?;
//! assert_eq!(pages.parsed.len(), 8);
//! # Ok::<(), libntag::Error>(())
//! ```
#![warn(missing_docs)]

pub mod constants;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod types;
pub mod utils;
pub mod variant;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;
pub use crate::variant::{IcBounds, IcType};
