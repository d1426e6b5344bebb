// libntag/src/prelude.rs
//! Commonly used items: `use libntag::prelude::*;`

pub use crate::protocol::{
    Command, Decoded, FastReadAllCommand, FastReadCommand, GetVersionCommand, TagMemory,
    VersionInfo, WriteCommand,
};
pub use crate::variant::{IcBounds, IcType};
pub use crate::{BuildError, Error, LockBytes, PageData, ParseError, Result, SerialNumber};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, ms};
