// libntag/src/protocol/mod.rs
//! NTAG21x command set: request encoders, response decoders and the
//! helpers they share.

pub mod checksum;
pub mod commands;
pub mod memory_map;
pub mod parser;
pub mod responses;

pub use checksum::{bcc0, bcc1, verify_serial_number};
pub use commands::{
    Command, Decoded, FastReadAllCommand, FastReadCommand, FastReadState, GetVersionCommand,
    WriteCommand,
};
pub use memory_map::{MemoryLayout, MemoryMap};
pub use responses::{
    MinorVersion, ProductSubtype, ProductType, ProtocolType, TagMemory, Vendor, VersionInfo,
};
