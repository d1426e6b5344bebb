// libntag/src/protocol/responses/mod.rs
//! Response decoders, independent of command state.

pub mod fast_read;
pub mod fast_read_all;
pub mod version;

pub use fast_read::{decode_fast_read, expected_fast_read_len};
pub use fast_read_all::{TagMemory, decode_fast_read_all};
pub use version::{
    MinorVersion, ProductSubtype, ProductType, ProtocolType, Vendor, VersionInfo, decode_version,
};
