// libntag/src/protocol/responses/fast_read_all.rs
//! Full memory dump decoding.

use crate::constants::{CONFIG_LEN, PAGE_SIZE};
use crate::error::ParseError;
use crate::protocol::checksum;
use crate::protocol::memory_map::MemoryMap;
use crate::types::{LockBytes, SerialNumber};
use crate::variant::IcType;

/// Decoded full memory dump
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TagMemory {
    /// Verified serial number, check bytes stripped
    pub serial_number: SerialNumber,
    /// Static and dynamic lock bytes
    pub lock: LockBytes,
    /// Capability container (page 3)
    pub capability_container: [u8; PAGE_SIZE],
    /// User memory, `storage_byte_size` bytes
    pub user_memory: Vec<u8>,
    /// Configuration pages without the trailing RFUI byte
    pub configuration: [u8; CONFIG_LEN],
}

impl TagMemory {
    /// Rebuild the full memory image this dump was decoded from.
    ///
    /// Check bytes are recomputed from the serial number, the internal byte
    /// is taken from the caller and the RFUI byte closing the configuration
    /// is written as `0x00`.
    pub fn to_image(&self, internal: u8) -> Vec<u8> {
        let sn = self.serial_number.with_check_bytes();
        let mut image = Vec::with_capacity(
            sn.len() + 3 + PAGE_SIZE * 3 + self.user_memory.len() + CONFIG_LEN + 1,
        );
        image.extend_from_slice(&sn);
        image.push(internal);
        image.extend_from_slice(&self.lock.static_bytes);
        image.extend_from_slice(&self.capability_container);
        image.extend_from_slice(&self.user_memory);
        image.extend_from_slice(&self.lock.dynamic_bytes);
        image.extend_from_slice(&self.configuration);
        image.push(0x00);
        image
    }
}

/// Decode a FAST_READ response covering pages `0x00..=max_page`.
pub fn decode_fast_read_all(ic: IcType, data: &[u8]) -> Result<TagMemory, ParseError> {
    let map = MemoryMap::split(ic, data)?;
    let serial_number = checksum::verify_serial_number(&map.serial_number_with_bcc)?;

    Ok(TagMemory {
        serial_number,
        lock: LockBytes {
            static_bytes: map.static_lock,
            dynamic_bytes: map.dynamic_lock,
        },
        capability_container: map.capability_container,
        user_memory: map.user_memory.to_vec(),
        configuration: map.configuration,
    })
}
