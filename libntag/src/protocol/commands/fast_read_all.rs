// libntag/src/protocol/commands/fast_read_all.rs
//! Full memory dump via FAST_READ.

use std::time::Duration;

use super::fast_read::{encode_fast_read, validate_page_range};
use super::{Command, Decoded};
use crate::constants::FAST_READ_TIMEOUT_MS;
use crate::error::{BuildError, ParseError};
use crate::protocol::responses::{TagMemory, decode_fast_read_all};
use crate::variant::IcType;

/// FAST_READ over the whole address space (`0x00..=max_page`), decoded into
/// a [`TagMemory`] with the serial number check bytes verified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FastReadAllCommand {
    ic_type: IcType,
}

impl FastReadAllCommand {
    const START_PAGE: u8 = 0x00;

    /// Dump command for the given variant.
    pub fn new(ic_type: IcType) -> Self {
        Self { ic_type }
    }

    /// Variant this command dumps
    pub fn ic_type(&self) -> IcType {
        self.ic_type
    }

    /// Length of a valid response in bytes.
    pub fn expected_response_len(&self) -> usize {
        self.ic_type.memory_byte_size()
    }

    /// Request for pages `0x00..=max_page`.
    pub fn build(&self) -> Result<Vec<u8>, BuildError> {
        let end = self.ic_type.max_page();
        validate_page_range(Self::START_PAGE, end, end)?;
        log::debug!(
            "FAST_READ (all) request: {} pages {:#04x}..={:#04x}",
            self.ic_type,
            Self::START_PAGE,
            end
        );
        Ok(encode_fast_read(Self::START_PAGE, end))
    }

    /// Split the dump and verify the serial number check bytes.
    pub fn parse(&self, response: &[u8]) -> Result<Decoded<TagMemory>, ParseError> {
        log::trace!(
            "FAST_READ (all) response: {}",
            crate::utils::bytes_to_hex_spaced(response)
        );
        let memory = decode_fast_read_all(self.ic_type, response).inspect_err(|e| {
            log::debug!("{} memory dump rejected: {}", self.ic_type, e);
        })?;
        log::debug!(
            "{} memory dump: serial number {}",
            self.ic_type,
            memory.serial_number.to_hex()
        );
        Ok(Decoded::new(memory, response))
    }
}

impl Command for FastReadAllCommand {
    type Args<'a> = ();
    type Output = TagMemory;

    fn timeout(&self) -> Duration {
        crate::utils::ms(FAST_READ_TIMEOUT_MS)
    }

    fn build(&mut self, _args: ()) -> Result<Vec<u8>, BuildError> {
        FastReadAllCommand::build(self)
    }

    fn parse(&self, response: &[u8]) -> Result<Decoded<TagMemory>, ParseError> {
        FastReadAllCommand::parse(self, response)
    }
}
