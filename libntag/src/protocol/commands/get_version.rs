// libntag/src/protocol/commands/get_version.rs
//! GET_VERSION (0x60).

use std::time::Duration;

use super::{Command, Decoded};
use crate::constants::{CMD_GET_VERSION, GET_VERSION_TIMEOUT_MS};
use crate::error::{BuildError, ParseError};
use crate::protocol::responses::{VersionInfo, decode_version};

/// Encode GET_VERSION command (command code 0x60)
/// Layout: command_code(1)
pub fn encode_get_version() -> Vec<u8> {
    vec![CMD_GET_VERSION]
}

/// GET_VERSION: identifies the chip and, through the storage size byte, its
/// variant. Usually the first command sent to an unknown tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetVersionCommand;

impl GetVersionCommand {
    /// Create the command.
    pub fn new() -> Self {
        Self
    }

    /// Single-byte request
    pub fn build(&self) -> Vec<u8> {
        log::debug!("GET_VERSION request");
        encode_get_version()
    }

    /// Decode the 8-byte answer, see [`decode_version`].
    pub fn parse(&self, response: &[u8]) -> Result<Decoded<VersionInfo>, ParseError> {
        log::trace!(
            "GET_VERSION response: {}",
            crate::utils::bytes_to_hex_spaced(response)
        );
        let info = decode_version(response).inspect_err(|e| {
            log::debug!("GET_VERSION response rejected: {}", e);
        })?;
        log::debug!(
            "GET_VERSION: {} {} {} ({} bytes)",
            info.vendor,
            info.ic_type,
            info.minor_product_version,
            info.storage_byte_size
        );
        Ok(Decoded::new(info, response))
    }
}

impl Command for GetVersionCommand {
    type Args<'a> = ();
    type Output = VersionInfo;

    fn timeout(&self) -> Duration {
        crate::utils::ms(GET_VERSION_TIMEOUT_MS)
    }

    fn build(&mut self, _args: ()) -> Result<Vec<u8>, BuildError> {
        Ok(GetVersionCommand::build(self))
    }

    fn parse(&self, response: &[u8]) -> Result<Decoded<VersionInfo>, ParseError> {
        GetVersionCommand::parse(self, response)
    }
}
