// libntag/src/protocol/commands/fast_read.rs
//! FAST_READ (0x3A) over a page range.

use std::time::Duration;

use super::{Command, Decoded};
use crate::constants::{CMD_FAST_READ, FAST_READ_TIMEOUT_MS};
use crate::error::{BuildError, ParseError};
use crate::protocol::responses::{decode_fast_read, expected_fast_read_len};
use crate::variant::IcType;

/// Check `start <= end <= max_page`.
pub fn validate_page_range(start: u8, end: u8, max_page: u8) -> Result<(), BuildError> {
    if start > end || end > max_page {
        return Err(BuildError::InvalidPageRange {
            start,
            end,
            max_page,
        });
    }
    Ok(())
}

/// Encode FAST_READ command (command code 0x3A)
/// Layout: command_code(1) + start_page(1) + end_page(1)
pub fn encode_fast_read(start: u8, end: u8) -> Vec<u8> {
    vec![CMD_FAST_READ, start, end]
}

/// Whether a request has been built, and the response length it implies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FastReadState {
    /// No successful build yet
    #[default]
    Unbuilt,
    /// Last successful build
    Built {
        /// Response length implied by the built range
        expected_len: usize,
    },
}

/// FAST_READ over an arbitrary page range.
///
/// The response length depends on the range passed to `build`, so the
/// command remembers it until the matching `parse`. Use one instance per
/// in-flight request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastReadCommand {
    ic_type: IcType,
    state: FastReadState,
}

impl FastReadCommand {
    /// Unbuilt command for the given variant.
    pub fn new(ic_type: IcType) -> Self {
        Self {
            ic_type,
            state: FastReadState::Unbuilt,
        }
    }

    /// Variant this command reads from
    pub fn ic_type(&self) -> IcType {
        self.ic_type
    }

    /// Current build state
    pub fn state(&self) -> FastReadState {
        self.state
    }

    /// Build a request for pages `start..=end`. A rejected range leaves the
    /// state of any earlier build untouched.
    pub fn build(&mut self, start: u8, end: u8) -> Result<Vec<u8>, BuildError> {
        validate_page_range(start, end, self.ic_type.max_page())?;

        let expected_len = expected_fast_read_len(start, end);
        self.state = FastReadState::Built { expected_len };
        log::debug!(
            "FAST_READ request: {} pages {:#04x}..={:#04x} ({} bytes)",
            self.ic_type,
            start,
            end,
            expected_len
        );
        Ok(encode_fast_read(start, end))
    }

    /// Check the response against the last successful build.
    pub fn parse(&self, response: &[u8]) -> Result<Decoded<Vec<u8>>, ParseError> {
        let FastReadState::Built { expected_len } = self.state else {
            return Err(ParseError::BuildNotCalled {
                raw: response.to_vec(),
            });
        };
        log::trace!(
            "FAST_READ response: {}",
            crate::utils::bytes_to_hex_spaced(response)
        );
        let pages = decode_fast_read(response, expected_len)?;
        Ok(Decoded::new(pages, response))
    }
}

impl Command for FastReadCommand {
    type Args<'a> = (u8, u8);
    type Output = Vec<u8>;

    fn timeout(&self) -> Duration {
        crate::utils::ms(FAST_READ_TIMEOUT_MS)
    }

    fn build(&mut self, (start, end): (u8, u8)) -> Result<Vec<u8>, BuildError> {
        FastReadCommand::build(self, start, end)
    }

    fn parse(&self, response: &[u8]) -> Result<Decoded<Vec<u8>>, ParseError> {
        FastReadCommand::parse(self, response)
    }
}
