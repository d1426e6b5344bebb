// libntag/src/protocol/commands/write.rs
//! WRITE (0xA2).

use std::convert::TryFrom;
use std::time::Duration;

use super::{Command, Decoded};
use crate::constants::{CMD_WRITE, MIN_WRITABLE_PAGE, USER_MEMORY_START_PAGE, WRITE_TIMEOUT_MS};
use crate::error::{BuildError, ParseError};
use crate::types::PageData;
use crate::variant::IcType;

/// Check `MIN_WRITABLE_PAGE <= page <= max_page`.
pub fn validate_write_page(page: u8, max_page: u8) -> Result<(), BuildError> {
    if !(MIN_WRITABLE_PAGE..=max_page).contains(&page) {
        return Err(BuildError::InvalidPage {
            page,
            min_page: MIN_WRITABLE_PAGE,
            max_page,
        });
    }
    Ok(())
}

/// Encode WRITE command (command code 0xA2)
/// Layout: command_code(1) + page(1) + data(4)
pub fn encode_write(page: u8, data: PageData) -> Vec<u8> {
    let mut buf = Vec::with_capacity(2 + data.as_bytes().len());
    buf.push(CMD_WRITE);
    buf.push(page);
    buf.extend_from_slice(data.as_bytes());
    buf
}

/// WRITE of a single page.
///
/// Pages up to `max_page` are accepted, so the configuration pages after
/// user memory can be written too. The response is an ACK/NAK the transport
/// already interprets; `parse` only hands the bytes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteCommand {
    ic_type: IcType,
    user_memory_end_page: u8,
}

impl WriteCommand {
    /// Write command for the given variant.
    pub fn new(ic_type: IcType) -> Self {
        Self {
            ic_type,
            user_memory_end_page: ic_type.user_memory_end_page(),
        }
    }

    /// Variant this command targets
    pub fn ic_type(&self) -> IcType {
        self.ic_type
    }

    /// First page of user memory
    pub fn user_memory_start_page(&self) -> u8 {
        USER_MEMORY_START_PAGE
    }

    /// Last page of user memory (inclusive)
    pub fn user_memory_end_page(&self) -> u8 {
        self.user_memory_end_page
    }

    /// Request writing `data` (exactly 4 bytes) to `page`. The data length
    /// is checked before the page.
    pub fn build(&self, page: u8, data: &[u8]) -> Result<Vec<u8>, BuildError> {
        let data = PageData::try_from(data)?;
        validate_write_page(page, self.ic_type.max_page())?;
        log::debug!(
            "WRITE request: {} page {:#04x} <- {}",
            self.ic_type,
            page,
            crate::utils::bytes_to_hex_spaced(data.as_bytes())
        );
        Ok(encode_write(page, data))
    }

    /// Wrap the acknowledgement bytes; never fails.
    pub fn parse(&self, response: &[u8]) -> Decoded<()> {
        log::trace!(
            "WRITE response: {}",
            crate::utils::bytes_to_hex_spaced(response)
        );
        Decoded::new((), response)
    }
}

impl Command for WriteCommand {
    type Args<'a> = (u8, &'a [u8]);
    type Output = ();

    fn timeout(&self) -> Duration {
        crate::utils::ms(WRITE_TIMEOUT_MS)
    }

    fn build(&mut self, (page, data): Self::Args<'_>) -> Result<Vec<u8>, BuildError> {
        WriteCommand::build(self, page, data)
    }

    fn parse(&self, response: &[u8]) -> Result<Decoded<()>, ParseError> {
        Ok(WriteCommand::parse(self, response))
    }
}
