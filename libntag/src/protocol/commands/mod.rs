// libntag/src/protocol/commands/mod.rs
//! Tag commands and the [`Command`] trait they implement.

pub mod fast_read;
pub mod fast_read_all;
pub mod get_version;
pub mod write;

use std::time::Duration;

use crate::error::{BuildError, ParseError};

pub use fast_read::{FastReadCommand, FastReadState, encode_fast_read, validate_page_range};
pub use fast_read_all::FastReadAllCommand;
pub use get_version::{GetVersionCommand, encode_get_version};
pub use write::{WriteCommand, encode_write, validate_write_page};

/// A parsed response together with the bytes it was decoded from.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decoded<T> {
    /// Typed result
    pub parsed: T,
    /// Response bytes as received
    pub raw: Vec<u8>,
}

impl<T> Decoded<T> {
    /// Pair `parsed` with a copy of `raw`.
    pub fn new(parsed: T, raw: &[u8]) -> Self {
        Self {
            parsed,
            raw: raw.to_vec(),
        }
    }
}

/// Build/parse contract shared by every tag command.
///
/// `build` produces the exact bytes to hand to the transport and `parse`
/// validates what came back. New commands should implement this trait and
/// live in `protocol::commands::<name>.rs`.
pub trait Command {
    /// Arguments accepted by `build`
    type Args<'a>;
    /// Typed result of a successful `parse`
    type Output;

    /// Nominal response timeout for the transport to enforce.
    fn timeout(&self) -> Duration;

    /// Encode the request bytes.
    fn build(&mut self, args: Self::Args<'_>) -> Result<Vec<u8>, BuildError>;

    /// Decode the response bytes.
    fn parse(&self, response: &[u8]) -> Result<Decoded<Self::Output>, ParseError>;
}
