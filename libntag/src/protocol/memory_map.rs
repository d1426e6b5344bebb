// libntag/src/protocol/memory_map.rs
//! Decomposition of a full NTAG21x memory dump into named regions.
//!
//! Every variant shares the same shape; only the page indices after user
//! memory move. [`MemoryLayout`] derives them from the variant table so a
//! single code path handles all three chips.
//!
//! ```text
//! page 0      SN0  SN1  SN2  BCC0
//! page 1      SN3  SN4  SN5  SN6
//! page 2      BCC1 INT  LOCK0 LOCK1
//! page 3      CC0  CC1  CC2  CC3
//! page 4..    user memory
//! dyn lock    DLOCK0..DLOCK3
//! config      4 pages, last byte RFUI
//! ```

use crate::constants::{
    CONFIG_LEN, CONFIG_PAGE_COUNT, PAGE_SIZE, SERIAL_WITH_BCC_LEN, USER_MEMORY_START_PAGE,
};
use crate::error::ParseError;
use crate::protocol::parser;
use crate::variant::IcType;

const INTERNAL_OFFSET: usize = 9;
const STATIC_LOCK_OFFSET: usize = 10;
const CAPABILITY_CONTAINER_PAGE: u8 = 0x03;

/// Page indices of the regions that move between variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryLayout {
    /// Last page of user memory (inclusive)
    pub user_memory_end_page: u8,
    /// Page holding the dynamic lock bytes
    pub dynamic_lock_page: u8,
    /// First configuration page
    pub config_start_page: u8,
    /// Last addressable page (inclusive)
    pub max_page: u8,
}

impl MemoryLayout {
    /// Derive the layout from the variant's page bounds. The dynamic lock
    /// page follows user memory and the configuration pages close memory.
    pub const fn for_ic(ic: IcType) -> Self {
        let bounds = ic.bounds();
        Self {
            user_memory_end_page: bounds.user_memory_end_page,
            dynamic_lock_page: bounds.user_memory_end_page + 1,
            config_start_page: bounds.max_page + 1 - CONFIG_PAGE_COUNT as u8,
            max_page: bounds.max_page,
        }
    }

    /// User memory size in bytes
    pub const fn user_memory_len(&self) -> usize {
        (self.user_memory_end_page - USER_MEMORY_START_PAGE + 1) as usize * PAGE_SIZE
    }

    /// Full dump size in bytes
    pub const fn dump_len(&self) -> usize {
        (self.max_page as usize + 1) * PAGE_SIZE
    }
}

/// Named regions of a memory dump, before serial number verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryMap<'a> {
    /// `SN0 SN1 SN2 BCC0 SN3 SN4 SN5 SN6 BCC1`
    pub serial_number_with_bcc: [u8; SERIAL_WITH_BCC_LEN],
    /// Internal byte (page 2, byte 1)
    pub internal: u8,
    /// Static lock bytes (page 2, bytes 2..4)
    pub static_lock: [u8; 2],
    /// Capability container (page 3)
    pub capability_container: [u8; PAGE_SIZE],
    /// User memory pages
    pub user_memory: &'a [u8],
    /// Dynamic lock page
    pub dynamic_lock: [u8; PAGE_SIZE],
    /// Configuration pages without the trailing RFUI byte
    pub configuration: [u8; CONFIG_LEN],
}

impl<'a> MemoryMap<'a> {
    /// Split a dump of pages `0x00..=max_page` for the given variant.
    pub fn split(ic: IcType, dump: &'a [u8]) -> Result<Self, ParseError> {
        let layout = MemoryLayout::for_ic(ic);
        parser::ensure_exact_len(dump, layout.dump_len())?;

        let serial_number_with_bcc = parser::array_at::<SERIAL_WITH_BCC_LEN>(dump, 0)?;
        let internal = parser::byte_at(dump, INTERNAL_OFFSET)?;
        let static_lock = parser::array_at::<2>(dump, STATIC_LOCK_OFFSET)?;
        let capability_container =
            parser::array_at::<PAGE_SIZE>(dump, parser::page_offset(CAPABILITY_CONTAINER_PAGE))?;
        let user_memory =
            parser::pages_at(dump, USER_MEMORY_START_PAGE, layout.user_memory_end_page)?;
        let dynamic_lock =
            parser::array_at::<PAGE_SIZE>(dump, parser::page_offset(layout.dynamic_lock_page))?;

        let config_pages = parser::pages_at(dump, layout.config_start_page, layout.max_page)?;
        parser::ensure_exact_len(config_pages, CONFIG_PAGE_COUNT * PAGE_SIZE)?;
        let configuration = parser::array_at::<CONFIG_LEN>(config_pages, 0)?;

        Ok(Self {
            serial_number_with_bcc,
            internal,
            static_lock,
            capability_container,
            user_memory,
            dynamic_lock,
            configuration,
        })
    }
}
