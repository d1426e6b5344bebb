// libntag/src/protocol/responses/version.rs
//! GET_VERSION response.

use derive_more::Display;
use num_enum::TryFromPrimitive;

use crate::constants::VERSION_RESPONSE_LEN;
use crate::error::ParseError;
use crate::protocol::parser;
use crate::variant::IcType;

/// Vendor ID (byte 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, TryFromPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Vendor {
    /// NXP Semiconductors
    #[display(fmt = "NXP Semiconductors")]
    Nxp = 0x04,
}

/// Product type (byte 2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, TryFromPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum ProductType {
    /// NTAG family
    #[display(fmt = "NTAG")]
    Ntag = 0x04,
}

/// Product subtype (byte 3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, TryFromPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum ProductSubtype {
    /// 50 pF input capacitance
    #[display(fmt = "50 pF")]
    Pf50 = 0x02,
}

/// Protocol type (byte 7)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, TryFromPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum ProtocolType {
    /// ISO/IEC 14443-3A
    #[display(fmt = "ISO/IEC 14443-3A")]
    Iso14443_3A = 0x03,
}

/// Minor product version, displayed as `V<n>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[display(fmt = "V{}", _0)]
pub struct MinorVersion(pub u8);

/// Decoded GET_VERSION response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VersionInfo {
    /// Vendor ID
    pub vendor: Vendor,
    /// Product type
    pub product_type: ProductType,
    /// Product subtype
    pub product_subtype: ProductSubtype,
    /// Major product version, not validated
    pub major_product_version: u8,
    /// Minor product version, not validated
    pub minor_product_version: MinorVersion,
    /// User memory size of the reported variant
    pub storage_byte_size: u16,
    /// Protocol type
    pub protocol_type: ProtocolType,
    /// Variant derived from the storage size byte
    pub ic_type: IcType,
}

/// Decode GET_VERSION response
/// Layout: header(1) + vendor(1) + type(1) + subtype(1) + major(1) + minor(1)
///         + storage_size(1) + protocol(1)
pub fn decode_version(data: &[u8]) -> Result<VersionInfo, ParseError> {
    parser::ensure_exact_len(data, VERSION_RESPONSE_LEN)?;
    // byte 0 is the fixed header
    let [_, vendor, product_type, product_subtype, major, minor, storage, protocol] =
        parser::array_at::<VERSION_RESPONSE_LEN>(data, 0)?;

    let vendor = Vendor::try_from(vendor)
        .map_err(|e| ParseError::UnknownVendor { value: e.number })?;
    let product_type = ProductType::try_from(product_type)
        .map_err(|e| ParseError::UnknownProductType { value: e.number })?;
    let product_subtype = ProductSubtype::try_from(product_subtype)
        .map_err(|e| ParseError::UnknownProductSubtype { value: e.number })?;
    let ic_type = IcType::from_storage_code(storage)
        .ok_or(ParseError::UnknownStorageSize { value: storage })?;
    let protocol_type = ProtocolType::try_from(protocol)
        .map_err(|e| ParseError::UnknownProtocolType { value: e.number })?;

    Ok(VersionInfo {
        vendor,
        product_type,
        product_subtype,
        major_product_version: major,
        minor_product_version: MinorVersion(minor),
        storage_byte_size: ic_type.storage_byte_size(),
        protocol_type,
        ic_type,
    })
}
