// fixtures.rs: commonly used responses and dumps

use libntag::{IcType, SerialNumber};

pub fn sample_serial_number() -> SerialNumber {
    SerialNumber::from_bytes([0x04, 0x12, 0x34, 0x5a, 0x6b, 0x7c, 0x80])
}

/// GET_VERSION response as returned by an NTAG213
pub fn ntag213_version_response() -> Vec<u8> {
    hex::decode("0004040201000f03").unwrap()
}

/// GET_VERSION response as returned by an NTAG215
pub fn ntag215_version_response() -> Vec<u8> {
    hex::decode("0004040201001103").unwrap()
}

/// GET_VERSION response as returned by an NTAG216
pub fn ntag216_version_response() -> Vec<u8> {
    hex::decode("0004040201001303").unwrap()
}

pub fn version_response(ic: IcType) -> Vec<u8> {
    match ic {
        IcType::Ntag213 => ntag213_version_response(),
        IcType::Ntag215 => ntag215_version_response(),
        IcType::Ntag216 => ntag216_version_response(),
    }
}

/// A full FAST_READ dump with a valid serial number and a byte pattern
/// everywhere else, so every offset is distinguishable.
pub fn memory_dump(ic: IcType) -> Vec<u8> {
    let mut dump: Vec<u8> = (0..ic.memory_byte_size())
        .map(|i| (i as u8).wrapping_mul(3).wrapping_add(1))
        .collect();
    dump[..9].copy_from_slice(&sample_serial_number().with_check_bytes());
    dump
}

/// Factory-fresh NTAG213 dump: NDEF capability container, empty user memory
pub fn blank_ntag213_dump() -> Vec<u8> {
    let mut dump = vec![0u8; IcType::Ntag213.memory_byte_size()];
    dump[..9].copy_from_slice(&sample_serial_number().with_check_bytes());
    dump[9] = 0x48; // internal
    dump[12..16].copy_from_slice(&[0xe1, 0x10, 0x12, 0x00]);
    dump[16..20].copy_from_slice(&[0x01, 0x03, 0xa0, 0x0c]);
    dump[20..24].copy_from_slice(&[0x34, 0x03, 0x00, 0xfe]);
    // config pages 0x29..=0x2c
    dump[164..168].copy_from_slice(&[0x04, 0x00, 0x00, 0xff]);
    dump[168..172].copy_from_slice(&[0x00, 0x05, 0x00, 0x00]);
    dump[172..176].copy_from_slice(&[0xff, 0xff, 0xff, 0xff]);
    dump
}
