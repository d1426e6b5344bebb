#[path = "../common/mod.rs"]
mod common;

use libntag::prelude::*;

#[test]
fn request_bytes_are_exact() {
    common::init_logger();

    assert_eq!(GetVersionCommand::new().build(), vec![0x60]);

    let mut read = FastReadCommand::new(IcType::Ntag215);
    assert_eq!(read.build(0x10, 0x20).unwrap(), vec![0x3a, 0x10, 0x20]);

    assert_eq!(
        FastReadAllCommand::new(IcType::Ntag216).build().unwrap(),
        vec![0x3a, 0x00, 0xe6]
    );

    let write = WriteCommand::new(IcType::Ntag213);
    let req = write.build(0x04, &[0x03, 0x00, 0xfe, 0x00]).unwrap();
    assert_eq!(req, vec![0xa2, 0x04, 0x03, 0x00, 0xfe, 0x00]);
}

#[test]
fn write_requests_are_six_bytes_across_the_writable_range() {
    for ic in IcType::ALL {
        let write = WriteCommand::new(ic);
        for page in 0x02..=ic.max_page() {
            let req = write.build(page, &[page; 4]).unwrap();
            assert_eq!(req.len(), 6);
            assert_eq!(req[1], page);
        }
    }
}

#[test]
fn write_rejects_out_of_range_pages_and_lengths() -> anyhow::Result<()> {
    let write = WriteCommand::new(IcType::Ntag216);
    for page in [0x00u8, 0x01, 0xe7, 0xff] {
        let err = write.build(page, &[0; 4]).unwrap_err();
        assert!(matches!(err, BuildError::InvalidPage { .. }), "{err}");
    }
    for len in [0usize, 1, 3, 5, 16] {
        let data = vec![0u8; len];
        let err = write.build(0x04, &data).unwrap_err();
        assert_eq!(
            err,
            BuildError::InvalidDataLength {
                expected: 4,
                actual: len
            }
        );
    }
    write.build(0xe6, &[0; 4])?;
    Ok(())
}

#[test]
fn variant_selected_by_name() -> anyhow::Result<()> {
    let ic: IcType = "NTAG215".parse()?;
    let mut read = FastReadCommand::new(ic);
    assert_eq!(read.build(0x00, 0x86)?, vec![0x3a, 0x00, 0x86]);

    let err: Error = "NTAG424".parse::<IcType>().unwrap_err().into();
    assert!(err.is_build_error());
    Ok(())
}
