#[path = "../common/mod.rs"]
mod common;

use libntag::prelude::*;
use proptest::prelude::*;

fn any_ic() -> impl Strategy<Value = IcType> {
    prop::sample::select(IcType::ALL.to_vec())
}

proptest! {
    #[test]
    fn fast_read_build_accepts_exactly_valid_ranges(ic in any_ic(), start in any::<u8>(), end in any::<u8>()) {
        let mut read = FastReadCommand::new(ic);
        let max_page = ic.max_page();
        let valid = start <= end && end <= max_page;
        match read.build(start, end) {
            Ok(req) => {
                prop_assert!(valid);
                prop_assert_eq!(req, vec![0x3a, start, end]);
                let expected_len = (end as usize - start as usize + 1) * 4;
                prop_assert_eq!(read.state(), libntag::protocol::FastReadState::Built { expected_len });
            }
            Err(e) => {
                prop_assert!(!valid);
                prop_assert_eq!(e, BuildError::InvalidPageRange { start, end, max_page });
            }
        }
    }

    #[test]
    fn fast_read_parse_rejects_off_by_one(ic in any_ic(), a in any::<u8>(), b in any::<u8>()) {
        let max_page = ic.max_page();
        let (start, end) = (a.min(b).min(max_page), a.max(b).min(max_page));
        let mut read = FastReadCommand::new(ic);
        read.build(start, end).unwrap();

        let expected_len = (end as usize - start as usize + 1) * 4;
        prop_assert!(read.parse(&vec![0u8; expected_len]).is_ok());
        prop_assert!(read.parse(&vec![0u8; expected_len - 1]).is_err());
        prop_assert!(read.parse(&vec![0u8; expected_len + 1]).is_err());
    }

    #[test]
    fn rejected_range_keeps_earlier_build(ic in any_ic(), good in any::<u8>(), bad_start in any::<u8>(), bad_end in any::<u8>()) {
        let max_page = ic.max_page();
        let good = good.min(max_page);
        prop_assume!(bad_start > bad_end || bad_end > max_page);

        let mut read = FastReadCommand::new(ic);
        read.build(good, good).unwrap();
        prop_assert!(read.build(bad_start, bad_end).is_err());
        prop_assert_eq!(read.state(), libntag::protocol::FastReadState::Built { expected_len: 4 });
        prop_assert!(read.parse(&[0u8; 4]).is_ok());
    }

    #[test]
    fn write_build_bounds(ic in any_ic(), page in any::<u8>(), data in prop::collection::vec(any::<u8>(), 0..8)) {
        let write = WriteCommand::new(ic);
        let res = write.build(page, &data);
        if data.len() != 4 {
            prop_assert_eq!(res, Err(BuildError::InvalidDataLength { expected: 4, actual: data.len() }));
        } else if page < 0x02 || page > ic.max_page() {
            prop_assert!(
                matches!(res, Err(BuildError::InvalidPage { .. })),
                "expected InvalidPage, got {:?}",
                res
            );
        } else {
            let req = res.unwrap();
            prop_assert_eq!(req.len(), 6);
            prop_assert_eq!(&req[2..], &data[..]);
        }
    }
}

#[test]
fn ntag213_examples() {
    let mut read = FastReadCommand::new(IcType::Ntag213);
    assert!(read.build(5, 2).is_err());
    assert_eq!(
        read.build(0x00, 0x30),
        Err(BuildError::InvalidPageRange {
            start: 0x00,
            end: 0x30,
            max_page: 0x2c
        })
    );
}
