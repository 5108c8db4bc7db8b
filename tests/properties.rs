//! Property tests for the binary codec laws.

use msgwire::codec::BinaryCodec;
use msgwire::protocol::{Record, PREFIX_SIZE};
use msgwire::MsgUtils;
use proptest::prelude::*;

fn any_record() -> impl Strategy<Value = Record> {
    (
        ".{0,24}",
        ".{0,24}",
        prop::collection::vec(".{0,16}", 0..8),
        ".{0,128}",
        ".{0,16}",
    )
        .prop_map(|(id, from_id, to_ids, body, msg_type)| Record {
            id,
            from_id,
            to_ids,
            body,
            msg_type,
        })
}

proptest! {
    #[test]
    fn prop_roundtrip(record in any_record()) {
        let bytes = BinaryCodec::encode_to_vec(&record).unwrap();
        let decoded = BinaryCodec::decode(&bytes).unwrap();
        prop_assert_eq!(&decoded, &record);
        prop_assert_eq!(BinaryCodec::encode_to_vec(&decoded).unwrap(), bytes);
    }

    #[test]
    fn prop_exact_size(record in any_record(), slack in 0usize..32) {
        let size = BinaryCodec::size_of(&record);
        let mut buf = vec![0u8; size + slack];
        prop_assert_eq!(BinaryCodec::encode(&record, &mut buf).unwrap(), size);
    }

    #[test]
    fn prop_short_buffer_rejected(record in any_record(), short in 1usize..16) {
        let size = BinaryCodec::size_of(&record);
        let mut buf = vec![0u8; size.saturating_sub(short)];
        prop_assert!(BinaryCodec::encode(&record, &mut buf).unwrap_err().is_out_of_space());
    }

    #[test]
    fn prop_monotonic_size(record in any_record(), extra in ".{0,16}") {
        let before = BinaryCodec::size_of(&record);
        let mut grown = record.clone();
        grown.add_recipient(extra.clone());
        prop_assert_eq!(BinaryCodec::size_of(&grown), before + PREFIX_SIZE + extra.len());
        prop_assert!(BinaryCodec::size_of(&grown) > before);
    }

    #[test]
    fn prop_truncation_safety(record in any_record(), cut in any::<prop::sample::Index>()) {
        let bytes = BinaryCodec::encode_to_vec(&record).unwrap();
        let k = cut.index(bytes.len());
        let err = BinaryCodec::decode(&bytes[..k]).unwrap_err();
        prop_assert!(err.is_truncated(), "prefix {} gave {:?}", k, err);
    }

    #[test]
    fn prop_validate_matches_required_fields(record in any_record()) {
        let expected = !record.id.is_empty()
            && !record.from_id.is_empty()
            && !record.msg_type.is_empty()
            && !record.to_ids.is_empty();
        prop_assert_eq!(MsgUtils::validate(&record), expected);
    }

    #[test]
    fn prop_decode_arbitrary_bytes_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        let _ = BinaryCodec::decode(&bytes);
    }
}
