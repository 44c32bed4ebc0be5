//! Property: `decode(encode(b)) == b` for arbitrary byte sequences.

use proptest::prelude::*;

proptest! {
    #[test]
    fn base64_round_trip(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        let encoded = matter_b64::encode_string(&bytes);
        prop_assert!(!encoded.contains('='));
        prop_assert_eq!(matter_b64::decode_vec(&encoded).unwrap(), bytes);
    }
}
