//! Property 4: writing a human or binary alias and reading the
//! corresponding base field back yields the expected value, and vice versa.

use matter_keys::KeyBuilder;
use proptest::prelude::*;

proptest! {
    #[test]
    fn binary_alias_round_trips_through_base_field(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let key = KeyBuilder::new().x_bits(bytes.clone()).build().unwrap();
        prop_assert_eq!(key.x_bits().unwrap().unwrap(), bytes.clone());
        prop_assert_eq!(key.x().unwrap(), matter_b64::encode_string(&bytes));
    }

    #[test]
    fn human_alias_round_trips_through_base_field(alg in "[a-zA-Z0-9]{1,16}") {
        let key = KeyBuilder::new().algorithm(alg.clone()).build().unwrap();
        prop_assert_eq!(key.alg().unwrap(), alg.as_str());
        prop_assert_eq!(key.algorithm().unwrap(), alg.as_str());
    }
}
