use certledger_core::commitment::{commit, Salt, SALT_LEN};
use proptest::prelude::*;

fn arb_salt() -> impl Strategy<Value = Salt> {
    any::<[u8; SALT_LEN]>().prop_map(Salt::from_bytes)
}

proptest! {
    #[test]
    fn prop_commit_is_deterministic(
        subject_id in proptest::collection::vec(any::<u8>(), 0..64),
        subject_name in proptest::collection::vec(any::<u8>(), 0..64),
        salt in arb_salt(),
    ) {
        let h1 = commit(&subject_id, &subject_name, &salt);
        let h2 = commit(&subject_id, &subject_name, &salt);
        prop_assert_eq!(h1, h2);
    }

    #[test]
    fn prop_field_boundary_is_unambiguous(
        bytes in proptest::collection::vec(any::<u8>(), 2..64),
        split_a in 0usize..64,
        split_b in 0usize..64,
        salt in arb_salt(),
    ) {
        // Splitting the same byte string at two different points must
        // yield two different commitments: the length prefix pins the
        // field boundary.
        let a = split_a % (bytes.len() + 1);
        let b = split_b % (bytes.len() + 1);
        prop_assume!(a != b);

        let h1 = commit(&bytes[..a], &bytes[a..], &salt);
        let h2 = commit(&bytes[..b], &bytes[b..], &salt);
        prop_assert_ne!(h1, h2);
    }

    #[test]
    fn prop_distinct_salts_hide_identical_subjects(
        subject_id in proptest::collection::vec(any::<u8>(), 0..32),
        subject_name in proptest::collection::vec(any::<u8>(), 0..32),
        salt_a in arb_salt(),
        salt_b in arb_salt(),
    ) {
        prop_assume!(salt_a != salt_b);
        let h1 = commit(&subject_id, &subject_name, &salt_a);
        let h2 = commit(&subject_id, &subject_name, &salt_b);
        prop_assert_ne!(h1, h2);
    }

    #[test]
    fn prop_salt_hex_round_trips(salt in arb_salt()) {
        let parsed = Salt::from_hex(&salt.to_hex()).unwrap();
        prop_assert_eq!(salt, parsed);
    }
}
