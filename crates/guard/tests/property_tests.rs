//! Property-based tests for nebula-guard.

use nebula_guard::prelude::*;
use proptest::prelude::*;

// ============================================================================
// RANGE LAWS
// ============================================================================

proptest! {
    #[test]
    fn between_matches_inclusive_range(v in any::<i64>(), a in any::<i64>(), b in any::<i64>()) {
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        let passed = must!(v).be_between(start, end).is_ok();
        prop_assert_eq!(passed, start <= v && v <= end);
    }

    #[test]
    fn inverted_range_is_invalid_value(v in any::<i32>(), a in any::<i32>(), b in any::<i32>()) {
        prop_assume!(a != b);
        let (start, end) = if a > b { (a, b) } else { (b, a) };
        let err = must!(v).be_between(start, end).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn single_point_range(v in any::<u16>()) {
        prop_assert!(must!(v).be_between(v, v).is_ok());
    }
}

// ============================================================================
// ORDERING LAWS: each check fails exactly when its complement passes
// ============================================================================

proptest! {
    #[test]
    fn greater_than_complements_less_or_equal(v in any::<i32>(), bound in any::<i32>()) {
        let gt = must!(v).be_greater_than(bound).is_ok();
        let le = must!(v).be_less_or_equal_to(bound).is_ok();
        prop_assert_ne!(gt, le);
    }

    #[test]
    fn less_than_complements_greater_or_equal(v in any::<i32>(), bound in any::<i32>()) {
        let lt = must!(v).be_less_than(bound).is_ok();
        let ge = must!(v).be_greater_or_equal_to(bound).is_ok();
        prop_assert_ne!(lt, ge);
    }

    #[test]
    fn nan_fails_every_ordering(bound in any::<f64>()) {
        prop_assert!(must!(f64::NAN).be_greater_than(bound).is_err());
        prop_assert!(must!(f64::NAN).be_less_or_equal_to(bound).is_err());
    }
}

// ============================================================================
// MEMBERSHIP LAWS
// ============================================================================

proptest! {
    #[test]
    fn any_of_complements_not_any_of(v in 0u8..16, candidates in prop::collection::vec(0u8..16, 0..8)) {
        let any = must!(v).be_any_of(&candidates).is_ok();
        let none = must!(v).not_be_any_of(&candidates).is_ok();
        prop_assert_ne!(any, none);
        prop_assert_eq!(any, candidates.contains(&v));
    }

    #[test]
    fn equality_complements_inequality(v in any::<i16>(), other in any::<i16>()) {
        let eq = must!(v).be(other).is_ok();
        let ne = must!(v).not_be(other).is_ok();
        prop_assert_ne!(eq, ne);
    }
}

// ============================================================================
// COLLECTIONS AND STRINGS
// ============================================================================

proptest! {
    #[test]
    fn count_checks_agree_with_len(items in prop::collection::vec(any::<u8>(), 0..32), n in 0usize..32) {
        prop_assert_eq!(must!(&items).have_count_equal_to(n).is_ok(), items.len() == n);
        prop_assert_eq!(must!(&items).have_count_greater_than(n).is_ok(), items.len() > n);
        prop_assert_eq!(must!(&items).not_be_empty().is_ok(), !items.is_empty());
    }

    #[test]
    fn string_length_counts_chars(s in "\\PC{0,24}") {
        let chars = s.chars().count();
        prop_assert!(must!(s.as_str()).have_length_equal_to(chars).is_ok());
    }

    #[test]
    fn failure_message_names_parameter(v in 1u32..) {
        let err = must!(v).be_zero().unwrap_err();
        prop_assert!(err.to_string().ends_with("(parameter 'v')"));
    }
}
