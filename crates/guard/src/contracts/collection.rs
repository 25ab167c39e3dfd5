//! Sequence contracts
//!
//! Every sequence shape is viewed as a slice through [`Sequence`], so one
//! contract type serves vectors, slices and arrays alike.

use crate::entry::Must;
use crate::foundation::ParamName;
use crate::levels::Collection;

/// Types whose items can be borrowed as a contiguous slice.
pub trait Sequence {
    type Item;

    fn as_items(&self) -> &[Self::Item];
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    #[inline]
    fn as_items(&self) -> &[T] {
        self
    }
}

impl<T> Sequence for &[T] {
    type Item = T;

    #[inline]
    fn as_items(&self) -> &[T] {
        self
    }
}

impl<T> Sequence for &Vec<T> {
    type Item = T;

    #[inline]
    fn as_items(&self) -> &[T] {
        self
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    type Item = T;

    #[inline]
    fn as_items(&self) -> &[T] {
        self
    }
}

crate::macros::contract! {
    /// Contract over a present sequence.
    pub struct CollectionContract<V> for V;
}

impl<V: Sequence> Collection for CollectionContract<V> {
    type Item = V::Item;

    #[inline]
    fn items(&self) -> Option<&[V::Item]> {
        Some(self.value.as_items())
    }
}

impl<T> Must for Vec<T> {
    type Contract = CollectionContract<Self>;

    #[inline]
    fn must_named(self, name: ParamName) -> Self::Contract {
        CollectionContract::new(self, name)
    }
}

impl<'a, T> Must for &'a [T] {
    type Contract = CollectionContract<&'a [T]>;

    #[inline]
    fn must_named(self, name: ParamName) -> Self::Contract {
        CollectionContract::new(self, name)
    }
}

impl<'a, T> Must for &'a Vec<T> {
    type Contract = CollectionContract<&'a Vec<T>>;

    #[inline]
    fn must_named(self, name: ParamName) -> Self::Contract {
        CollectionContract::new(self, name)
    }
}

impl<T, const N: usize> Must for [T; N] {
    type Contract = CollectionContract<Self>;

    #[inline]
    fn must_named(self, name: ParamName) -> Self::Contract {
        CollectionContract::new(self, name)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_every_sequence_shape_is_guarded() {
        let hosts = vec!["a", "b"];
        assert!(must!(&hosts).have_count_equal_to(2).is_ok());
        assert!(must!(hosts.as_slice()).have_count_equal_to(2).is_ok());
        assert!(must!([1, 2, 3]).have_count_equal_to(3).is_ok());
        assert!(must!(hosts).have_count_equal_to(2).is_ok());
    }

    #[test]
    fn test_empty() {
        let steps: Vec<u32> = Vec::new();
        let err = must!(&steps).not_be_empty().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConditionViolation);
        assert_eq!(err.message(), "steps must not be empty");
        assert!(must!(&steps).be_empty().is_ok());
    }

    #[test]
    fn test_count_bounds() {
        let retries = [1, 2, 4, 8];
        assert!(must!(retries).have_count_between(1, 4).is_ok());
        assert!(must!(retries).have_count_greater_than(3).is_ok());
        assert!(must!(retries).have_count_less_than(4).is_err());

        let err = must!(retries).have_count_between(4, 1).unwrap_err();
        assert!(err.is_invalid_value());
        assert_eq!(err.message(), "range start 4 must not exceed end 1");
    }

    #[test]
    fn test_membership() {
        let tags = vec!["prod".to_string(), "eu".to_string()];
        assert!(must!(&tags).contain(&"eu".to_string()).is_ok());
        assert!(must!(&tags).not_contain(&"us".to_string()).is_ok());

        let err = must!(&tags).contain(&"us".to_string()).unwrap_err();
        assert_eq!(err.message(), r#"tags must contain "us""#);
    }

    #[test]
    fn test_unique_items() {
        assert!(must!([1, 2, 3]).have_unique_items().is_ok());

        let ids = [7, 3, 7];
        let err = must!(ids).have_unique_items().unwrap_err();
        assert_eq!(err.message(), "ids must not contain duplicates but 7 repeats");
    }

    #[test]
    fn test_unique_hashed_items() {
        let users: Vec<String> = (0..1_000).map(|i| format!("user-{i}")).collect();
        assert!(must!(&users).have_unique_hashed_items().is_ok());

        let hosts = ["a", "b", "c", "b"];
        let err = must!(hosts).have_unique_hashed_items().unwrap_err();
        assert_eq!(err.message(), r#"hosts must not contain duplicates but "b" repeats"#);
    }

    #[test]
    fn test_all_satisfy() {
        let ports = [80u16, 443, 8080];
        assert!(must!(ports).all_satisfy(|p| *p > 0).is_ok());

        let err = must!(ports).all_satisfy(|p| *p < 1024).unwrap_err();
        assert_eq!(err.message(), "ports must have every item satisfy the condition but item 2 does not");
    }

    #[test]
    fn test_base_checks_on_collections() {
        let weights = vec![1, 2];
        assert!(must!(&weights).be(&vec![1, 2]).is_ok());
        assert!(must!(&weights).satisfy(|w| w.iter().sum::<i32>() == 3).is_ok());
    }
}
