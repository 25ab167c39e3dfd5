//! Contracts over struct-like values
//!
//! Values without a shape-specific contract (addresses, identifiers,
//! orderings, user types opted in with [`impl_must!`](crate::impl_must))
//! get the base checks, by-reference equality, and the ordering checks
//! whenever they are `PartialOrd`.

use std::cmp::Ordering;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};

use url::Url;
use uuid::Uuid;

use crate::levels::Comparable;

crate::macros::contract! {
    /// Contract over a value compared as a whole.
    pub struct ValueContract<T> for T;
}

impl<T: PartialOrd> Comparable for ValueContract<T> {}

crate::impl_must!(IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, Ordering, Url, Uuid);

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use std::cmp::Ordering;
    use std::net::{IpAddr, Ipv4Addr};

    #[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
    struct Priority(u8);

    crate::impl_must!(Priority);

    #[derive(Debug, PartialEq)]
    struct Region(&'static str);

    crate::impl_must!(Region);

    #[test]
    fn test_user_type_ordering() {
        let priority = Priority(4);
        assert!(must!(priority).be_between(Priority(1), Priority(9)).is_ok());

        let err = must!(priority).be_greater_than(Priority(5)).unwrap_err();
        assert_eq!(err.message(), "priority must be greater than Priority(5)");
    }

    #[test]
    fn test_user_type_equality_only() {
        let region = Region("eu-west");
        assert!(must!(region).be_equal_to(&Region("eu-west")).is_ok());

        let region = Region("us-east");
        assert!(must!(region).be_any_of(&[Region("eu-west"), Region("eu-north")]).is_err());
    }

    #[test]
    fn test_ip_address() {
        let bind = IpAddr::V4(Ipv4Addr::LOCALHOST);
        assert!(must!(bind).satisfy(IpAddr::is_loopback).is_ok());
        assert!(must!(bind).not_be(IpAddr::V4(Ipv4Addr::UNSPECIFIED)).is_ok());
    }

    #[test]
    fn test_ordering() {
        let cmp = 3u8.cmp(&5);
        assert!(must!(cmp).be(Ordering::Less).is_ok());
        assert!(must!(cmp).not_be_any_of(&[Ordering::Equal, Ordering::Greater]).is_ok());
    }
}
