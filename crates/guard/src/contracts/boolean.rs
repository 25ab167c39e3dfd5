//! Boolean contracts

use crate::entry::Must;
use crate::evaluate;
use crate::foundation::{Link, ParamName};
use crate::levels::Check;

crate::macros::contract! {
    /// Contract over a `bool`.
    pub struct BoolContract for bool;
}

impl Must for bool {
    type Contract = BoolContract;

    #[inline]
    fn must_named(self, name: ParamName) -> Self::Contract {
        BoolContract::new(self, name)
    }
}

impl BoolContract {
    pub fn be_true(self) -> Check<Self> {
        evaluate::check_requirement(self.value, &self.name, "must be true", None)?;
        Ok(Link::new(self))
    }

    pub fn be_false(self) -> Check<Self> {
        evaluate::check_requirement(!self.value, &self.name, "must be false", None)?;
        Ok(Link::new(self))
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn test_be_true() {
        assert!(must!(true).be_true().is_ok());

        let accepted_terms = false;
        let err = must!(accepted_terms).be_true().unwrap_err();
        assert_eq!(err.message(), "accepted_terms must be true");
    }

    #[test]
    fn test_be_false() {
        assert!(must!(false).be_false().is_ok());
        assert!(must!(1 > 0).be_false().is_err());
    }
}
