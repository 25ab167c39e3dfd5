//! Character contracts

use crate::entry::Must;
use crate::evaluate;
use crate::foundation::{Link, ParamName};
use crate::levels::{Check, Comparable};

crate::macros::contract! {
    /// Contract over a single `char`.
    pub struct CharContract for char;
}

impl Comparable for CharContract {}

impl Must for char {
    type Contract = CharContract;

    #[inline]
    fn must_named(self, name: ParamName) -> Self::Contract {
        CharContract::new(self, name)
    }
}

impl CharContract {
    fn require(self, holds: fn(char) -> bool, requirement: &str) -> Check<Self> {
        evaluate::check_requirement(holds(self.value), &self.name, requirement, None)?;
        Ok(Link::new(self))
    }

    /// An ASCII decimal digit.
    pub fn be_digit(self) -> Check<Self> {
        self.require(|c| c.is_ascii_digit(), "must be a digit")
    }

    pub fn be_letter(self) -> Check<Self> {
        self.require(char::is_alphabetic, "must be a letter")
    }

    pub fn be_letter_or_digit(self) -> Check<Self> {
        self.require(char::is_alphanumeric, "must be a letter or digit")
    }

    pub fn be_whitespace(self) -> Check<Self> {
        self.require(char::is_whitespace, "must be whitespace")
    }

    pub fn be_uppercase(self) -> Check<Self> {
        self.require(char::is_uppercase, "must be uppercase")
    }

    pub fn be_lowercase(self) -> Check<Self> {
        self.require(char::is_lowercase, "must be lowercase")
    }

    pub fn be_ascii(self) -> Check<Self> {
        self.require(|c| c.is_ascii(), "must be ASCII")
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn test_classes() {
        assert!(must!('7').be_digit().is_ok());
        assert!(must!('ß').be_letter().is_ok());
        assert!(must!('x').be_letter_or_digit().is_ok());
        assert!(must!('\t').be_whitespace().is_ok());
        assert!(must!('Q').be_uppercase().is_ok());
        assert!(must!('q').be_lowercase().is_ok());
        assert!(must!('é').be_ascii().is_err());
    }

    #[test]
    fn test_message() {
        let separator = '-';
        let err = must!(separator).be_letter().unwrap_err();
        assert_eq!(err.to_string(), "separator must be a letter (parameter 'separator')");
    }

    #[test]
    fn test_comparable() {
        let grade = 'B';
        assert!(must!(grade).be_between('A', 'F').is_ok());
        assert!(must!(grade).be_any_of(&['A', 'B']).is_ok());
        assert!(must!(grade).be_greater_than('C').is_err());
    }
}
