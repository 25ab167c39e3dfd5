//! String contracts
//!
//! Length is counted in `char`s, not bytes. Format checks (`be_email`,
//! `be_url`, ...) fail with [`ErrorKind::InvalidValue`](crate::foundation::ErrorKind),
//! every other check with a condition violation.

use std::borrow::Cow;

use regex::Regex;

use crate::entry::Must;
use crate::evaluate;
use crate::formats;
use crate::foundation::{Link, ParamName};
use crate::levels::{Check, Comparable};

crate::macros::contract! {
    /// Contract over anything that reads as `&str`.
    pub struct StringContract<S> for S;
}

impl<S> Comparable for StringContract<S> {}

impl<'a> Must for &'a str {
    type Contract = StringContract<&'a str>;

    #[inline]
    fn must_named(self, name: ParamName) -> Self::Contract {
        StringContract::new(self, name)
    }
}

impl Must for String {
    type Contract = StringContract<String>;

    #[inline]
    fn must_named(self, name: ParamName) -> Self::Contract {
        StringContract::new(self, name)
    }
}

impl<'a> Must for &'a String {
    type Contract = StringContract<&'a String>;

    #[inline]
    fn must_named(self, name: ParamName) -> Self::Contract {
        StringContract::new(self, name)
    }
}

impl<'a> Must for Cow<'a, str> {
    type Contract = StringContract<Cow<'a, str>>;

    #[inline]
    fn must_named(self, name: ParamName) -> Self::Contract {
        StringContract::new(self, name)
    }
}

impl<S: AsRef<str>> StringContract<S> {
    fn text(&self) -> &str {
        self.value.as_ref()
    }

    fn require(self, holds: bool, requirement: impl std::fmt::Display) -> Check<Self> {
        evaluate::check_requirement(holds, &self.name, requirement, None)?;
        Ok(Link::new(self))
    }

    fn require_format(self, parses: fn(&str) -> bool, format: &str) -> Check<Self> {
        evaluate::check_for_format(parses, self.text(), &self.name, format, None)?;
        Ok(Link::new(self))
    }

    // ========================================================================
    // LENGTH
    // ========================================================================

    pub fn be_empty(self) -> Check<Self> {
        let holds = self.text().is_empty();
        self.require(holds, "must be empty")
    }

    pub fn not_be_empty(self) -> Check<Self> {
        let holds = !self.text().is_empty();
        self.require(holds, "must not be empty")
    }

    /// Fails when the string is empty or only whitespace.
    pub fn not_be_blank(self) -> Check<Self> {
        let holds = !self.text().trim().is_empty();
        self.require(holds, "must not be blank")
    }

    pub fn have_length_equal_to(self, expected: usize) -> Check<Self> {
        let length = self.text().chars().count();
        self.require(
            length == expected,
            format_args!("must have length {expected} but has {length}"),
        )
    }

    /// Fails unless `min <= length <= max`. An inverted range fails as an
    /// invalid value.
    pub fn have_length_between(self, min: usize, max: usize) -> Check<Self> {
        evaluate::check_argument(
            min <= max,
            &self.name,
            format_args!("range start {min} must not exceed end {max}"),
        )?;
        let length = self.text().chars().count();
        self.require(
            (min..=max).contains(&length),
            format_args!("must have length between {min} and {max} but has {length}"),
        )
    }

    // ========================================================================
    // CONTENT
    // ========================================================================

    pub fn contain(self, needle: &str) -> Check<Self> {
        let holds = self.text().contains(needle);
        self.require(holds, format_args!("must contain {needle:?}"))
    }

    pub fn not_contain(self, needle: &str) -> Check<Self> {
        let holds = !self.text().contains(needle);
        self.require(holds, format_args!("must not contain {needle:?}"))
    }

    pub fn start_with(self, prefix: &str) -> Check<Self> {
        let holds = self.text().starts_with(prefix);
        self.require(holds, format_args!("must start with {prefix:?}"))
    }

    pub fn end_with(self, suffix: &str) -> Check<Self> {
        let holds = self.text().ends_with(suffix);
        self.require(holds, format_args!("must end with {suffix:?}"))
    }

    /// Unicode-aware, case-insensitive equality.
    pub fn be_equal_ignoring_case(self, expected: &str) -> Check<Self> {
        let holds = self.text().to_lowercase() == expected.to_lowercase();
        self.require(holds, format_args!("must equal {expected:?} ignoring case"))
    }

    pub fn match_pattern(self, pattern: &Regex) -> Check<Self> {
        let holds = pattern.is_match(self.text());
        self.require(holds, format_args!("must match pattern {}", pattern.as_str()))
    }

    pub fn not_match_pattern(self, pattern: &Regex) -> Check<Self> {
        let holds = !pattern.is_match(self.text());
        self.require(holds, format_args!("must not match pattern {}", pattern.as_str()))
    }

    // ========================================================================
    // CHARACTER CLASSES
    // ========================================================================

    /// Non-empty and ASCII digits only.
    pub fn be_numeric(self) -> Check<Self> {
        let text = self.text();
        let holds = !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit());
        self.require(holds, "must contain only digits")
    }

    /// Non-empty and alphanumeric characters only.
    pub fn be_alphanumeric(self) -> Check<Self> {
        let text = self.text();
        let holds = !text.is_empty() && text.chars().all(char::is_alphanumeric);
        self.require(holds, "must contain only letters and digits")
    }

    /// No uppercase characters. Digits and punctuation are allowed.
    pub fn be_lowercase(self) -> Check<Self> {
        let holds = !self.text().chars().any(char::is_uppercase);
        self.require(holds, "must be lowercase")
    }

    /// No lowercase characters. Digits and punctuation are allowed.
    pub fn be_uppercase(self) -> Check<Self> {
        let holds = !self.text().chars().any(char::is_lowercase);
        self.require(holds, "must be uppercase")
    }

    /// Reads the same backwards, ignoring case and non-alphanumerics.
    pub fn be_palindrome(self) -> Check<Self> {
        let normalized: Vec<char> = self
            .text()
            .chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect();
        let holds = normalized.iter().eq(normalized.iter().rev());
        self.require(holds, "must be a palindrome")
    }

    // ========================================================================
    // FORMATS
    // ========================================================================

    pub fn be_email(self) -> Check<Self> {
        self.require_format(formats::is_email, "email address")
    }

    pub fn be_url(self) -> Check<Self> {
        self.require_format(formats::is_url, "URL")
    }

    pub fn be_ip_address(self) -> Check<Self> {
        self.require_format(formats::is_ip_address, "IP address")
    }

    pub fn be_guid(self) -> Check<Self> {
        self.require_format(formats::is_guid, "GUID")
    }

    pub fn be_base64(self) -> Check<Self> {
        self.require_format(formats::is_base64, "base64 string")
    }

    pub fn be_hex(self) -> Check<Self> {
        self.require_format(formats::is_hex, "hex string")
    }

    pub fn be_credit_card_number(self) -> Check<Self> {
        self.require_format(formats::is_credit_card_number, "credit card number")
    }
}

// ============================================================================
// TESTS
// ============================================================================
