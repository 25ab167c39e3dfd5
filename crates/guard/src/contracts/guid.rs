//! UUID checks on top of [`ValueContract`].

use uuid::Uuid;

use super::value::ValueContract;
use crate::evaluate;
use crate::foundation::Link;
use crate::levels::{Check, Contract};

impl ValueContract<Uuid> {
    /// Fails on the all-zero UUID.
    pub fn not_be_nil(self) -> Check<Self> {
        evaluate::check_requirement(!self.value().is_nil(), self.name(), "must not be the nil UUID", None)?;
        Ok(Link::new(self))
    }

    /// Fails unless the UUID carries version `version` (1 to 8).
    pub fn have_version(self, version: usize) -> Check<Self> {
        let actual = self.value().get_version_num();
        evaluate::check_requirement(
            actual == version,
            self.name(),
            format_args!("must be a version {version} UUID but is version {actual}"),
            None,
        )?;
        Ok(Link::new(self))
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use uuid::Uuid;

    #[test]
    fn test_not_be_nil() {
        assert!(must!(Uuid::new_v4()).not_be_nil().is_ok());

        let execution_id = Uuid::nil();
        let err = must!(execution_id).not_be_nil().unwrap_err();
        assert_eq!(err.message(), "execution_id must not be the nil UUID");
    }

    #[test]
    fn test_have_version() {
        let id = Uuid::new_v4();
        assert!(must!(id).have_version(4).is_ok());

        let err = must!(id).have_version(7).unwrap_err();
        assert_eq!(err.message(), "id must be a version 7 UUID but is version 4");
    }

    #[test]
    fn test_uuid_is_comparable() {
        let id = Uuid::from_u128(5);
        assert!(must!(id).be_between(Uuid::from_u128(1), Uuid::from_u128(9)).is_ok());
    }
}
