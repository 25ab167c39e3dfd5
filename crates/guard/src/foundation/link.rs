//! The chain token returned by a passing check.

/// Permission to keep validating the same contract.
///
/// A `Link` owns exactly one contract, so it can never wrap an absent one.
/// Dropping it is fine: a check that passed has nothing left to report.
///
/// ```rust,ignore
/// must!(name).not_be_empty()?.and().have_length_between(3, 32)?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link<C> {
    contract: C,
}

impl<C> Link<C> {
    #[inline]
    pub(crate) fn new(contract: C) -> Self {
        Self { contract }
    }

    /// Hands back the contract that produced this link.
    #[inline]
    pub fn and(self) -> C {
        self.contract
    }
}
