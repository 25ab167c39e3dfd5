//! Collection level: count and membership checks over sequences.

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use super::base::{Check, Contract};
use crate::evaluate;
use crate::foundation::{GuardResult, Link};

/// Count-based checks for contracts over sequences.
///
/// Every check first requires the collection itself to be present: on an
/// absent collection (e.g. `None::<Vec<_>>`) it fails with a null violation
/// before any count is compared.
pub trait Collection: Contract {
    type Item;

    /// The items, or `None` when the collection itself is absent.
    fn items(&self) -> Option<&[Self::Item]>;

    /// The items, or a null violation when the collection is absent.
    fn present_items(&self) -> GuardResult<&[Self::Item]> {
        let items = self.items();
        evaluate::check_for_not_null(&items, self.name(), None)?;
        Ok(items.unwrap_or_default())
    }

    fn be_empty(self) -> Check<Self> {
        let count = self.present_items()?.len();
        evaluate::check_requirement(
            count == 0,
            self.name(),
            format_args!("must be empty but has {count} item(s)"),
            None,
        )?;
        Ok(Link::new(self))
    }

    fn not_be_empty(self) -> Check<Self> {
        let count = self.present_items()?.len();
        evaluate::check_requirement(count > 0, self.name(), "must not be empty", None)?;
        Ok(Link::new(self))
    }

    fn have_count_equal_to(self, expected: usize) -> Check<Self> {
        let count = self.present_items()?.len();
        evaluate::check_requirement(
            count == expected,
            self.name(),
            format_args!("must have {expected} item(s) but has {count}"),
            None,
        )?;
        Ok(Link::new(self))
    }

    /// Fails unless `min <= count <= max`. An inverted range fails as an
    /// invalid value.
    fn have_count_between(self, min: usize, max: usize) -> Check<Self> {
        let count = self.present_items()?.len();
        evaluate::check_argument(
            min <= max,
            self.name(),
            format_args!("range start {min} must not exceed end {max}"),
        )?;
        evaluate::check_requirement(
            (min..=max).contains(&count),
            self.name(),
            format_args!("must have between {min} and {max} item(s) but has {count}"),
            None,
        )?;
        Ok(Link::new(self))
    }

    fn have_count_greater_than(self, bound: usize) -> Check<Self> {
        let count = self.present_items()?.len();
        evaluate::check_requirement(
            count > bound,
            self.name(),
            format_args!("must have more than {bound} item(s) but has {count}"),
            None,
        )?;
        Ok(Link::new(self))
    }

    fn have_count_less_than(self, bound: usize) -> Check<Self> {
        let count = self.present_items()?.len();
        evaluate::check_requirement(
            count < bound,
            self.name(),
            format_args!("must have fewer than {bound} item(s) but has {count}"),
            None,
        )?;
        Ok(Link::new(self))
    }

    fn contain(self, item: &Self::Item) -> Check<Self>
    where
        Self::Item: PartialEq + Debug,
    {
        let found = self.present_items()?.contains(item);
        evaluate::check_requirement(found, self.name(), format_args!("must contain {item:?}"), None)?;
        Ok(Link::new(self))
    }

    fn not_contain(self, item: &Self::Item) -> Check<Self>
    where
        Self::Item: PartialEq + Debug,
    {
        let found = self.present_items()?.contains(item);
        evaluate::check_requirement(
            !found,
            self.name(),
            format_args!("must not contain {item:?}"),
            None,
        )?;
        Ok(Link::new(self))
    }

    /// Fails if any two items are equal. Quadratic; meant for the short
    /// lists guard clauses usually see. Use
    /// [`have_unique_hashed_items`](Self::have_unique_hashed_items) for long
    /// ones.
    fn have_unique_items(self) -> Check<Self>
    where
        Self::Item: PartialEq + Debug,
    {
        let items = self.present_items()?;
        let duplicate = items
            .iter()
            .enumerate()
            .find(|(i, item)| items[i + 1..].contains(item))
            .map(|(_, item)| item);

        if let Some(item) = duplicate {
            evaluate::check_requirement(
                false,
                self.name(),
                format_args!("must not contain duplicates but {item:?} repeats"),
                None,
            )?;
        }
        Ok(Link::new(self))
    }

    /// Same as [`have_unique_items`](Self::have_unique_items) in linear
    /// time, for hashable items.
    fn have_unique_hashed_items(self) -> Check<Self>
    where
        Self::Item: Hash + Eq + Debug,
    {
        let items = self.present_items()?;
        let duplicate = {
            let mut seen = HashSet::with_capacity(items.len());
            items.iter().find(|item| !seen.insert(*item))
        };

        if let Some(item) = duplicate {
            evaluate::check_requirement(
                false,
                self.name(),
                format_args!("must not contain duplicates but {item:?} repeats"),
                None,
            )?;
        }
        Ok(Link::new(self))
    }

    /// Fails unless `predicate` holds for every item.
    fn all_satisfy<F>(self, mut predicate: F) -> Check<Self>
    where
        F: FnMut(&Self::Item) -> bool,
    {
        let failing = self.present_items()?.iter().position(|item| !predicate(item));
        if let Some(index) = failing {
            evaluate::check_requirement(
                false,
                self.name(),
                format_args!("must have every item satisfy the condition but item {index} does not"),
                None,
            )?;
        }
        Ok(Link::new(self))
    }
}
