//! Leaf contracts, one per value shape
//!
//! | value | contract | levels |
//! |---|---|---|
//! | integers, floats, `Duration` | [`NumberContract`] | comparable, numeric |
//! | `&str`, `String`, `&String`, `Cow<str>` | [`StringContract`] | comparable |
//! | `char` | [`CharContract`] | comparable |
//! | `bool` | [`BoolContract`] | base |
//! | `Option<T>` | [`OptionContract`] | base (nullable), collection over sequences |
//! | `Vec<T>`, `&[T]`, `&Vec<T>`, `[T; N]` | [`CollectionContract`] | collection |
//! | `IpAddr`, `Uuid`, `Url`, user types | [`ValueContract`] | comparable when `PartialOrd` |
//! | `NaiveDate`, `NaiveDateTime`, `DateTime<Tz>` | `TemporalContract` | comparable |
//!
//! Every contract also gets [`Equatable`](crate::levels::Equatable).

mod boolean;
mod character;
mod collection;
mod guid;
mod number;
mod option;
mod string;
#[cfg(feature = "temporal")]
mod temporal;
mod value;

pub use boolean::BoolContract;
pub use character::CharContract;
pub use collection::{CollectionContract, Sequence};
pub use number::{Number, NumberContract};
pub use option::OptionContract;
pub use string::StringContract;
#[cfg(feature = "temporal")]
pub use temporal::TemporalContract;
pub use value::ValueContract;
