//! Date and time contracts
//!
//! Backed by `chrono`; enabled by the `temporal` feature. Calendar checks
//! work on anything `Datelike`, i.e. `NaiveDate`, `NaiveDateTime` and
//! `DateTime<Tz>` in any time zone.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone, Utc, Weekday};

use crate::entry::Must;
use crate::evaluate;
use crate::foundation::{Link, ParamName};
use crate::levels::{Check, Comparable};

crate::macros::contract! {
    /// Contract over a date or timestamp.
    pub struct TemporalContract<T> for T;
}

impl<T: PartialOrd> Comparable for TemporalContract<T> {}

impl Must for NaiveDate {
    type Contract = TemporalContract<Self>;

    #[inline]
    fn must_named(self, name: ParamName) -> Self::Contract {
        TemporalContract::new(self, name)
    }
}

impl Must for NaiveDateTime {
    type Contract = TemporalContract<Self>;

    #[inline]
    fn must_named(self, name: ParamName) -> Self::Contract {
        TemporalContract::new(self, name)
    }
}

impl<Tz: TimeZone> Must for DateTime<Tz> {
    type Contract = TemporalContract<Self>;

    #[inline]
    fn must_named(self, name: ParamName) -> Self::Contract {
        TemporalContract::new(self, name)
    }
}

const fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

impl<T: Datelike> TemporalContract<T> {
    pub fn have_year(self, year: i32) -> Check<Self> {
        let actual = self.value.year();
        evaluate::check_requirement(
            actual == year,
            &self.name,
            format_args!("must be in year {year} but is in {actual}"),
            None,
        )?;
        Ok(Link::new(self))
    }

    /// `month` is 1-based.
    pub fn have_month(self, month: u32) -> Check<Self> {
        let actual = self.value.month();
        evaluate::check_requirement(
            actual == month,
            &self.name,
            format_args!("must be in month {month} but is in {actual}"),
            None,
        )?;
        Ok(Link::new(self))
    }

    pub fn have_day(self, day: u32) -> Check<Self> {
        let actual = self.value.day();
        evaluate::check_requirement(
            actual == day,
            &self.name,
            format_args!("must be on day {day} but is on {actual}"),
            None,
        )?;
        Ok(Link::new(self))
    }

    /// Monday through Friday.
    pub fn be_on_weekday(self) -> Check<Self> {
        let weekday = self.value.weekday();
        evaluate::check_requirement(
            !matches!(weekday, Weekday::Sat | Weekday::Sun),
            &self.name,
            format_args!("must fall on a weekday but falls on {weekday}"),
            None,
        )?;
        Ok(Link::new(self))
    }

    pub fn be_on_weekend(self) -> Check<Self> {
        let weekday = self.value.weekday();
        evaluate::check_requirement(
            matches!(weekday, Weekday::Sat | Weekday::Sun),
            &self.name,
            format_args!("must fall on a weekend but falls on {weekday}"),
            None,
        )?;
        Ok(Link::new(self))
    }

    pub fn be_in_leap_year(self) -> Check<Self> {
        let year = self.value.year();
        evaluate::check_requirement(
            is_leap_year(year),
            &self.name,
            format_args!("must be in a leap year but {year} is not"),
            None,
        )?;
        Ok(Link::new(self))
    }
}

impl TemporalContract<DateTime<Utc>> {
    /// Strictly before the current instant.
    pub fn be_in_the_past(self) -> Check<Self> {
        evaluate::check_requirement(self.value < Utc::now(), &self.name, "must be in the past", None)?;
        Ok(Link::new(self))
    }

    /// Strictly after the current instant.
    pub fn be_in_the_future(self) -> Check<Self> {
        evaluate::check_requirement(self.value > Utc::now(), &self.name, "must be in the future", None)?;
        Ok(Link::new(self))
    }
}
