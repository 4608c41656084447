//! Weekday span evaluation.

use chrono::{Datelike, NaiveDateTime};

use super::{RangeArg, RangeError};

/// Weekday names in canonical order, Sunday first.
pub const WEEKDAY_NAMES: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

/// One weekday or an inclusive span of weekdays in Sun..Sat order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekdayRange {
    first: u8,
    last: u8,
}

impl WeekdayRange {
    /// Parses the non-zone arguments of `weekdayRange`: one weekday name
    /// for an exact match, two for a span.
    pub fn from_args(args: &[RangeArg]) -> Result<Self, RangeError> {
        match args {
            [only] => {
                let day = weekday_index(only)?;
                Ok(Self { first: day, last: day })
            }
            [first, last] => Ok(Self {
                first: weekday_index(first)?,
                last: weekday_index(last)?,
            }),
            _ => Err(RangeError::Arity(args.len())),
        }
    }

    /// True when the weekday of `at` falls inside the span, wrapping
    /// across the week boundary when the end precedes the start.
    pub fn contains(&self, at: NaiveDateTime) -> bool {
        let day = at.weekday().num_days_from_sunday() as u8;
        if self.first <= self.last {
            day >= self.first && day <= self.last
        } else {
            day >= self.first || day <= self.last
        }
    }
}

fn weekday_index(arg: &RangeArg) -> Result<u8, RangeError> {
    let word = match arg {
        RangeArg::Word(word) => word,
        RangeArg::Int(value) => return Err(RangeError::UnknownWeekday(value.to_string())),
    };
    let upper = word.trim().to_ascii_uppercase();
    WEEKDAY_NAMES
        .iter()
        .position(|name| *name == upper)
        .map(|index| index as u8)
        .ok_or_else(|| RangeError::UnknownWeekday(word.clone()))
}
