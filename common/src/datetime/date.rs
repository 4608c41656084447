//! Calendar date range evaluation.

use chrono::{Datelike, NaiveDateTime};

use super::{RangeArg, RangeError};

/// Month names in calendar order.
pub const MONTH_NAMES: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// The parsed form of a `dateRange` call.
///
/// Components are positional: day, month, year. Partial forms are exact
/// matches that repeat at the period of their most significant omitted
/// component; only the six-component form is a true range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRange {
    /// Day of month, every month.
    Day(u32),
    /// Calendar month, every year.
    Month(u32),
    /// Calendar year.
    Year(i32),
    /// Day and month, every year.
    DayMonth { day: u32, month: u32 },
    /// One exact calendar date.
    Date { day: u32, month: u32, year: i32 },
    /// Inclusive span between two full dates, as (year, month, day)
    /// triples. Wraps when the end precedes the start.
    Span {
        start: (i32, u32, u32),
        end: (i32, u32, u32),
    },
}

impl DateRange {
    /// Parses the non-zone arguments of `dateRange`. Accepted arities are
    /// 1 (single component), 2 (day, month), 3 (day, month, year) and 6
    /// (two full dates).
    pub fn from_args(args: &[RangeArg]) -> Result<Self, RangeError> {
        match args {
            [only] => single_component(only),
            [day, month] => Ok(DateRange::DayMonth {
                day: day_of_month(day)?,
                month: month_number(month)?,
            }),
            [day, month, year] => Ok(DateRange::Date {
                day: day_of_month(day)?,
                month: month_number(month)?,
                year: year_number(year)?,
            }),
            [day1, month1, year1, day2, month2, year2] => Ok(DateRange::Span {
                start: (
                    year_number(year1)?,
                    month_number(month1)?,
                    day_of_month(day1)?,
                ),
                end: (
                    year_number(year2)?,
                    month_number(month2)?,
                    day_of_month(day2)?,
                ),
            }),
            _ => Err(RangeError::Arity(args.len())),
        }
    }

    /// True when the calendar date of `at` satisfies the range.
    pub fn contains(&self, at: NaiveDateTime) -> bool {
        let (year, month, day) = (at.year(), at.month(), at.day());
        match *self {
            DateRange::Day(d) => day == d,
            DateRange::Month(m) => month == m,
            DateRange::Year(y) => year == y,
            DateRange::DayMonth { day: d, month: m } => day == d && month == m,
            DateRange::Date {
                day: d,
                month: m,
                year: y,
            } => (year, month, day) == (y, m, d),
            DateRange::Span { start, end } => {
                let here = (year, month, day);
                if start <= end {
                    start <= here && here <= end
                } else {
                    here >= start || here <= end
                }
            }
        }
    }
}

/// A lone component is classified by shape: month names, then years by
/// magnitude, then days.
fn single_component(arg: &RangeArg) -> Result<DateRange, RangeError> {
    if let RangeArg::Word(word) = arg {
        if let Some(month) = month_by_name(word) {
            return Ok(DateRange::Month(month));
        }
    }
    let value = arg.as_int().ok_or_else(|| match arg {
        RangeArg::Word(word) => RangeError::UnknownMonth(word.clone()),
        RangeArg::Int(value) => RangeError::NotANumber(value.to_string()),
    })?;
    if (1000..=9999).contains(&value) {
        Ok(DateRange::Year(value as i32))
    } else if (1..=31).contains(&value) {
        Ok(DateRange::Day(value as u32))
    } else {
        Err(RangeError::OutOfRange {
            what: "day of month",
            value,
        })
    }
}

fn day_of_month(arg: &RangeArg) -> Result<u32, RangeError> {
    let value = int_arg(arg)?;
    if (1..=31).contains(&value) {
        Ok(value as u32)
    } else {
        Err(RangeError::OutOfRange {
            what: "day of month",
            value,
        })
    }
}

fn month_number(arg: &RangeArg) -> Result<u32, RangeError> {
    if let RangeArg::Word(word) = arg {
        if let Some(month) = month_by_name(word) {
            return Ok(month);
        }
        if word.trim().parse::<i64>().is_err() {
            return Err(RangeError::UnknownMonth(word.clone()));
        }
    }
    let value = int_arg(arg)?;
    if (1..=12).contains(&value) {
        Ok(value as u32)
    } else {
        Err(RangeError::OutOfRange {
            what: "month",
            value,
        })
    }
}

fn year_number(arg: &RangeArg) -> Result<i32, RangeError> {
    let value = int_arg(arg)?;
    if (1000..=9999).contains(&value) {
        Ok(value as i32)
    } else {
        Err(RangeError::OutOfRange {
            what: "year",
            value,
        })
    }
}

fn int_arg(arg: &RangeArg) -> Result<i64, RangeError> {
    arg.as_int().ok_or_else(|| match arg {
        RangeArg::Word(word) => RangeError::NotANumber(word.clone()),
        RangeArg::Int(value) => RangeError::NotANumber(value.to_string()),
    })
}

fn month_by_name(word: &str) -> Option<u32> {
    let upper = word.trim().to_ascii_uppercase();
    MONTH_NAMES
        .iter()
        .position(|name| *name == upper)
        .map(|index| index as u32 + 1)
}
