//! Time-of-day range evaluation.

use chrono::{NaiveDateTime, Timelike};

use super::{RangeArg, RangeError};

/// The parsed form of a `timeRange` call.
///
/// Components are positional: hour, minute, second. Partial forms are
/// exact matches at their given precision; only the six-component form is
/// a true range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeRange {
    /// The whole hour.
    Hour(u32),
    /// One minute of the day.
    Minute { hour: u32, minute: u32 },
    /// One second of the day.
    Second { hour: u32, minute: u32, second: u32 },
    /// Inclusive span between two times of day, as (hour, minute, second)
    /// triples. Wraps across midnight when the end precedes the start.
    Span {
        start: (u32, u32, u32),
        end: (u32, u32, u32),
    },
}

impl TimeRange {
    /// Parses the non-zone arguments of `timeRange`. Accepted arities are
    /// 1 (hour), 2 (hour, minute), 3 (hour, minute, second) and 6 (two
    /// full times of day).
    pub fn from_args(args: &[RangeArg]) -> Result<Self, RangeError> {
        match args {
            [hour] => Ok(TimeRange::Hour(hour_number(hour)?)),
            [hour, minute] => Ok(TimeRange::Minute {
                hour: hour_number(hour)?,
                minute: sexagesimal(minute, "minute")?,
            }),
            [hour, minute, second] => Ok(TimeRange::Second {
                hour: hour_number(hour)?,
                minute: sexagesimal(minute, "minute")?,
                second: sexagesimal(second, "second")?,
            }),
            [hour1, minute1, second1, hour2, minute2, second2] => Ok(TimeRange::Span {
                start: (
                    hour_number(hour1)?,
                    sexagesimal(minute1, "minute")?,
                    sexagesimal(second1, "second")?,
                ),
                end: (
                    hour_number(hour2)?,
                    sexagesimal(minute2, "minute")?,
                    sexagesimal(second2, "second")?,
                ),
            }),
            _ => Err(RangeError::Arity(args.len())),
        }
    }

    /// True when the time of day of `at` satisfies the range.
    pub fn contains(&self, at: NaiveDateTime) -> bool {
        let (hour, minute, second) = (at.hour(), at.minute(), at.second());
        match *self {
            TimeRange::Hour(h) => hour == h,
            TimeRange::Minute { hour: h, minute: m } => hour == h && minute == m,
            TimeRange::Second {
                hour: h,
                minute: m,
                second: s,
            } => (hour, minute, second) == (h, m, s),
            TimeRange::Span { start, end } => {
                let here = (hour, minute, second);
                if start <= end {
                    start <= here && here <= end
                } else {
                    here >= start || here <= end
                }
            }
        }
    }
}

fn hour_number(arg: &RangeArg) -> Result<u32, RangeError> {
    bounded(arg, "hour", 23)
}

fn sexagesimal(arg: &RangeArg, what: &'static str) -> Result<u32, RangeError> {
    bounded(arg, what, 59)
}

fn bounded(arg: &RangeArg, what: &'static str, max: i64) -> Result<u32, RangeError> {
    let value = arg.as_int().ok_or_else(|| match arg {
        RangeArg::Word(word) => RangeError::NotANumber(word.clone()),
        RangeArg::Int(value) => RangeError::NotANumber(value.to_string()),
    })?;
    if (0..=max).contains(&value) {
        Ok(value as u32)
    } else {
        Err(RangeError::OutOfRange { what, value })
    }
}
