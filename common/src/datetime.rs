//! Weekday, date and time-of-day range evaluation.
//!
//! PAC temporal predicates take a loose argument list with an optional
//! trailing `"GMT"` marker. The caller strips the marker with
//! [`split_zone`], parses the remainder once into a tagged range value
//! ([`weekday::WeekdayRange`], [`date::DateRange`], [`time::TimeRange`])
//! and evaluates it against a single snapshotted instant, so every
//! predicate in one script evaluation sees the same "now".

pub mod date;
pub mod time;
pub mod weekday;

use chrono::{DateTime, Local, NaiveDateTime, Utc};
use thiserror::Error;

/// Which wall clock a temporal predicate reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    Local,
    Gmt,
}

/// The instant in calendar terms for the requested zone.
pub fn civil(now: DateTime<Utc>, zone: Zone) -> NaiveDateTime {
    match zone {
        Zone::Gmt => now.naive_utc(),
        Zone::Local => now.with_timezone(&Local).naive_local(),
    }
}

/// A weekday name, month name or integer as supplied by the script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeArg {
    Int(i64),
    Word(String),
}

impl RangeArg {
    /// Integer reading. Numeric strings count, per the legacy engines.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            RangeArg::Int(value) => Some(*value),
            RangeArg::Word(word) => word.trim().parse().ok(),
        }
    }
}

/// Strips a trailing exact `"GMT"` argument. Anything else, including
/// `"gmt"`, stays in the list and selects local time.
pub fn split_zone(args: &[RangeArg]) -> (&[RangeArg], Zone) {
    match args.split_last() {
        Some((RangeArg::Word(word), rest)) if word == "GMT" => (rest, Zone::Gmt),
        _ => (args, Zone::Local),
    }
}

/// Rejected weekday/date/time arguments.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RangeError {
    #[error("wrong number of arguments: {0}")]
    Arity(usize),
    #[error("unknown weekday name {0:?}")]
    UnknownWeekday(String),
    #[error("unknown month name {0:?}")]
    UnknownMonth(String),
    #[error("{value} is not a valid {what}")]
    OutOfRange { what: &'static str, value: i64 },
    #[error("{0:?} is not a number")]
    NotANumber(String),
}
