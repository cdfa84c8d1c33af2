//! Date widgets - a single-date grid and a range picker.
//!
//! Both share the month grid in [`calendar`]. The range picker adds two
//! fragment inputs ([`input`]) and keeps `start <= end` by clearing the
//! opposite endpoint whenever a new value would invert the range.

pub mod calendar;
pub mod input;
pub mod picker;
pub mod range;

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::DateError;

pub use calendar::Calendar;
pub use input::{DateFragments, Fragment, FragmentStatus};
pub use picker::{DatePicker, DatePickerId};
pub use range::{RangeDatePicker, RangeId};

/// Sentinel reported for an endpoint holding text that is not a date.
pub const INVALID_DATE: &str = "invalid_date";

/// Format used for committed values and cell ids.
pub const ISO_FORMAT: &str = "%Y-%m-%d";

/// The value of one range endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum DateValue {
    #[default]
    Empty,
    /// The fragments hold something that is not (yet) a date.
    Invalid,
    Date(NaiveDate),
}

impl DateValue {
    /// Parse the external form: `""`, `"invalid_date"` or `YYYY-MM-DD`.
    pub fn parse(s: &str) -> Result<Self, DateError> {
        match s {
            "" => Ok(Self::Empty),
            INVALID_DATE => Ok(Self::Invalid),
            _ => NaiveDate::parse_from_str(s, ISO_FORMAT)
                .map(Self::Date)
                .map_err(|_| DateError::Format(s.to_string())),
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(date) => Some(*date),
            _ => None,
        }
    }

    pub fn is_date(&self) -> bool {
        matches!(self, Self::Date(_))
    }
}

impl From<NaiveDate> for DateValue {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl From<Option<NaiveDate>> for DateValue {
    fn from(date: Option<NaiveDate>) -> Self {
        date.map_or(Self::Empty, Self::Date)
    }
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Invalid => f.write_str(INVALID_DATE),
            Self::Date(date) => write!(f, "{}", date.format(ISO_FORMAT)),
        }
    }
}

impl From<DateValue> for String {
    fn from(value: DateValue) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for DateValue {
    type Error = DateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

/// One end of a date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endpoint {
    Start,
    End,
}

impl Endpoint {
    pub fn other(self) -> Self {
        match self {
            Self::Start => Self::End,
            Self::End => Self::Start,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
        }
    }
}

/// Payload of the range picker's change callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RangeChange {
    pub start: DateValue,
    pub end: DateValue,
}

impl RangeChange {
    pub fn new(start: DateValue, end: DateValue) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for RangeChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} -> {:?}", self.start.to_string(), self.end.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_external_forms() {
        assert_eq!(DateValue::parse("").unwrap(), DateValue::Empty);
        assert_eq!(DateValue::parse("invalid_date").unwrap(), DateValue::Invalid);
        assert_eq!(
            DateValue::parse("2024-02-29").unwrap(),
            DateValue::Date(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap())
        );
        assert_eq!(
            DateValue::parse("2023-02-29"),
            Err(DateError::Format("2023-02-29".to_string()))
        );
    }

    #[test]
    fn test_display_matches_callback_strings() {
        let date = DateValue::Date(NaiveDate::from_ymd_opt(2026, 3, 7).unwrap());
        assert_eq!(date.to_string(), "2026-03-07");
        assert_eq!(DateValue::Invalid.to_string(), "invalid_date");
        assert_eq!(DateValue::Empty.to_string(), "");
    }

    #[test]
    fn test_endpoint_other() {
        assert_eq!(Endpoint::Start.other(), Endpoint::End);
        assert_eq!(Endpoint::End.other(), Endpoint::Start);
    }
}
