//! Error types for date parsing.

use thiserror::Error;

/// Errors produced when turning external strings or fragments into dates.
///
/// Widgets recover from these locally; they surface only through the
/// fallible constructors such as [`DateValue::parse`](crate::widgets::date::DateValue::parse).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("date '{0}' is not in YYYY-MM-DD form")]
    Format(String),

    #[error("{year:04}-{month:02}-{day:02} is not a calendar date")]
    OutOfRange { year: i32, month: u32, day: u32 },

    #[error("date fragments are incomplete")]
    Incomplete,
}
