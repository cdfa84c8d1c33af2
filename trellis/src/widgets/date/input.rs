//! Day/month/year fragment inputs for one range endpoint.

use chrono::{Datelike, NaiveDate};

use crate::error::DateError;

/// One of the three text fields of a date input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fragment {
    Day,
    Month,
    Year,
}

impl Fragment {
    pub const ALL: [Fragment; 3] = [Fragment::Day, Fragment::Month, Fragment::Year];

    pub fn max_len(self) -> usize {
        match self {
            Self::Day | Self::Month => 2,
            Self::Year => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Month => "month",
            Self::Year => "year",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Day => "DD",
            Self::Month => "MM",
            Self::Year => "YYYY",
        }
    }

    pub fn next(self) -> Option<Self> {
        match self {
            Self::Day => Some(Self::Month),
            Self::Month => Some(Self::Year),
            Self::Year => None,
        }
    }

    pub fn prev(self) -> Option<Self> {
        match self {
            Self::Day => None,
            Self::Month => Some(Self::Day),
            Self::Year => Some(Self::Month),
        }
    }
}

/// What the three fragments currently spell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentStatus {
    /// All three fragments are empty.
    Empty,
    /// Some fragment is not fully typed yet.
    Incomplete,
    /// Fully typed but not a calendar date (e.g. 31/02).
    Invalid,
    Valid(NaiveDate),
}

/// Text of the day, month and year fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateFragments {
    day: String,
    month: String,
    year: String,
}

impl DateFragments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fragments showing `date`, zero padded.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            day: format!("{:02}", date.day()),
            month: format!("{:02}", date.month()),
            year: format!("{:04}", date.year()),
        }
    }

    pub fn get(&self, fragment: Fragment) -> &str {
        match fragment {
            Fragment::Day => &self.day,
            Fragment::Month => &self.month,
            Fragment::Year => &self.year,
        }
    }

    fn get_mut(&mut self, fragment: Fragment) -> &mut String {
        match fragment {
            Fragment::Day => &mut self.day,
            Fragment::Month => &mut self.month,
            Fragment::Year => &mut self.year,
        }
    }

    /// Replace a fragment. Non-digits are dropped and the text is cut to
    /// the fragment's maximum length.
    pub fn set(&mut self, fragment: Fragment, text: &str) {
        let digits: String = text
            .chars()
            .filter(char::is_ascii_digit)
            .take(fragment.max_len())
            .collect();
        *self.get_mut(fragment) = digits;
    }

    /// Append a typed character. A full fragment starts over, as typing
    /// into a field whose text is selected would.
    pub fn push(&mut self, fragment: Fragment, c: char) -> bool {
        if !c.is_ascii_digit() {
            return false;
        }
        let text = self.get_mut(fragment);
        if text.len() >= fragment.max_len() {
            text.clear();
        }
        text.push(c);
        true
    }

    /// Remove the last character. Returns false if the fragment was empty.
    pub fn pop(&mut self, fragment: Fragment) -> bool {
        self.get_mut(fragment).pop().is_some()
    }

    pub fn is_full(&self, fragment: Fragment) -> bool {
        self.get(fragment).len() == fragment.max_len()
    }

    /// Zero-pad a single-digit day or month, as leaving the field does.
    pub fn pad(&mut self, fragment: Fragment) -> bool {
        if fragment == Fragment::Year {
            return false;
        }
        let text = self.get_mut(fragment);
        if text.len() == 1 {
            text.insert(0, '0');
            true
        } else {
            false
        }
    }

    pub fn clear(&mut self) {
        self.day.clear();
        self.month.clear();
        self.year.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.day.is_empty() && self.month.is_empty() && self.year.is_empty()
    }

    /// Build the date the fragments spell. Requires 2/2/4 digits.
    pub fn to_date(&self) -> Result<NaiveDate, DateError> {
        if !Fragment::ALL.iter().all(|fragment| self.is_full(*fragment)) {
            return Err(DateError::Incomplete);
        }
        let parse = |text: &str| text.parse::<u32>().map_err(|_| DateError::Incomplete);
        let day = parse(&self.day)?;
        let month = parse(&self.month)?;
        let year = self.year.parse::<i32>().map_err(|_| DateError::Incomplete)?;
        NaiveDate::from_ymd_opt(year, month, day).ok_or(DateError::OutOfRange { year, month, day })
    }

    pub fn status(&self) -> FragmentStatus {
        if self.is_empty() {
            return FragmentStatus::Empty;
        }
        match self.to_date() {
            Ok(date) => FragmentStatus::Valid(date),
            Err(DateError::OutOfRange { .. }) => FragmentStatus::Invalid,
            Err(_) => FragmentStatus::Incomplete,
        }
    }
}

/// Text shown in a fragment: the hovered date's digits while a calendar
/// hover preview is active, otherwise the typed text.
pub fn display_fragment(fragments: &DateFragments, fragment: Fragment, preview: Option<NaiveDate>) -> String {
    match preview {
        Some(date) => DateFragments::from_date(date).get(fragment).to_string(),
        None => fragments.get(fragment).to_string(),
    }
}
