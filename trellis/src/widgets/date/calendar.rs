//! Month grid shared by the date widgets.

use ariadom::Key;
use chrono::{Datelike, Days, Months, NaiveDate};

use super::ISO_FORMAT;

/// Rows in the month grid. Six weeks always cover a whole month.
pub const WEEKS: usize = 6;

/// Column headers, Monday first.
pub const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Cursor and hover state of a month grid.
///
/// The grid shown is always the month of the focused date, so moving the
/// cursor across a month boundary flips the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calendar {
    prefix: String,
    focused: NaiveDate,
    hovered: Option<NaiveDate>,
    today: NaiveDate,
}

impl Calendar {
    pub fn new(prefix: impl Into<String>, today: NaiveDate) -> Self {
        Self {
            prefix: prefix.into(),
            focused: today,
            hovered: None,
            today,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn set_prefix(&mut self, prefix: impl Into<String>) {
        self.prefix = prefix.into();
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Replace "today" and move the cursor there.
    pub fn set_today(&mut self, today: NaiveDate) {
        self.today = today;
        self.focused = today;
    }

    pub fn is_today(&self, date: NaiveDate) -> bool {
        date == self.today
    }

    // -------------------------------------------------------------------------
    // Cursor
    // -------------------------------------------------------------------------

    pub fn focused(&self) -> NaiveDate {
        self.focused
    }

    pub fn set_focused(&mut self, date: NaiveDate) -> bool {
        let changed = self.focused != date;
        self.focused = date;
        changed
    }

    /// Move the cursor by whole days. Dates past chrono's range are ignored.
    pub fn move_days(&mut self, days: i64) -> bool {
        let magnitude = Days::new(days.unsigned_abs());
        let next = if days >= 0 {
            self.focused.checked_add_days(magnitude)
        } else {
            self.focused.checked_sub_days(magnitude)
        };
        match next {
            Some(date) => self.set_focused(date),
            None => false,
        }
    }

    /// Move the cursor by whole months, clamping the day to the month length.
    pub fn move_months(&mut self, months: i32) -> bool {
        let magnitude = Months::new(months.unsigned_abs());
        let next = if months >= 0 {
            self.focused.checked_add_months(magnitude)
        } else {
            self.focused.checked_sub_months(magnitude)
        };
        match next {
            Some(date) => self.set_focused(date),
            None => false,
        }
    }

    // -------------------------------------------------------------------------
    // Hover
    // -------------------------------------------------------------------------

    pub fn hovered(&self) -> Option<NaiveDate> {
        self.hovered
    }

    pub fn set_hovered(&mut self, date: Option<NaiveDate>) -> bool {
        let changed = self.hovered != date;
        self.hovered = date;
        changed
    }

    // -------------------------------------------------------------------------
    // Layout
    // -------------------------------------------------------------------------

    /// The six weeks shown, starting on the Monday on or before the 1st.
    pub fn weeks(&self) -> Vec<Vec<NaiveDate>> {
        let first = self
            .focused
            .checked_sub_days(Days::new(u64::from(self.focused.day0())))
            .unwrap_or(self.focused);
        let offset = u64::from(first.weekday().num_days_from_monday());
        let start = first.checked_sub_days(Days::new(offset)).unwrap_or(first);

        let days: Vec<NaiveDate> = start.iter_days().take(WEEKS * 7).collect();
        days.chunks(7).map(<[NaiveDate]>::to_vec).collect()
    }

    /// Month and year of the page, e.g. `October 2026`.
    pub fn heading(&self) -> String {
        self.focused.format("%B %Y").to_string()
    }

    pub fn grid_id(&self) -> String {
        format!("{}-grid", self.prefix)
    }

    pub fn prev_id(&self) -> String {
        format!("{}-prev-month", self.prefix)
    }

    pub fn next_id(&self) -> String {
        format!("{}-next-month", self.prefix)
    }

    pub fn row_id(&self, week: usize) -> String {
        format!("{}-week-{}", self.prefix, week)
    }

    /// Element ID of the cell for `date`, also used as `aria-activedescendant`.
    pub fn cell_id(&self, date: NaiveDate) -> String {
        format!("{}-{}", self.prefix, date.format(ISO_FORMAT))
    }

    /// Map a cell ID back to its date.
    pub fn parse_cell(&self, id: &str) -> Option<NaiveDate> {
        let rest = id.strip_prefix(self.prefix.as_str())?.strip_prefix('-')?;
        NaiveDate::parse_from_str(rest, ISO_FORMAT).ok()
    }
}

/// Day offset for a grid navigation key.
pub fn key_delta(key: Key) -> Option<i64> {
    match key {
        Key::Left => Some(-1),
        Key::Right => Some(1),
        Key::Up => Some(-7),
        Key::Down => Some(7),
        _ => None,
    }
}

/// Accessible name of a cell, e.g. `7 March 2026`.
pub fn cell_label(date: NaiveDate) -> String {
    date.format("%-d %B %Y").to_string()
}

/// Whether `day` lies in the committed range (endpoints included).
pub fn in_range(day: NaiveDate, start: Option<NaiveDate>, end: Option<NaiveDate>) -> bool {
    if start == Some(day) || end == Some(day) {
        return true;
    }
    matches!((start, end), (Some(start), Some(end)) if start < day && day < end)
}

/// Whether `day` is part of the hover preview: the hovered day itself, or
/// strictly between an endpoint and a hovered date on its far side.
pub fn in_hover_preview(
    day: NaiveDate,
    hovered: Option<NaiveDate>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> bool {
    let Some(hovered) = hovered else {
        return false;
    };
    if day == hovered {
        return true;
    }
    let after_start = start.is_some_and(|start| hovered > start && start < day && day < hovered);
    let before_end = end.is_some_and(|end| hovered < end && hovered < day && day < end);
    after_start || before_end
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_cell_ids_round_trip_and_reject_suffixes() {
        let calendar = Calendar::new("range-0", date(2026, 10, 19));
        let id = calendar.cell_id(date(2026, 10, 1));
        assert_eq!(id, "range-0-2026-10-01");
        assert_eq!(calendar.parse_cell(&id), Some(date(2026, 10, 1)));
        assert_eq!(calendar.parse_cell("range-0-2026-10-01-cell"), None);
        assert_eq!(calendar.parse_cell("range-0-grid"), None);
        assert_eq!(calendar.parse_cell("other-2026-10-01"), None);
    }

    #[test]
    fn test_month_move_clamps_day() {
        let mut calendar = Calendar::new("c", date(2024, 1, 31));
        assert!(calendar.move_months(1));
        assert_eq!(calendar.focused(), date(2024, 2, 29));
        assert!(calendar.move_months(-1));
        assert_eq!(calendar.focused(), date(2024, 1, 29));
    }
}
