//! Single-date picker - a focusable month grid.
//!
//! Focus stays on the grid; `aria-activedescendant` names the cell under
//! the cursor.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use ariadom::{Element, Key, Modifiers, Role};
use chrono::NaiveDate;

use super::calendar::{Calendar, WEEKDAYS, cell_label, key_delta};
use crate::widgets::callback::Callback;
use crate::widgets::events::{EventResult, FocusRequest, WidgetEvents};
use crate::widgets::traits::AnyWidget;

/// Unique identifier for a DatePicker instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DatePickerId(usize);

impl DatePickerId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for DatePickerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "date-{}", self.0)
    }
}

#[derive(Debug)]
struct PickerInner {
    calendar: Calendar,
    selected: NaiveDate,
}

/// A month grid selecting a single date. Starts with today selected.
#[derive(Debug, Clone)]
pub struct DatePicker {
    id: DatePickerId,
    inner: Arc<RwLock<PickerInner>>,
    dirty: Arc<AtomicBool>,
    on_change: Option<Callback<NaiveDate>>,
}

impl Default for DatePicker {
    fn default() -> Self {
        Self::new()
    }
}

impl DatePicker {
    pub fn new() -> Self {
        let id = DatePickerId::new();
        let today = chrono::Local::now().date_naive();
        Self {
            id,
            inner: Arc::new(RwLock::new(PickerInner {
                calendar: Calendar::new(id.to_string(), today),
                selected: today,
            })),
            dirty: Arc::new(AtomicBool::new(false)),
            on_change: None,
        }
    }

    /// Override "today". Cursor and selection move there.
    pub fn today(self, today: NaiveDate) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.calendar.set_today(today);
            guard.selected = today;
        }
        self
    }

    /// Initial selection, without invoking the callback.
    pub fn value(self, date: NaiveDate) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.selected = date;
            guard.calendar.set_focused(date);
        }
        self
    }

    pub fn id_prefix(self, prefix: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.calendar.set_prefix(prefix);
        }
        self
    }

    pub fn on_change(mut self, callback: impl Into<Callback<NaiveDate>>) -> Self {
        self.on_change = Some(callback.into());
        self
    }

    pub fn id(&self) -> DatePickerId {
        self.id
    }

    fn read<R>(&self, f: impl FnOnce(&PickerInner) -> R) -> Option<R> {
        self.inner.read().ok().map(|guard| f(&guard))
    }

    fn update<R>(&self, f: impl FnOnce(&mut PickerInner) -> (bool, R)) -> Option<R> {
        let mut guard = self.inner.write().ok()?;
        let (changed, result) = f(&mut guard);
        if changed {
            self.dirty.store(true, Ordering::SeqCst);
        }
        Some(result)
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.read(|inner| inner.selected)
    }

    pub fn focused_date(&self) -> Option<NaiveDate> {
        self.read(|inner| inner.calendar.focused())
    }

    pub fn grid_id(&self) -> String {
        self.read(|inner| inner.calendar.grid_id()).unwrap_or_default()
    }

    pub fn cell_id(&self, date: NaiveDate) -> String {
        self.read(|inner| inner.calendar.cell_id(date))
            .unwrap_or_default()
    }

    /// Move the cursor by `days` without selecting.
    pub fn move_focus(&self, days: i64) -> bool {
        self.update(|inner| {
            let moved = inner.calendar.move_days(days);
            (moved, moved)
        })
        .unwrap_or(false)
    }

    /// Select `date`, move the cursor there and invoke the callback.
    pub fn select(&self, date: NaiveDate) {
        self.update(|inner| {
            inner.selected = date;
            inner.calendar.set_focused(date);
            log::debug!("[{}] selected {}", inner.calendar.prefix(), date);
            (true, ())
        });
        if let Some(callback) = &self.on_change {
            callback.call(&date);
        }
    }
}

impl WidgetEvents for DatePicker {
    fn on_key(&self, _target: &str, key: Key, modifiers: Modifiers) -> EventResult {
        if modifiers.ctrl || modifiers.alt {
            return EventResult::Ignored;
        }
        if let Some(days) = key_delta(key) {
            self.move_focus(days);
            return EventResult::Consumed;
        }
        if key.is_confirm()
            && let Some(date) = self.focused_date()
        {
            self.select(date);
            return EventResult::Consumed;
        }
        EventResult::Ignored
    }

    fn on_click(&self, target: &str) -> EventResult {
        match self.read(|inner| inner.calendar.parse_cell(target)).flatten() {
            Some(date) => {
                self.select(date);
                EventResult::Consumed
            }
            None => EventResult::Ignored,
        }
    }
}

impl AnyWidget for DatePicker {
    fn id_string(&self) -> String {
        self.id.to_string()
    }

    fn element(&self) -> Element {
        self.read(render).unwrap_or_default()
    }

    fn containment_root(&self) -> String {
        self.read(|inner| inner.calendar.prefix().to_string())
            .unwrap_or_default()
    }

    fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    fn take_focus_request(&self) -> Option<FocusRequest> {
        None
    }
}

fn render(inner: &PickerInner) -> Element {
    let calendar = &inner.calendar;
    let prefix = calendar.prefix();

    let header = Element::div()
        .id(format!("{prefix}-weekdays"))
        .children(WEEKDAYS.iter().enumerate().map(|(column, day)| {
            Element::span()
                .id(format!("{prefix}-weekday-{column}"))
                .text(*day)
        }));

    let rows = calendar.weeks().into_iter().enumerate().map(|(week, days)| {
        Element::div()
            .id(calendar.row_id(week))
            .role(Role::Row)
            .children(days.into_iter().map(|day| {
                Element::div()
                    .id(calendar.cell_id(day))
                    .role(Role::Gridcell)
                    .aria_bool("selected", day == inner.selected)
                    .attr_opt("aria-current", calendar.is_today(day).then_some("date"))
                    .aria("label", cell_label(day))
                    .clickable(true)
                    .text(day.format("%-d").to_string())
            }))
    });

    let grid = Element::div()
        .id(calendar.grid_id())
        .role(Role::Grid)
        .tabindex(0)
        .aria("activedescendant", calendar.cell_id(calendar.focused()))
        .child(header)
        .children(rows);

    Element::div().id(prefix).child(grid)
}
