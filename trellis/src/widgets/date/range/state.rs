//! Range date picker state.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use chrono::NaiveDate;

use crate::error::DateError;
use crate::widgets::callback::Callback;
use crate::widgets::date::calendar::Calendar;
use crate::widgets::date::input::{DateFragments, Fragment, FragmentStatus};
use crate::widgets::date::{DateValue, Endpoint, RangeChange};
use crate::widgets::events::FocusRequest;

/// Unique identifier for a RangeDatePicker instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RangeId(usize);

impl RangeId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for RangeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "range-{}", self.0)
    }
}

/// The part of the widget an element ID refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Root,
    Group(Endpoint),
    Placeholder(Endpoint),
    Fragment(Endpoint, Fragment),
    Grid,
    Cell(NaiveDate),
    PrevMonth,
    NextMonth,
    Cancel,
    Confirm,
    Other,
}

#[derive(Debug)]
pub(super) struct RangeInner {
    pub(super) disabled: bool,
    pub(super) with_buttons: bool,
    pub(super) start: DateValue,
    pub(super) end: DateValue,
    /// Values restored when the popup closes without confirming
    pub(super) confirmed_start: Option<NaiveDate>,
    pub(super) confirmed_end: Option<NaiveDate>,
    pub(super) start_input: DateFragments,
    pub(super) end_input: DateFragments,
    /// Endpoint the calendar writes to
    pub(super) active: Option<Endpoint>,
    pub(super) open: bool,
    /// Endpoints explicitly chosen since the popup opened
    pub(super) selected_start: bool,
    pub(super) selected_end: bool,
    pub(super) calendar: Calendar,
    pub(super) focus_request: Option<FocusRequest>,
}

impl RangeInner {
    pub(super) fn prefix(&self) -> &str {
        self.calendar.prefix()
    }

    // -------------------------------------------------------------------------
    // Element IDs
    // -------------------------------------------------------------------------

    pub(super) fn group_id(&self, endpoint: Endpoint) -> String {
        format!("{}-{}", self.prefix(), endpoint.as_str())
    }

    pub(super) fn placeholder_id(&self, endpoint: Endpoint) -> String {
        format!("{}-placeholder", self.group_id(endpoint))
    }

    pub(super) fn fragment_id(&self, endpoint: Endpoint, fragment: Fragment) -> String {
        format!("{}-{}", self.group_id(endpoint), fragment.name())
    }

    pub(super) fn popup_id(&self) -> String {
        format!("{}-calendar", self.prefix())
    }

    pub(super) fn cancel_id(&self) -> String {
        format!("{}-cancel", self.prefix())
    }

    pub(super) fn confirm_id(&self) -> String {
        format!("{}-confirm", self.prefix())
    }

    pub(super) fn target(&self, id: &str) -> Target {
        if id == self.prefix() {
            return Target::Root;
        }
        for endpoint in [Endpoint::Start, Endpoint::End] {
            if id == self.group_id(endpoint) {
                return Target::Group(endpoint);
            }
            if id == self.placeholder_id(endpoint) {
                return Target::Placeholder(endpoint);
            }
            for fragment in Fragment::ALL {
                if id == self.fragment_id(endpoint, fragment) {
                    return Target::Fragment(endpoint, fragment);
                }
            }
        }
        if let Some(date) = self.calendar.parse_cell(id) {
            return Target::Cell(date);
        }
        if id == self.calendar.grid_id() {
            Target::Grid
        } else if id == self.calendar.prev_id() {
            Target::PrevMonth
        } else if id == self.calendar.next_id() {
            Target::NextMonth
        } else if id == self.cancel_id() {
            Target::Cancel
        } else if id == self.confirm_id() {
            Target::Confirm
        } else {
            Target::Other
        }
    }

    // -------------------------------------------------------------------------
    // Endpoint access
    // -------------------------------------------------------------------------

    pub(super) fn value(&self, endpoint: Endpoint) -> DateValue {
        match endpoint {
            Endpoint::Start => self.start,
            Endpoint::End => self.end,
        }
    }

    fn value_mut(&mut self, endpoint: Endpoint) -> &mut DateValue {
        match endpoint {
            Endpoint::Start => &mut self.start,
            Endpoint::End => &mut self.end,
        }
    }

    pub(super) fn fragments(&self, endpoint: Endpoint) -> &DateFragments {
        match endpoint {
            Endpoint::Start => &self.start_input,
            Endpoint::End => &self.end_input,
        }
    }

    pub(super) fn fragments_mut(&mut self, endpoint: Endpoint) -> &mut DateFragments {
        match endpoint {
            Endpoint::Start => &mut self.start_input,
            Endpoint::End => &mut self.end_input,
        }
    }

    fn both_selected(&self) -> bool {
        self.selected_start && self.selected_end
    }

    fn mark_selected(&mut self, endpoint: Endpoint) {
        match endpoint {
            Endpoint::Start => self.selected_start = true,
            Endpoint::End => self.selected_end = true,
        }
    }

    pub(super) fn change(&self) -> RangeChange {
        RangeChange::new(self.start, self.end)
    }

    /// Set an endpoint and make its fragments show it.
    fn set_endpoint(&mut self, endpoint: Endpoint, value: DateValue) {
        *self.value_mut(endpoint) = value;
        match value {
            DateValue::Date(date) => *self.fragments_mut(endpoint) = DateFragments::from_date(date),
            DateValue::Empty => self.fragments_mut(endpoint).clear(),
            DateValue::Invalid => {}
        }
    }

    /// Clear the opposite endpoint if `endpoint` now inverts the range.
    fn clear_if_inverted(&mut self, endpoint: Endpoint) {
        let (Some(start), Some(end)) = (self.start.as_date(), self.end.as_date()) else {
            return;
        };
        if start > end {
            let other = endpoint.other();
            log::debug!(
                "[{}] {} {} inverts the range, clearing {}",
                self.prefix(),
                endpoint.as_str(),
                self.value(endpoint),
                other.as_str()
            );
            self.set_endpoint(other, DateValue::Empty);
        }
    }

    /// Record an explicit choice for `endpoint` and hand over.
    fn record_selection(&mut self, endpoint: Endpoint) {
        self.mark_selected(endpoint);
        self.hand_over(endpoint);
    }

    /// Pass the calendar and focus from `endpoint` to the other one, until
    /// both were chosen in this session.
    fn hand_over(&mut self, endpoint: Endpoint) {
        if self.both_selected() {
            return;
        }
        let other = endpoint.other();
        self.active = Some(other);
        self.focus_request = Some(FocusRequest::Focus(self.fragment_id(other, Fragment::Day)));
    }

    // -------------------------------------------------------------------------
    // Calendar
    // -------------------------------------------------------------------------

    fn select_any(&self) -> bool {
        !self.selected_start && !self.selected_end
    }

    /// A cell is disabled when choosing it for the active endpoint would
    /// invert the range, except before anything was chosen this session.
    pub(super) fn is_cell_disabled(&self, day: NaiveDate) -> bool {
        if self.select_any() {
            return false;
        }
        match self.active {
            Some(Endpoint::End) => self.start.as_date().is_some_and(|start| day < start),
            Some(Endpoint::Start) => self.end.as_date().is_some_and(|end| day > end),
            None => false,
        }
    }

    /// Commit a calendar date to the active endpoint.
    pub(super) fn commit_date(&mut self, date: NaiveDate) -> bool {
        if self.is_cell_disabled(date) {
            log::trace!("[{}] {} is disabled", self.prefix(), date);
            return false;
        }
        let endpoint = self.active.unwrap_or(Endpoint::Start);
        self.record_selection(endpoint);
        self.set_endpoint(endpoint, DateValue::Date(date));
        self.clear_if_inverted(endpoint);
        self.calendar.set_focused(date);
        log::debug!("[{}] {} = {} (calendar)", self.prefix(), endpoint.as_str(), date);
        true
    }

    pub(super) fn hover(&mut self, date: Option<NaiveDate>) -> bool {
        let date = date.filter(|date| !self.is_cell_disabled(*date));
        self.calendar.set_hovered(date)
    }

    // -------------------------------------------------------------------------
    // Typed input
    // -------------------------------------------------------------------------

    /// Re-evaluate the fragments of `endpoint` after an edit.
    ///
    /// Returns the pair to report, or `None` when the fragments spell an
    /// impossible date, which leaves the state untouched. `completed`
    /// marks edits that finish the year, which pass the calendar on to the
    /// other endpoint.
    pub(super) fn edit(&mut self, endpoint: Endpoint, completed: bool) -> Option<RangeChange> {
        match self.fragments(endpoint).status() {
            FragmentStatus::Valid(date) => {
                if self.value(endpoint) != DateValue::Date(date) {
                    self.mark_selected(endpoint);
                }
                *self.value_mut(endpoint) = DateValue::Date(date);
                self.clear_if_inverted(endpoint);
                self.calendar.set_focused(date);
                if completed {
                    self.hand_over(endpoint);
                }
                log::debug!("[{}] {} = {} (typed)", self.prefix(), endpoint.as_str(), date);
            }
            FragmentStatus::Invalid => {
                log::debug!(
                    "[{}] {} fragments are not a calendar date, ignored",
                    self.prefix(),
                    endpoint.as_str()
                );
                return None;
            }
            FragmentStatus::Incomplete => *self.value_mut(endpoint) = DateValue::Invalid,
            FragmentStatus::Empty => *self.value_mut(endpoint) = DateValue::Empty,
        }
        Some(self.change())
    }

    // -------------------------------------------------------------------------
    // Popup
    // -------------------------------------------------------------------------

    /// Open for a new session. The calendar moves to the date of the
    /// endpoint focus entered through.
    pub(super) fn open_session(&mut self, entered: Option<Endpoint>) {
        self.open = true;
        self.selected_start = false;
        self.selected_end = false;
        if let Some(date) = entered.and_then(|endpoint| self.value(endpoint).as_date()) {
            self.calendar.set_focused(date);
        }
        log::debug!("[{}] opened", self.prefix());
    }

    fn revert(&mut self) {
        self.set_endpoint(Endpoint::Start, self.confirmed_start.into());
        self.set_endpoint(Endpoint::End, self.confirmed_end.into());
    }

    fn finish_session(&mut self) {
        self.open = false;
        self.active = None;
        self.calendar.set_hovered(None);
    }

    /// Focus left the widget: confirm a complete pair, otherwise revert.
    /// Buttons mode always reverts; confirming is the button's job.
    pub(super) fn close(&mut self) -> RangeChange {
        let revert = self.with_buttons || !self.start.is_date() || !self.end.is_date();
        if revert {
            self.revert();
        } else {
            self.confirmed_start = self.start.as_date();
            self.confirmed_end = self.end.as_date();
        }
        self.finish_session();
        log::debug!(
            "[{}] closed ({}): {}",
            self.prefix(),
            if revert { "reverted" } else { "confirmed" },
            self.change()
        );
        self.change()
    }

    pub(super) fn cancel(&mut self) -> RangeChange {
        self.revert();
        self.finish_session();
        log::debug!("[{}] cancelled", self.prefix());
        self.change()
    }

    /// Accept the edited pair. An endpoint holding invalid text keeps its
    /// previously confirmed value.
    pub(super) fn confirm(&mut self) -> RangeChange {
        if self.start != DateValue::Invalid {
            self.confirmed_start = self.start.as_date();
        }
        if self.end != DateValue::Invalid {
            self.confirmed_end = self.end.as_date();
        }
        self.finish_session();
        log::debug!("[{}] confirmed {}", self.prefix(), self.change());
        self.change()
    }

    /// Whether the endpoint's placeholder covers its inputs.
    pub(super) fn shows_placeholder(&self, endpoint: Endpoint) -> bool {
        self.active != Some(endpoint)
            && self.value(endpoint) == DateValue::Empty
            && self.fragments(endpoint).is_empty()
            && self.preview(endpoint).is_none()
    }

    /// Hovered date previewed in the active endpoint's inputs.
    pub(super) fn preview(&self, endpoint: Endpoint) -> Option<NaiveDate> {
        self.calendar.hovered().filter(|_| self.active == Some(endpoint))
    }
}

/// A start/end date range picker.
#[derive(Debug, Clone)]
pub struct RangeDatePicker {
    id: RangeId,
    pub(super) inner: Arc<RwLock<RangeInner>>,
    pub(super) dirty: Arc<AtomicBool>,
    on_change: Option<Callback<RangeChange>>,
}

impl Default for RangeDatePicker {
    fn default() -> Self {
        Self::new()
    }
}

impl RangeDatePicker {
    pub fn new() -> Self {
        let id = RangeId::new();
        let today = chrono::Local::now().date_naive();
        Self {
            id,
            inner: Arc::new(RwLock::new(RangeInner {
                disabled: false,
                with_buttons: false,
                start: DateValue::Empty,
                end: DateValue::Empty,
                confirmed_start: None,
                confirmed_end: None,
                start_input: DateFragments::new(),
                end_input: DateFragments::new(),
                active: None,
                open: false,
                selected_start: false,
                selected_end: false,
                calendar: Calendar::new(id.to_string(), today),
                focus_request: None,
            })),
            dirty: Arc::new(AtomicBool::new(false)),
            on_change: None,
        }
    }

    pub fn id_prefix(self, prefix: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.calendar.set_prefix(prefix);
        }
        self
    }

    /// Override "today" (the calendar's `aria-current` and initial page).
    pub fn today(self, today: NaiveDate) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.calendar.set_today(today);
        }
        self
    }

    /// Initial value, without invoking the callback.
    pub fn value(self, start: DateValue, end: DateValue) -> Self {
        self.set_value(start, end);
        self.dirty.store(false, Ordering::SeqCst);
        self
    }

    pub fn disabled(self, disabled: bool) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.disabled = disabled;
        }
        self
    }

    /// Show Cancel/Confirm buttons. Closing any other way then reverts.
    pub fn with_buttons(self, with_buttons: bool) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.with_buttons = with_buttons;
        }
        self
    }

    pub fn on_change(mut self, callback: impl Into<Callback<RangeChange>>) -> Self {
        self.on_change = Some(callback.into());
        self
    }

    pub fn id(&self) -> RangeId {
        self.id
    }

    pub(super) fn read<R>(&self, f: impl FnOnce(&RangeInner) -> R) -> Option<R> {
        self.inner.read().ok().map(|guard| f(&guard))
    }

    pub(super) fn update<R>(&self, f: impl FnOnce(&mut RangeInner) -> (bool, R)) -> Option<R> {
        let mut guard = self.inner.write().ok()?;
        let (changed, result) = f(&mut guard);
        if changed {
            self.dirty.store(true, Ordering::SeqCst);
        }
        Some(result)
    }

    pub(super) fn notify(&self, change: Option<RangeChange>) {
        if let (Some(change), Some(callback)) = (change, &self.on_change) {
            callback.call(&change);
        }
    }

    // -------------------------------------------------------------------------
    // Element IDs
    // -------------------------------------------------------------------------

    pub fn root_id(&self) -> String {
        self.read(|inner| inner.prefix().to_string())
            .unwrap_or_default()
    }

    pub fn fragment_id(&self, endpoint: Endpoint, fragment: Fragment) -> String {
        self.read(|inner| inner.fragment_id(endpoint, fragment))
            .unwrap_or_default()
    }

    pub fn placeholder_id(&self, endpoint: Endpoint) -> String {
        self.read(|inner| inner.placeholder_id(endpoint))
            .unwrap_or_default()
    }

    pub fn grid_id(&self) -> String {
        self.read(|inner| inner.calendar.grid_id()).unwrap_or_default()
    }

    pub fn cell_id(&self, date: NaiveDate) -> String {
        self.read(|inner| inner.calendar.cell_id(date))
            .unwrap_or_default()
    }

    pub fn prev_month_id(&self) -> String {
        self.read(|inner| inner.calendar.prev_id()).unwrap_or_default()
    }

    pub fn next_month_id(&self) -> String {
        self.read(|inner| inner.calendar.next_id()).unwrap_or_default()
    }

    pub fn cancel_id(&self) -> String {
        self.read(RangeInner::cancel_id).unwrap_or_default()
    }

    pub fn confirm_id(&self) -> String {
        self.read(RangeInner::confirm_id).unwrap_or_default()
    }

    /// Classify an element ID of this widget.
    pub fn target(&self, id: &str) -> Target {
        self.read(|inner| inner.target(id)).unwrap_or(Target::Other)
    }

    // -------------------------------------------------------------------------
    // Values
    // -------------------------------------------------------------------------

    pub fn start(&self) -> DateValue {
        self.read(|inner| inner.start).unwrap_or_default()
    }

    pub fn end(&self) -> DateValue {
        self.read(|inner| inner.end).unwrap_or_default()
    }

    /// The pair currently being edited.
    pub fn range(&self) -> RangeChange {
        self.read(RangeInner::change).unwrap_or_default()
    }

    /// The last confirmed pair.
    pub fn confirmed(&self) -> RangeChange {
        self.read(|inner| {
            RangeChange::new(inner.confirmed_start.into(), inner.confirmed_end.into())
        })
        .unwrap_or_default()
    }

    pub fn fragments(&self, endpoint: Endpoint) -> DateFragments {
        self.read(|inner| inner.fragments(endpoint).clone())
            .unwrap_or_default()
    }

    /// Replace both values from outside. `Invalid` is treated as empty.
    /// The new pair also becomes the confirmed one. No callback.
    pub fn set_value(&self, start: DateValue, end: DateValue) {
        let clean = |value: DateValue| match value {
            DateValue::Invalid => DateValue::Empty,
            other => other,
        };
        self.update(|inner| {
            inner.set_endpoint(Endpoint::Start, clean(start));
            inner.set_endpoint(Endpoint::End, clean(end));
            inner.confirmed_start = inner.start.as_date();
            inner.confirmed_end = inner.end.as_date();
            if let Some(date) = inner.start.as_date() {
                inner.calendar.set_focused(date);
            }
            (true, ())
        });
    }

    /// [`set_value`](Self::set_value) from the external string forms.
    pub fn set_value_str(&self, start: &str, end: &str) -> Result<(), DateError> {
        let start = DateValue::parse(start)?;
        let end = DateValue::parse(end)?;
        self.set_value(start, end);
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Session state
    // -------------------------------------------------------------------------

    pub fn is_open(&self) -> bool {
        self.read(|inner| inner.open).unwrap_or(false)
    }

    pub fn is_disabled(&self) -> bool {
        self.read(|inner| inner.disabled).unwrap_or(false)
    }

    /// Endpoint the calendar currently writes to.
    pub fn active(&self) -> Option<Endpoint> {
        self.read(|inner| inner.active).flatten()
    }

    pub fn focused_date(&self) -> Option<NaiveDate> {
        self.read(|inner| inner.calendar.focused())
    }

    pub fn hovered(&self) -> Option<NaiveDate> {
        self.read(|inner| inner.calendar.hovered()).flatten()
    }

    pub fn is_cell_disabled(&self, date: NaiveDate) -> bool {
        self.read(|inner| inner.is_cell_disabled(date))
            .unwrap_or(false)
    }

    /// Open the popup with `endpoint` active, as focusing its input would.
    pub fn activate(&self, endpoint: Endpoint) {
        self.update(|inner| {
            if inner.disabled {
                return (false, ());
            }
            if !inner.open {
                inner.open_session(Some(endpoint));
            }
            inner.active = Some(endpoint);
            (true, ())
        });
    }

    // -------------------------------------------------------------------------
    // Editing
    // -------------------------------------------------------------------------

    /// Replace all three fragments of `endpoint` at once, as if typed, and
    /// report the result. Nothing happens (and nothing is reported) when
    /// they spell an impossible date.
    pub fn type_fragments(&self, endpoint: Endpoint, day: &str, month: &str, year: &str) -> bool {
        let change = self
            .update(|inner| {
                if inner.disabled {
                    return (false, None);
                }
                let before = inner.fragments(endpoint).clone();
                let fragments = inner.fragments_mut(endpoint);
                fragments.set(Fragment::Day, day);
                fragments.set(Fragment::Month, month);
                fragments.set(Fragment::Year, year);
                match inner.edit(endpoint, true) {
                    Some(change) => (true, Some(change)),
                    None => {
                        *inner.fragments_mut(endpoint) = before;
                        (false, None)
                    }
                }
            })
            .flatten();
        let reported = change.is_some();
        self.notify(change);
        reported
    }

    /// Commit `date` to the active endpoint as a calendar click would.
    /// Returns false for disabled cells.
    pub fn select_date(&self, date: NaiveDate) -> bool {
        self.update(|inner| {
            let committed = !inner.disabled && inner.commit_date(date);
            (committed, committed)
        })
        .unwrap_or(false)
    }

    pub fn hover(&self, date: Option<NaiveDate>) -> bool {
        self.update(|inner| {
            let changed = inner.hover(date);
            (changed, changed)
        })
        .unwrap_or(false)
    }

    /// Move the calendar cursor by whole days.
    pub fn move_focus(&self, days: i64) -> bool {
        self.update(|inner| {
            let moved = inner.calendar.move_days(days);
            (moved, moved)
        })
        .unwrap_or(false)
    }

    /// Flip the calendar page by whole months.
    pub fn move_month(&self, months: i32) -> bool {
        self.update(|inner| {
            let moved = inner.calendar.move_months(months);
            (moved, moved)
        })
        .unwrap_or(false)
    }

    // -------------------------------------------------------------------------
    // Closing
    // -------------------------------------------------------------------------

    /// Close as focus leaving would, and report the resulting pair.
    pub fn close(&self) -> bool {
        let change = self
            .update(|inner| {
                if inner.open {
                    (true, Some(inner.close()))
                } else {
                    (false, None)
                }
            })
            .flatten();
        let closed = change.is_some();
        self.notify(change);
        closed
    }

    /// Revert to the confirmed pair, close and report it.
    pub fn cancel(&self) {
        let change = self.update(|inner| (true, inner.cancel()));
        self.notify(change);
    }

    /// Accept the edited pair, close and report it.
    pub fn confirm(&self) {
        let change = self.update(|inner| (true, inner.confirm()));
        self.notify(change);
    }
}
