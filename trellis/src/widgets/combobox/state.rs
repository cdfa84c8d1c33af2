//! Combobox widget state.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

use super::ids::ElementIds;
use super::item::{EMPTY_LABEL, Item, position_of, warn_duplicate_ids};
use crate::widgets::callback::Callback;
use crate::widgets::events::FocusRequest;

/// Unique identifier for a Combobox widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComboboxId(usize);

impl ComboboxId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for ComboboxId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "combobox-{}", self.0)
    }
}

/// Accessibility pattern used by a [`Combobox`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComboboxVariant {
    /// Pointer-only dropdown without ARIA roles. Keys are ignored.
    Simple,
    /// Focus stays on the input; `aria-activedescendant` names the candidate.
    #[default]
    ActiveDescendant,
    /// Focus moves to the candidate option (roving tabindex).
    RovingTabindex,
}

/// The option currently highlighted while the popup is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Candidate {
    /// The "no selection" option.
    Empty,
    /// The item at this index.
    Item(usize),
}

/// Internal state for a Combobox widget.
#[derive(Debug)]
pub(super) struct ComboboxInner {
    pub(super) variant: ComboboxVariant,
    pub(super) ids: ElementIds,
    pub(super) label: String,
    pub(super) items: Vec<Item>,
    /// Whether the "no selection" option is offered
    pub(super) empty_option: bool,
    pub(super) disabled: bool,
    /// Committed value (index into `items`)
    pub(super) selected: Option<usize>,
    /// Transient candidate, only meaningful while expanded
    pub(super) focused: Option<Candidate>,
    pub(super) expanded: bool,
    /// Swallows the hover that follows keyboard navigation
    pub(super) suppress_hover: bool,
    /// Whether focus is currently somewhere inside the wrapper
    pub(super) focus_within: bool,
    /// The popup was just opened by focus; the click that caused the
    /// focus must not toggle it closed again
    pub(super) focus_opened: bool,
    pub(super) focus_request: Option<FocusRequest>,
}

impl ComboboxInner {
    pub(super) fn candidate_item(&self, candidate: Candidate) -> Option<&Item> {
        match candidate {
            Candidate::Empty => None,
            Candidate::Item(index) => self.items.get(index),
        }
    }

    /// Element ID of a candidate option.
    pub(super) fn candidate_id(&self, candidate: Candidate) -> Option<String> {
        match candidate {
            Candidate::Empty => Some(self.ids.empty_option()),
            Candidate::Item(index) => self.items.get(index).map(|item| self.ids.option(item.id)),
        }
    }

    /// Map an option element ID back to a candidate.
    pub(super) fn candidate_for(&self, element_id: &str) -> Option<Candidate> {
        match self.ids.parse_option(element_id)? {
            None if self.empty_option => Some(Candidate::Empty),
            None => None,
            Some(item_id) => self
                .items
                .iter()
                .position(|item| item.id == item_id)
                .map(Candidate::Item),
        }
    }

    /// The candidate an opening popup starts on: the selection, else the
    /// first item, else the empty option.
    fn initial_candidate(&self) -> Option<Candidate> {
        match self.selected {
            Some(index) => Some(Candidate::Item(index)),
            None if self.empty_option && self.items.is_empty() => Some(Candidate::Empty),
            None if self.items.is_empty() => None,
            None => Some(Candidate::Item(0)),
        }
    }

    fn next_candidate(&self) -> Option<Candidate> {
        let last = self.items.len().checked_sub(1);
        match (self.focused, last) {
            (Some(Candidate::Item(index)), Some(last)) => Some(Candidate::Item((index + 1).min(last))),
            (_, Some(_)) => Some(Candidate::Item(0)),
            (current, None) => current.or(self.empty_option.then_some(Candidate::Empty)),
        }
    }

    fn prev_candidate(&self) -> Option<Candidate> {
        match self.focused {
            Some(Candidate::Item(0)) if self.empty_option => Some(Candidate::Empty),
            Some(Candidate::Item(index)) => Some(Candidate::Item(index.saturating_sub(1))),
            Some(Candidate::Empty) => Some(Candidate::Empty),
            None => match self.items.len() {
                0 => self.empty_option.then_some(Candidate::Empty),
                len => Some(Candidate::Item(len - 1)),
            },
        }
    }

    /// Open the popup. Returns true if it was closed.
    pub(super) fn open(&mut self) -> bool {
        if self.expanded {
            return false;
        }
        self.expanded = true;
        self.focused = self.initial_candidate();
        if self.variant == ComboboxVariant::RovingTabindex {
            self.request_candidate_focus();
        }
        log::debug!(
            "[{}] expanded, candidate {:?}",
            self.ids.prefix(),
            self.focused
        );
        true
    }

    /// Close the popup, discarding the candidate. Returns true if it was open.
    pub(super) fn close(&mut self) -> bool {
        if !self.expanded {
            return false;
        }
        self.expanded = false;
        self.focused = None;
        self.suppress_hover = false;
        log::debug!("[{}] collapsed", self.ids.prefix());
        true
    }

    pub(super) fn move_candidate(&mut self, forward: bool) {
        self.focused = if forward {
            self.next_candidate()
        } else {
            self.prev_candidate()
        };
        self.suppress_hover = true;
        if self.variant == ComboboxVariant::RovingTabindex {
            self.request_candidate_focus();
        }
        log::trace!("[{}] candidate {:?}", self.ids.prefix(), self.focused);
    }

    /// Commit `index` (or no selection), close, and return the value for the
    /// change callback.
    pub(super) fn commit(&mut self, index: Option<usize>) -> Option<Item> {
        self.selected = index.filter(|index| *index < self.items.len());
        self.close();
        self.request_input_focus();
        let value = self.selected.and_then(|index| self.items.get(index).cloned());
        log::debug!("[{}] committed {:?}", self.ids.prefix(), value);
        value
    }

    pub(super) fn request_candidate_focus(&mut self) {
        if let Some(id) = self.focused.and_then(|candidate| self.candidate_id(candidate)) {
            self.focus_request = Some(FocusRequest::Focus(id));
        }
    }

    /// Return focus to the input. Only the focusable variants ask for it.
    pub(super) fn request_input_focus(&mut self) {
        if self.variant != ComboboxVariant::Simple && self.focus_within {
            self.focus_request = Some(FocusRequest::Focus(self.ids.input()));
        }
    }

    pub(super) fn display_text(&self) -> String {
        match self.selected.and_then(|index| self.items.get(index)) {
            Some(item) => item.label.clone(),
            None if self.empty_option => EMPTY_LABEL.to_string(),
            None => String::new(),
        }
    }

    pub(super) fn popup_visible(&self) -> bool {
        self.expanded && !self.items.is_empty()
    }
}

/// A single-select combobox with reactive state.
///
/// `Combobox` owns the committed selection, the transient candidate and the
/// popup visibility. Keyboard, pointer and focus events arrive through
/// [`WidgetEvents`](crate::widgets::WidgetEvents); committed values are
/// reported through the change callback.
///
/// # Example
///
/// ```ignore
/// let combobox = Combobox::new(items)
///     .variant(ComboboxVariant::ActiveDescendant)
///     .label("Fruit")
///     .with_empty_option(true)
///     .on_change(|value: &Option<Item>| log::info!("picked {value:?}"));
/// ```
#[derive(Debug, Clone)]
pub struct Combobox {
    /// Unique identifier for this combobox instance
    id: ComboboxId,
    /// Internal state
    pub(super) inner: Arc<RwLock<ComboboxInner>>,
    /// Dirty flag for re-render
    pub(super) dirty: Arc<AtomicBool>,
    /// Change callback
    on_change: Option<Callback<Option<Item>>>,
}

impl Combobox {
    /// Create a collapsed combobox with no selection.
    pub fn new(items: Vec<Item>) -> Self {
        let id = ComboboxId::new();
        warn_duplicate_ids(&id.to_string(), &items);
        Self {
            id,
            inner: Arc::new(RwLock::new(ComboboxInner {
                variant: ComboboxVariant::default(),
                ids: ElementIds::new(id.to_string()),
                label: String::new(),
                items,
                empty_option: false,
                disabled: false,
                selected: None,
                focused: None,
                expanded: false,
                suppress_hover: false,
                focus_within: false,
                focus_opened: false,
                focus_request: None,
            })),
            dirty: Arc::new(AtomicBool::new(false)),
            on_change: None,
        }
    }

    /// Set the accessibility variant.
    pub fn variant(self, variant: ComboboxVariant) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.variant = variant;
        }
        self
    }

    /// Set the visible label.
    pub fn label(self, label: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.label = label.into();
        }
        self
    }

    /// Offer a "no selection" option at the top of the list.
    pub fn with_empty_option(self, empty_option: bool) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.empty_option = empty_option;
        }
        self
    }

    /// Set the prefix all element IDs derive from.
    pub fn id_prefix(self, prefix: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.ids = ElementIds::new(prefix);
        }
        self
    }

    /// Set the initial value without invoking the callback.
    pub fn value(self, value: Option<&Item>) -> Self {
        self.set_value(value);
        self.dirty.store(false, Ordering::SeqCst);
        self
    }

    pub fn disabled(self, disabled: bool) -> Self {
        self.set_disabled(disabled);
        self
    }

    /// Set the change callback.
    pub fn on_change(mut self, callback: impl Into<Callback<Option<Item>>>) -> Self {
        self.on_change = Some(callback.into());
        self
    }

    /// Get the unique ID for this combobox.
    pub fn id(&self) -> ComboboxId {
        self.id
    }

    /// Element IDs of this instance.
    pub fn ids(&self) -> ElementIds {
        self.read(|inner| inner.ids.clone())
            .unwrap_or_else(|| ElementIds::new(self.id.to_string()))
    }

    pub(super) fn read<R>(&self, f: impl FnOnce(&ComboboxInner) -> R) -> Option<R> {
        self.inner.read().ok().map(|guard| f(&guard))
    }

    /// Run a transition under the write lock and mark dirty when it reports a change.
    pub(super) fn update<R>(&self, f: impl FnOnce(&mut ComboboxInner) -> (bool, R)) -> Option<R> {
        let mut guard = self.inner.write().ok()?;
        let (changed, result) = f(&mut guard);
        if changed {
            self.dirty.store(true, Ordering::SeqCst);
        }
        Some(result)
    }

    pub(super) fn notify(&self, value: Option<Item>) {
        if let Some(callback) = &self.on_change {
            callback.call(&value);
        }
    }

    // -------------------------------------------------------------------------
    // Selection state
    // -------------------------------------------------------------------------

    /// Get the committed item.
    pub fn selected(&self) -> Option<Item> {
        self.read(|inner| inner.selected.and_then(|index| inner.items.get(index).cloned()))
            .flatten()
    }

    /// Get the committed index.
    pub fn selected_index(&self) -> Option<usize> {
        self.read(|inner| inner.selected).flatten()
    }

    /// Commit `item` (or no selection), close the popup and invoke the
    /// change callback. Returns false if `item` is not one of the options.
    pub fn select(&self, item: Option<&Item>) -> bool {
        let index = match item {
            None => None,
            Some(item) => {
                let Some(index) = self.read(|inner| position_of(&inner.items, item)).flatten() else {
                    log::warn!("[{}] select: unknown item {:?}", self.id, item);
                    return false;
                };
                Some(index)
            }
        };
        self.select_index(index)
    }

    /// Commit the item at `index` (or no selection). Returns false when out of range.
    pub fn select_index(&self, index: Option<usize>) -> bool {
        let value = self.update(|inner| {
            if index.is_some_and(|index| index >= inner.items.len()) {
                return (false, None);
            }
            (true, Some(inner.commit(index)))
        });
        match value.flatten() {
            Some(value) => {
                self.notify(value);
                true
            }
            None => false,
        }
    }

    /// Commit "no selection".
    pub fn clear_selection(&self) {
        self.select_index(None);
    }

    /// Replace the committed value from outside (a prop update). No callback.
    pub fn set_value(&self, value: Option<&Item>) {
        self.update(|inner| {
            let index = value.and_then(|item| position_of(&inner.items, item));
            if value.is_some() && index.is_none() {
                log::warn!("[{}] set_value: unknown item {:?}", inner.ids.prefix(), value);
            }
            let changed = inner.selected != index;
            inner.selected = index;
            (changed, ())
        });
    }

    /// Replace the options. The selection is kept when its id is still present.
    pub fn set_items(&self, items: Vec<Item>) {
        warn_duplicate_ids(&self.id.to_string(), &items);
        self.update(|inner| {
            let selected = inner
                .selected
                .and_then(|index| inner.items.get(index))
                .and_then(|item| position_of(&items, item));
            inner.items = items;
            inner.selected = selected;
            if inner.expanded {
                inner.focused = inner.initial_candidate();
            }
            (true, ())
        });
    }

    pub fn items(&self) -> Vec<Item> {
        self.read(|inner| inner.items.clone()).unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Candidate
    // -------------------------------------------------------------------------

    /// Get the current candidate.
    pub fn focused(&self) -> Option<Candidate> {
        self.read(|inner| inner.focused).flatten()
    }

    /// Get the item under the candidate (`None` for the empty option).
    pub fn focused_item(&self) -> Option<Item> {
        self.read(|inner| {
            inner
                .focused
                .and_then(|candidate| inner.candidate_item(candidate).cloned())
        })
        .flatten()
    }

    /// Move the candidate without committing. `None` targets the empty
    /// option. Returns false if the target is not an option or the popup
    /// is closed.
    pub fn set_focus_candidate(&self, item: Option<&Item>) -> bool {
        self.update(|inner| {
            if !inner.expanded {
                return (false, false);
            }
            let candidate = match item {
                None if inner.empty_option => Candidate::Empty,
                None => return (false, false),
                Some(item) => match position_of(&inner.items, item) {
                    Some(index) => Candidate::Item(index),
                    None => return (false, false),
                },
            };
            let changed = inner.focused != Some(candidate);
            inner.focused = Some(candidate);
            (changed, true)
        })
        .unwrap_or(false)
    }

    // -------------------------------------------------------------------------
    // Open/close state
    // -------------------------------------------------------------------------

    /// Check if the popup is open.
    pub fn is_expanded(&self) -> bool {
        self.read(|inner| inner.expanded).unwrap_or(false)
    }

    /// Whether a popup is actually shown (open with at least one item).
    pub fn popup_visible(&self) -> bool {
        self.read(ComboboxInner::popup_visible).unwrap_or(false)
    }

    /// Open the popup.
    pub fn open(&self) {
        self.update(|inner| {
            if inner.disabled {
                return (false, ());
            }
            (inner.open(), ())
        });
    }

    /// Close the popup, discarding the candidate.
    pub fn close(&self) {
        self.update(|inner| (inner.close(), ()));
    }

    /// Open when closed, close (discarding) when open.
    pub fn toggle(&self) {
        self.update(|inner| {
            if inner.expanded {
                inner.close();
                inner.request_input_focus();
                (true, ())
            } else if inner.disabled {
                (false, ())
            } else {
                (inner.open(), ())
            }
        });
    }

    // -------------------------------------------------------------------------
    // Display
    // -------------------------------------------------------------------------

    /// Text shown in the display element: the committed label, the empty
    /// option label, or nothing.
    pub fn display_text(&self) -> String {
        self.read(ComboboxInner::display_text).unwrap_or_default()
    }

    pub fn get_variant(&self) -> ComboboxVariant {
        self.read(|inner| inner.variant).unwrap_or_default()
    }

    pub fn is_disabled(&self) -> bool {
        self.read(|inner| inner.disabled).unwrap_or(false)
    }

    pub fn set_disabled(&self, disabled: bool) {
        self.update(|inner| {
            let changed = inner.disabled != disabled;
            inner.disabled = disabled;
            if disabled {
                inner.close();
            }
            (changed, ())
        });
    }
}
