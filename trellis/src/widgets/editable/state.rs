//! Editable combobox state.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use super::filter::FilterMode;
use crate::widgets::callback::Callback;
use crate::widgets::combobox::item::position_of;
use crate::widgets::combobox::{ElementIds, Item, warn_duplicate_ids};
use crate::widgets::events::FocusRequest;

/// Unique identifier for an EditableCombobox instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EditableId(usize);

impl EditableId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for EditableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "editable-{}", self.0)
    }
}

#[derive(Debug)]
pub(super) struct EditableInner {
    pub(super) ids: ElementIds,
    pub(super) label: String,
    pub(super) items: Vec<Item>,
    pub(super) filter_mode: FilterMode,
    pub(super) disabled: bool,
    /// Text in the input
    pub(super) input: String,
    /// The whole input text is selected; the next keystroke replaces it
    pub(super) text_selected: bool,
    pub(super) selected: Option<usize>,
    /// Candidate (index into `items`)
    pub(super) focused: Option<usize>,
    pub(super) expanded: bool,
    pub(super) focus_within: bool,
    pub(super) focus_request: Option<FocusRequest>,
}

impl EditableInner {
    /// Indices of the items matching the current input, in display order.
    pub(super) fn filtered(&self) -> Vec<usize> {
        let labels: Vec<String> = self.items.iter().map(|item| item.label.clone()).collect();
        self.filter_mode
            .apply(&self.input, &labels)
            .into_iter()
            .map(|m| m.index)
            .collect()
    }

    pub(super) fn has_matches(&self) -> bool {
        !self.filtered().is_empty()
    }

    pub(super) fn selected_label(&self) -> String {
        self.selected
            .and_then(|index| self.items.get(index))
            .map(|item| item.label.clone())
            .unwrap_or_default()
    }

    /// Expand the popup; the candidate starts on the selection or the first match.
    pub(super) fn expand(&mut self) {
        self.expanded = true;
        if self.focused.is_none() {
            self.focused = self.selected.or_else(|| self.filtered().first().copied());
        }
        log::debug!("[{}] expanded, candidate {:?}", self.ids.prefix(), self.focused);
    }

    /// Collapse and put the committed label back into the input.
    pub(super) fn collapse_and_restore(&mut self) {
        self.input = self.selected_label();
        self.text_selected = false;
        self.expanded = false;
        self.focused = None;
        log::debug!("[{}] collapsed, input restored", self.ids.prefix());
    }

    pub(super) fn move_candidate(&mut self, forward: bool) {
        let filtered = self.filtered();
        let Some(last) = filtered.len().checked_sub(1) else {
            return;
        };
        let position = self
            .focused
            .and_then(|focused| filtered.iter().position(|index| *index == focused));

        let next = match (self.focused, position) {
            (None, _) if forward => 0,
            (None, _) => last,
            (Some(_), None) => 0,
            (Some(_), Some(position)) if forward => (position + 1).min(last),
            (Some(_), Some(position)) => position.saturating_sub(1),
        };
        self.focused = Some(filtered[next]);
    }

    /// Typed text: the popup opens on the new matches without a candidate.
    pub(super) fn edit(&mut self, f: impl FnOnce(&mut String)) {
        if std::mem::take(&mut self.text_selected) {
            self.input.clear();
        }
        f(&mut self.input);
        self.expanded = true;
        self.focused = None;
        log::trace!("[{}] input {:?}", self.ids.prefix(), self.input);
    }

    pub(super) fn commit(&mut self, index: usize) -> Option<Item> {
        let item = self.items.get(index).cloned()?;
        self.selected = Some(index);
        self.input = item.label.clone();
        self.text_selected = false;
        self.expanded = false;
        self.focused = None;
        if self.focus_within {
            self.focus_request = Some(FocusRequest::Focus(self.ids.input()));
        }
        log::debug!("[{}] committed {:?}", self.ids.prefix(), item);
        Some(item)
    }

    /// Map an option element ID back to an item index.
    pub(super) fn option_index(&self, element_id: &str) -> Option<usize> {
        let item_id = self.ids.parse_option(element_id)??;
        self.items.iter().position(|item| item.id == item_id)
    }
}

/// A combobox whose input is editable and filters the options.
///
/// Unlike [`Combobox`](crate::widgets::combobox::Combobox) there is no
/// empty option: clearing the text and collapsing restores the last
/// committed label.
#[derive(Debug, Clone)]
pub struct EditableCombobox {
    id: EditableId,
    pub(super) inner: Arc<RwLock<EditableInner>>,
    pub(super) dirty: Arc<AtomicBool>,
    on_change: Option<Callback<Option<Item>>>,
}

impl EditableCombobox {
    pub fn new(items: Vec<Item>) -> Self {
        let id = EditableId::new();
        warn_duplicate_ids(&id.to_string(), &items);
        Self {
            id,
            inner: Arc::new(RwLock::new(EditableInner {
                ids: ElementIds::new(id.to_string()),
                label: String::new(),
                items,
                filter_mode: FilterMode::default(),
                disabled: false,
                input: String::new(),
                text_selected: false,
                selected: None,
                focused: None,
                expanded: false,
                focus_within: false,
                focus_request: None,
            })),
            dirty: Arc::new(AtomicBool::new(false)),
            on_change: None,
        }
    }

    pub fn label(self, label: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.label = label.into();
        }
        self
    }

    pub fn filter_mode(self, mode: FilterMode) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.filter_mode = mode;
        }
        self
    }

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
        if let Ok(mut guard) = self.inner.write() {
            guard.disabled = disabled;
        }
        self
    }

    pub fn on_change(mut self, callback: impl Into<Callback<Option<Item>>>) -> Self {
        self.on_change = Some(callback.into());
        self
    }

    pub fn id(&self) -> EditableId {
        self.id
    }

    pub fn ids(&self) -> ElementIds {
        self.read(|inner| inner.ids.clone())
            .unwrap_or_else(|| ElementIds::new(self.id.to_string()))
    }

    pub(super) fn read<R>(&self, f: impl FnOnce(&EditableInner) -> R) -> Option<R> {
        self.inner.read().ok().map(|guard| f(&guard))
    }

    pub(super) fn update<R>(&self, f: impl FnOnce(&mut EditableInner) -> (bool, R)) -> Option<R> {
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

    pub fn selected(&self) -> Option<Item> {
        self.read(|inner| inner.selected.and_then(|index| inner.items.get(index).cloned()))
            .flatten()
    }

    /// Commit `item`, collapse and invoke the callback. Returns false if
    /// `item` is not one of the options.
    pub fn select(&self, item: &Item) -> bool {
        let committed = self
            .update(|inner| match position_of(&inner.items, item) {
                Some(index) => (true, inner.commit(index)),
                None => (false, None),
            })
            .flatten();
        match committed {
            Some(item) => {
                self.notify(Some(item));
                true
            }
            None => {
                log::warn!("[{}] select: unknown item {:?}", self.id, item);
                false
            }
        }
    }

    /// Replace the committed value from outside. The input shows its label.
    pub fn set_value(&self, value: Option<&Item>) {
        self.update(|inner| {
            inner.selected = value.and_then(|item| position_of(&inner.items, item));
            inner.input = inner.selected_label();
            (true, ())
        });
    }

    // -------------------------------------------------------------------------
    // Input and candidate
    // -------------------------------------------------------------------------

    pub fn input(&self) -> String {
        self.read(|inner| inner.input.clone()).unwrap_or_default()
    }

    /// Type text into the input, as if entered key by key.
    pub fn type_text(&self, text: &str) {
        self.update(|inner| {
            if inner.disabled {
                return (false, ());
            }
            inner.edit(|input| input.push_str(text));
            (true, ())
        });
    }

    /// Items matching the current input, in display order.
    pub fn filtered_items(&self) -> Vec<Item> {
        self.read(|inner| {
            inner
                .filtered()
                .into_iter()
                .filter_map(|index| inner.items.get(index).cloned())
                .collect()
        })
        .unwrap_or_default()
    }

    pub fn focused_item(&self) -> Option<Item> {
        self.read(|inner| inner.focused.and_then(|index| inner.items.get(index).cloned()))
            .flatten()
    }

    pub fn is_expanded(&self) -> bool {
        self.read(|inner| inner.expanded).unwrap_or(false)
    }

    /// `aria-expanded`: open with at least one match.
    pub fn popup_visible(&self) -> bool {
        self.read(|inner| inner.expanded && inner.has_matches())
            .unwrap_or(false)
    }
}
