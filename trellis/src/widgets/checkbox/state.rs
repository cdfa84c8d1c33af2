//! Checkbox widget state.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use ariadom::aria::CheckedState;

use crate::widgets::callback::Callback;

/// Unique identifier for a Checkbox widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CheckboxId(usize);

impl CheckboxId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for CheckboxId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "checkbox-{}", self.0)
    }
}

#[derive(Debug)]
pub(super) struct CheckboxInner {
    pub(super) prefix: String,
    pub(super) label: String,
    pub(super) checked: bool,
    /// Shown as `aria-checked="mixed"`; cleared by the next toggle
    pub(super) indeterminate: bool,
    pub(super) disabled: bool,
}

/// A checkbox with reactive state.
#[derive(Debug, Clone)]
pub struct Checkbox {
    id: CheckboxId,
    pub(super) inner: Arc<RwLock<CheckboxInner>>,
    pub(super) dirty: Arc<AtomicBool>,
    on_change: Option<Callback<bool>>,
}

impl Default for Checkbox {
    fn default() -> Self {
        Self::new()
    }
}

impl Checkbox {
    /// Create an unchecked checkbox.
    pub fn new() -> Self {
        let id = CheckboxId::new();
        Self {
            id,
            inner: Arc::new(RwLock::new(CheckboxInner {
                prefix: id.to_string(),
                label: String::new(),
                checked: false,
                indeterminate: false,
                disabled: false,
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

    pub fn id_prefix(self, prefix: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.prefix = prefix.into();
        }
        self
    }

    pub fn checked(self, checked: bool) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.checked = checked;
        }
        self
    }

    pub fn disabled(self, disabled: bool) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.disabled = disabled;
        }
        self
    }

    pub fn on_change(mut self, callback: impl Into<Callback<bool>>) -> Self {
        self.on_change = Some(callback.into());
        self
    }

    pub fn id(&self) -> CheckboxId {
        self.id
    }

    /// Element ID of the checkbox input.
    pub fn input_id(&self) -> String {
        self.inner
            .read()
            .map(|guard| format!("{}-input", guard.prefix))
            .unwrap_or_default()
    }

    pub(super) fn prefix(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.prefix.clone())
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Checked state
    // -------------------------------------------------------------------------

    pub fn is_checked(&self) -> bool {
        self.inner.read().map(|guard| guard.checked).unwrap_or(false)
    }

    pub fn checked_state(&self) -> CheckedState {
        self.inner
            .read()
            .map(|guard| {
                if guard.indeterminate {
                    CheckedState::Mixed
                } else {
                    CheckedState::from(guard.checked)
                }
            })
            .unwrap_or_default()
    }

    /// Set the checked state from outside. No callback.
    pub fn set_checked(&self, checked: bool) {
        if let Ok(mut guard) = self.inner.write()
            && (guard.checked != checked || guard.indeterminate)
        {
            guard.checked = checked;
            guard.indeterminate = false;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    pub fn set_indeterminate(&self, indeterminate: bool) {
        if let Ok(mut guard) = self.inner.write()
            && guard.indeterminate != indeterminate
        {
            guard.indeterminate = indeterminate;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.inner.read().map(|guard| guard.disabled).unwrap_or(false)
    }

    pub fn set_disabled(&self, disabled: bool) {
        if let Ok(mut guard) = self.inner.write()
            && guard.disabled != disabled
        {
            guard.disabled = disabled;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Flip the checked state and invoke the callback.
    ///
    /// An indeterminate checkbox becomes checked. Returns false when disabled.
    pub fn toggle(&self) -> bool {
        let new_state = {
            let Ok(mut guard) = self.inner.write() else {
                return false;
            };
            if guard.disabled {
                return false;
            }
            guard.checked = guard.indeterminate || !guard.checked;
            guard.indeterminate = false;
            self.dirty.store(true, Ordering::SeqCst);
            log::debug!("[{}] checked = {}", guard.prefix, guard.checked);
            guard.checked
        };

        if let Some(callback) = &self.on_change {
            callback.call(&new_state);
        }
        true
    }
}
