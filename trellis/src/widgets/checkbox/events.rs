//! Event handling for the Checkbox widget.

use std::sync::atomic::Ordering;

use ariadom::{Element, Key, Modifiers};

use super::Checkbox;
use super::render;
use crate::widgets::events::{EventResult, FocusRequest, WidgetEvents};
use crate::widgets::traits::AnyWidget;

impl WidgetEvents for Checkbox {
    fn on_key(&self, _target: &str, key: Key, modifiers: Modifiers) -> EventResult {
        // Native checkboxes toggle on Space only
        if key == Key::SPACE && modifiers.none() {
            EventResult::from(self.toggle())
        } else {
            EventResult::Ignored
        }
    }

    fn on_click(&self, _target: &str) -> EventResult {
        // The label is associated with the input, so both toggle
        EventResult::from(self.toggle())
    }
}

impl AnyWidget for Checkbox {
    fn id_string(&self) -> String {
        self.id().to_string()
    }

    fn element(&self) -> Element {
        self.inner
            .read()
            .map(|guard| render::render(&guard))
            .unwrap_or_default()
    }

    fn containment_root(&self) -> String {
        self.prefix()
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
