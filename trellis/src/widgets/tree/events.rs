//! Event handling for the TreeList widget.

use std::sync::atomic::Ordering;

use ariadom::{Element, Key, Modifiers};

use super::TreeList;
use super::render;
use crate::widgets::events::{EventResult, FocusRequest, WidgetEvents};
use crate::widgets::traits::AnyWidget;

impl WidgetEvents for TreeList {
    fn on_key(&self, target: &str, key: Key, modifiers: Modifiers) -> EventResult {
        if modifiers.ctrl || modifiers.alt {
            return EventResult::Ignored;
        }

        let activated = self.update(|inner| {
            // Keys only act on the item holding the roving tabindex
            let Some(path) = inner.focused_path() else {
                return (false, None);
            };
            if inner.item_id(&path) != target {
                return (false, None);
            }

            match key {
                Key::Left => (inner.set_expanded(&path, false), Some(None)),
                Key::Right => (inner.set_expanded(&path, true), Some(None)),
                Key::Down => (inner.move_focus(true), Some(None)),
                Key::Up => (inner.move_focus(false), Some(None)),
                Key::Char(' ') => (false, Some(Some(path))),
                _ => (false, None),
            }
        });

        match activated.flatten() {
            Some(Some(path)) => {
                self.activate(&path);
                EventResult::Consumed
            }
            Some(None) => EventResult::Consumed,
            None => EventResult::Ignored,
        }
    }

    fn on_click(&self, target: &str) -> EventResult {
        let resolved = self.read(|inner| (inner.resolve(target), inner.is_multi()));
        let Some((Some((path, checkbox)), multi)) = resolved else {
            return EventResult::Ignored;
        };

        if checkbox && multi {
            self.activate(&path);
            return EventResult::Consumed;
        }

        // Clicking an item toggles it; single selection also selects it
        self.update(|inner| {
            let expanded = inner.expanded.contains(&path);
            (inner.set_expanded(&path, !expanded), ())
        });
        if !multi {
            self.activate(&path);
        }
        EventResult::Consumed
    }

    fn on_focus(&self, target: &str) -> EventResult {
        self.update(|inner| {
            let Some((path, _)) = inner.resolve(target) else {
                return (false, EventResult::Ignored);
            };
            match inner.index_of(&path) {
                Some(index) if index != inner.focus_index => {
                    inner.focus_index = index;
                    (true, EventResult::Consumed)
                }
                _ => (false, EventResult::Ignored),
            }
        })
        .unwrap_or(EventResult::Ignored)
    }
}

impl AnyWidget for TreeList {
    fn id_string(&self) -> String {
        self.id().to_string()
    }

    fn element(&self) -> Element {
        self.read(render::render).unwrap_or_default()
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
        self.inner
            .write()
            .ok()
            .and_then(|mut guard| guard.focus_request.take())
    }
}
