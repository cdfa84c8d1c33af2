//! Event handling for the EditableCombobox widget.

use std::sync::atomic::Ordering;

use ariadom::{Element, Key, Modifiers};

use super::EditableCombobox;
use super::render;
use crate::widgets::combobox::Item;
use crate::widgets::events::{EventResult, FocusRequest, WidgetEvents};
use crate::widgets::traits::AnyWidget;

enum Action {
    Ignored,
    Consumed,
    Commit(Option<Item>),
}

impl EditableCombobox {
    fn finish(&self, action: Option<Action>) -> EventResult {
        match action {
            Some(Action::Commit(item)) => {
                if item.is_some() {
                    self.notify(item);
                }
                EventResult::Consumed
            }
            Some(Action::Consumed) => EventResult::Consumed,
            Some(Action::Ignored) | None => EventResult::Ignored,
        }
    }
}

impl WidgetEvents for EditableCombobox {
    fn on_key(&self, _target: &str, key: Key, modifiers: Modifiers) -> EventResult {
        if modifiers.ctrl || modifiers.alt {
            return EventResult::Ignored;
        }

        let action = self.update(|inner| {
            if inner.disabled {
                return (false, Action::Ignored);
            }

            match key {
                Key::Char(c) => {
                    inner.edit(|input| input.push(c));
                    (true, Action::Consumed)
                }
                Key::Backspace => {
                    inner.edit(|input| {
                        input.pop();
                    });
                    (true, Action::Consumed)
                }
                Key::Down | Key::Up => {
                    if inner.expanded {
                        inner.move_candidate(key == Key::Down);
                    } else {
                        inner.expand();
                    }
                    (true, Action::Consumed)
                }
                Key::Enter if inner.expanded => match inner.focused {
                    Some(index) => {
                        let item = inner.commit(index);
                        (true, Action::Commit(item))
                    }
                    // No candidate: nothing to commit
                    None => {
                        inner.collapse_and_restore();
                        (true, Action::Consumed)
                    }
                },
                Key::Enter => {
                    inner.expand();
                    (true, Action::Consumed)
                }
                Key::Escape if inner.expanded => {
                    inner.collapse_and_restore();
                    (true, Action::Consumed)
                }
                _ => (false, Action::Ignored),
            }
        });

        self.finish(action)
    }

    fn on_click(&self, target: &str) -> EventResult {
        let action = self.update(|inner| {
            if inner.disabled {
                return (false, Action::Ignored);
            }
            if target == inner.ids.input() {
                if inner.expanded {
                    return (false, Action::Consumed);
                }
                inner.text_selected = true;
                inner.expand();
                return (true, Action::Consumed);
            }
            match inner.option_index(target) {
                Some(index) => {
                    let item = inner.commit(index);
                    (true, Action::Commit(item))
                }
                None => (false, Action::Ignored),
            }
        });
        self.finish(action)
    }

    fn on_outside_click(&self) -> EventResult {
        self.update(|inner| {
            if !inner.expanded && !inner.focus_within {
                return (false, EventResult::Ignored);
            }
            inner.collapse_and_restore();
            (true, EventResult::Consumed)
        })
        .unwrap_or(EventResult::Ignored)
    }

    fn on_hover(&self, target: &str) -> EventResult {
        self.update(|inner| match inner.option_index(target) {
            Some(index) if inner.expanded => {
                let changed = inner.focused != Some(index);
                inner.focused = Some(index);
                (changed, EventResult::Consumed)
            }
            _ => (false, EventResult::Ignored),
        })
        .unwrap_or(EventResult::Ignored)
    }

    fn on_hover_end(&self, target: &str) -> EventResult {
        self.update(|inner| match inner.option_index(target) {
            Some(_) if inner.expanded => {
                let changed = inner.focused.is_some();
                inner.focused = None;
                (changed, EventResult::Consumed)
            }
            _ => (false, EventResult::Ignored),
        })
        .unwrap_or(EventResult::Ignored)
    }

    fn on_focus(&self, _target: &str) -> EventResult {
        self.update(|inner| {
            if std::mem::replace(&mut inner.focus_within, true) || inner.disabled {
                return (false, EventResult::Ignored);
            }
            // Entering selects the whole text, so typing replaces it
            inner.text_selected = true;
            inner.expand();
            (true, EventResult::Consumed)
        })
        .unwrap_or(EventResult::Ignored)
    }

    fn on_blur(&self, _target: &str, focus_within: bool) -> EventResult {
        if focus_within {
            return EventResult::Ignored;
        }
        self.update(|inner| {
            inner.focus_within = false;
            inner.collapse_and_restore();
            (true, EventResult::Consumed)
        })
        .unwrap_or(EventResult::Ignored)
    }
}

impl AnyWidget for EditableCombobox {
    fn id_string(&self) -> String {
        self.id().to_string()
    }

    fn element(&self) -> Element {
        self.read(render::render).unwrap_or_default()
    }

    fn containment_root(&self) -> String {
        self.ids().wrapper()
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
