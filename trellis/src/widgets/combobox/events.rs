//! Event handling for the Combobox widget.

use std::sync::atomic::Ordering;

use ariadom::{Element, Key, Modifiers};

use super::render;
use super::state::{Candidate, Combobox, ComboboxVariant};
use crate::widgets::events::{EventResult, FocusRequest, WidgetEvents};
use crate::widgets::traits::AnyWidget;

/// What an event resolved to, decided under the lock.
enum Action {
    Ignored,
    Consumed,
    Commit(Option<Candidate>),
}

impl Combobox {
    /// Apply an action once the lock is released, so the change callback
    /// runs without holding it.
    fn finish(&self, action: Option<Action>) -> EventResult {
        match action {
            Some(Action::Consumed) => EventResult::Consumed,
            Some(Action::Commit(candidate)) => {
                match candidate {
                    Some(Candidate::Item(index)) => {
                        self.select_index(Some(index));
                    }
                    Some(Candidate::Empty) => {
                        self.select_index(None);
                    }
                    // Nothing to commit (empty list): just collapse
                    None => {
                        self.update(|inner| {
                            let changed = inner.close();
                            inner.request_input_focus();
                            (changed, ())
                        });
                    }
                }
                EventResult::Consumed
            }
            Some(Action::Ignored) | None => EventResult::Ignored,
        }
    }

    /// Focus moved onto `target`. When it entered the widget the popup
    /// opens; if a click did that, the click is marked so it does not toggle
    /// the popup straight back.
    fn focus_entered(&self, target: &str, pointer: bool) -> EventResult {
        self.update(|inner| {
            let mut changed = false;
            if !std::mem::replace(&mut inner.focus_within, true)
                && !inner.disabled
                && inner.variant != ComboboxVariant::Simple
                && inner.open()
            {
                inner.focus_opened = pointer;
                changed = true;
            }

            if inner.variant == ComboboxVariant::RovingTabindex
                && inner.expanded
                && let Some(candidate) = inner.candidate_for(target)
                && inner.focused != Some(candidate)
            {
                inner.focused = Some(candidate);
                changed = true;
            }
            (changed, EventResult::from(changed))
        })
        .unwrap_or(EventResult::Ignored)
    }
}

impl WidgetEvents for Combobox {
    fn on_key(&self, _target: &str, key: Key, modifiers: Modifiers) -> EventResult {
        // Ignore keys with ctrl/alt modifiers
        if modifiers.ctrl || modifiers.alt {
            return EventResult::Ignored;
        }

        let action = self.update(|inner| {
            if inner.disabled || inner.variant == ComboboxVariant::Simple {
                return (false, Action::Ignored);
            }
            inner.focus_opened = false;

            if !inner.expanded {
                // Collapsed - open on the arrows and the confirm keys
                return match key {
                    Key::Down | Key::Up | Key::Enter | Key::Char(' ') => {
                        inner.open();
                        (true, Action::Consumed)
                    }
                    _ => (false, Action::Ignored),
                };
            }

            // Expanded - navigate, commit or cancel
            match key {
                Key::Down => {
                    inner.move_candidate(true);
                    (true, Action::Consumed)
                }
                Key::Up => {
                    inner.move_candidate(false);
                    (true, Action::Consumed)
                }
                Key::Enter | Key::Char(' ') => (false, Action::Commit(inner.focused)),
                Key::Escape => {
                    inner.close();
                    inner.request_input_focus();
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
                if std::mem::take(&mut inner.focus_opened) {
                    // The focus that preceded this click already opened the popup
                    return (false, Action::Consumed);
                }
                if inner.expanded {
                    inner.close();
                    inner.request_input_focus();
                } else {
                    inner.open();
                }
                return (true, Action::Consumed);
            }

            match inner.candidate_for(target) {
                Some(candidate) => (false, Action::Commit(Some(candidate))),
                None => (false, Action::Ignored),
            }
        });
        self.finish(action)
    }

    fn on_outside_click(&self) -> EventResult {
        self.update(|inner| {
            let changed = inner.close();
            inner.focus_opened = false;
            (changed, EventResult::from(changed))
        })
        .unwrap_or(EventResult::Ignored)
    }

    fn on_hover(&self, target: &str) -> EventResult {
        self.update(|inner| {
            inner.focus_opened = false;
            if inner.disabled || !inner.expanded {
                return (false, EventResult::Ignored);
            }
            let Some(candidate) = inner.candidate_for(target) else {
                return (false, EventResult::Ignored);
            };
            if std::mem::take(&mut inner.suppress_hover) {
                log::trace!("[{}] hover after navigation ignored", inner.ids.prefix());
                return (false, EventResult::Consumed);
            }
            let changed = inner.focused != Some(candidate);
            inner.focused = Some(candidate);
            if inner.variant == ComboboxVariant::RovingTabindex {
                inner.request_candidate_focus();
            }
            (changed, EventResult::Consumed)
        })
        .unwrap_or(EventResult::Ignored)
    }

    fn on_focus(&self, target: &str) -> EventResult {
        self.focus_entered(target, false)
    }

    fn on_pointer_focus(&self, target: &str) -> EventResult {
        self.focus_entered(target, true)
    }

    fn on_blur(&self, _target: &str, focus_within: bool) -> EventResult {
        if focus_within {
            return EventResult::Ignored;
        }
        self.update(|inner| {
            inner.focus_within = false;
            inner.focus_opened = false;
            let changed = inner.close();
            (changed, EventResult::Consumed)
        })
        .unwrap_or(EventResult::Ignored)
    }
}

impl AnyWidget for Combobox {
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
