//! Event handling for the RangeDatePicker widget.

use std::sync::atomic::Ordering;

use ariadom::{Element, Key, Modifiers};

use super::render;
use super::state::{RangeDatePicker, RangeInner, Target};
use crate::widgets::date::calendar::key_delta;
use crate::widgets::date::input::Fragment;
use crate::widgets::date::{Endpoint, RangeChange};
use crate::widgets::events::{EventResult, FocusRequest, WidgetEvents};
use crate::widgets::traits::AnyWidget;

impl RangeDatePicker {
    /// Report a change once the lock is released.
    fn finish(&self, outcome: Option<(EventResult, Option<RangeChange>)>) -> EventResult {
        match outcome {
            Some((result, change)) => {
                self.notify(change);
                result
            }
            None => EventResult::Ignored,
        }
    }
}

/// Keys typed into a fragment input.
fn fragment_key(
    inner: &mut RangeInner,
    endpoint: Endpoint,
    fragment: Fragment,
    key: Key,
) -> (bool, (EventResult, Option<RangeChange>)) {
    match key {
        Key::Char(c) => {
            if !inner.fragments_mut(endpoint).push(fragment, c) {
                return (false, (EventResult::Ignored, None));
            }
            let full = inner.fragments(endpoint).is_full(fragment);
            // Filling a field moves on to the next one
            if full && let Some(next) = fragment.next() {
                inner.focus_request = Some(FocusRequest::Focus(inner.fragment_id(endpoint, next)));
            }
            let change = inner.edit(endpoint, full && fragment == Fragment::Year);
            (true, (EventResult::Consumed, change))
        }
        Key::Backspace => {
            if inner.fragments_mut(endpoint).pop(fragment) {
                let change = inner.edit(endpoint, false);
                return (true, (EventResult::Consumed, change));
            }
            // Backspace in an empty field steps back to the previous one
            match fragment.prev() {
                Some(prev) => {
                    inner.focus_request =
                        Some(FocusRequest::Focus(inner.fragment_id(endpoint, prev)));
                    (false, (EventResult::Consumed, None))
                }
                None => (false, (EventResult::Ignored, None)),
            }
        }
        Key::Up | Key::Down => {
            inner.focus_request = Some(FocusRequest::Focus(inner.calendar.grid_id()));
            (false, (EventResult::Consumed, None))
        }
        _ => (false, (EventResult::Ignored, None)),
    }
}

/// Keys pressed on the calendar grid.
fn grid_key(inner: &mut RangeInner, key: Key) -> (bool, (EventResult, Option<RangeChange>)) {
    if let Some(days) = key_delta(key) {
        inner.calendar.move_days(days);
        let focused = inner.calendar.focused();
        inner.calendar.set_hovered(Some(focused));
        return (true, (EventResult::Consumed, None));
    }
    if key.is_confirm() {
        let focused = inner.calendar.focused();
        let committed = inner.commit_date(focused);
        return (committed, (EventResult::Consumed, None));
    }
    (false, (EventResult::Ignored, None))
}

impl WidgetEvents for RangeDatePicker {
    fn on_key(&self, target: &str, key: Key, modifiers: Modifiers) -> EventResult {
        if modifiers.ctrl || modifiers.alt {
            return EventResult::Ignored;
        }

        let outcome = self.update(|inner| {
            if inner.disabled {
                return (false, (EventResult::Ignored, None));
            }

            // Escape drops focus from anywhere inside; closing follows
            if key == Key::Escape {
                if !inner.open {
                    return (false, (EventResult::Ignored, None));
                }
                let change = inner.close();
                inner.focus_request = Some(FocusRequest::Blur);
                return (true, (EventResult::Consumed, Some(change)));
            }

            match inner.target(target) {
                Target::Fragment(endpoint, fragment) => fragment_key(inner, endpoint, fragment, key),
                Target::Grid | Target::Cell(_) => grid_key(inner, key),
                _ => (false, (EventResult::Ignored, None)),
            }
        });

        self.finish(outcome)
    }

    fn on_click(&self, target: &str) -> EventResult {
        let outcome = self.update(|inner| {
            if inner.disabled {
                return (false, (EventResult::Ignored, None));
            }
            match inner.target(target) {
                Target::Cell(date) => (inner.commit_date(date), (EventResult::Consumed, None)),
                Target::PrevMonth => (inner.calendar.move_months(-1), (EventResult::Consumed, None)),
                Target::NextMonth => (inner.calendar.move_months(1), (EventResult::Consumed, None)),
                Target::Cancel => (true, (EventResult::Consumed, Some(inner.cancel()))),
                Target::Confirm => (true, (EventResult::Consumed, Some(inner.confirm()))),
                _ => (false, (EventResult::Ignored, None)),
            }
        });
        self.finish(outcome)
    }

    fn on_hover(&self, target: &str) -> EventResult {
        self.update(|inner| match inner.target(target) {
            Target::Cell(date) => (inner.hover(Some(date)), EventResult::Consumed),
            _ => (false, EventResult::Ignored),
        })
        .unwrap_or(EventResult::Ignored)
    }

    fn on_hover_end(&self, target: &str) -> EventResult {
        self.update(|inner| match inner.target(target) {
            Target::Cell(_) | Target::Grid => (inner.hover(None), EventResult::Consumed),
            _ => (false, EventResult::Ignored),
        })
        .unwrap_or(EventResult::Ignored)
    }

    fn on_focus(&self, target: &str) -> EventResult {
        self.update(|inner| {
            if inner.disabled {
                return (false, EventResult::Ignored);
            }
            let target = inner.target(target);
            let entered = match target {
                Target::Group(endpoint)
                | Target::Placeholder(endpoint)
                | Target::Fragment(endpoint, _) => Some(endpoint),
                _ => None,
            };

            let mut changed = false;
            if !inner.open {
                inner.open_session(entered);
                changed = true;
                // Focus on the wrapper itself starts with the start date
                if target == Target::Root {
                    inner.active = Some(Endpoint::Start);
                    inner.focus_request = Some(FocusRequest::Focus(
                        inner.fragment_id(Endpoint::Start, Fragment::Day),
                    ));
                }
            }

            if let Some(endpoint) = entered {
                changed |= inner.active != Some(endpoint);
                inner.active = Some(endpoint);
                if matches!(target, Target::Placeholder(_) | Target::Group(_)) {
                    inner.focus_request =
                        Some(FocusRequest::Focus(inner.fragment_id(endpoint, Fragment::Day)));
                }
            }
            (changed, EventResult::from(changed))
        })
        .unwrap_or(EventResult::Ignored)
    }

    fn on_blur(&self, target: &str, focus_within: bool) -> EventResult {
        let outcome = self.update(|inner| {
            let mut changed = false;
            let mut change = None;

            // Leaving a day or month field pads a single digit
            if let Target::Fragment(endpoint, fragment) = inner.target(target)
                && inner.fragments_mut(endpoint).pad(fragment)
            {
                changed = true;
                change = inner.edit(endpoint, false);
            }

            if !focus_within && inner.open {
                change = Some(inner.close());
                changed = true;
            }
            (changed, (EventResult::from(changed), change))
        });
        self.finish(outcome)
    }
}

impl AnyWidget for RangeDatePicker {
    fn id_string(&self) -> String {
        self.id().to_string()
    }

    fn element(&self) -> Element {
        self.read(render::render).unwrap_or_default()
    }

    fn containment_root(&self) -> String {
        self.root_id()
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
