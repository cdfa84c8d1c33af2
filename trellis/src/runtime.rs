//! A minimal runtime: one widget on a page, driven by raw input.
//!
//! The page puts a focusable input before and after the widget and a plain
//! text span beside it, so Tab can leave the widget and clicks can land
//! outside it. Raw input goes through [`FocusState`] one item at a time,
//! re-rendering in between, and every focus request a widget makes is
//! honoured before the next event is delivered.

use std::collections::VecDeque;

use ariadom::{Element, Event, FocusState, Key, Modifiers, RawInput, to_markup};

use crate::widgets::events::FocusRequest;
use crate::widgets::traits::AnyWidget;

pub const PAGE_ID: &str = "page";
pub const BEFORE_ID: &str = "page-before";
pub const AFTER_ID: &str = "page-after";
pub const OUTSIDE_ID: &str = "page-outside";

/// Focus requests honoured per raw input before giving up.
const MAX_FOCUS_HOPS: usize = 16;

/// One widget mounted on a page.
pub struct Page {
    widget: Box<dyn AnyWidget>,
    focus: FocusState,
}

impl std::fmt::Debug for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page")
            .field("widget", &self.widget.id_string())
            .field("focus", &self.focus)
            .finish()
    }
}

impl Page {
    pub fn new(widget: impl AnyWidget + 'static) -> Self {
        Self::from_boxed(Box::new(widget))
    }

    /// Mount a widget whose concrete type is only known at runtime.
    pub fn from_boxed(widget: Box<dyn AnyWidget>) -> Self {
        Self {
            widget,
            focus: FocusState::new(),
        }
    }

    pub fn widget(&self) -> &dyn AnyWidget {
        self.widget.as_ref()
    }

    /// The whole page tree.
    pub fn root(&self) -> Element {
        Element::div()
            .id(PAGE_ID)
            .child(Element::input().id(BEFORE_ID))
            .child(self.widget.element())
            .child(Element::span().id(OUTSIDE_ID).text("outside"))
            .child(Element::input().id(AFTER_ID))
    }

    /// Markup of the widget alone.
    pub fn markup(&self) -> String {
        to_markup(&self.widget.element())
    }

    pub fn focused(&self) -> Option<&str> {
        self.focus.focused()
    }

    // -------------------------------------------------------------------------
    // Input
    // -------------------------------------------------------------------------

    /// Feed raw input. Returns every event delivered, focus moves included.
    pub fn send(&mut self, raw: &[RawInput]) -> Vec<Event> {
        let mut delivered = Vec::new();
        for input in raw {
            let root = self.root();
            let events = self.focus.process_events(std::slice::from_ref(input), &root);
            delivered.extend(self.deliver(events));
        }
        delivered
    }

    /// Move focus programmatically, as a script calling `focus()` would.
    pub fn focus(&mut self, id: &str) -> Vec<Event> {
        let events = self.focus.focus(id);
        self.deliver(events)
    }

    pub fn key(&mut self, key: Key) -> Vec<Event> {
        self.send(&[RawInput::key(key)])
    }

    pub fn key_with(&mut self, key: Key, modifiers: Modifiers) -> Vec<Event> {
        self.send(&[RawInput::Key { key, modifiers }])
    }

    pub fn click(&mut self, id: &str) -> Vec<Event> {
        self.send(&[RawInput::click(id)])
    }

    /// Click on the text beside the widget.
    pub fn click_outside(&mut self) -> Vec<Event> {
        self.click(OUTSIDE_ID)
    }

    pub fn hover(&mut self, id: &str) -> Vec<Event> {
        self.send(&[RawInput::hover(id)])
    }

    pub fn hover_end(&mut self, id: &str) -> Vec<Event> {
        self.send(&[RawInput::HoverEnd {
            target: id.to_string(),
        }])
    }

    pub fn tab(&mut self) -> Vec<Event> {
        self.key(Key::Tab)
    }

    pub fn back_tab(&mut self) -> Vec<Event> {
        self.key(Key::BackTab)
    }

    /// Type each character of `text` as a key press.
    pub fn type_text(&mut self, text: &str) -> Vec<Event> {
        let raw: Vec<RawInput> = text.chars().map(|c| RawInput::key(Key::Char(c))).collect();
        self.send(&raw)
    }

    /// Dispatch events in order. A focus request is applied right away:
    /// the Blur/Focus pair it causes runs before any remaining event.
    fn deliver(&mut self, events: Vec<Event>) -> Vec<Event> {
        let mut queue: VecDeque<Event> = events.into();
        let mut delivered = Vec::new();
        let mut hops = 0;

        while let Some(event) = queue.pop_front() {
            self.widget.dispatch(&event);
            delivered.push(event);

            let Some(request) = self.widget.take_focus_request() else {
                continue;
            };
            hops += 1;
            if hops > MAX_FOCUS_HOPS {
                log::warn!(
                    "[page] {} keeps requesting focus, dropping {:?}",
                    self.widget.id_string(),
                    request
                );
                continue;
            }
            log::trace!("[page] focus request {:?}", request);
            let moved = match request {
                FocusRequest::Focus(id) => self.focus.focus(&id),
                FocusRequest::Blur => self.focus.blur(),
            };
            for event in moved.into_iter().rev() {
                queue.push_front(event);
            }
        }

        if self.widget.is_dirty() {
            self.widget.clear_dirty();
        }
        delivered
    }
}
