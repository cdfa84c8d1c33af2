//! Widget event handling types and traits.
//!
//! This module defines the core types for widget-based event handling,
//! allowing each widget to handle its own events while keeping the
//! runtime as a thin dispatcher.
//!
//! Widgets never move DOM focus themselves. When an interaction needs focus
//! somewhere else (roving tabindex, returning to the input after a commit)
//! the widget records a [`FocusRequest`] which the runtime collects through
//! [`AnyWidget::take_focus_request`](super::AnyWidget::take_focus_request).

use ariadom::{Key, Modifiers};

// =============================================================================
// Event Result
// =============================================================================

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    /// Check if the event was handled.
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}

impl From<bool> for EventResult {
    fn from(handled: bool) -> Self {
        if handled {
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }
}

// =============================================================================
// Focus Requests
// =============================================================================

/// A request from a widget to move document focus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FocusRequest {
    /// Focus the element with this ID.
    Focus(String),
    /// Drop focus entirely (the element loses focus, nothing gains it).
    Blur,
}

// =============================================================================
// Widget Events
// =============================================================================

/// Trait for widgets that can handle events.
///
/// The runtime dispatches events to widgets through these methods. Events
/// are only delivered when their target lies inside the widget's containment
/// root, except clicks that land outside, which arrive as
/// [`on_outside_click`](WidgetEvents::on_outside_click).
///
/// # Default Implementations
///
/// All methods have default implementations that return `EventResult::Ignored`,
/// so widgets only need to implement the events they care about.
pub trait WidgetEvents {
    /// Handle a key press while an element inside this widget has focus.
    fn on_key(&self, _target: &str, _key: Key, _modifiers: Modifiers) -> EventResult {
        EventResult::Ignored
    }

    /// Handle a click on an element inside this widget.
    fn on_click(&self, _target: &str) -> EventResult {
        EventResult::Ignored
    }

    /// Handle a click anywhere outside this widget (the document-level listener).
    fn on_outside_click(&self) -> EventResult {
        EventResult::Ignored
    }

    /// Handle the pointer moving over an element inside this widget.
    fn on_hover(&self, _target: &str) -> EventResult {
        EventResult::Ignored
    }

    /// Handle the pointer leaving an element inside this widget.
    fn on_hover_end(&self, _target: &str) -> EventResult {
        EventResult::Ignored
    }

    /// Handle an element inside this widget gaining focus.
    fn on_focus(&self, _target: &str) -> EventResult {
        EventResult::Ignored
    }

    /// Handle focus caused by a click. The click itself is delivered next.
    fn on_pointer_focus(&self, target: &str) -> EventResult {
        self.on_focus(target)
    }

    /// Handle an element inside this widget losing focus.
    ///
    /// `focus_within` is true when the element receiving focus is also
    /// inside the widget, so the widget can tell an internal focus move
    /// from focus leaving it entirely.
    fn on_blur(&self, _target: &str, _focus_within: bool) -> EventResult {
        EventResult::Ignored
    }
}
