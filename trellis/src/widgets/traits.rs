//! The runtime-facing widget interface.

use ariadom::{Element, Event, FocusCause, contains, find_element};

use super::events::{EventResult, FocusRequest, WidgetEvents};

/// Trait implemented by every widget so a runtime can drive it uniformly.
///
/// This trait combines identity management, dirty tracking, rendering and
/// event routing. Implementors supply the hooks from [`WidgetEvents`]; the
/// provided [`dispatch`](AnyWidget::dispatch) decides which hook an event
/// reaches.
///
/// # Example
///
/// ```ignore
/// let events = focus.process_events(&raw, &widget.element());
/// for event in &events {
///     widget.dispatch(event);
///     if let Some(request) = widget.take_focus_request() {
///         // move focus, dispatch the resulting Blur/Focus events
///     }
/// }
/// ```
pub trait AnyWidget: WidgetEvents {
    /// Get the unique ID as a string.
    fn id_string(&self) -> String;

    /// Render the current state as an element tree.
    fn element(&self) -> Element;

    /// ID of the element whose subtree counts as "inside" the widget.
    fn containment_root(&self) -> String;

    /// Check if the widget state has changed and needs re-render.
    fn is_dirty(&self) -> bool;

    /// Clear the dirty flag after rendering.
    fn clear_dirty(&self);

    /// Take the pending focus request, if any.
    fn take_focus_request(&self) -> Option<FocusRequest>;

    /// Route a targeted event to the matching hook.
    fn dispatch(&self, event: &Event) -> EventResult {
        let tree = self.element();
        let root_id = self.containment_root();
        let root = find_element(&tree, &root_id).unwrap_or(&tree);
        let inside = |id: &str| contains(root, id);

        let result = match event {
            Event::Key {
                target: Some(target),
                key,
                modifiers,
            } if inside(target) => self.on_key(target, *key, *modifiers),
            Event::Click {
                target: Some(target),
            } if inside(target) => self.on_click(target),
            Event::Click { .. } => self.on_outside_click(),
            Event::Hover { target } if inside(target) => self.on_hover(target),
            Event::HoverEnd { target } if inside(target) => self.on_hover_end(target),
            Event::Focus {
                target,
                cause: FocusCause::Pointer,
            } if inside(target) => self.on_pointer_focus(target),
            Event::Focus { target, .. } if inside(target) => self.on_focus(target),
            Event::Blur { target, new_target } if inside(target) => {
                let focus_within = new_target.as_deref().is_some_and(inside);
                self.on_blur(target, focus_within)
            }
            _ => EventResult::Ignored,
        };

        log::trace!(
            "[dispatch] {} {:?} -> {:?}",
            self.id_string(),
            event,
            result
        );
        result
    }
}
