use crate::element::{Element, collect_focusable, find_element};
use crate::event::{Event, FocusCause, Key, RawInput};

/// Tracks which element is currently focused and processes events.
///
/// This is the document-level half of the event model: it decides where
/// keys go, moves focus on Tab and on clicks, and emits `Blur` before
/// `Focus` with the new target attached, so a widget's blur handler can
/// tell whether focus stayed inside it.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<String>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused element ID.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Programmatically focus an element by ID.
    /// Returns the Blur/Focus events caused by the move (empty if unchanged).
    pub fn focus(&mut self, id: &str) -> Vec<Event> {
        self.focus_with(id, FocusCause::Script)
    }

    fn focus_with(&mut self, id: &str, cause: FocusCause) -> Vec<Event> {
        if self.focused.as_deref() == Some(id) {
            return Vec::new();
        }
        let mut events = Vec::new();
        if let Some(old) = self.focused.take() {
            events.push(Event::Blur {
                target: old,
                new_target: Some(id.to_string()),
            });
        }
        self.focused = Some(id.to_string());
        events.push(Event::Focus {
            target: id.to_string(),
            cause,
        });
        log::trace!("[focus] focused {id}");
        events
    }

    /// Clear focus.
    /// Returns the Blur event if something was focused.
    pub fn blur(&mut self) -> Vec<Event> {
        match self.focused.take() {
            Some(old) => {
                log::trace!("[focus] blurred {old}");
                vec![Event::Blur {
                    target: old,
                    new_target: None,
                }]
            }
            None => Vec::new(),
        }
    }

    /// Focus the next tabbable element (Tab navigation), wrapping around.
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_next(&mut self, root: &Element) -> Option<String> {
        let focusable = collect_focusable(root);
        if focusable.is_empty() {
            return None;
        }

        let new_focus = match &self.focused {
            None => focusable[0].clone(),
            Some(current) => match focusable.iter().position(|id| id == current) {
                Some(i) => focusable[(i + 1) % focusable.len()].clone(),
                None => next_in_document_order(root, current, &focusable)
                    .unwrap_or_else(|| focusable[0].clone()),
            },
        };

        self.move_to(new_focus)
    }

    /// Focus the previous tabbable element (Shift+Tab navigation), wrapping around.
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_prev(&mut self, root: &Element) -> Option<String> {
        let focusable = collect_focusable(root);
        if focusable.is_empty() {
            return None;
        }

        let last = focusable.len() - 1;
        let new_focus = match &self.focused {
            None => focusable[last].clone(),
            Some(current) => match focusable.iter().position(|id| id == current) {
                Some(0) => focusable[last].clone(),
                Some(i) => focusable[i - 1].clone(),
                None => prev_in_document_order(root, current, &focusable)
                    .unwrap_or_else(|| focusable[last].clone()),
            },
        };

        self.move_to(new_focus)
    }

    fn move_to(&mut self, new_focus: String) -> Option<String> {
        if self.focused.as_ref() != Some(&new_focus) {
            self.focused = Some(new_focus.clone());
            Some(new_focus)
        } else {
            None
        }
    }

    /// Process raw input and produce targeted events.
    pub fn process_events(&mut self, raw: &[RawInput], root: &Element) -> Vec<Event> {
        let mut events = Vec::new();

        for input in raw {
            match input {
                RawInput::Key { key, modifiers } => {
                    let backwards = *key == Key::BackTab || (*key == Key::Tab && modifiers.shift);
                    if *key == Key::Tab || *key == Key::BackTab {
                        let old = self.focused.clone();
                        let moved = if backwards {
                            self.focus_prev(root)
                        } else {
                            self.focus_next(root)
                        };
                        if let Some(new) = moved {
                            if let Some(old) = old {
                                events.push(Event::Blur {
                                    target: old,
                                    new_target: Some(new.clone()),
                                });
                            }
                            events.push(Event::Focus {
                                target: new,
                                cause: FocusCause::Keyboard,
                            });
                        }
                        continue;
                    }

                    events.push(Event::Key {
                        target: self.focused.clone(),
                        key: *key,
                        modifiers: *modifiers,
                    });
                }

                RawInput::Click { target } => {
                    let element = target.as_deref().and_then(|id| find_element(root, id));
                    if element.is_some_and(|el| el.disabled) {
                        log::trace!("[focus] click on disabled {target:?} dropped");
                        continue;
                    }

                    // Clicking focuses the nearest focusable ancestor-or-self;
                    // clicking anything else blurs.
                    let focus_target = target
                        .as_deref()
                        .and_then(|id| focusable_ancestor(root, id));
                    match focus_target {
                        Some(id) => events.extend(self.focus_with(&id, FocusCause::Pointer)),
                        None => events.extend(self.blur()),
                    }

                    events.push(Event::Click {
                        target: target.clone(),
                    });
                }

                RawInput::Hover { target } => {
                    events.push(Event::Hover {
                        target: target.clone(),
                    });
                }

                RawInput::HoverEnd { target } => {
                    events.push(Event::HoverEnd {
                        target: target.clone(),
                    });
                }
            }
        }

        events
    }
}

/// Path of elements from `root` down to the element with `id`.
fn path_to<'a>(root: &'a Element, id: &str) -> Option<Vec<&'a Element>> {
    if root.id == id {
        return Some(vec![root]);
    }
    for child in root.child_elements() {
        if let Some(mut path) = path_to(child, id) {
            path.insert(0, root);
            return Some(path);
        }
    }
    None
}

/// The closest element on the path to `id` (inclusive) that can take focus.
fn focusable_ancestor(root: &Element, id: &str) -> Option<String> {
    path_to(root, id)?
        .into_iter()
        .rev()
        .find(|el| el.can_focus())
        .map(|el| el.id.clone())
}

/// Document-order index of every element, used when the focused element is
/// not itself tabbable (e.g. an option with `tabindex=-1`).
fn document_order(root: &Element) -> Vec<&str> {
    fn walk<'a>(el: &'a Element, out: &mut Vec<&'a str>) {
        out.push(&el.id);
        for child in el.child_elements() {
            walk(child, out);
        }
    }
    let mut out = Vec::new();
    walk(root, &mut out);
    out
}

fn next_in_document_order(root: &Element, current: &str, focusable: &[String]) -> Option<String> {
    let order = document_order(root);
    let pos = order.iter().position(|id| *id == current)?;
    order[pos + 1..]
        .iter()
        .find(|id| focusable.iter().any(|f| f == *id))
        .map(|id| id.to_string())
}

fn prev_in_document_order(root: &Element, current: &str, focusable: &[String]) -> Option<String> {
    let order = document_order(root);
    let pos = order.iter().position(|id| *id == current)?;
    order[..pos]
        .iter()
        .rev()
        .find(|id| focusable.iter().any(|f| f == *id))
        .map(|id| id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focusable_ancestor_prefers_innermost() {
        let root = Element::div()
            .id("root")
            .tabindex(-1)
            .child(Element::button().id("btn").child(Element::span().id("label")));

        assert_eq!(focusable_ancestor(&root, "label"), Some("btn".to_string()));
        assert_eq!(focusable_ancestor(&root, "root"), Some("root".to_string()));
        assert_eq!(focusable_ancestor(&root, "missing"), None);
    }

    #[test]
    fn test_tab_from_untabbable_element_continues_in_document_order() {
        let root = Element::div()
            .child(Element::input().id("a"))
            .child(Element::li().id("opt").tabindex(-1))
            .child(Element::input().id("b"));

        let mut focus = FocusState::new();
        focus.focus("opt");
        assert_eq!(focus.focus_next(&root), Some("b".to_string()));

        focus.focus("opt");
        assert_eq!(focus.focus_prev(&root), Some("a".to_string()));
    }
}
