mod content;
mod node;

pub use content::Content;
pub use node::{Element, Tag};

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Check whether `id` is `root` itself or one of its descendants.
///
/// This is the containment test widgets use to decide whether a focus move
/// or click stayed inside them.
pub fn contains(root: &Element, id: &str) -> bool {
    find_element(root, id).is_some()
}

/// Collect all element IDs reachable with Tab, in tree order.
///
/// An element is tabbable when it is focusable, enabled, not hidden (and
/// not inside a hidden subtree) and its tabindex is unset or non-negative.
pub fn collect_focusable(root: &Element) -> Vec<String> {
    let mut result = Vec::new();
    collect_focusable_recursive(root, &mut result);
    result
}

fn collect_focusable_recursive(element: &Element, result: &mut Vec<String>) {
    if element.hidden {
        return;
    }
    if element.is_tabbable() {
        result.push(element.id.clone());
    }
    if let Content::Children(children) = &element.content {
        for child in children {
            collect_focusable_recursive(child, result);
        }
    }
}
