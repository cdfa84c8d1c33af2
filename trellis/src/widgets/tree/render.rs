//! Element tree for the TreeList widget.

use ariadom::aria::CheckedState;
use ariadom::{Element, Role};

use super::node::TreeNode;
use super::state::TreeInner;

pub(super) fn render(inner: &TreeInner) -> Element {
    let focused = inner.focused_path();
    let mut tree = Element::ul()
        .id(inner.prefix.clone())
        .role(Role::Tree)
        .attr_opt("aria-label", (!inner.label.is_empty()).then(|| inner.label.clone()));
    if inner.is_multi() {
        tree = tree.aria_bool("multiselectable", true);
    }

    tree.children(
        inner
            .nodes
            .iter()
            .map(|node| render_item(inner, node, vec![node.key.clone()], focused.as_deref())),
    )
}

fn render_item(
    inner: &TreeInner,
    node: &TreeNode,
    path: Vec<String>,
    focused: Option<&[String]>,
) -> Element {
    let id = inner.item_id(&path);
    let expanded = inner.expanded.contains(&path);
    let is_focused = focused == Some(path.as_slice());

    let mut item = Element::li()
        .id(id.clone())
        .role(Role::Treeitem)
        .aria_bool("selected", inner.selection.is_selected(&path))
        .clickable(true);

    let mut row = Element::div().id(format!("{id}-row")).clickable(true);
    if inner.is_multi() {
        let checked = inner.checked(&path);
        item = item.aria("checked", checked.as_str());
        let mark = match checked {
            CheckedState::True => "[x]",
            CheckedState::Mixed => "[-]",
            CheckedState::False => "[ ]",
        };
        row = row.child(
            Element::span()
                .id(format!("{id}-checkbox"))
                .aria_bool("hidden", true)
                .clickable(true)
                .text(mark),
        );
        row = row.child(Element::span().id(format!("{id}-text")).text(node.label.clone()));
    } else {
        row = row.text(node.label.clone());
    }

    if node.is_group() {
        item = item.aria_bool("expanded", expanded);
    }
    item = item.tabindex(if is_focused { 0 } else { -1 }).child(row);

    if node.is_group() && expanded {
        let group = Element::ul()
            .id(format!("{id}-group"))
            .role(Role::Group)
            .children(node.children.iter().map(|child| {
                let mut child_path = path.clone();
                child_path.push(child.key.clone());
                render_item(inner, child, child_path, focused)
            }));
        item = item.child(group);
    }

    item
}
