//! Element tree for the EditableCombobox widget.

use ariadom::{Element, Role};

use super::state::EditableInner;

pub(super) fn render(inner: &EditableInner) -> Element {
    let ids = &inner.ids;
    let filtered = inner.filtered();
    let visible = inner.expanded && !filtered.is_empty();

    let active = inner
        .focused
        .filter(|_| inner.expanded)
        .and_then(|index| inner.items.get(index))
        .map(|item| ids.option(item.id));

    let input = Element::input()
        .id(ids.input())
        .role(Role::Combobox)
        .attr("autocomplete", "off")
        .attr_opt("aria-activedescendant", active)
        .attr("aria-controls", ids.popup())
        .aria_bool("expanded", visible)
        .aria("autocomplete", "list")
        .attr("value", inner.input.clone())
        .clickable(true)
        .disabled(inner.disabled);

    let options = filtered.iter().filter_map(|index| {
        let item = inner.items.get(*index)?;
        Some(
            Element::li()
                .id(ids.option(item.id))
                .role(Role::Option)
                .aria_bool("current", inner.selected == Some(*index))
                .tabindex(-1)
                .clickable(true)
                .text(item.label.clone()),
        )
    });

    let popup = Element::ul()
        .id(ids.popup())
        .role(Role::Listbox)
        .hidden(!visible)
        .children(options);

    let label = Element::label()
        .id(ids.label())
        .attr("for", ids.input())
        .text(inner.label.clone());

    Element::div()
        .id(ids.root())
        .child(label)
        .child(Element::div().id(ids.wrapper()).child(input).child(popup))
}
