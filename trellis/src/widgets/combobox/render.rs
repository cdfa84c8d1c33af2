//! Element tree for the Combobox widget.

use ariadom::{Element, Role};

use super::item::EMPTY_LABEL;
use super::state::{Candidate, ComboboxInner, ComboboxVariant};

pub(super) fn render(inner: &ComboboxInner) -> Element {
    let ids = &inner.ids;

    let label = Element::label()
        .id(ids.label())
        .attr("for", ids.input())
        .text(inner.label.clone());

    let wrapper = Element::div()
        .id(ids.wrapper())
        .child(render_input(inner))
        .child(render_popup(inner));

    Element::div().id(ids.root()).child(label).child(wrapper)
}

fn render_input(inner: &ComboboxInner) -> Element {
    let ids = &inner.ids;
    let value = inner.display_text();

    match inner.variant {
        // Pointer-only: a plain clickable box, no roles, not focusable
        ComboboxVariant::Simple => Element::div()
            .id(ids.input())
            .clickable(true)
            .disabled(inner.disabled)
            .text(value),

        ComboboxVariant::ActiveDescendant => {
            let active = inner
                .focused
                .filter(|_| inner.expanded)
                .and_then(|candidate| inner.candidate_id(candidate));

            Element::input()
                .id(ids.input())
                .role(Role::Combobox)
                .attr("aria-labelledby", ids.label())
                .attr_opt("aria-activedescendant", active)
                .attr("aria-controls", ids.popup())
                .aria_bool("expanded", inner.expanded)
                .aria_bool("readonly", false)
                .attr("value", value)
                .tabindex(0)
                .clickable(true)
                .disabled(inner.disabled)
        }

        ComboboxVariant::RovingTabindex => {
            let input = Element::input()
                .id(ids.input())
                .role(Role::Combobox)
                .attr("aria-controls", ids.popup())
                .aria_bool("expanded", inner.expanded)
                .attr("readonly", "")
                .attr("value", value)
                .clickable(true)
                .disabled(inner.disabled);

            // Focus lives on the options while the popup is open
            if inner.expanded {
                input.tabindex(-1)
            } else {
                input
            }
        }
    }
}

fn render_popup(inner: &ComboboxInner) -> Element {
    let ids = &inner.ids;
    let simple = inner.variant == ComboboxVariant::Simple;

    let mut popup = Element::ul().id(ids.popup()).hidden(!inner.popup_visible());
    if !simple {
        popup = popup.role(Role::Listbox);
    }

    if inner.empty_option {
        popup = popup.child(render_option(
            inner,
            ids.empty_option(),
            EMPTY_LABEL,
            Candidate::Empty,
            inner.selected.is_none(),
        ));
    }

    for (index, item) in inner.items.iter().enumerate() {
        popup = popup.child(render_option(
            inner,
            ids.option(item.id),
            &item.label,
            Candidate::Item(index),
            inner.selected == Some(index),
        ));
    }

    popup
}

fn render_option(
    inner: &ComboboxInner,
    id: String,
    label: &str,
    candidate: Candidate,
    selected: bool,
) -> Element {
    let option = Element::li().id(id).clickable(true).text(label);

    match inner.variant {
        ComboboxVariant::Simple => option,
        ComboboxVariant::ActiveDescendant => option
            .role(Role::Option)
            .aria_bool("selected", selected)
            .tabindex(-1),
        ComboboxVariant::RovingTabindex => {
            let roving = inner.expanded && inner.focused == Some(candidate);
            option
                .role(Role::Option)
                .aria_bool("selected", selected)
                .tabindex(if roving { 0 } else { -1 })
        }
    }
}
