//! Element tree for the Checkbox widget.

use ariadom::aria::CheckedState;
use ariadom::{Element, Role};

use super::state::CheckboxInner;

pub(super) fn render(inner: &CheckboxInner) -> Element {
    let input_id = format!("{}-input", inner.prefix);
    let checked = if inner.indeterminate {
        CheckedState::Mixed
    } else {
        CheckedState::from(inner.checked)
    };

    let input = Element::input()
        .id(input_id.clone())
        .role(Role::Checkbox)
        .attr("type", "checkbox")
        .aria("checked", checked.as_str())
        .aria_bool("disabled", inner.disabled)
        .clickable(true)
        .disabled(inner.disabled);

    let label = Element::label()
        .id(format!("{}-label", inner.prefix))
        .attr("for", input_id)
        .clickable(true)
        .text(inner.label.clone());

    Element::div().id(inner.prefix.clone()).child(input).child(label)
}
