//! Element tree for the RangeDatePicker widget.

use ariadom::{Element, Role};
use chrono::NaiveDate;

use super::state::RangeInner;
use crate::widgets::date::Endpoint;
use crate::widgets::date::calendar::{WEEKDAYS, cell_label, in_hover_preview, in_range};
use crate::widgets::date::input::{Fragment, display_fragment};

pub(super) fn render(inner: &RangeInner) -> Element {
    let prefix = inner.prefix();

    let picker = Element::div()
        .id(format!("{prefix}-inputs"))
        .child(render_endpoint(inner, Endpoint::Start))
        .child(Element::span().id(format!("{prefix}-separator")).text("→"))
        .child(render_endpoint(inner, Endpoint::End));

    let mut root = Element::div()
        .id(prefix)
        .disabled(inner.disabled)
        .child(picker)
        .child(render_popup(inner));
    if !inner.disabled {
        root = root.tabindex(-1);
    }
    root
}

fn render_endpoint(inner: &RangeInner, endpoint: Endpoint) -> Element {
    let (label, placeholder) = match endpoint {
        Endpoint::Start => ("Start date", "From"),
        Endpoint::End => ("End date", "To"),
    };
    let fragments = inner.fragments(endpoint);
    let preview = inner.preview(endpoint);
    // Previewed digits are styled apart unless they match the value
    let previewing = preview.is_some_and(|date| inner.value(endpoint).as_date() != Some(date));

    let mut group = Element::div()
        .id(inner.group_id(endpoint))
        .role(Role::Group)
        .aria("label", label)
        .attr_opt("data-active", (inner.active == Some(endpoint)).then_some("true"));

    if inner.shows_placeholder(endpoint) {
        let mut cover = Element::span()
            .id(inner.placeholder_id(endpoint))
            .text(placeholder);
        if !inner.disabled {
            cover = cover.tabindex(0);
        }
        group = group.child(cover);
    }

    group.children(Fragment::ALL.into_iter().map(|fragment| {
        Element::input()
            .id(inner.fragment_id(endpoint, fragment))
            .aria("label", fragment.name())
            .attr("name", fragment.name())
            .attr("placeholder", fragment.placeholder())
            .attr("autocomplete", "off")
            .attr("maxlength", fragment.max_len().to_string())
            .attr("value", display_fragment(fragments, fragment, preview))
            .attr_opt("data-preview", previewing.then_some("true"))
            .disabled(inner.disabled)
    }))
}

fn render_popup(inner: &RangeInner) -> Element {
    let calendar = &inner.calendar;
    let prefix = inner.prefix();

    let header = Element::div()
        .id(format!("{prefix}-header"))
        .child(
            Element::span()
                .id(format!("{prefix}-heading"))
                .text(calendar.heading()),
        )
        .child(
            Element::button()
                .id(calendar.prev_id())
                .aria("label", "Prev month")
                .text("<"),
        )
        .child(
            Element::button()
                .id(calendar.next_id())
                .aria("label", "Next month")
                .text(">"),
        );

    let weekdays = Element::div()
        .id(format!("{prefix}-weekdays"))
        .children(WEEKDAYS.iter().enumerate().map(|(column, day)| {
            Element::span()
                .id(format!("{prefix}-weekday-{column}"))
                .text(*day)
        }));

    let rows = calendar.weeks().into_iter().enumerate().map(|(week, days)| {
        Element::div()
            .id(calendar.row_id(week))
            .role(Role::Row)
            .children(days.into_iter().map(|day| render_cell(inner, day)))
    });

    let grid = Element::div()
        .id(calendar.grid_id())
        .role(Role::Grid)
        .tabindex(-1)
        .aria_bool("multiselectable", true)
        .aria("activedescendant", calendar.cell_id(calendar.focused()))
        .child(weekdays)
        .children(rows);

    let mut popup = Element::div()
        .id(inner.popup_id())
        .hidden(!inner.open)
        .child(header)
        .child(grid);

    if inner.with_buttons {
        popup = popup
            .child(Element::button().id(inner.cancel_id()).text("Cancel"))
            .child(Element::button().id(inner.confirm_id()).text("Confirm"));
    }
    popup
}

fn render_cell(inner: &RangeInner, day: NaiveDate) -> Element {
    let calendar = &inner.calendar;
    let (start, end) = (inner.start.as_date(), inner.end.as_date());
    let disabled = inner.is_cell_disabled(day);
    let hovered = in_hover_preview(day, calendar.hovered(), start, end);
    let cell_id = calendar.cell_id(day);

    let button = Element::button()
        .id(cell_id.clone())
        .tabindex(-1)
        .disabled(disabled)
        .attr_opt("aria-current", calendar.is_today(day).then_some("date"))
        .aria("label", cell_label(day))
        .aria_bool("selected", in_range(day, start, end))
        .text(day.format("%-d").to_string());

    Element::div()
        .id(format!("{cell_id}-cell"))
        .role(Role::Gridcell)
        .attr_opt("data-focused", (day == calendar.focused()).then_some("true"))
        .attr_opt("data-hovered", hovered.then_some("true"))
        .child(button)
}
