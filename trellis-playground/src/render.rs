//! Terminal outline of an element tree.
//!
//! One line per visible element: tag and id, role, ARIA state and text.
//! Hidden subtrees are left out, the focused element is marked, and colours
//! come from a [`Palette`] picked by the configured [`ThemeMode`].

use ariadom::Element;
use crossterm::style::{Color, Stylize};

use crate::settings::ThemeMode;

const INDENT: &str = "  ";
const FOCUS_MARKER: &str = "> ";

/// Named colours for the outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub tag: Color,
    pub role: Color,
    pub attr: Color,
    pub text: Color,
    pub focus: Color,
}

impl Palette {
    pub const fn light() -> Self {
        Self {
            tag: Color::DarkBlue,
            role: Color::DarkMagenta,
            attr: Color::DarkGrey,
            text: Color::Black,
            focus: Color::DarkGreen,
        }
    }

    pub const fn dark() -> Self {
        Self {
            tag: Color::Cyan,
            role: Color::Magenta,
            attr: Color::Grey,
            text: Color::White,
            focus: Color::Green,
        }
    }

    pub const fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }
}

/// Renders outlines, with or without ANSI colour.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    palette: Palette,
    color: bool,
}

impl Renderer {
    pub fn new(mode: ThemeMode) -> Self {
        Self {
            palette: Palette::for_mode(mode),
            color: true,
        }
    }

    /// Renderer emitting plain text.
    pub fn plain() -> Self {
        Self {
            palette: Palette::light(),
            color: false,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Render the tree as lines, marking `focused`.
    pub fn outline(&self, root: &Element, focused: Option<&str>) -> Vec<String> {
        let mut lines = Vec::new();
        self.write_element(root, 0, focused, &mut lines);
        lines
    }

    fn write_element(
        &self,
        el: &Element,
        depth: usize,
        focused: Option<&str>,
        lines: &mut Vec<String>,
    ) {
        if el.hidden {
            return;
        }

        let is_focused = focused == Some(el.id.as_str());
        let mut line = INDENT.repeat(depth);
        if is_focused {
            line.push_str(&self.paint(FOCUS_MARKER, self.palette.focus));
        }

        let head = format!("{}#{}", el.tag.as_str(), el.id);
        if is_focused && self.color {
            line.push_str(&head.with(self.palette.focus).bold().to_string());
        } else {
            line.push_str(&self.paint(&head, self.palette.tag));
        }

        if let Some(role) = el.role {
            line.push(' ');
            line.push_str(&self.paint(&format!("[{}]", role.as_str()), self.palette.role));
        }

        for (name, value) in el.attrs.iter().filter(|(name, _)| shown_attr(name)) {
            line.push(' ');
            line.push_str(&self.paint(&format!("{}={}", name, value), self.palette.attr));
        }
        if el.disabled {
            line.push(' ');
            line.push_str(&self.paint("disabled", self.palette.attr));
        }

        let text = el.text_content();
        if !text.is_empty() {
            line.push(' ');
            line.push_str(&self.paint(&format!("{:?}", text), self.palette.text));
        }

        lines.push(line);
        for child in el.child_elements() {
            self.write_element(child, depth + 1, focused, lines);
        }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            text.with(color).to_string()
        } else {
            text.to_string()
        }
    }
}

fn shown_attr(name: &str) -> bool {
    (name.starts_with("aria-") && name != "aria-controls" && name != "aria-labelledby")
        || name == "value"
        || name.starts_with("data-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use ariadom::Role;

    fn sample() -> Element {
        Element::div()
            .id("root")
            .child(
                Element::input()
                    .id("field")
                    .role(Role::Combobox)
                    .aria("expanded", "false")
                    .aria("controls", "list"),
            )
            .child(Element::div().id("list").hidden(true).child(Element::span().id("x")))
            .child(Element::span().id("note").text("hello"))
    }

    #[test]
    fn test_outline_skips_hidden_and_marks_focus() {
        let lines = Renderer::plain().outline(&sample(), Some("field"));
        assert_eq!(
            lines,
            vec![
                "div#root".to_string(),
                "  > input#field [combobox] aria-expanded=false".to_string(),
                "  span#note \"hello\"".to_string(),
            ]
        );
    }

    #[test]
    fn test_color_wraps_segments() {
        let lines = Renderer::new(ThemeMode::Dark).outline(&sample(), None);
        assert!(lines[0].contains("div#root"));
        assert!(lines[0].contains('\u{1b}'));
    }
}
