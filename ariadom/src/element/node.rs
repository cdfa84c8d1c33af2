use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;
use crate::aria::Role;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// The markup tag an element serializes as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tag {
    #[default]
    Div,
    Span,
    Label,
    Input,
    Button,
    Ul,
    Li,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Div => "div",
            Self::Span => "span",
            Self::Label => "label",
            Self::Input => "input",
            Self::Button => "button",
            Self::Ul => "ul",
            Self::Li => "li",
        }
    }

    /// Void tags never have children or a closing tag.
    pub fn is_void(&self) -> bool {
        matches!(self, Self::Input)
    }

    /// Whether the platform makes this tag focusable without a tabindex.
    fn natively_focusable(&self) -> bool {
        matches!(self, Self::Input | Self::Button)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: Tag,

    // Accessibility
    pub role: Option<Role>,
    /// Attributes in insertion order (`aria-*`, `for`, `value`, ...).
    pub attrs: Vec<(String, String)>,
    pub tabindex: Option<i32>,

    // Content
    pub content: Content,

    // Interaction
    pub focusable: bool,
    pub clickable: bool,
    /// Disabled elements don't receive focus or input.
    pub disabled: bool,
    /// Hidden elements (and their subtrees) are not rendered visibly or tabbable.
    pub hidden: bool,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            tag: Tag::Div,
            role: None,
            attrs: Vec::new(),
            tabindex: None,
            content: Content::None,
            focusable: false,
            clickable: false,
            disabled: false,
            hidden: false,
        }
    }
}

impl Element {
    // Constructors

    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            focusable: tag.natively_focusable(),
            ..Default::default()
        }
    }

    pub fn div() -> Self {
        Self::new(Tag::Div)
    }

    pub fn span() -> Self {
        Self::new(Tag::Span)
    }

    pub fn label() -> Self {
        Self::new(Tag::Label)
    }

    pub fn input() -> Self {
        Self::new(Tag::Input)
    }

    pub fn button() -> Self {
        Self::new(Tag::Button)
    }

    pub fn ul() -> Self {
        Self::new(Tag::Ul)
    }

    pub fn li() -> Self {
        Self::new(Tag::Li)
    }

    // Identity

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Accessibility

    pub fn role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    /// Set a plain attribute, replacing an earlier value with the same name.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    /// Set an attribute only when `value` is `Some`.
    pub fn attr_opt(self, name: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    /// Set an `aria-*` attribute. `name` is given without the prefix.
    pub fn aria(self, name: &str, value: impl Into<String>) -> Self {
        self.attr(format!("aria-{name}"), value)
    }

    /// Set a boolean `aria-*` attribute as the literal `"true"`/`"false"`.
    pub fn aria_bool(self, name: &str, value: bool) -> Self {
        self.aria(name, crate::aria::bool_str(value))
    }

    /// Set the tabindex. Any tabindex makes the element focusable.
    pub fn tabindex(mut self, tabindex: i32) -> Self {
        self.tabindex = Some(tabindex);
        self.focusable = true;
        self
    }

    // Content

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        for child in children {
            self = self.child(child);
        }
        self
    }

    // Interaction

    pub fn focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    // Queries

    /// Look up an attribute value by name.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Whether the element can receive focus at all (click or script).
    pub fn can_focus(&self) -> bool {
        self.focusable && !self.disabled && !self.hidden
    }

    /// Whether the element participates in sequential (Tab) navigation.
    pub fn is_tabbable(&self) -> bool {
        self.can_focus() && self.tabindex.is_none_or(|t| t >= 0)
    }

    /// Text content for text elements, empty otherwise.
    pub fn text_content(&self) -> &str {
        match &self.content {
            Content::Text(text) => text,
            _ => "",
        }
    }

    /// Child elements, empty for text or empty content.
    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }
}
