//! ARIA roles and attribute value helpers.
//!
//! Assistive technology reads these strings verbatim, so the spelling here is
//! part of the public contract.

/// WAI-ARIA roles used by the widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Combobox,
    Listbox,
    Option,
    Grid,
    Row,
    Gridcell,
    Tree,
    Treeitem,
    Group,
    Checkbox,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Combobox => "combobox",
            Self::Listbox => "listbox",
            Self::Option => "option",
            Self::Grid => "grid",
            Self::Row => "row",
            Self::Gridcell => "gridcell",
            Self::Tree => "tree",
            Self::Treeitem => "treeitem",
            Self::Group => "group",
            Self::Checkbox => "checkbox",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Boolean attribute value as written in markup.
pub fn bool_str(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// Tri-state value for `aria-checked`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckedState {
    #[default]
    False,
    True,
    Mixed,
}

impl CheckedState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::False => "false",
            Self::True => "true",
            Self::Mixed => "mixed",
        }
    }
}

impl From<bool> for CheckedState {
    fn from(value: bool) -> Self {
        if value { Self::True } else { Self::False }
    }
}
