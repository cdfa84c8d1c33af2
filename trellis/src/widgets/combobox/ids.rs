//! Element ID scheme shared by the combobox widgets.

/// Derives every element ID of a combobox from one prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementIds {
    prefix: String,
}

impl ElementIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Outer element holding the label and the wrapper.
    pub fn root(&self) -> String {
        self.prefix.clone()
    }

    /// Containment root: focus or clicks inside it count as "inside".
    pub fn wrapper(&self) -> String {
        format!("{}-wrapper", self.prefix)
    }

    pub fn label(&self) -> String {
        format!("{}-label", self.prefix)
    }

    pub fn input(&self) -> String {
        format!("{}-input", self.prefix)
    }

    pub fn popup(&self) -> String {
        format!("{}-listitem-popup", self.prefix)
    }

    pub fn option(&self, item_id: i64) -> String {
        format!("{}-listitem-{item_id}", self.prefix)
    }

    pub fn empty_option(&self) -> String {
        format!("{}-listitem-none", self.prefix)
    }

    /// Parse an option element ID back into the item id.
    ///
    /// Returns `Some(None)` for the empty option and `None` for anything
    /// that is not an option of this widget.
    pub fn parse_option(&self, element_id: &str) -> Option<Option<i64>> {
        let rest = element_id
            .strip_prefix(self.prefix.as_str())?
            .strip_prefix("-listitem-")?;
        match rest {
            "none" => Some(None),
            "popup" => None,
            id => id.parse().ok().map(Some),
        }
    }
}
