//! The demo catalogue.
//!
//! Every demo mounts one widget on a [`Page`] with fixed element ids, so
//! scenario files can target elements by name. Callback payloads are
//! collected as JSON lines in a shared transcript.

use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use serde::Serialize;
use trellis::prelude::*;

use crate::error::PlaygroundError;

/// A catalogue entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoInfo {
    pub name: &'static str,
    pub summary: &'static str,
}

pub const CATALOGUE: &[DemoInfo] = &[
    DemoInfo {
        name: "combobox",
        summary: "Combobox using the variant from settings",
    },
    DemoInfo {
        name: "combobox-simple",
        summary: "Pointer-only dropdown without ARIA roles",
    },
    DemoInfo {
        name: "combobox-activedescendant",
        summary: "Combobox with aria-activedescendant",
    },
    DemoInfo {
        name: "combobox-tabindex",
        summary: "Combobox with a roving tabindex",
    },
    DemoInfo {
        name: "combobox-editable",
        summary: "Editable combobox with fuzzy filtering",
    },
    DemoInfo {
        name: "checkbox",
        summary: "Checkbox with a clickable label",
    },
    DemoInfo {
        name: "tree",
        summary: "Tree list with single selection",
    },
    DemoInfo {
        name: "tree-multi",
        summary: "Tree list with checkboxes",
    },
    DemoInfo {
        name: "date",
        summary: "Calendar grid date picker",
    },
    DemoInfo {
        name: "date-range",
        summary: "Range date picker with typed inputs",
    },
    DemoInfo {
        name: "date-range-buttons",
        summary: "Range date picker with Cancel and Confirm",
    },
];

/// Inputs that change what a demo starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoOptions {
    pub today: NaiveDate,
    pub variant: ComboboxVariant,
}

/// Callback payloads, one JSON line per call.
pub type Transcript = Arc<Mutex<Vec<String>>>;

/// A mounted demo.
pub struct Demo {
    name: &'static str,
    page: Page,
    status: Box<dyn Fn() -> String>,
    transcript: Transcript,
}

impl std::fmt::Debug for Demo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Demo")
            .field("name", &self.name)
            .field("page", &self.page)
            .finish()
    }
}

impl Demo {
    /// Build a demo from the catalogue by name.
    pub fn build(name: &str, options: &DemoOptions) -> Result<Self, PlaygroundError> {
        let info = CATALOGUE
            .iter()
            .find(|info| info.name == name)
            .ok_or_else(|| PlaygroundError::UnknownDemo(name.to_string()))?;
        let transcript: Transcript = Arc::new(Mutex::new(Vec::new()));

        let (widget, status) = match info.name {
            "combobox" => combobox(options.variant, &transcript),
            "combobox-simple" => combobox(ComboboxVariant::Simple, &transcript),
            "combobox-activedescendant" => combobox(ComboboxVariant::ActiveDescendant, &transcript),
            "combobox-tabindex" => combobox(ComboboxVariant::RovingTabindex, &transcript),
            "combobox-editable" => editable(&transcript),
            "checkbox" => checkbox(&transcript),
            "tree" => tree(false, &transcript),
            "tree-multi" => tree(true, &transcript),
            "date" => date(options.today, &transcript),
            "date-range" => date_range(options.today, false, &transcript),
            "date-range-buttons" => date_range(options.today, true, &transcript),
            other => return Err(PlaygroundError::UnknownDemo(other.to_string())),
        };

        log::debug!("[demo] built {}", info.name);
        Ok(Self {
            name: info.name,
            page: Page::from_boxed(widget),
            status,
            transcript,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    /// One-line summary of the widget state.
    pub fn status(&self) -> String {
        (self.status)()
    }

    /// Take the callback payloads recorded since the last call.
    pub fn drain_changes(&self) -> Vec<String> {
        match self.transcript.lock() {
            Ok(mut lines) => std::mem::take(&mut *lines),
            Err(_) => Vec::new(),
        }
    }
}

type Built = (Box<dyn AnyWidget>, Box<dyn Fn() -> String>);

fn record<T: Serialize + ?Sized>(transcript: &Transcript, payload: &T) {
    let line = match serde_json::to_string(payload) {
        Ok(line) => line,
        Err(e) => {
            log::warn!("[demo] could not serialize payload: {}", e);
            return;
        }
    };
    log::debug!("[demo] change {}", line);
    if let Ok(mut lines) = transcript.lock() {
        lines.push(line);
    }
}

// -----------------------------------------------------------------------------
// Data
// -----------------------------------------------------------------------------

const WORDS: [&str; 8] = [
    "quirk",
    "alpha",
    "curd",
    "lark",
    "strong",
    "apologetic",
    "space",
    "vanilla",
];

fn words() -> Vec<Item> {
    WORDS
        .iter()
        .zip(1..)
        .map(|(label, id)| Item::new(id, *label))
        .collect()
}

fn groups() -> Vec<TreeNode> {
    vec![
        TreeNode::group(
            "A",
            "Group A",
            [
                TreeNode::group(
                    "A",
                    "Subgroup A",
                    [TreeNode::leaf("A", "Item A"), TreeNode::leaf("B", "Item B")],
                ),
                TreeNode::group(
                    "B",
                    "Subgroup B",
                    [TreeNode::leaf("B", "Item B"), TreeNode::leaf("C", "Item C")],
                ),
            ],
        ),
        TreeNode::group(
            "1",
            "Group 1",
            [TreeNode::group(
                "1",
                "Subgroup 1",
                [TreeNode::leaf("A", "Item A"), TreeNode::leaf("B", "Item B")],
            )],
        ),
    ]
}

fn label_of(item: Option<Item>) -> String {
    item.map_or_else(|| "none".to_string(), |item| item.label)
}

fn open_flag(open: bool) -> &'static str {
    if open { "open" } else { "closed" }
}

// -----------------------------------------------------------------------------
// Builders
// -----------------------------------------------------------------------------

fn combobox(variant: ComboboxVariant, transcript: &Transcript) -> Built {
    let sink = Arc::clone(transcript);
    let widget = Combobox::new(words())
        .variant(variant)
        .label("Label")
        .id_prefix("combobox")
        .on_change(move |item: &Option<Item>| record(&sink, item));
    let handle = widget.clone();
    let status = move || {
        format!(
            "selected: {} | {}",
            label_of(handle.selected()),
            open_flag(handle.is_expanded())
        )
    };
    (Box::new(widget), Box::new(status))
}

fn editable(transcript: &Transcript) -> Built {
    let sink = Arc::clone(transcript);
    let mut items = words();
    items.push(Item::new(9, "a"));
    let widget = EditableCombobox::new(items)
        .label("Label")
        .id_prefix("combobox")
        .on_change(move |item: &Option<Item>| record(&sink, item));
    let handle = widget.clone();
    let status = move || {
        format!(
            "selected: {} | input: {:?} | {}",
            label_of(handle.selected()),
            handle.input(),
            open_flag(handle.is_expanded())
        )
    };
    (Box::new(widget), Box::new(status))
}

fn checkbox(transcript: &Transcript) -> Built {
    let sink = Arc::clone(transcript);
    let widget = Checkbox::new()
        .label("Icecream sandwich")
        .id_prefix("checkbox")
        .on_change(move |checked: &bool| record(&sink, checked));
    let handle = widget.clone();
    let status = move || format!("checked: {}", handle.checked_state().as_str());
    (Box::new(widget), Box::new(status))
}

fn tree(multi: bool, transcript: &Transcript) -> Built {
    let sink = Arc::clone(transcript);
    let widget = if multi {
        TreeList::multi(groups())
    } else {
        TreeList::new(groups())
    };
    let widget = widget
        .label("Groups")
        .id_prefix("tree")
        .on_select(move |selected: &Vec<KeyPath>| record(&sink, selected));
    let handle = widget.clone();
    let status = move || {
        let focused = handle
            .focused_path()
            .map_or_else(|| "none".to_string(), |path| path.join("/"));
        let selected: Vec<String> = handle.selected().iter().map(|path| path.join("/")).collect();
        format!("focused: {} | selected: [{}]", focused, selected.join(", "))
    };
    (Box::new(widget), Box::new(status))
}

fn date(today: NaiveDate, transcript: &Transcript) -> Built {
    let sink = Arc::clone(transcript);
    let widget = DatePicker::new()
        .today(today)
        .id_prefix("date")
        .on_change(move |date: &NaiveDate| record(&sink, date));
    let handle = widget.clone();
    let status = move || {
        let show = |date: Option<NaiveDate>| {
            date.map_or_else(|| "none".to_string(), |d| d.to_string())
        };
        format!(
            "selected: {} | cursor: {}",
            show(handle.selected()),
            show(handle.focused_date())
        )
    };
    (Box::new(widget), Box::new(status))
}

fn date_range(today: NaiveDate, with_buttons: bool, transcript: &Transcript) -> Built {
    let sink = Arc::clone(transcript);
    let widget = RangeDatePicker::new()
        .today(today)
        .with_buttons(with_buttons)
        .id_prefix("range")
        .on_change(move |change: &RangeChange| record(&sink, change));
    let handle = widget.clone();
    let status = move || {
        let active = handle.active().map_or("none", |endpoint| endpoint.as_str());
        format!(
            "range: {} | active: {} | {}",
            handle.range(),
            active,
            open_flag(handle.is_open())
        )
    };
    (Box::new(widget), Box::new(status))
}
