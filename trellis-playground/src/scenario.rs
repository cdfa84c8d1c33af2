//! Scripted scenarios.
//!
//! A scenario is a JSON file naming a demo and a list of raw inputs:
//!
//! ```json
//! {
//!   "demo": "combobox-activedescendant",
//!   "today": "2026-10-19",
//!   "steps": [
//!     { "action": "tab" },
//!     { "action": "tab" },
//!     { "action": "key", "key": "ArrowDown" },
//!     { "action": "key", "key": "Enter" },
//!     { "action": "snapshot" }
//!   ]
//! }
//! ```
//!
//! Steps are replayed through the page in order. The report lists each
//! step, the callback payloads it caused and any snapshots.

use std::fmt;
use std::fs;
use std::path::Path;

use ariadom::{Element, Key, Modifiers, find_element};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::demos::Demo;
use crate::error::PlaygroundError;
use crate::render::Renderer;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub demo: String,
    /// Overrides the configured "today".
    #[serde(default)]
    pub today: Option<NaiveDate>,
    pub steps: Vec<Step>,
}

/// One raw input, or a snapshot of the current state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum Step {
    Key {
        key: String,
        #[serde(default)]
        ctrl: bool,
        #[serde(default)]
        shift: bool,
        #[serde(default)]
        alt: bool,
    },
    /// Click an element, or the text beside the widget when no target is given.
    Click {
        #[serde(default)]
        target: Option<String>,
    },
    Hover {
        target: String,
    },
    HoverEnd {
        target: String,
    },
    Tab,
    BackTab,
    Type {
        text: String,
    },
    Snapshot {
        #[serde(default)]
        label: Option<String>,
    },
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Key {
                key,
                ctrl,
                shift,
                alt,
            } => {
                f.write_str("key ")?;
                for (held, name) in [(ctrl, "Ctrl+"), (shift, "Shift+"), (alt, "Alt+")] {
                    if *held {
                        f.write_str(name)?;
                    }
                }
                f.write_str(key)
            }
            Step::Click { target: Some(target) } => write!(f, "click {}", target),
            Step::Click { target: None } => f.write_str("click outside"),
            Step::Hover { target } => write!(f, "hover {}", target),
            Step::HoverEnd { target } => write!(f, "hover-end {}", target),
            Step::Tab => f.write_str("tab"),
            Step::BackTab => f.write_str("back-tab"),
            Step::Type { text } => write!(f, "type {:?}", text),
            Step::Snapshot { label: Some(label) } => write!(f, "snapshot {}", label),
            Step::Snapshot { label: None } => f.write_str("snapshot"),
        }
    }
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self, PlaygroundError> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self, PlaygroundError> {
        Ok(serde_json::from_str(text)?)
    }
}

// -----------------------------------------------------------------------------
// Replay
// -----------------------------------------------------------------------------

/// Replay every step against the demo and return the report lines.
///
/// Stops at the first step that cannot be performed, such as a key name that
/// does not parse or a target that is not on the page.
pub fn replay(
    demo: &mut Demo,
    steps: &[Step],
    renderer: &Renderer,
) -> Result<Vec<String>, PlaygroundError> {
    let mut report = Vec::new();
    for (index, step) in steps.iter().enumerate() {
        log::debug!("[scenario] step {} {}", index + 1, step);
        report.push(format!("> {}", step));
        apply(demo, step, renderer, &mut report)?;
        for change in demo.drain_changes() {
            report.push(format!("  change: {}", change));
        }
    }
    Ok(report)
}

fn apply(
    demo: &mut Demo,
    step: &Step,
    renderer: &Renderer,
    report: &mut Vec<String>,
) -> Result<(), PlaygroundError> {
    if let Step::Snapshot { .. } = step {
        report.extend(snapshot(demo, renderer).into_iter().map(|line| format!("  {}", line)));
        return Ok(());
    }

    let page = demo.page_mut();
    match step {
        Step::Key {
            key,
            ctrl,
            shift,
            alt,
        } => {
            let key: Key = key.parse()?;
            let modifiers = Modifiers {
                shift: *shift,
                ctrl: *ctrl,
                alt: *alt,
            };
            page.key_with(key, modifiers);
        }
        Step::Click { target: Some(target) } => {
            ensure_target(&page.root(), target)?;
            page.click(target);
        }
        Step::Click { target: None } => {
            page.click_outside();
        }
        Step::Hover { target } => {
            ensure_target(&page.root(), target)?;
            page.hover(target);
        }
        Step::HoverEnd { target } => {
            ensure_target(&page.root(), target)?;
            page.hover_end(target);
        }
        Step::Tab => {
            page.tab();
        }
        Step::BackTab => {
            page.back_tab();
        }
        Step::Type { text } => {
            page.type_text(text);
        }
        Step::Snapshot { .. } => {}
    }
    Ok(())
}

fn ensure_target(root: &Element, target: &str) -> Result<(), PlaygroundError> {
    match find_element(root, target) {
        Some(_) => Ok(()),
        None => Err(PlaygroundError::UnknownTarget(target.to_string())),
    }
}

/// Status line, focus and outline of the widget.
pub fn snapshot(demo: &Demo, renderer: &Renderer) -> Vec<String> {
    let page = demo.page();
    let mut lines = vec![
        demo.status(),
        format!("focus: {}", page.focused().unwrap_or("none")),
    ];
    lines.extend(renderer.outline(&page.widget().element(), page.focused()));
    lines
}
