//! Checkbox widget - a toggleable checkbox with a label.

pub mod events;
pub mod render;
mod state;

pub use state::{Checkbox, CheckboxId};
