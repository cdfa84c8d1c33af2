//! Editable combobox - a text input that filters its options as you type.

pub mod events;
pub mod filter;
pub mod render;
mod state;

pub use filter::{FilterMatch, FilterMode, fuzzy_filter, substring_filter};
pub use state::{EditableCombobox, EditableId};
