//! Combobox widget - a single-select dropdown in three accessibility variants.
//!
//! - [`ComboboxVariant::Simple`]: pointer only, no ARIA roles.
//! - [`ComboboxVariant::ActiveDescendant`]: focus stays on the input, the
//!   candidate option is announced through `aria-activedescendant`.
//! - [`ComboboxVariant::RovingTabindex`]: real focus moves between options,
//!   exactly one of which carries `tabindex="0"`.

pub mod events;
pub mod ids;
pub mod item;
pub mod render;
mod state;

pub use ids::ElementIds;
pub use item::{EMPTY_LABEL, Item, warn_duplicate_ids};
pub use state::{Candidate, Combobox, ComboboxId, ComboboxVariant};
