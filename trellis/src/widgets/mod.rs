//! Built-in widgets.
//!
//! Each widget lives in its own module with:
//! - `state.rs` - the widget state type and its transitions
//! - `events.rs` - the [`WidgetEvents`] implementation
//! - `render.rs` - the element tree and ARIA attributes
//! - `mod.rs` - public exports

pub mod callback;
pub mod checkbox;
pub mod combobox;
pub mod date;
pub mod editable;
pub mod events;
pub mod selection;
pub mod traits;
pub mod tree;

pub use callback::Callback;
pub use events::{EventResult, FocusRequest, WidgetEvents};
pub use traits::AnyWidget;
