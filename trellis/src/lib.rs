//! Headless, accessible widget state machines.
//!
//! Every widget owns its interaction state (selection, candidate, popup
//! visibility, focus bookkeeping) and renders an [`ariadom::Element`] tree
//! carrying the ARIA contract. A runtime feeds it targeted events through
//! [`AnyWidget::dispatch`](widgets::AnyWidget::dispatch) and honours the
//! focus requests it returns.

pub mod error;
pub mod runtime;
pub mod widgets;

pub use error::DateError;

pub mod prelude {
    pub use crate::error::DateError;
    pub use crate::runtime::Page;
    pub use crate::widgets::checkbox::Checkbox;
    pub use crate::widgets::combobox::{Combobox, ComboboxVariant, Item};
    pub use crate::widgets::date::{
        DatePicker, DateValue, Endpoint, RangeChange, RangeDatePicker,
    };
    pub use crate::widgets::editable::{EditableCombobox, FilterMode};
    pub use crate::widgets::events::{EventResult, FocusRequest, WidgetEvents};
    pub use crate::widgets::tree::{KeyPath, TreeList, TreeNode};
    pub use crate::widgets::{AnyWidget, Callback};
}
