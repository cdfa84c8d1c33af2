pub mod aria;
pub mod element;
pub mod event;
pub mod focus;
pub mod markup;

pub use aria::Role;
pub use element::{Content, Element, Tag, collect_focusable, contains, find_element};
pub use event::{Event, FocusCause, Key, KeyParseError, Modifiers, RawInput};
pub use focus::FocusState;
pub use markup::to_markup;
