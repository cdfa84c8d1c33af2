//! Range date picker - start/end fragment inputs over a shared calendar.
//!
//! The widget keeps two sets of values: the ones being edited and the last
//! confirmed pair. Closing the popup either confirms the edited pair or
//! reverts to the confirmed one, and reports the result through the change
//! callback. Calendar commits and typed dates both clear the opposite
//! endpoint when they would invert the range.

pub mod events;
pub mod render;
mod state;

pub use state::{RangeDatePicker, RangeId, Target};
