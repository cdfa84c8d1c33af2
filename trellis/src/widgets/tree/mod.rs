//! Tree list widget - a hierarchical list with roving focus.
//!
//! Two selection modes share one implementation: single selection marks one
//! item with `aria-selected`, multi selection checks leaves and derives the
//! tri-state `aria-checked` of every parent from its children.

pub mod events;
pub mod node;
pub mod render;
mod state;

pub use node::{KeyPath, TreeNode, VisibleNode};
pub use state::{TreeId, TreeList};
