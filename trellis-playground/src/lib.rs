//! Playground for the trellis widgets.
//!
//! Mounts catalogue demos on a page, replays scripted scenarios against
//! them and drives them interactively from a terminal.

pub mod demos;
pub mod error;
pub mod interactive;
pub mod paths;
pub mod render;
pub mod scenario;
pub mod settings;

pub use demos::{CATALOGUE, Demo, DemoInfo, DemoOptions};
pub use error::PlaygroundError;
pub use render::{Palette, Renderer};
pub use scenario::{Scenario, Step};
pub use settings::{LogLevel, Settings, ThemeMode};
