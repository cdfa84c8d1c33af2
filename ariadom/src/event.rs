use std::str::FromStr;

/// High-level events with element targeting.
///
/// These are produced by [`FocusState::process_events`](crate::FocusState::process_events)
/// in the order a browser would fire them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Key press event, targeted at the focused element
    Key {
        target: Option<String>,
        key: Key,
        modifiers: Modifiers,
    },
    /// Pointer click. `target` is `None` when the click hit no element.
    Click { target: Option<String> },
    /// Pointer moved over an element
    Hover { target: String },
    /// Pointer left an element
    HoverEnd { target: String },
    /// Element gained focus
    Focus { target: String, cause: FocusCause },
    /// Element lost focus. `new_target` is the element receiving focus, if any.
    Blur {
        target: String,
        new_target: Option<String>,
    },
}

impl Event {
    /// The element the event is addressed to, if any.
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Key { target, .. } | Self::Click { target } => target.as_deref(),
            Self::Hover { target }
            | Self::HoverEnd { target }
            | Self::Focus { target, .. }
            | Self::Blur { target, .. } => Some(target),
        }
    }
}

/// What moved focus onto an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusCause {
    /// A click; the matching `Click` event follows right after.
    Pointer,
    /// Tab or Shift+Tab.
    Keyboard,
    /// A `focus()` call.
    Script,
}

/// Raw, untargeted input as it arrives from a device or a script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawInput {
    Key { key: Key, modifiers: Modifiers },
    Click { target: Option<String> },
    Hover { target: String },
    HoverEnd { target: String },
}

impl RawInput {
    /// Key press without modifiers.
    pub fn key(key: Key) -> Self {
        Self::Key {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn click(target: impl Into<String>) -> Self {
        Self::Click {
            target: Some(target.into()),
        }
    }

    /// Click on empty document space.
    pub fn click_outside() -> Self {
        Self::Click { target: None }
    }

    pub fn hover(target: impl Into<String>) -> Self {
        Self::Hover {
            target: target.into(),
        }
    }
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    BackTab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Insert,
    F(u8),
}

impl Key {
    pub const SPACE: Key = Key::Char(' ');

    /// Enter or Space, the two "activate" keys.
    pub fn is_confirm(&self) -> bool {
        matches!(self, Key::Enter | Key::Char(' '))
    }
}

/// Error returned when a key name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown key name '{0}'")]
pub struct KeyParseError(pub String);

impl FromStr for Key {
    type Err = KeyParseError;

    /// Parse a DOM `KeyboardEvent.key` name (plus a few aliases).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = match s {
            "Enter" => Key::Enter,
            " " | "Space" | "Spacebar" => Key::SPACE,
            "Escape" | "Esc" => Key::Escape,
            "Backspace" => Key::Backspace,
            "Delete" => Key::Delete,
            "Tab" => Key::Tab,
            "BackTab" | "Shift+Tab" => Key::BackTab,
            "ArrowUp" | "Up" => Key::Up,
            "ArrowDown" | "Down" => Key::Down,
            "ArrowLeft" | "Left" => Key::Left,
            "ArrowRight" | "Right" => Key::Right,
            "Home" => Key::Home,
            "End" => Key::End,
            "PageUp" => Key::PageUp,
            "PageDown" => Key::PageDown,
            "Insert" => Key::Insert,
            _ => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    (Some('F'), Some(_)) => s[1..]
                        .parse::<u8>()
                        .map(Key::F)
                        .map_err(|_| KeyParseError(s.to_string()))?,
                    _ => return Err(KeyParseError(s.to_string())),
                }
            }
        };
        Ok(key)
    }
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
        alt: false,
    };

    pub fn new() -> Self {
        Self::default()
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Default::default()
        }
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }

    pub fn alt() -> Self {
        Self {
            alt: true,
            ..Default::default()
        }
    }

    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

// Conversion from crossterm types
impl From<crossterm::event::KeyCode> for Key {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Esc => Key::Escape,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            KeyCode::Insert => Key::Insert,
            KeyCode::F(n) => Key::F(n),
            _ => Key::Char('\0'), // Placeholder for unsupported keys
        }
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}
