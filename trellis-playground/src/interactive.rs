//! Interactive mode: real key presses drive a mounted demo.

use std::io::{self, Write};

use ariadom::{Key, Modifiers};
use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::Print,
    terminal,
};

use crate::demos::Demo;
use crate::error::PlaygroundError;
use crate::render::Renderer;
use crate::scenario::snapshot;

const HELP: &str = "Tab/Shift+Tab move focus, arrows navigate, Enter/Space activate, Ctrl+Q quits";

/// Raw mode on the alternate screen, restored on drop.
struct RawScreen {
    stdout: io::Stdout,
}

impl RawScreen {
    fn enter() -> io::Result<Self> {
        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;
        Ok(Self { stdout })
    }

    fn draw(&mut self, lines: &[String]) -> io::Result<()> {
        queue!(
            self.stdout,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        for line in lines {
            // Raw mode does not translate '\n'
            queue!(self.stdout, Print(line), Print("\r\n"))?;
        }
        self.stdout.flush()
    }
}

impl Drop for RawScreen {
    fn drop(&mut self) {
        let _ = execute!(self.stdout, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// What a terminal key press means to the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Send(Key, Modifiers),
    Ignore,
}

/// Translate a crossterm key event.
pub fn action_for(event: &KeyEvent) -> Action {
    if event.kind != KeyEventKind::Press {
        return Action::Ignore;
    }
    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
    match event.code {
        KeyCode::Char('q') | KeyCode::Char('c') if ctrl => return Action::Quit,
        KeyCode::Null
        | KeyCode::CapsLock
        | KeyCode::ScrollLock
        | KeyCode::NumLock
        | KeyCode::PrintScreen
        | KeyCode::Pause
        | KeyCode::Menu
        | KeyCode::KeypadBegin
        | KeyCode::Media(_)
        | KeyCode::Modifier(_) => return Action::Ignore,
        _ => {}
    }

    let key = Key::from(event.code);
    let mut modifiers = Modifiers::from(event.modifiers);
    // Shift is already part of the character or of BackTab
    if matches!(key, Key::Char(_) | Key::BackTab) {
        modifiers.shift = false;
    }
    Action::Send(key, modifiers)
}

/// Run the loop until the user quits.
pub fn run(demo: &mut Demo, renderer: &Renderer) -> Result<(), PlaygroundError> {
    let mut screen = RawScreen::enter()?;
    let mut changes: Vec<String> = Vec::new();

    loop {
        let mut lines = vec![format!("{} | {}", demo.name(), HELP), String::new()];
        lines.extend(snapshot(demo, renderer));
        if !changes.is_empty() {
            lines.push(String::new());
            lines.extend(changes.iter().map(|change| format!("change: {}", change)));
        }
        screen.draw(&lines)?;

        let CrosstermEvent::Key(key_event) = event::read()? else {
            continue;
        };
        match action_for(&key_event) {
            Action::Quit => break,
            Action::Ignore => continue,
            Action::Send(key, modifiers) => {
                log::trace!("[interactive] {:?} {:?}", key, modifiers);
                demo.page_mut().key_with(key, modifiers);
                let latest = demo.drain_changes();
                if !latest.is_empty() {
                    changes = latest;
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_ctrl_q_quits() {
        assert_eq!(
            action_for(&press(KeyCode::Char('q'), KeyModifiers::CONTROL)),
            Action::Quit
        );
    }

    #[test]
    fn test_uppercase_drops_shift() {
        assert_eq!(
            action_for(&press(KeyCode::Char('M'), KeyModifiers::SHIFT)),
            Action::Send(Key::Char('M'), Modifiers::NONE)
        );
        assert_eq!(
            action_for(&press(KeyCode::BackTab, KeyModifiers::SHIFT)),
            Action::Send(Key::BackTab, Modifiers::NONE)
        );
    }

    #[test]
    fn test_ctrl_space_keeps_ctrl() {
        assert_eq!(
            action_for(&press(KeyCode::Char(' '), KeyModifiers::CONTROL)),
            Action::Send(Key::SPACE, Modifiers::ctrl())
        );
    }

    #[test]
    fn test_release_is_ignored() {
        let mut event = press(KeyCode::Enter, KeyModifiers::NONE);
        event.kind = KeyEventKind::Release;
        assert_eq!(action_for(&event), Action::Ignore);
    }
}
