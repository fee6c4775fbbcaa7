//! Keyboard input as seen by the viewer.
//!
//! Only the keys the viewer reacts to get their own variant; everything else
//! collapses into [`Key::Other`].

use crossterm::event::{KeyCode, KeyModifiers};

/// A single key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A printable character.
    Char(char),
    /// Enter / Return.
    Enter,
    /// Backspace.
    Backspace,
    /// Tab.
    Tab,
    /// Shift+Tab.
    BackTab,
    /// Escape.
    Esc,
    /// Arrow up.
    Up,
    /// Arrow down.
    Down,
    /// Arrow left.
    Left,
    /// Arrow right.
    Right,
    /// Ctrl+C.
    CtrlC,
    /// Anything the viewer ignores.
    Other,
}

impl Key {
    /// Converts a crossterm key code and its modifiers.
    pub fn from_crossterm(code: KeyCode, modifiers: KeyModifiers) -> Self {
        let ctrl = modifiers.contains(KeyModifiers::CONTROL);
        let shift = modifiers.contains(KeyModifiers::SHIFT);

        match code {
            KeyCode::Char(c) if ctrl => match c.to_ascii_lowercase() {
                'c' => Self::CtrlC,
                'i' => Self::Tab,
                'm' => Self::Enter,
                _ => Self::Other,
            },
            KeyCode::Char(c) => Self::Char(c),
            KeyCode::Enter => Self::Enter,
            KeyCode::Backspace => Self::Backspace,
            KeyCode::Tab if shift => Self::BackTab,
            KeyCode::Tab => Self::Tab,
            KeyCode::BackTab => Self::BackTab,
            KeyCode::Esc => Self::Esc,
            KeyCode::Up => Self::Up,
            KeyCode::Down => Self::Down,
            KeyCode::Left => Self::Left,
            KeyCode::Right => Self::Right,
            _ => Self::Other,
        }
    }
}
