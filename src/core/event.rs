//! Thin wrappers over crossterm's input events, so the rest of the app
//! never matches on the backend types directly.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent};

#[derive(Debug, Clone)]
pub enum InputEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    FocusGained,
    FocusLost,
    Paste(String),
}

impl From<Event> for InputEvent {
    fn from(event: Event) -> Self {
        match event {
            Event::Key(e) => InputEvent::Key(e),
            Event::Mouse(e) => InputEvent::Mouse(e),
            Event::Resize(w, h) => InputEvent::Resize(w, h),
            Event::FocusGained => InputEvent::FocusGained,
            Event::FocusLost => InputEvent::FocusLost,
            Event::Paste(s) => InputEvent::Paste(s),
        }
    }
}

/// A key chord with shifted letters folded to lowercase + SHIFT, so match
/// arms see one spelling per chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl From<KeyEvent> for Key {
    fn from(event: KeyEvent) -> Self {
        let (code, folded) = match event.code {
            KeyCode::Char(ch) if ch.is_ascii_uppercase() => {
                (KeyCode::Char(ch.to_ascii_lowercase()), KeyModifiers::SHIFT)
            }
            code => (code, KeyModifiers::NONE),
        };
        Self {
            code,
            modifiers: event.modifiers | folded,
        }
    }
}

/// Terminal cell the pointer is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MousePosition {
    pub x: u16,
    pub y: u16,
}

impl MousePosition {
    pub fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    pub fn from_event(event: &MouseEvent) -> Self {
        Self::new(event.column, event.row)
    }
}
