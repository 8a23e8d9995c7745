//! View trait implemented by every renderable, interactive component.

use ratatui::layout::Rect;
use ratatui::Frame;

use super::event::InputEvent;

pub trait View {
    fn handle_input(&mut self, event: &InputEvent) -> EventResult;

    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// What a view did with an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Consumed,
    Ignored,
    Quit,
}
