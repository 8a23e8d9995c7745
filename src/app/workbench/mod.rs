//! The workbench: owns the store and the pointer tracker, routes input to
//! kernel actions, and renders the form, board and status line.

use ratatui::layout::Rect;
use ratatui::Frame;

use crate::core::event::InputEvent;
use crate::core::view::{EventResult, View};
use crate::kernel::{Action, AppState, BoardState, Store};
use crate::ui::hit::HitMap;
use crate::ui::pointer::PointerTracker;

use super::theme::UiTheme;

mod dnd_rules;
mod input;
mod mouse;
mod render;
mod tick;

pub(crate) const FORM_HEIGHT: u16 = 3;
pub(crate) const STATUS_HEIGHT: u16 = 1;
/// Pointer rows from a board edge that trigger auto-scroll while dragging.
pub(crate) const EDGE_SCROLL_MARGIN: u16 = 2;
pub(crate) const EDGE_SCROLL_STEP: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollMode {
    Instant,
    Smooth,
}

/// Edge auto-scroll behavior per edge. The reference scrolls the bottom
/// edge instantly and the top edge smoothly; both are overridable.
#[derive(Debug, Clone, Copy)]
pub struct EdgeScrollConfig {
    pub top: ScrollMode,
    pub bottom: ScrollMode,
}

impl Default for EdgeScrollConfig {
    fn default() -> Self {
        Self {
            top: ScrollMode::Smooth,
            bottom: ScrollMode::Instant,
        }
    }
}

pub struct Workbench {
    store: Store,
    tracker: PointerTracker,
    theme: UiTheme,
    hits: HitMap,
    edge_scroll: EdgeScrollConfig,
    /// At most one edge-scroll probe per frame, however fast drag events
    /// arrive.
    pending_edge_sample: Option<(u16, u16)>,
    scroll_target: Option<u16>,
    last_board_area: Option<Rect>,
    last_cursor_pos: Option<(u16, u16)>,
}

impl Workbench {
    pub fn new() -> Self {
        Self::with_board(BoardState::seeded())
    }

    pub fn with_board(board: BoardState) -> Self {
        Self {
            store: Store::new(AppState::new(board)),
            tracker: PointerTracker::new(),
            theme: UiTheme::default(),
            hits: HitMap::new(),
            edge_scroll: EdgeScrollConfig::default(),
            pending_edge_sample: None,
            scroll_target: None,
            last_board_area: None,
            last_cursor_pos: None,
        }
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub(crate) fn dispatch(&mut self, action: Action) -> bool {
        self.store.dispatch(action)
    }
}

impl Default for Workbench {
    fn default() -> Self {
        Self::new()
    }
}

impl View for Workbench {
    fn handle_input(&mut self, event: &InputEvent) -> EventResult {
        input::handle_input(self, event)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        render::render(self, frame, area);
    }
}
