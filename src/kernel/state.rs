use super::board::BoardState;
use super::cell::CellId;
use super::form::FormState;

/// Transient drag feedback, kept in its own slot apart from the cell list:
/// it may go stale against the domain state and is cleared wholesale when a
/// gesture ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragUiState {
    pub dragging: Option<CellId>,
    pub droppable: Option<CellId>,
}

impl DragUiState {
    pub fn is_dragging(&self) -> bool {
        self.dragging.is_some()
    }

    pub fn clear(&mut self) -> bool {
        let changed = self.dragging.is_some() || self.droppable.is_some();
        self.dragging = None;
        self.droppable = None;
        changed
    }
}

/// Board viewport bookkeeping: scroll offset plus the viewport/content
/// heights reported by the renderer, so scrolling stays clamped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridViewState {
    pub scroll_offset: u16,
    view_height: u16,
    content_height: u16,
}

impl GridViewState {
    pub fn view_height(&self) -> u16 {
        self.view_height
    }

    pub fn max_scroll(&self) -> u16 {
        self.content_height.saturating_sub(self.view_height)
    }

    pub fn set_viewport(&mut self, view_height: u16, content_height: u16) -> bool {
        if self.view_height == view_height && self.content_height == content_height {
            return false;
        }
        self.view_height = view_height;
        self.content_height = content_height;
        let clamped = self.scroll_offset.min(self.max_scroll());
        self.scroll_offset = clamped;
        true
    }

    pub fn scroll_by(&mut self, delta: i32) -> bool {
        let next = (self.scroll_offset as i32 + delta).clamp(0, self.max_scroll() as i32) as u16;
        if next == self.scroll_offset {
            return false;
        }
        self.scroll_offset = next;
        true
    }
}

#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub form: FormState,
    pub drag: DragUiState,
    pub grid_view: GridViewState,
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub board: BoardState,
    pub ui: UiState,
}

impl AppState {
    pub fn new(board: BoardState) -> Self {
        Self {
            board,
            ui: UiState::default(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(BoardState::new())
    }
}
