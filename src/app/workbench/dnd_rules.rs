use crate::kernel::{BoardState, CellId};
use crate::ui::pointer::DragRules;

/// Drag semantics for the board: the payload is the full cell record as
/// JSON, and anything still on the board can receive a drop.
pub(super) struct BoardDragRules<'a> {
    pub board: &'a BoardState,
}

impl DragRules for BoardDragRules<'_> {
    fn payload_for(&self, source: CellId) -> Option<String> {
        let cell = self.board.get(source)?;
        serde_json::to_string(cell).ok()
    }

    fn can_drop(&self, _payload: &str, target: CellId) -> bool {
        self.board.contains(target)
    }
}
