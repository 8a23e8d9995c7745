use super::board::SwapDirection;
use super::cell::{CellId, CellSpec};
use super::form::FormField;

/// Everything that can change application state. Nondeterministic inputs
/// (the factory's random height) are sampled by the caller and carried in
/// the payload so dispatch stays deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    CellCreate { spec: CellSpec, height: u16 },
    CellDelete { id: CellId },
    CellSwapAdjacent { index: usize, dir: SwapDirection },
    CellSwapByIds { source: CellId, dest: CellId },
    GridColumnsSet { columns: u16 },
    FormFocusSet { field: FormField },
    FormFocusNext,
    FormFocusPrev,
    FormAppend { ch: char },
    FormBackspace,
    FormSpin { delta: i16 },
    DragStarted { id: CellId },
    DragHoverSet { id: Option<CellId> },
    DragEnded,
    GridViewportSet { view_height: u16, content_height: u16 },
    GridScrollBy { delta: i32 },
}
