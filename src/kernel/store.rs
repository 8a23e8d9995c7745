use super::{Action, AppState};

pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Applies an action and reports whether state changed. Invalid
    /// transitions (absent ids, out-of-range indices) are silent no-ops.
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::CellCreate { spec, height } => {
                self.state.board.create(spec, height);
                true
            }
            Action::CellDelete { id } => {
                let removed = self.state.board.remove(id);
                if removed {
                    // Drag slots must never reference a cell that is gone.
                    let drag = &mut self.state.ui.drag;
                    if drag.dragging == Some(id) {
                        drag.clear();
                    } else if drag.droppable == Some(id) {
                        drag.droppable = None;
                    }
                }
                removed
            }
            Action::CellSwapAdjacent { index, dir } => self.state.board.swap_adjacent(index, dir),
            Action::CellSwapByIds { source, dest } => self.state.board.swap_by_ids(source, dest),
            Action::GridColumnsSet { columns } => self.state.board.set_grid_columns(columns),
            Action::FormFocusSet { field } => self.state.ui.form.focus_set(field),
            Action::FormFocusNext => self.state.ui.form.focus_next(),
            Action::FormFocusPrev => self.state.ui.form.focus_prev(),
            Action::FormAppend { ch } => self.state.ui.form.append(ch),
            Action::FormBackspace => self.state.ui.form.backspace(),
            Action::FormSpin { delta } => self.state.ui.form.spin(delta),
            Action::DragStarted { id } => {
                if !self.state.board.contains(id) {
                    return false;
                }
                let drag = &mut self.state.ui.drag;
                drag.dragging = Some(id);
                drag.droppable = None;
                true
            }
            Action::DragHoverSet { id } => {
                let drag = &mut self.state.ui.drag;
                if !drag.is_dragging() {
                    return false;
                }
                if let Some(target) = id {
                    if drag.dragging == Some(target) || !self.state.board.contains(target) {
                        return false;
                    }
                }
                if drag.droppable == id {
                    return false;
                }
                drag.droppable = id;
                true
            }
            Action::DragEnded => self.state.ui.drag.clear(),
            Action::GridViewportSet {
                view_height,
                content_height,
            } => self
                .state
                .ui
                .grid_view
                .set_viewport(view_height, content_height),
            Action::GridScrollBy { delta } => self.state.ui.grid_view.scroll_by(delta),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
