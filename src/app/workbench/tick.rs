use crate::kernel::Action;

use super::{ScrollMode, Workbench, EDGE_SCROLL_MARGIN, EDGE_SCROLL_STEP};

impl Workbench {
    /// Per-frame work: consume at most one edge-scroll probe and advance
    /// the smooth-scroll animation one row.
    pub fn tick(&mut self) -> bool {
        let mut changed = self.sample_edge_scroll();
        changed |= self.step_scroll_animation();
        changed
    }

    /// The once-per-frame deferral of edge scrolling: drag events may
    /// arrive far faster than frames, but only the latest pointer sample
    /// gets acted on.
    fn sample_edge_scroll(&mut self) -> bool {
        let Some((_, y)) = self.pending_edge_sample.take() else {
            return false;
        };
        if !self.tracker.is_dragging() {
            return false;
        }
        let Some(area) = self.last_board_area else {
            return false;
        };
        if area.height <= EDGE_SCROLL_MARGIN * 2 {
            return false;
        }

        // Bottom zone first, like the reference.
        if y.saturating_add(EDGE_SCROLL_MARGIN) >= area.bottom() {
            return self.edge_scroll_by(self.edge_scroll.bottom, EDGE_SCROLL_STEP as i32);
        }
        if y < area.y.saturating_add(EDGE_SCROLL_MARGIN) {
            return self.edge_scroll_by(self.edge_scroll.top, -(EDGE_SCROLL_STEP as i32));
        }
        false
    }

    fn edge_scroll_by(&mut self, mode: ScrollMode, delta: i32) -> bool {
        match mode {
            ScrollMode::Instant => self.dispatch(Action::GridScrollBy { delta }),
            ScrollMode::Smooth => {
                let view = self.store.state().ui.grid_view;
                let target = (view.scroll_offset as i32 + delta)
                    .clamp(0, view.max_scroll() as i32) as u16;
                if target == view.scroll_offset {
                    return false;
                }
                self.scroll_target = Some(target);
                true
            }
        }
    }

    fn step_scroll_animation(&mut self) -> bool {
        let Some(target) = self.scroll_target else {
            return false;
        };
        let offset = self.store.state().ui.grid_view.scroll_offset;
        if target == offset {
            self.scroll_target = None;
            return false;
        }

        let delta = if target > offset { 1 } else { -1 };
        let changed = self.dispatch(Action::GridScrollBy { delta });
        if !changed || self.store.state().ui.grid_view.scroll_offset == target {
            self.scroll_target = None;
        }
        changed
    }
}
