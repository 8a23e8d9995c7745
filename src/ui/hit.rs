use ratatui::layout::Rect;

use crate::kernel::{CellId, FormField};

/// Interactive regions the renderer registers each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    FormField(FormField),
    Submit,
    Cell(CellId),
    CellPrev { index: usize },
    CellNext { index: usize },
    CellDelete { id: CellId },
}

/// Per-frame hit-test registry. Entries pushed later sit on top, so lookups
/// scan in reverse (buttons are pushed after the cell body they live in).
#[derive(Debug, Default)]
pub struct HitMap {
    entries: Vec<(Rect, HitTarget)>,
}

impl HitMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn push(&mut self, rect: Rect, target: HitTarget) {
        if rect.width == 0 || rect.height == 0 {
            return;
        }
        self.entries.push((rect, target));
    }

    pub fn hit(&self, x: u16, y: u16) -> Option<HitTarget> {
        self.entries
            .iter()
            .rev()
            .find(|(rect, _)| rect_contains(*rect, x, y))
            .map(|(_, target)| *target)
    }

    /// Topmost cell body under the point, ignoring overlaid controls. Drag
    /// gestures care about the cell, not the button they began on.
    pub fn hit_cell(&self, x: u16, y: u16) -> Option<CellId> {
        self.entries.iter().rev().find_map(|(rect, target)| {
            match target {
                HitTarget::Cell(id) if rect_contains(*rect, x, y) => Some(*id),
                _ => None,
            }
        })
    }

    pub fn entries(&self) -> &[(Rect, HitTarget)] {
        &self.entries
    }
}

pub fn rect_contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.right() && y >= rect.y && y < rect.bottom()
}
