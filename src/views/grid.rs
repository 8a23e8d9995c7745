//! CSS-grid-style projection of the cell list: row-major auto-placement
//! with a forward-only cursor, then implicit row tracks sized so every
//! spanning cell gets its minimum height.

use ratatui::layout::Rect;

use crate::kernel::{Cell, CellId};

/// Pixel-to-terminal-row conversion for cell minimum heights.
pub const PX_PER_ROW: u16 = 50;
/// Floor height of an implicit row track, in terminal rows.
pub const MIN_TRACK_ROWS: u16 = 4;
pub const COLUMN_GAP: u16 = 1;
pub const ROW_GAP: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub id: CellId,
    pub track_col: u16,
    pub track_row: u16,
    pub span_col: u16,
    pub span_row: u16,
    pub min_rows: u16,
}

#[derive(Debug, Clone, Default)]
pub struct GridLayout {
    pub columns: u16,
    pub placements: Vec<Placement>,
    pub track_heights: Vec<u16>,
    /// Content height in terminal rows, gaps included.
    pub total_rows: u16,
}

pub fn min_rows_for(height_px: u16) -> u16 {
    MIN_TRACK_ROWS.max(height_px.div_ceil(PX_PER_ROW))
}

/// Places `cells` in order onto a grid of `columns` tracks. Spans are
/// clamped to the track count here and only here; the domain stores them
/// unvalidated. A zero column count is treated as one track.
pub fn layout(cells: &[Cell], columns: u16) -> GridLayout {
    let columns = columns.max(1);
    let mut occupancy: Vec<Vec<bool>> = Vec::new();
    let mut placements = Vec::with_capacity(cells.len());
    let mut cursor = (0u16, 0u16);

    for cell in cells {
        let span_col = cell.col.clamp(1, columns);
        let span_row = cell.row.max(1);

        let (mut r, mut c) = cursor;
        loop {
            if c + span_col > columns {
                r += 1;
                c = 0;
                continue;
            }
            ensure_rows(&mut occupancy, (r + span_row) as usize, columns);
            if area_free(&occupancy, r, c, span_row, span_col) {
                break;
            }
            c += 1;
        }
        mark(&mut occupancy, r, c, span_row, span_col);
        placements.push(Placement {
            id: cell.id,
            track_col: c,
            track_row: r,
            span_col,
            span_row,
            min_rows: min_rows_for(cell.height),
        });
        // Sparse placement: the cursor never moves backwards.
        cursor = (r, c);
    }

    let track_count = placements
        .iter()
        .map(|p| p.track_row + p.span_row)
        .max()
        .unwrap_or(0);
    let mut track_heights = vec![MIN_TRACK_ROWS; track_count as usize];
    for p in &placements {
        let spanned_gaps = (p.span_row - 1).saturating_mul(ROW_GAP);
        let per_track = p.min_rows.saturating_sub(spanned_gaps).div_ceil(p.span_row);
        for t in p.track_row..p.track_row + p.span_row {
            let h = &mut track_heights[t as usize];
            *h = (*h).max(per_track);
        }
    }

    let total_rows = total_with_gaps(&track_heights);
    GridLayout {
        columns,
        placements,
        track_heights,
        total_rows,
    }
}

impl GridLayout {
    /// Projects placements to rects relative to the content origin (before
    /// scrolling), for a viewport `width` columns wide.
    pub fn rects(&self, width: u16) -> Vec<(CellId, Rect)> {
        let columns = self.columns.max(1);
        let gap_total = COLUMN_GAP.saturating_mul(columns - 1);
        let col_w = (width.saturating_sub(gap_total) / columns).max(1);

        let mut y_offsets = Vec::with_capacity(self.track_heights.len());
        let mut y = 0u16;
        for (i, h) in self.track_heights.iter().enumerate() {
            if i > 0 {
                y = y.saturating_add(ROW_GAP);
            }
            y_offsets.push(y);
            y = y.saturating_add(*h);
        }

        self.placements
            .iter()
            .map(|p| {
                let x = p.track_col.saturating_mul(col_w + COLUMN_GAP);
                let w = p
                    .span_col
                    .saturating_mul(col_w)
                    .saturating_add((p.span_col - 1).saturating_mul(COLUMN_GAP));
                let y = y_offsets.get(p.track_row as usize).copied().unwrap_or(0);
                let h = (p.track_row..p.track_row + p.span_row)
                    .map(|t| self.track_heights.get(t as usize).copied().unwrap_or(0))
                    .sum::<u16>()
                    .saturating_add((p.span_row - 1).saturating_mul(ROW_GAP));
                (p.id, Rect::new(x, y, w, h))
            })
            .collect()
    }
}

fn ensure_rows(occupancy: &mut Vec<Vec<bool>>, rows: usize, columns: u16) {
    while occupancy.len() < rows {
        occupancy.push(vec![false; columns as usize]);
    }
}

fn area_free(occupancy: &[Vec<bool>], r: u16, c: u16, span_row: u16, span_col: u16) -> bool {
    (r..r + span_row).all(|row| {
        (c..c + span_col).all(|col| !occupancy[row as usize][col as usize])
    })
}

fn mark(occupancy: &mut [Vec<bool>], r: u16, c: u16, span_row: u16, span_col: u16) {
    for row in r..r + span_row {
        for col in c..c + span_col {
            occupancy[row as usize][col as usize] = true;
        }
    }
}

fn total_with_gaps(track_heights: &[u16]) -> u16 {
    let heights: u16 = track_heights
        .iter()
        .fold(0u16, |acc, h| acc.saturating_add(*h));
    let gaps = ROW_GAP.saturating_mul(track_heights.len().saturating_sub(1) as u16);
    heights.saturating_add(gaps)
}

#[cfg(test)]
#[path = "../../tests/unit/views/grid.rs"]
mod tests;
