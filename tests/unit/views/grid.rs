use super::*;
use crate::kernel::cell::{Cell, CellId, CellKind};

fn cell(id: u64, col: u16, row: u16, height: u16) -> Cell {
    Cell {
        id: CellId::raw(id),
        col,
        row,
        height,
        kind: CellKind::Red,
    }
}

fn placement_of(layout: &GridLayout, id: u64) -> Placement {
    layout
        .placements
        .iter()
        .copied()
        .find(|p| p.id == CellId::raw(id))
        .unwrap()
}

#[test]
fn empty_list_yields_an_empty_layout() {
    let layout = layout(&[], 4);
    assert!(layout.placements.is_empty());
    assert_eq!(layout.total_rows, 0);
}

#[test]
fn single_spans_fill_a_row_left_to_right() {
    let cells = [cell(1, 1, 1, 0), cell(2, 1, 1, 0), cell(3, 1, 1, 0)];
    let layout = layout(&cells, 4);

    for (i, id) in [1u64, 2, 3].iter().enumerate() {
        let p = placement_of(&layout, *id);
        assert_eq!((p.track_row, p.track_col), (0, i as u16));
    }
}

#[test]
fn items_wrap_when_a_span_does_not_fit() {
    let cells = [cell(1, 2, 1, 0), cell(2, 2, 1, 0), cell(3, 2, 1, 0)];
    let layout = layout(&cells, 4);

    assert_eq!(
        (placement_of(&layout, 1).track_row, placement_of(&layout, 1).track_col),
        (0, 0)
    );
    assert_eq!(
        (placement_of(&layout, 2).track_row, placement_of(&layout, 2).track_col),
        (0, 2)
    );
    assert_eq!(
        (placement_of(&layout, 3).track_row, placement_of(&layout, 3).track_col),
        (1, 0)
    );
}

#[test]
fn the_placement_cursor_never_moves_backwards() {
    // span 3, span 2, span 1 on 4 tracks: the single-track item lands after
    // the cursor, not in the row-0 gap it could have filled.
    let cells = [cell(1, 3, 1, 0), cell(2, 2, 1, 0), cell(3, 1, 1, 0)];
    let layout = layout(&cells, 4);

    assert_eq!(
        (placement_of(&layout, 2).track_row, placement_of(&layout, 2).track_col),
        (1, 0)
    );
    assert_eq!(
        (placement_of(&layout, 3).track_row, placement_of(&layout, 3).track_col),
        (1, 2)
    );
}

#[test]
fn oversized_column_spans_clamp_to_the_track_count() {
    let cells = [cell(1, 9, 1, 0)];
    let layout = layout(&cells, 4);
    assert_eq!(placement_of(&layout, 1).span_col, 4);
}

#[test]
fn zero_spans_and_zero_columns_degrade_to_one() {
    let cells = [cell(1, 0, 0, 0)];
    let layout = layout(&cells, 0);
    let p = placement_of(&layout, 1);
    assert_eq!(layout.columns, 1);
    assert_eq!((p.span_col, p.span_row), (1, 1));
}

#[test]
fn pixel_heights_round_up_to_rows_with_a_floor() {
    assert_eq!(min_rows_for(0), MIN_TRACK_ROWS);
    assert_eq!(min_rows_for(200), 4);
    assert_eq!(min_rows_for(249), 5);
    assert_eq!(min_rows_for(380), 8);
}

#[test]
fn tracks_grow_to_the_tallest_occupant() {
    let cells = [cell(1, 1, 1, 380), cell(2, 1, 1, 0)];
    let layout = layout(&cells, 2);
    assert_eq!(layout.track_heights, vec![8]);
    assert_eq!(layout.total_rows, 8);
}

#[test]
fn row_spanning_cells_share_their_height_across_tracks() {
    // A 2-row cell needing 8 rows spreads over two tracks and the gap.
    let cells = [cell(1, 1, 2, 380), cell(2, 1, 1, 0)];
    let layout = layout(&cells, 2);

    assert_eq!(layout.track_heights.len(), 2);
    assert!(layout.track_heights.iter().all(|h| *h >= 4));
    let spanned: u16 = layout.track_heights.iter().sum::<u16>() + ROW_GAP;
    assert!(spanned >= 8);
}

#[test]
fn total_rows_include_the_gaps_between_tracks() {
    let cells = [cell(1, 1, 1, 0), cell(2, 1, 1, 0)];
    let layout = layout(&cells, 1);
    assert_eq!(layout.track_heights, vec![MIN_TRACK_ROWS; 2]);
    assert_eq!(layout.total_rows, MIN_TRACK_ROWS * 2 + ROW_GAP);
}

#[test]
fn rects_project_tracks_to_columns_and_prefix_heights() {
    let cells = [cell(1, 2, 1, 0), cell(2, 1, 1, 0), cell(3, 1, 1, 0)];
    let layout = layout(&cells, 4);
    let rects = layout.rects(43); // col width (43 - 3) / 4 = 10

    let (_, first) = rects[0];
    assert_eq!((first.x, first.y), (0, 0));
    assert_eq!(first.width, 2 * 10 + 1);
    assert_eq!(first.height, MIN_TRACK_ROWS);

    let (_, second) = rects[1];
    assert_eq!(second.x, 2 * 11);
    assert_eq!(second.width, 10);

    let (_, third) = rects[2];
    assert_eq!(third.x, 3 * 11);
}
