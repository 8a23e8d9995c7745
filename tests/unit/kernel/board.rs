use super::*;
use crate::kernel::cell::{CellId, CellKind, CellSpec};

fn spec(kind: CellKind) -> CellSpec {
    CellSpec {
        col: 1,
        row: 1,
        kind,
    }
}

/// Board whose list order is [a, b, c].
fn board_abc() -> (BoardState, CellId, CellId, CellId) {
    let mut board = BoardState::new();
    let c = board.create(spec(CellKind::Blue), 30);
    let b = board.create(spec(CellKind::Orange), 20);
    let a = board.create(spec(CellKind::Red), 10);
    (board, a, b, c)
}

fn order(board: &BoardState) -> Vec<CellId> {
    board.cells().iter().map(|c| c.id).collect()
}

#[test]
fn swap_adjacent_prev_at_zero_is_noop() {
    let (mut board, a, b, c) = board_abc();
    assert!(!board.swap_adjacent(0, SwapDirection::Prev));
    assert_eq!(order(&board), vec![a, b, c]);
}

#[test]
fn swap_adjacent_next_exchanges_exactly_the_neighbors() {
    let (mut board, a, b, c) = board_abc();
    assert!(board.swap_adjacent(1, SwapDirection::Next));
    assert_eq!(order(&board), vec![a, c, b]);
    assert_eq!(board.len(), 3);

    // Continuing the worked example: prev at index 0 stays a no-op.
    assert!(!board.swap_adjacent(0, SwapDirection::Prev));
    assert_eq!(order(&board), vec![a, c, b]);
}

#[test]
fn swap_adjacent_next_at_end_is_noop() {
    let (mut board, a, b, c) = board_abc();
    assert!(!board.swap_adjacent(2, SwapDirection::Next));
    assert_eq!(order(&board), vec![a, b, c]);
}

#[test]
fn swap_adjacent_out_of_range_index_is_noop() {
    let (mut board, a, b, c) = board_abc();
    assert!(!board.swap_adjacent(7, SwapDirection::Prev));
    assert!(!board.swap_adjacent(7, SwapDirection::Next));
    assert_eq!(order(&board), vec![a, b, c]);
}

#[test]
fn swap_by_ids_with_absent_id_is_identity() {
    let (mut board, a, b, c) = board_abc();
    let ghost = CellId::raw(999);
    assert!(!board.swap_by_ids(a, ghost));
    assert!(!board.swap_by_ids(ghost, a));
    assert!(!board.swap_by_ids(ghost, ghost));
    assert_eq!(order(&board), vec![a, b, c]);
}

#[test]
fn swap_by_ids_twice_restores_order() {
    let (mut board, a, b, c) = board_abc();
    assert!(board.swap_by_ids(a, c));
    assert_eq!(order(&board), vec![c, b, a]);
    assert!(board.swap_by_ids(a, c));
    assert_eq!(order(&board), vec![a, b, c]);
}

#[test]
fn swap_by_ids_with_itself_reports_no_change() {
    let (mut board, a, b, c) = board_abc();
    assert!(!board.swap_by_ids(b, b));
    assert_eq!(order(&board), vec![a, b, c]);
}

#[test]
fn create_prepends_with_a_fresh_id() {
    let (mut board, a, b, c) = board_abc();
    let new = board.create(
        CellSpec {
            col: 3,
            row: 2,
            kind: CellKind::Orange,
        },
        77,
    );

    assert_eq!(board.len(), 4);
    assert_eq!(order(&board), vec![new, a, b, c]);
    assert!(![a, b, c].contains(&new));

    let cell = board.get(new).unwrap();
    assert_eq!(cell.col, 3);
    assert_eq!(cell.row, 2);
    assert_eq!(cell.kind, CellKind::Orange);
    assert_eq!(cell.height, 77);
}

#[test]
fn remove_deletes_exactly_the_named_cell() {
    let (mut board, a, b, c) = board_abc();
    assert!(board.remove(b));
    assert_eq!(order(&board), vec![a, c]);
    assert!(!board.contains(b));
}

#[test]
fn remove_absent_id_is_noop() {
    let (mut board, a, b, c) = board_abc();
    assert!(!board.remove(CellId::raw(999)));
    assert_eq!(order(&board), vec![a, b, c]);
}

#[test]
fn swap_at_checks_bounds_and_self_swap() {
    let (mut board, a, b, c) = board_abc();
    assert!(!board.swap_at(0, 3));
    assert!(!board.swap_at(3, 0));
    assert!(!board.swap_at(1, 1));
    assert_eq!(order(&board), vec![a, b, c]);

    assert!(board.swap_at(0, 2));
    assert_eq!(order(&board), vec![c, b, a]);
}

#[test]
fn grid_columns_default_and_set() {
    let mut board = BoardState::new();
    assert_eq!(board.grid_columns(), DEFAULT_GRID_COLUMNS);
    assert!(board.set_grid_columns(7));
    assert_eq!(board.grid_columns(), 7);
    assert!(!board.set_grid_columns(7));
}

#[test]
fn seeded_board_matches_the_reference_demo() {
    let board = BoardState::seeded();
    let cells = board.cells();
    assert_eq!(cells.len(), 3);

    assert_eq!(cells[0].kind, CellKind::Red);
    assert_eq!((cells[0].col, cells[0].row, cells[0].height), (2, 1, 200));
    assert_eq!(cells[1].kind, CellKind::Blue);
    assert_eq!((cells[1].col, cells[1].row, cells[1].height), (1, 2, 100));
    assert_eq!(cells[2].kind, CellKind::Orange);
    assert_eq!((cells[2].col, cells[2].row, cells[2].height), (2, 1, 380));
}
