//! Headless application core (state/action/store).

pub mod action;
pub mod board;
pub mod cell;
pub mod form;
pub mod state;
pub mod store;

pub use action::Action;
pub use board::{BoardState, SwapDirection, DEFAULT_GRID_COLUMNS};
pub use cell::{Cell, CellId, CellKind, CellSpec};
pub use form::{FormField, FormState};
pub use state::{AppState, DragUiState, GridViewState, UiState};
pub use store::Store;
