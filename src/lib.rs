//! gridboard - interactive terminal grid-board editor.
//!
//! Module structure:
//! - core: input event wrappers and the View trait
//! - kernel: headless application core (state/action/store)
//! - ui: hit testing and the pointer/drag tracker
//! - views: pure grid layout projection
//! - app: the Workbench (input routing + rendering)
//! - tui: terminal lifecycle (raw mode, mouse capture, signals)

pub mod app;
pub mod core;
pub mod kernel;
pub mod logging;
pub mod tui;
pub mod ui;
pub mod views;
