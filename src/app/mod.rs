pub mod theme;
pub mod workbench;

pub use workbench::Workbench;
