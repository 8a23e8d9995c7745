use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque cell identity, allocated monotonically by the board. The sole
/// entity key for lookup, reordering and drag-payload resolution.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CellId(u64);

impl CellId {
    pub const fn raw(id: u64) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Visual category of a cell. Presentation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellKind {
    Red,
    Orange,
    Blue,
}

impl CellKind {
    pub const ALL: [CellKind; 3] = [CellKind::Red, CellKind::Orange, CellKind::Blue];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Blue => "blue",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Red => Self::Orange,
            Self::Orange => Self::Blue,
            Self::Blue => Self::Red,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Red => Self::Blue,
            Self::Orange => Self::Red,
            Self::Blue => Self::Orange,
        }
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One positioned, sized, colored item on the board. `col`/`row` are grid
/// spans, `height` a minimum pixel height assigned at creation. The full
/// record is what travels as the drag payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub id: CellId,
    pub col: u16,
    pub row: u16,
    pub height: u16,
    pub kind: CellKind,
}

/// User-controlled part of a new cell; id and height are assigned by the
/// factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSpec {
    pub col: u16,
    pub row: u16,
    pub kind: CellKind,
}
