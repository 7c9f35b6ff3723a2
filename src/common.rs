//! Common types for Battleship: board errors and cell states.

use crate::ship::ShipKind;

/// State of a single board cell.
///
/// Transitions only run `Empty -> Miss` and `Ship -> Hit -> Sunk`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum CellState {
    #[default]
    Empty,
    Ship,
    Miss,
    Hit,
    Sunk,
}

impl CellState {
    /// Lowercase label of the state.
    pub const fn name(&self) -> &'static str {
        match self {
            CellState::Empty => "empty",
            CellState::Ship => "ship",
            CellState::Miss => "miss",
            CellState::Hit => "hit",
            CellState::Sunk => "sunk",
        }
    }

    /// Whether a shot may still land here.
    pub const fn is_target(&self) -> bool {
        matches!(self, CellState::Empty | CellState::Ship)
    }
}

impl core::fmt::Display for CellState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Shot coordinates fall outside the grid.
    OutOfBounds { x: isize, y: isize },
    /// Shot at a cell that was already resolved.
    InvalidTarget { x: usize, y: usize, state: CellState },
    /// Random placement found no free spot within the attempt cap.
    PlacementExhausted { kind: ShipKind, attempts: u32 },
    /// Ship placement is out of bounds.
    ShipOutOfBounds,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::OutOfBounds { x, y } => write!(f, "Coordinates ({}, {}) are out of bounds", x, y),
            BoardError::InvalidTarget { x, y, state } => {
                write!(f, "Cell ({}, {}) was already fired at ({})", x, y, state)
            }
            BoardError::PlacementExhausted { kind, attempts } => write!(
                f,
                "Could not place {} after {} attempts",
                kind, attempts
            ),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
