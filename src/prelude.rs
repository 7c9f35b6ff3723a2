//! Commonly used types and utilities for ease of import.

pub use crate::{
    fire, initialize_board, Board, BoardError, CellState, GameConfig, GameSession, GameStatus,
    Orientation, Ship, ShipKind,
};

#[cfg(feature = "std")]
pub use crate::{seeded_rng, Action, GameDriver, RenderSurface, ScriptedSurface, TerminalSurface};
