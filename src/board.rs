//! Game board: a grid of cells, random fleet placement and shot resolution.

use alloc::vec::Vec;
use core::fmt;

use rand::Rng;

use crate::common::{BoardError, CellState};
use crate::config::{FLEET, MAX_PLACEMENT_ATTEMPTS};
use crate::ship::{Orientation, Ship, ShipKind};

/// One grid cell. `ship` is set exactly when the state is ship, hit or sunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Cell {
    pub state: CellState,
    #[cfg_attr(feature = "std", serde(skip_serializing_if = "Option::is_none"))]
    pub ship: Option<Ship>,
}

/// A `rows` x `cols` grid stored row-major, plus the ships placed on it.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    ships: Vec<Ship>,
}

/// Outcome of a shot: the board after it and whether it sank a ship.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shot {
    pub board: Board,
    /// `Miss` or `Hit`; a sinking shot still reports `Hit`.
    pub state: CellState,
    pub sunk: bool,
    /// Ship struck by the shot, if any.
    pub ship: Option<Ship>,
}

impl Shot {
    /// Kind of the ship this shot sank.
    pub fn sunk_kind(&self) -> Option<ShipKind> {
        if self.sunk {
            self.ship.map(|s| s.kind())
        } else {
            None
        }
    }
}

impl Board {
    /// Create an empty board (no ships placed).
    pub fn empty(rows: usize, cols: usize) -> Self {
        Board {
            rows,
            cols,
            cells: alloc::vec![Cell::default(); rows * cols],
            ships: Vec::new(),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Ships in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Cell at (`x`, `y`), or `None` outside the grid.
    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        if x < self.rows && y < self.cols {
            self.cells.get(x * self.cols + y)
        } else {
            None
        }
    }

    /// State of the cell at (`x`, `y`).
    pub fn state(&self, x: usize, y: usize) -> Option<CellState> {
        self.cell(x, y).map(|c| c.state)
    }

    /// Row-major iterator over `((x, y), cell)`.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &Cell)> {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| ((i / cols, i % cols), cell))
    }

    /// Coordinates that can still be fired at.
    pub fn remaining_targets(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.iter()
            .filter(|(_, cell)| cell.state.is_target())
            .map(|(coord, _)| coord)
    }

    /// Whether every cell of `ship` reads `Sunk`.
    pub fn is_sunk(&self, ship: &Ship) -> bool {
        ship.cells()
            .all(|(x, y)| self.state(x, y) == Some(CellState::Sunk))
    }

    /// Number of ships sunk so far.
    pub fn sunk_count(&self) -> usize {
        self.ships.iter().filter(|s| self.is_sunk(s)).count()
    }

    /// Returns `true` when ships are placed and all of them are sunk.
    pub fn all_sunk(&self) -> bool {
        !self.ships.is_empty() && self.ships.iter().all(|s| self.is_sunk(s))
    }

    fn index(&self, x: usize, y: usize) -> usize {
        x * self.cols + y
    }

    fn checked_coords(&self, x: isize, y: isize) -> Option<(usize, usize)> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < self.rows && y < self.cols).then_some((x, y))
    }

    /// Place a specific ship, checking bounds and overlap.
    pub fn place(&mut self, ship: Ship) -> Result<(), BoardError> {
        if !ship.fits(self.rows, self.cols) {
            return Err(BoardError::ShipOutOfBounds);
        }
        if ship
            .cells()
            .any(|(x, y)| self.state(x, y) != Some(CellState::Empty))
        {
            return Err(BoardError::ShipOverlaps);
        }
        for (x, y) in ship.cells() {
            let idx = self.index(x, y);
            self.cells[idx] = Cell {
                state: CellState::Ship,
                ship: Some(ship),
            };
        }
        self.ships.push(ship);
        Ok(())
    }

    /// Pick a random in-bounds, non-overlapping placement for `kind`.
    ///
    /// Each attempt draws an orientation, then an anchor that keeps the ship
    /// inside the grid for that orientation. An orientation the ship cannot
    /// fit in at all still uses up the attempt.
    pub fn random_placement<R: Rng>(
        &self,
        rng: &mut R,
        kind: ShipKind,
        max_attempts: u32,
    ) -> Result<Ship, BoardError> {
        let size = kind.size();
        for _ in 0..max_attempts {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (anchor_rows, anchor_cols) = match orientation {
                Orientation::Horizontal => (self.rows, (self.cols + 1).saturating_sub(size)),
                Orientation::Vertical => ((self.rows + 1).saturating_sub(size), self.cols),
            };
            if anchor_rows == 0 || anchor_cols == 0 {
                continue;
            }
            let x = rng.random_range(0..anchor_rows);
            let y = rng.random_range(0..anchor_cols);
            let ship = Ship::new(kind, x, y, orientation);
            if ship
                .cells()
                .all(|(cx, cy)| self.state(cx, cy) == Some(CellState::Empty))
            {
                return Ok(ship);
            }
        }
        Err(BoardError::PlacementExhausted {
            kind,
            attempts: max_attempts,
        })
    }

    /// Resolve a shot at (`x`, `y`) into a new board; `self` is left untouched.
    pub fn fire(&self, x: isize, y: isize) -> Result<Shot, BoardError> {
        let (x, y) = self
            .checked_coords(x, y)
            .ok_or(BoardError::OutOfBounds { x, y })?;
        let target = self.cells[self.index(x, y)];
        let state = match target.state {
            CellState::Empty => CellState::Miss,
            CellState::Ship => CellState::Hit,
            state => return Err(BoardError::InvalidTarget { x, y, state }),
        };

        let mut board = self.clone();
        let idx = board.index(x, y);
        board.cells[idx].state = state;

        let mut sunk = false;
        if let (CellState::Hit, Some(ship)) = (state, target.ship) {
            if ship
                .cells()
                .all(|(sx, sy)| board.state(sx, sy) == Some(CellState::Hit))
            {
                for (sx, sy) in ship.cells() {
                    let idx = board.index(sx, sy);
                    board.cells[idx].state = CellState::Sunk;
                }
                sunk = true;
            }
        }
        log::debug!("shot ({}, {}) -> {} sunk={}", x, y, state, sunk);
        Ok(Shot {
            board,
            state,
            sunk,
            ship: target.ship,
        })
    }
}

/// Build a `rows` x `cols` board and randomly place the standard fleet.
pub fn initialize_board<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Result<Board, BoardError> {
    initialize_board_with(rows, cols, &FLEET, MAX_PLACEMENT_ATTEMPTS, rng)
}

/// Build a board and randomly place `fleet`, one ship per entry, in order.
///
/// Fails with [`BoardError::PlacementExhausted`] as soon as one ship finds no
/// spot within `max_attempts`; nothing is retried here.
pub fn initialize_board_with<R: Rng>(
    rows: usize,
    cols: usize,
    fleet: &[ShipKind],
    max_attempts: u32,
    rng: &mut R,
) -> Result<Board, BoardError> {
    let mut board = Board::empty(rows, cols);
    for &kind in fleet {
        let ship = board.random_placement(rng, kind, max_attempts)?;
        board.place(ship)?;
        log::debug!(
            "placed {} at {:?} {:?}",
            kind,
            ship.anchor(),
            ship.orientation()
        );
    }
    Ok(board)
}

/// Fire at (`x`, `y`) on `board`, returning the new board and the sunk flag.
pub fn fire(board: &Board, x: isize, y: isize) -> Result<Shot, BoardError> {
    board.fire(x, y)
}

fn state_char(state: CellState) -> char {
    match state {
        CellState::Empty => '.',
        CellState::Ship => 'S',
        CellState::Miss => 'o',
        CellState::Hit => 'X',
        CellState::Sunk => '#',
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for x in 0..self.rows {
            for y in 0..self.cols {
                if y > 0 {
                    f.write_str(" ")?;
                }
                let state = self.state(x, y).unwrap_or_default();
                write!(f, "{}", state_char(state))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{ rows: {}, cols: {}, ships: {:?} }}",
            self.rows, self.cols, self.ships
        )?;
        fmt::Display::fmt(self, f)
    }
}
