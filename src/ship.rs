//! Ship kinds and placed ships.

use core::fmt;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Orientation {
    /// Extends along the row, one column per segment.
    Horizontal,
    /// Extends down the column, one row per segment.
    Vertical,
}

/// One of the five fixed ship templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum ShipKind {
    Carrier,
    Battleship,
    Cruiser,
    Submarine,
    Destroyer,
}

impl ShipKind {
    /// Every kind, largest first.
    pub const ALL: [ShipKind; 5] = [
        ShipKind::Carrier,
        ShipKind::Battleship,
        ShipKind::Cruiser,
        ShipKind::Submarine,
        ShipKind::Destroyer,
    ];

    /// Ship's name.
    pub const fn name(&self) -> &'static str {
        match self {
            ShipKind::Carrier => "carrier",
            ShipKind::Battleship => "battleship",
            ShipKind::Cruiser => "cruiser",
            ShipKind::Submarine => "submarine",
            ShipKind::Destroyer => "destroyer",
        }
    }

    /// Number of cells the ship occupies.
    pub const fn size(&self) -> usize {
        match self {
            ShipKind::Carrier => 5,
            ShipKind::Battleship => 4,
            ShipKind::Cruiser | ShipKind::Submarine => 3,
            ShipKind::Destroyer => 2,
        }
    }

    /// Look a kind up by its name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A ship kind anchored at (`x`, `y`) with an orientation.
///
/// `x` is the row and `y` the column. A horizontal ship covers
/// `(x, y)..(x, y + size)`, a vertical one `(x, y)..(x + size, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Ship {
    kind: ShipKind,
    x: usize,
    y: usize,
    orientation: Orientation,
}

impl Ship {
    /// Anchor a ship. Bounds are checked when it is placed on a board.
    pub const fn new(kind: ShipKind, x: usize, y: usize, orientation: Orientation) -> Self {
        Self {
            kind,
            x,
            y,
            orientation,
        }
    }

    /// Ship's kind.
    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    /// Ship's length.
    pub fn size(&self) -> usize {
        self.kind.size()
    }

    /// Anchor of the ship (x, y).
    pub fn anchor(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    /// Orientation of the ship.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Cells covered by the ship, starting at the anchor.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let (x, y, orientation) = (self.x, self.y, self.orientation);
        (0..self.size()).map(move |i| match orientation {
            Orientation::Horizontal => (x, y + i),
            Orientation::Vertical => (x + i, y),
        })
    }

    /// Whether the ship covers (`x`, `y`).
    pub fn contains(&self, x: usize, y: usize) -> bool {
        match self.orientation {
            Orientation::Horizontal => x == self.x && y >= self.y && y - self.y < self.size(),
            Orientation::Vertical => y == self.y && x >= self.x && x - self.x < self.size(),
        }
    }

    /// Whether every cell fits inside a `rows` x `cols` grid.
    pub fn fits(&self, rows: usize, cols: usize) -> bool {
        match self.orientation {
            Orientation::Horizontal => {
                self.x < rows && self.y < cols && self.size() <= cols - self.y
            }
            Orientation::Vertical => {
                self.y < cols && self.x < rows && self.size() <= rows - self.x
            }
        }
    }
}
