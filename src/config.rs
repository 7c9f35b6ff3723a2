use crate::ship::ShipKind;

pub const DEFAULT_ROWS: usize = 10;
pub const DEFAULT_COLS: usize = 10;
pub const NUM_SHIPS: usize = 5;
pub const FLEET: [ShipKind; NUM_SHIPS] = ShipKind::ALL;

/// Attempts the random placer makes per ship before giving up.
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 1000;

/// Length of the turn transition in milliseconds.
pub const DEFAULT_FLIP_TIME_MS: u64 = 690;

/// Extra board generations a session tries after a placement failure.
pub const DEFAULT_BOARD_RETRIES: u32 = 3;

/// Settings for a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub flip_time_ms: u64,
    pub max_placement_attempts: u32,
    pub board_retries: u32,
}

impl GameConfig {
    /// Standard settings on a `rows` x `cols` board.
    pub fn with_size(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            flip_time_ms: DEFAULT_FLIP_TIME_MS,
            max_placement_attempts: MAX_PLACEMENT_ATTEMPTS,
            board_retries: DEFAULT_BOARD_RETRIES,
        }
    }
}
