use rand::Rng;

use crate::{
    board::{initialize_board_with, Board},
    common::{BoardError, CellState},
    config::{GameConfig, FLEET, NUM_SHIPS},
    ship::ShipKind,
};

/// Number of seats at the table.
pub const NUM_PLAYERS: usize = 2;

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "snake_case"))]
pub enum GameStatus {
    InProgress,
    /// The player sank every ship on their target board.
    Won(usize),
}

/// Where the active turn stands.
///
/// `Resolved` and `Flipping` both mean a shot landed and the swap to the other
/// player is still pending; `Flipping` is the visible transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "snake_case"))]
pub enum TurnPhase {
    Ready,
    Resolved,
    Flipping,
}

/// Errors returned by session operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    Board(BoardError),
    /// A shot was already taken this turn and the swap has not happened yet.
    TurnPending,
    /// Someone already won; only a restart continues play.
    GameOver,
}

impl From<BoardError> for SessionError {
    fn from(err: BoardError) -> Self {
        SessionError::Board(err)
    }
}

impl core::fmt::Display for SessionError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SessionError::Board(e) => write!(f, "Board error: {}", e),
            SessionError::TurnPending => write!(f, "Turn is still changing over"),
            SessionError::GameOver => write!(f, "Game is over"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Board(e) => Some(e),
            _ => None,
        }
    }
}

/// What a single fire action did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct ShotReport {
    pub player: usize,
    pub x: usize,
    pub y: usize,
    /// `Miss` or `Hit`.
    pub state: CellState,
    pub sunk: bool,
    pub sunk_kind: Option<ShipKind>,
    pub score: usize,
    pub status: GameStatus,
}

/// Read-only snapshot handed to a render surface.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct SessionView<'a> {
    pub active_player: usize,
    pub scores: [usize; NUM_PLAYERS],
    pub fleet_size: usize,
    pub flipping: bool,
    pub status: GameStatus,
    /// Board the active player is firing at.
    pub board: &'a Board,
}

/// Two target boards, scores and turn state for a hot-seat game.
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    boards: [Board; NUM_PLAYERS],
    scores: [usize; NUM_PLAYERS],
    active: usize,
    phase: TurnPhase,
    status: GameStatus,
}

/// Generate a board for `config`, starting over from an empty grid up to
/// `config.board_retries` times when a ship cannot be placed.
pub fn generate_board<R: Rng>(config: &GameConfig, rng: &mut R) -> Result<Board, BoardError> {
    let mut tries = 0;
    loop {
        match initialize_board_with(
            config.rows,
            config.cols,
            &FLEET,
            config.max_placement_attempts,
            rng,
        ) {
            Ok(board) => return Ok(board),
            Err(err @ BoardError::PlacementExhausted { .. }) if tries < config.board_retries => {
                tries += 1;
                log::warn!("{}; regenerating board (retry {})", err, tries);
            }
            Err(err) => return Err(err),
        }
    }
}

impl GameSession {
    /// Start a session with two independently generated boards.
    pub fn new<R: Rng>(config: GameConfig, rng: &mut R) -> Result<Self, BoardError> {
        let boards = [generate_board(&config, rng)?, generate_board(&config, rng)?];
        Ok(Self::from_boards(config, boards))
    }

    /// Start a session on prepared boards.
    pub fn from_boards(config: GameConfig, boards: [Board; NUM_PLAYERS]) -> Self {
        Self {
            config,
            boards,
            scores: [0; NUM_PLAYERS],
            active: 0,
            phase: TurnPhase::Ready,
            status: GameStatus::InProgress,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Board player `player` fires at, or `None` for a seat that does not exist.
    pub fn board(&self, player: usize) -> Option<&Board> {
        self.boards.get(player)
    }

    pub fn scores(&self) -> [usize; NUM_PLAYERS] {
        self.scores
    }

    pub fn active_player(&self) -> usize {
        self.active
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Whether the turn transition flag is raised.
    pub fn is_flipping(&self) -> bool {
        self.phase == TurnPhase::Flipping
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Snapshot for rendering the active player's view.
    pub fn view(&self) -> SessionView<'_> {
        SessionView {
            active_player: self.active,
            scores: self.scores,
            fleet_size: NUM_SHIPS,
            flipping: self.is_flipping(),
            status: self.status,
            board: &self.boards[self.active],
        }
    }

    /// Fire the active player's shot at (`x`, `y`) on their target board.
    pub fn fire(&mut self, x: isize, y: isize) -> Result<ShotReport, SessionError> {
        if let GameStatus::Won(_) = self.status {
            return Err(SessionError::GameOver);
        }
        if self.phase != TurnPhase::Ready {
            return Err(SessionError::TurnPending);
        }
        let player = self.active;
        let shot = self.boards[player].fire(x, y)?;
        let sunk_kind = shot.sunk_kind();
        self.boards[player] = shot.board;

        if shot.sunk {
            self.scores[player] += 1;
            log::info!("player {} sank the {}", player + 1, shot.ship.map_or("ship", |s| s.kind().name()));
        }
        if self.boards[player].all_sunk() {
            self.status = GameStatus::Won(player);
            log::info!("player {} wins", player + 1);
        } else {
            self.phase = TurnPhase::Resolved;
        }

        Ok(ShotReport {
            player,
            // in-bounds coordinates are never negative
            x: x as usize,
            y: y as usize,
            state: shot.state,
            sunk: shot.sunk,
            sunk_kind,
            score: self.scores[player],
            status: self.status,
        })
    }

    /// Raise the transition flag for a pending turn. Returns whether it changed.
    pub fn begin_flip(&mut self) -> bool {
        if self.phase == TurnPhase::Resolved {
            self.phase = TurnPhase::Flipping;
            true
        } else {
            false
        }
    }

    /// Hand the turn to the other player and clear the transition flag.
    /// Does nothing if no shot is pending.
    pub fn end_turn(&mut self) -> bool {
        match self.phase {
            TurnPhase::Ready => false,
            TurnPhase::Resolved | TurnPhase::Flipping => {
                self.active = (self.active + 1) % NUM_PLAYERS;
                self.phase = TurnPhase::Ready;
                log::debug!("turn passes to player {}", self.active + 1);
                true
            }
        }
    }

    /// Regenerate both boards and reset scores and turn state.
    ///
    /// On failure the session is left as it was.
    pub fn restart<R: Rng>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        let boards = [
            generate_board(&self.config, rng)?,
            generate_board(&self.config, rng)?,
        ];
        *self = Self::from_boards(self.config, boards);
        log::info!("game restarted");
        Ok(())
    }
}
