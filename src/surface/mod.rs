//! Render surfaces: whatever shows the board and collects shots.

use crate::common::CellState;
use crate::game::{SessionView, ShotReport};

pub mod scripted;
pub mod terminal;

/// Something the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Fire at row `x`, column `y`.
    Fire { x: isize, y: isize },
    Restart,
    Quit,
}

#[async_trait::async_trait]
pub trait RenderSurface: Send {
    /// Draw the current session state.
    async fn render(&mut self, view: &SessionView<'_>) -> anyhow::Result<()>;

    /// Wait for the next player action.
    async fn next_action(&mut self) -> anyhow::Result<Action>;

    /// Announce the outcome of a shot.
    async fn report_shot(&mut self, _report: &ShotReport) -> anyhow::Result<()> {
        Ok(())
    }

    /// Tell the player an action was rejected.
    async fn report_error(&mut self, _message: &str) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Icon shown for a cell. Unresolved cells hide whether a ship is there
/// unless `debug` is set.
pub fn cell_icon(state: CellState, debug: bool) -> &'static str {
    match state {
        CellState::Hit => "😮",
        CellState::Sunk => "😵",
        CellState::Miss => "  ",
        CellState::Empty if debug => "· ",
        CellState::Ship if debug => "S ",
        CellState::Empty | CellState::Ship => "❔",
    }
}

/// Letter for column `y`; columns past `Z` have no letter and show as `?`.
pub fn column_label(y: usize) -> char {
    u8::try_from(y)
        .ok()
        .filter(|&n| n < 26)
        .map_or('?', |n| (b'A' + n) as char)
}

/// Format (`x`, `y`) as a column letter and 1-based row, e.g. `B3`.
pub fn coord_to_string(x: usize, y: usize) -> String {
    format!("{}{}", column_label(y), x + 1)
}

/// Parse `B3`-style input into (row, column).
pub fn parse_coord(input: &str) -> Option<(usize, usize)> {
    let mut chars = input.trim().chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return None;
    }
    let col = (col_ch as u8 - b'A') as usize;
    let row: usize = chars.as_str().parse().ok()?;
    if row == 0 {
        return None;
    }
    Some((row - 1, col))
}

/// Parse a line of player input.
pub fn parse_action(input: &str) -> Option<Action> {
    match input.trim().to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => Some(Action::Quit),
        "r" | "restart" => Some(Action::Restart),
        other => parse_coord(other).map(|(x, y)| Action::Fire {
            x: x as isize,
            y: y as isize,
        }),
    }
}
