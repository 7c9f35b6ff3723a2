use std::io::{self, Write};

use tokio::io::{stdin, AsyncBufReadExt, BufReader, Lines, Stdin};

use crate::game::{GameStatus, SessionView, ShotReport};
use crate::surface::{
    cell_icon, column_label, coord_to_string, parse_action, Action, RenderSurface,
};

/// Interactive surface on stdin/stdout.
pub struct TerminalSurface {
    lines: Lines<BufReader<Stdin>>,
    debug: bool,
    active_player: usize,
}

impl TerminalSurface {
    /// `debug` reveals where the ships are.
    pub fn new(debug: bool) -> Self {
        Self {
            lines: BufReader::new(stdin()).lines(),
            debug,
            active_player: 0,
        }
    }
}

fn print_view(view: &SessionView<'_>, debug: bool) {
    let board = view.board;
    println!();
    println!("BATTLESHIP");
    match view.status {
        GameStatus::Won(player) => println!("Player {} wins!", player + 1),
        GameStatus::InProgress if view.flipping => {
            println!("Player {}'s turn ...", view.active_player + 1)
        }
        GameStatus::InProgress => println!("Player {}'s turn", view.active_player + 1),
    }
    println!(
        "{} of {}",
        view.scores[view.active_player], view.fleet_size
    );
    print!("   ");
    for y in 0..board.cols() {
        print!(" {} ", column_label(y));
    }
    println!();
    for x in 0..board.rows() {
        print!("{:2} ", x + 1);
        for y in 0..board.cols() {
            let state = board.state(x, y).unwrap_or_default();
            print!(" {}", cell_icon(state, debug));
        }
        println!();
    }
}

#[async_trait::async_trait]
impl RenderSurface for TerminalSurface {
    async fn render(&mut self, view: &SessionView<'_>) -> anyhow::Result<()> {
        self.active_player = view.active_player;
        print_view(view, self.debug);
        Ok(())
    }

    async fn next_action(&mut self) -> anyhow::Result<Action> {
        loop {
            print!(
                "Player {}, fire at (e.g. B3), or 'restart' / 'quit': ",
                self.active_player + 1
            );
            io::stdout().flush()?;
            let Some(line) = self.lines.next_line().await? else {
                return Ok(Action::Quit);
            };
            match parse_action(&line) {
                Some(action) => return Ok(action),
                None => println!("Invalid input"),
            }
        }
    }

    async fn report_shot(&mut self, report: &ShotReport) -> anyhow::Result<()> {
        let target = coord_to_string(report.x, report.y);
        match report.sunk_kind {
            Some(kind) => println!(
                "Player {} fired at {} -> sank the {}!",
                report.player + 1,
                target,
                kind
            ),
            None => println!(
                "Player {} fired at {} -> {}",
                report.player + 1,
                target,
                report.state
            ),
        }
        Ok(())
    }

    async fn report_error(&mut self, message: &str) -> anyhow::Result<()> {
        println!("Error: {}", message);
        Ok(())
    }
}
