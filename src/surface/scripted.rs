use std::collections::VecDeque;

use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use crate::board::Board;
use crate::game::{GameStatus, SessionView, ShotReport, NUM_PLAYERS};
use crate::surface::{Action, RenderSurface};

/// Copy of one rendered view.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Frame {
    pub active_player: usize,
    pub scores: [usize; NUM_PLAYERS],
    pub flipping: bool,
    pub status: GameStatus,
    pub board: Board,
}

impl From<&SessionView<'_>> for Frame {
    fn from(view: &SessionView<'_>) -> Self {
        Frame {
            active_player: view.active_player,
            scores: view.scores,
            flipping: view.flipping,
            status: view.status,
            board: view.board.clone(),
        }
    }
}

/// Surface that replays queued actions and records everything it is shown.
///
/// Once the queue runs dry it quits, or, with [`ScriptedSurface::autoplay`],
/// keeps firing at random untouched cells until somebody wins.
pub struct ScriptedSurface {
    actions: VecDeque<Action>,
    autoplay: Option<SmallRng>,
    frames: Vec<Frame>,
    reports: Vec<ShotReport>,
    errors: Vec<String>,
}

impl ScriptedSurface {
    pub fn new(actions: impl IntoIterator<Item = Action>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
            autoplay: None,
            frames: Vec::new(),
            reports: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Random shooter seeded with `seed`.
    pub fn autoplay(seed: u64) -> Self {
        Self {
            autoplay: Some(SmallRng::seed_from_u64(seed)),
            ..Self::new([])
        }
    }

    /// Queue more actions behind the current ones.
    pub fn push(&mut self, action: Action) {
        self.actions.push_back(action);
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn reports(&self) -> &[ShotReport] {
        &self.reports
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    fn random_shot(&mut self) -> Action {
        let (Some(rng), Some(frame)) = (self.autoplay.as_mut(), self.frames.last()) else {
            return Action::Quit;
        };
        if frame.status != GameStatus::InProgress {
            return Action::Quit;
        }
        let targets: Vec<(usize, usize)> = frame.board.remaining_targets().collect();
        match targets.choose(rng) {
            Some(&(x, y)) => Action::Fire {
                x: x as isize,
                y: y as isize,
            },
            None => Action::Quit,
        }
    }
}

#[async_trait::async_trait]
impl RenderSurface for ScriptedSurface {
    async fn render(&mut self, view: &SessionView<'_>) -> anyhow::Result<()> {
        self.frames.push(Frame::from(view));
        Ok(())
    }

    async fn next_action(&mut self) -> anyhow::Result<Action> {
        match self.actions.pop_front() {
            Some(action) => Ok(action),
            None => Ok(self.random_shot()),
        }
    }

    async fn report_shot(&mut self, report: &ShotReport) -> anyhow::Result<()> {
        self.reports.push(*report);
        Ok(())
    }

    async fn report_error(&mut self, message: &str) -> anyhow::Result<()> {
        self.errors.push(message.to_string());
        Ok(())
    }
}
