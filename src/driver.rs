#![cfg(feature = "std")]

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tokio::time::{sleep, Duration};

use crate::{
    game::{GameSession, GameStatus},
    surface::{Action, RenderSurface},
};

/// Seeded generator when `seed` is given, otherwise seeded from the OS.
pub fn seeded_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

/// Runs a session against a render surface, one action at a time.
pub struct GameDriver<S: RenderSurface> {
    session: GameSession,
    surface: S,
    rng: SmallRng,
    flip_time: Duration,
    shots: usize,
}

impl<S: RenderSurface> GameDriver<S> {
    pub fn new(session: GameSession, surface: S, rng: SmallRng) -> Self {
        let flip_time = Duration::from_millis(session.config().flip_time_ms);
        Self {
            session,
            surface,
            rng,
            flip_time,
            shots: 0,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Shots fired since the last (re)start.
    pub fn shots(&self) -> usize {
        self.shots
    }

    /// Render, wait for an action, apply it; repeat until the surface quits.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            self.surface.render(&self.session.view()).await?;
            match self.surface.next_action().await? {
                Action::Quit => {
                    log::info!("player quit after {} shots", self.shots);
                    break;
                }
                Action::Restart => {
                    if let Err(e) = self.session.restart(&mut self.rng) {
                        log::error!("restart failed: {}", e);
                        self.surface
                            .report_error(&format!("could not start game: {}", e))
                            .await?;
                        return Err(anyhow::anyhow!("could not start game: {}", e));
                    }
                    self.shots = 0;
                }
                Action::Fire { x, y } => match self.session.fire(x, y) {
                    Ok(report) => {
                        self.shots += 1;
                        self.surface.report_shot(&report).await?;
                        if report.status == GameStatus::InProgress {
                            self.change_over().await?;
                        }
                    }
                    Err(e) => {
                        log::warn!("rejected shot ({}, {}): {}", x, y, e);
                        self.surface.report_error(&e.to_string()).await?;
                    }
                },
            }
        }
        Ok(())
    }

    /// Turn transition: flag goes up halfway through, the turn passes at the end.
    /// No input is read meanwhile.
    async fn change_over(&mut self) -> anyhow::Result<()> {
        let half = self.flip_time / 2;
        sleep(half).await;
        if self.session.begin_flip() {
            self.surface.render(&self.session.view()).await?;
        }
        sleep(self.flip_time - half).await;
        self.session.end_turn();
        Ok(())
    }
}
