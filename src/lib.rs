#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod board;
mod common;
mod config;
#[cfg(feature = "std")]
pub mod driver;
mod game;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;
mod ship;
#[cfg(feature = "std")]
pub mod surface;

pub use board::*;
pub use common::*;
pub use config::*;
#[cfg(feature = "std")]
pub use driver::{seeded_rng, GameDriver};
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, parse_level, LOG_ENV};
pub use ship::*;
#[cfg(feature = "std")]
pub use surface::{scripted::ScriptedSurface, terminal::TerminalSurface, Action, RenderSurface};
