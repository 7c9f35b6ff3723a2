use battleship::{
    init_logging, seeded_rng, GameConfig, GameDriver, GameSession, TerminalSurface,
    DEFAULT_COLS, DEFAULT_FLIP_TIME_MS, DEFAULT_ROWS,
};
use clap::Parser;

/// Hot-seat Battleship in the terminal: two players take turns firing at
/// their own target board.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, default_value_t = DEFAULT_ROWS as u8, value_parser = clap::value_parser!(u8).range(1..=26))]
    rows: u8,
    #[arg(long, default_value_t = DEFAULT_COLS as u8, value_parser = clap::value_parser!(u8).range(1..=26))]
    cols: u8,
    #[arg(long, default_value_t = DEFAULT_FLIP_TIME_MS, help = "Turn transition length in milliseconds")]
    flip_time: u64,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, help = "Show every cell's state, ships included")]
    debug: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let config = GameConfig {
        rows: cli.rows as usize,
        cols: cli.cols as usize,
        flip_time_ms: cli.flip_time,
        ..GameConfig::default()
    };
    let mut rng = seeded_rng(cli.seed);
    let session = GameSession::new(config, &mut rng)
        .map_err(|e| anyhow::anyhow!("could not start game: {}", e))?;

    let mut driver = GameDriver::new(session, TerminalSurface::new(cli.debug), rng);
    driver.run().await
}
