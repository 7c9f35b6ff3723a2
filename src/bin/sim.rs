use battleship::{init_logging, seeded_rng, GameConfig, GameDriver, GameSession, GameStatus, ScriptedSurface};
use serde_json::json;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;

    let config = GameConfig {
        flip_time_ms: 0,
        ..GameConfig::default()
    };
    let mut rng = seeded_rng(Some(seed));
    let session = GameSession::new(config, &mut rng).map_err(|e| anyhow::anyhow!(e))?;
    let surface = ScriptedSurface::autoplay(seed.wrapping_add(1));

    let mut driver = GameDriver::new(session, surface, rng);
    driver.run().await?;

    let session = driver.session();
    let winner = match session.status() {
        GameStatus::Won(0) => Some("player1"),
        GameStatus::Won(_) => Some("player2"),
        GameStatus::InProgress => None,
    };
    let result = json!({
        "seed": seed,
        "winner": winner,
        "scores": session.scores(),
        "shots": driver.shots(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
