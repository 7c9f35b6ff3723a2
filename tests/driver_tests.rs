use battleship::{
    seeded_rng, Action, Board, GameConfig, GameDriver, GameSession, GameStatus, Orientation,
    ScriptedSurface, Ship, ShipKind,
};
use tokio::time::{Duration, Instant};

fn quick_config() -> GameConfig {
    GameConfig {
        flip_time_ms: 0,
        ..GameConfig::default()
    }
}

fn destroyer_board() -> Board {
    let mut board = Board::empty(10, 10);
    board
        .place(Ship::new(ShipKind::Destroyer, 4, 4, Orientation::Vertical))
        .unwrap();
    board
}

fn fixed_driver(actions: Vec<Action>) -> GameDriver<ScriptedSurface> {
    let session = GameSession::from_boards(quick_config(), [destroyer_board(), destroyer_board()]);
    GameDriver::new(session, ScriptedSurface::new(actions), seeded_rng(Some(3)))
}

#[tokio::test]
async fn test_players_alternate() {
    let mut driver = fixed_driver(vec![
        Action::Fire { x: 0, y: 0 },
        Action::Fire { x: 0, y: 0 },
        Action::Fire { x: 4, y: 4 },
        Action::Quit,
    ]);
    driver.run().await.unwrap();

    let players: Vec<usize> = driver.surface().reports().iter().map(|r| r.player).collect();
    assert_eq!(players, vec![0, 1, 0]);
    assert_eq!(driver.shots(), 3);
    assert_eq!(driver.session().active_player(), 1);

    let frames = driver.surface().frames();
    assert!(frames.iter().any(|f| f.flipping));
    let last = frames.last().unwrap();
    assert_eq!(last.active_player, 1);
    assert!(!last.flipping);
}

#[tokio::test]
async fn test_rejected_action_reported() {
    let mut driver = fixed_driver(vec![
        Action::Fire { x: -1, y: 0 },
        Action::Fire { x: 2, y: 2 },
        Action::Fire { x: 0, y: 10 },
    ]);
    driver.run().await.unwrap();

    let surface = driver.surface();
    assert_eq!(surface.errors().len(), 2);
    assert_eq!(surface.reports().len(), 1);
    // the bad shot by player 1 does not cost the turn
    assert_eq!(driver.session().active_player(), 1);
}

#[tokio::test]
async fn test_win_and_restart() {
    let mut driver = fixed_driver(vec![
        Action::Fire { x: 4, y: 4 },
        Action::Fire { x: 0, y: 0 },
        Action::Fire { x: 5, y: 4 },
        Action::Fire { x: 1, y: 1 },
        Action::Restart,
        Action::Quit,
    ]);
    driver.run().await.unwrap();

    let surface = driver.surface();
    let reports = surface.reports();
    assert_eq!(reports.len(), 3);
    assert_eq!(reports[2].status, GameStatus::Won(0));
    assert_eq!(surface.errors().len(), 1);
    assert!(surface
        .frames()
        .iter()
        .any(|f| f.status == GameStatus::Won(0)));

    let session = driver.session();
    assert_eq!(session.status(), GameStatus::InProgress);
    assert_eq!(session.scores(), [0, 0]);
    assert_eq!(session.board(0).unwrap().ships().len(), 5);
    assert_eq!(driver.shots(), 0);
}

#[tokio::test]
async fn test_autoplay_finishes() {
    let mut rng = seeded_rng(Some(21));
    let session = GameSession::new(quick_config(), &mut rng).unwrap();
    let mut driver = GameDriver::new(session, ScriptedSurface::autoplay(22), rng);
    driver.run().await.unwrap();

    let session = driver.session();
    let GameStatus::Won(winner) = session.status() else {
        panic!("game did not finish");
    };
    assert_eq!(session.scores()[winner], 5);
    assert!(session.board(winner).unwrap().all_sunk());
    assert!(driver.shots() <= 200);
    assert!(driver.surface().errors().is_empty());
}

#[tokio::test]
async fn test_transition_takes_flip_time() {
    let config = GameConfig {
        flip_time_ms: 40,
        ..GameConfig::default()
    };
    let session = GameSession::from_boards(config, [destroyer_board(), destroyer_board()]);
    let surface = ScriptedSurface::new([Action::Fire { x: 0, y: 0 }, Action::Quit]);
    let mut driver = GameDriver::new(session, surface, seeded_rng(Some(1)));

    let start = Instant::now();
    driver.run().await.unwrap();
    assert!(start.elapsed() >= Duration::from_millis(40));
    assert_eq!(driver.session().active_player(), 1);
}
