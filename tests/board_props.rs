use battleship::{fire, initialize_board, Board, BoardError, CellState, FLEET};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

fn random_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    initialize_board(10, 10, &mut rng).unwrap()
}

fn changed_cells(a: &Board, b: &Board) -> Vec<(usize, usize)> {
    a.iter()
        .zip(b.iter())
        .filter(|((_, ca), (_, cb))| ca != cb)
        .map(|((coord, _), _)| coord)
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn placement_invariants(seed in any::<u64>(), rows in 5usize..=15, cols in 5usize..=15) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = initialize_board(rows, cols, &mut rng).unwrap();

        let kinds: Vec<_> = board.ships().iter().map(|s| s.kind()).collect();
        prop_assert_eq!(kinds, FLEET.to_vec());

        for ship in board.ships() {
            prop_assert!(ship.fits(rows, cols));
            for (x, y) in ship.cells() {
                let cell = board.cell(x, y).unwrap();
                prop_assert_eq!(cell.state, CellState::Ship);
                prop_assert_eq!(cell.ship, Some(*ship));
            }
        }

        // 5 + 4 + 3 + 3 + 2 distinct cells means nothing overlaps
        let occupied = board.iter().filter(|(_, c)| c.ship.is_some()).count();
        prop_assert_eq!(occupied, 17);
        let ship_cells = board.iter().filter(|(_, c)| c.state == CellState::Ship).count();
        prop_assert_eq!(ship_cells, 17);
    }

    #[test]
    fn fire_is_pure(seed in any::<u64>(), x in 0isize..10, y in 0isize..10) {
        let board = random_board(seed);
        let before = board.clone();
        let a = fire(&board, x, y);
        let b = fire(&board, x, y);
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(&board, &before);

        let shot = a.unwrap();
        let changed = changed_cells(&board, &shot.board);
        if shot.sunk {
            prop_assert!(changed.len() > 1);
        } else {
            prop_assert_eq!(changed, vec![(x as usize, y as usize)]);
        }
    }

    #[test]
    fn refire_is_invalid(seed in any::<u64>(), x in 0isize..10, y in 0isize..10) {
        let board = random_board(seed);
        let shot = fire(&board, x, y).unwrap();
        let err = fire(&shot.board, x, y).unwrap_err();
        let is_invalid_target = matches!(err, BoardError::InvalidTarget { .. });
        prop_assert!(is_invalid_target);
    }

    #[test]
    fn out_of_bounds_rejected(seed in any::<u64>(), x in -20isize..30, y in -20isize..30) {
        prop_assume!(!(0..10).contains(&x) || !(0..10).contains(&y));
        let board = random_board(seed);
        prop_assert_eq!(fire(&board, x, y).unwrap_err(), BoardError::OutOfBounds { x, y });
    }

    #[test]
    fn sinking_every_ship(seed in any::<u64>()) {
        let mut board = random_board(seed);
        let ships = board.ships().to_vec();
        for ship in &ships {
            let cells: Vec<_> = ship.cells().collect();
            for (i, &(x, y)) in cells.iter().enumerate() {
                let shot = fire(&board, x as isize, y as isize).unwrap();
                prop_assert_eq!(shot.state, CellState::Hit);
                board = shot.board.clone();
                if i + 1 < cells.len() {
                    prop_assert!(!shot.sunk);
                    for &(hx, hy) in &cells[..=i] {
                        prop_assert_eq!(board.state(hx, hy), Some(CellState::Hit));
                    }
                } else {
                    prop_assert!(shot.sunk);
                    prop_assert_eq!(shot.sunk_kind(), Some(ship.kind()));
                    for &(sx, sy) in &cells {
                        prop_assert_eq!(board.state(sx, sy), Some(CellState::Sunk));
                    }
                }
            }
        }
        prop_assert!(board.all_sunk());
        prop_assert_eq!(board.sunk_count(), FLEET.len());
    }
}
