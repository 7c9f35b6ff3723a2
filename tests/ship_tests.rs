use battleship::{Orientation, Ship, ShipKind, FLEET};

#[test]
fn test_fleet_sizes() {
    let sizes: Vec<usize> = FLEET.iter().map(|k| k.size()).collect();
    assert_eq!(sizes, vec![5, 4, 3, 3, 2]);
    let names: Vec<&str> = FLEET.iter().map(|k| k.name()).collect();
    assert_eq!(
        names,
        vec!["carrier", "battleship", "cruiser", "submarine", "destroyer"]
    );
    assert_eq!(ShipKind::from_name("Submarine"), Some(ShipKind::Submarine));
    assert_eq!(ShipKind::from_name("dinghy"), None);
}

#[test]
fn test_cells_and_contains() {
    let ship = Ship::new(ShipKind::Battleship, 0, 0, Orientation::Vertical);
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(cells, vec![(0, 0), (1, 0), (2, 0), (3, 0)]);
    for (x, y) in cells {
        assert!(ship.contains(x, y));
    }
    assert!(!ship.contains(4, 0));
    assert!(!ship.contains(0, 1));

    let ship = Ship::new(ShipKind::Destroyer, 3, 4, Orientation::Horizontal);
    assert_eq!(ship.cells().collect::<Vec<_>>(), vec![(3, 4), (3, 5)]);
    assert_eq!(ship.anchor(), (3, 4));
    assert_eq!(ship.size(), 2);
}

#[test]
fn test_fits() {
    let edge = Ship::new(ShipKind::Carrier, 9, 5, Orientation::Horizontal);
    assert!(edge.fits(10, 10));
    let over = Ship::new(ShipKind::Carrier, 9, 6, Orientation::Horizontal);
    assert!(!over.fits(10, 10));
    let down = Ship::new(ShipKind::Carrier, 6, 0, Orientation::Vertical);
    assert!(!down.fits(10, 10));
    assert!(down.fits(11, 1));

    let far = Ship::new(ShipKind::Destroyer, 0, usize::MAX, Orientation::Horizontal);
    assert!(!far.fits(10, 10));
    assert!(!far.contains(0, 0));
    assert!(far.contains(0, usize::MAX));
    let low = Ship::new(ShipKind::Cruiser, usize::MAX, 2, Orientation::Vertical);
    assert!(!low.fits(usize::MAX, 10));
    assert!(!low.contains(0, 2));
}
