//! Grid and TileIndex tests

use tilewalk::core::{Grid, GridError, TileIndex};
use tilewalk::types::{MapCoordinate, Position};

fn grid(lines: &[&str]) -> Grid {
    Grid::from_lines("test", MapCoordinate::new(1, 1), lines, None).unwrap()
}

#[test]
fn test_dimensions() {
    let g = grid(&["----", "-##-", "----"]);
    assert_eq!(g.row_count(), 3);
    assert_eq!(g.column_count(), 4);
    assert_eq!(g.world(), MapCoordinate::new(1, 1));
    assert_eq!(g.start(), None);
}

#[test]
fn test_in_bounds_checks_both_edges() {
    let g = grid(&["----", "-##-", "----"]);
    let idx = TileIndex::new(&g);

    for y in 0..3 {
        for x in 0..4 {
            assert!(idx.in_bounds(Position::new(y, x)), "({}, {}) should be in bounds", y, x);
        }
    }

    // Negative coordinates
    assert!(!idx.in_bounds(Position::new(-1, 0)));
    assert!(!idx.in_bounds(Position::new(0, -1)));

    // Beyond bounds
    assert!(!idx.in_bounds(Position::new(3, 0)));
    assert!(!idx.in_bounds(Position::new(0, 4)));
}

#[test]
fn test_solidity_follows_passable_marker() {
    let g = grid(&["-#T", "~--"]);
    let idx = TileIndex::new(&g);

    assert!(!idx.is_solid(Position::new(0, 0)));
    assert!(idx.is_solid(Position::new(0, 1)));
    assert!(idx.is_solid(Position::new(0, 2)));
    assert!(idx.is_solid(Position::new(1, 0)));
    assert!(!idx.is_solid(Position::new(1, 1)));
}

#[test]
fn test_tile_projection_matches_grid() {
    let g = grid(&["-#"]);
    let idx = TileIndex::new(&g);

    let open = idx.tile(Position::new(0, 0)).unwrap();
    assert_eq!(open.glyph, '-');
    assert!(!open.solid);

    let wall = idx.tile(Position::new(0, 1)).unwrap();
    assert_eq!(wall.glyph, '#');
    assert!(wall.solid);
    assert_eq!(wall.position, Position::new(0, 1));

    assert!(idx.tile(Position::new(1, 0)).is_none());
}

#[test]
fn test_ragged_grid_rejected() {
    let err = Grid::from_lines("bad", MapCoordinate::new(0, 0), &["----", "---", "----"], None)
        .unwrap_err();
    assert_eq!(
        err,
        GridError::Ragged {
            row: 1,
            expected: 4,
            found: 3
        }
    );
}

#[test]
fn test_start_position_validated() {
    let ok = Grid::from_lines(
        "s",
        MapCoordinate::new(0, 0),
        &["---", "---"],
        Some(Position::new(1, 2)),
    );
    assert!(ok.is_ok());

    let err = Grid::from_lines(
        "s",
        MapCoordinate::new(0, 0),
        &["---", "---"],
        Some(Position::new(1, 3)),
    )
    .unwrap_err();
    assert!(matches!(err, GridError::StartOutOfBounds { .. }));
}
