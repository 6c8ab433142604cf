//! Snapshot serialization

use match_three::core::{Board, BoardConfig, BoardSnapshot};
use match_three::engine::GameSession;

#[test]
fn test_snapshot_roundtrips_through_json() {
    let session = GameSession::new(BoardConfig::new(5, 7).with_seed(31)).unwrap();
    let snap = session.snapshot();
    assert_eq!(snap.rows, 5);
    assert_eq!(snap.cols, 7);
    assert_eq!(snap.cells.len(), 35);
    assert!(snap.cells.iter().all(|&v| (0..4).contains(&v)));

    let json = serde_json::to_string(&snap).unwrap();
    let back: BoardSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, snap);
}

#[test]
fn test_snapshot_shows_empty_cells_after_collapse() {
    let mut board = Board::from_rows(
        &[&[0, 1, 2], &[1, 2, 3], &[3, 3, 3]],
        BoardConfig::default(),
    )
    .unwrap();
    let matches = board.find_all_matches();
    board.collapse_columns(&matches).unwrap();
    let snap = board.snapshot();
    assert_eq!(
        snap.to_rows(),
        vec![vec![-1, -1, -1], vec![0, 1, 2], vec![1, 2, 3]]
    );
}

#[test]
fn test_config_from_json() {
    let config: BoardConfig =
        serde_json::from_str(r#"{ "rows": 6, "cols": 10, "tile_kinds": 5, "seed": 8 }"#).unwrap();
    let board = Board::new(config).unwrap();
    assert_eq!(board.rows(), 6);
    assert_eq!(board.cols(), 10);
    assert!(board
        .cells()
        .iter()
        .all(|cell| matches!(cell, Some(kind) if kind.index() < 5)));
}
