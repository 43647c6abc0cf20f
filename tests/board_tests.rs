use broadside::{
    Board, BoardError, CellState, Coord, FogState, GameStatus, Placement, ShotOutcome,
    BOARD_SIZE, NUM_SHIPS, SHIPS, TOTAL_SHIP_CELLS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_commit_placement_marks_occupied() {
    let mut board = Board::new();
    let run = board
        .commit_placement(SHIPS[2], Coord::new(4, 2), Coord::new(4, 4))
        .unwrap();
    assert_eq!(run.len(), 3);
    for &c in run.cells() {
        assert_eq!(board.cell(c).unwrap(), CellState::Occupied);
    }
    assert_eq!(board.fleet().afloat().len(), 1);
}

#[test]
fn test_commit_placement_rejects_overlap_and_crooked_runs() {
    let mut board = Board::new();
    board
        .commit_placement(SHIPS[2], Coord::new(4, 2), Coord::new(4, 4))
        .unwrap();
    // crosses the cruiser
    assert_eq!(
        board
            .commit_placement(SHIPS[4], Coord::new(3, 3), Coord::new(4, 3))
            .unwrap_err(),
        BoardError::InvalidPlacement
    );
    // diagonal
    assert_eq!(
        board
            .commit_placement(SHIPS[4], Coord::new(0, 0), Coord::new(1, 1))
            .unwrap_err(),
        BoardError::InvalidPlacement
    );
    // wrong length for the spec
    assert_eq!(
        board
            .commit_placement(SHIPS[4], Coord::new(0, 0), Coord::new(0, 4))
            .unwrap_err(),
        BoardError::InvalidPlacement
    );
}

#[test]
fn test_legal_swing_points_corner() {
    let board = Board::new();
    let points = board.legal_swing_points(Coord::new(0, 0), 5);
    assert_eq!(points.len(), 2);
    assert!(points.contains(&Coord::new(0, 4)));
    assert!(points.contains(&Coord::new(4, 0)));
}

#[test]
fn test_legal_swing_points_blocked_by_ship() {
    let mut board = Board::new();
    board
        .commit_placement(SHIPS[4], Coord::new(0, 2), Coord::new(0, 3))
        .unwrap();
    let points = board.legal_swing_points(Coord::new(0, 0), 5);
    assert_eq!(points, vec![Coord::new(4, 0)]);
}

#[test]
fn test_attack_hit_miss_sink() {
    let mut board = Board::new();
    board
        .commit_placement(SHIPS[2], Coord::new(4, 2), Coord::new(4, 4))
        .unwrap();

    assert_eq!(board.attack(Coord::new(0, 0)).unwrap(), ShotOutcome::Miss);
    assert_eq!(board.cell(Coord::new(0, 0)).unwrap(), CellState::Miss);

    assert_eq!(board.attack(Coord::new(4, 2)).unwrap(), ShotOutcome::Hit);
    assert_eq!(board.attack(Coord::new(4, 3)).unwrap(), ShotOutcome::Hit);
    assert_eq!(
        board.attack(Coord::new(4, 4)).unwrap(),
        ShotOutcome::Sunk("Cruiser")
    );
    assert!(board.all_sunk());
    assert_eq!(board.fleet().destroyed().len(), 1);

    // sink is reported exactly once
    assert_eq!(board.check_sunk(), None);

    assert_eq!(
        board.attack(Coord::new(4, 4)).unwrap_err(),
        BoardError::RepeatedAttack
    );
}

#[test]
fn test_fog_derived_from_attack_history_only() {
    let mut board = Board::new();
    assert_eq!(board.fog(Coord::new(3, 3)).unwrap(), FogState::Unknown);

    board
        .record_shot(Coord::new(3, 3), ShotOutcome::Hit, None)
        .unwrap();
    board
        .record_shot(Coord::new(7, 1), ShotOutcome::Miss, None)
        .unwrap();

    assert_eq!(board.fog(Coord::new(3, 3)).unwrap(), FogState::Hit);
    assert_eq!(board.fog(Coord::new(7, 1)).unwrap(), FogState::Miss);
    assert_eq!(board.fog(Coord::new(0, 0)).unwrap(), FogState::Unknown);
    assert_eq!(board.fog_unknown().count(), BOARD_SIZE * BOARD_SIZE - 2);

    assert_eq!(
        board
            .record_shot(Coord::new(3, 3), ShotOutcome::Miss, None)
            .unwrap_err(),
        BoardError::RepeatedAttack
    );
}

#[test]
fn test_record_sunk_updates_enemy_remaining() {
    let mut board = Board::new();
    let run = Placement::between(Coord::new(4, 2), Coord::new(4, 4)).unwrap();
    board
        .record_shot(Coord::new(4, 2), ShotOutcome::Hit, None)
        .unwrap();
    board
        .record_shot(Coord::new(4, 3), ShotOutcome::Hit, None)
        .unwrap();
    board
        .record_shot(Coord::new(4, 4), ShotOutcome::Sunk("Cruiser"), Some(&run))
        .unwrap();

    let lens = board.enemy_lengths_remaining();
    assert_eq!(lens.iter().filter(|&&l| l > 0).count(), NUM_SHIPS - 1);
    assert!(board.unresolved_hits().is_empty());
    assert!(!board.enemy_defeated());
}

#[test]
fn test_unresolved_hits_exclude_sunk_cells() {
    let mut board = Board::new();
    board
        .record_shot(Coord::new(2, 2), ShotOutcome::Hit, None)
        .unwrap();
    assert_eq!(board.unresolved_hits().count(), 1);

    let run = Placement::between(Coord::new(2, 2), Coord::new(2, 3)).unwrap();
    board
        .record_shot(Coord::new(2, 3), ShotOutcome::Sunk("Destroyer"), Some(&run))
        .unwrap();
    assert!(board.unresolved_hits().is_empty());
}

#[test]
fn test_random_fleet_no_overlap() {
    let mut board = Board::new();
    let mut rng = SmallRng::seed_from_u64(42);
    board.place_fleet_random(&mut rng, 64).unwrap();
    assert_eq!(board.ship_map().count(), TOTAL_SHIP_CELLS);
    assert_eq!(board.fleet().afloat().len(), NUM_SHIPS);
}

#[test]
fn test_empty_board_attack_everything() {
    // a board with zero ships: every attack is a miss, nothing panics
    let mut board = Board::new();
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            assert_eq!(board.attack(Coord::new(r, c)).unwrap(), ShotOutcome::Miss);
        }
    }
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            assert_eq!(board.cell(Coord::new(r, c)).unwrap(), CellState::Miss);
        }
    }
    // an empty fleet counts as defeated
    assert!(board.all_sunk());
    assert_eq!(GameStatus::of(&board), GameStatus::Lost);
}
