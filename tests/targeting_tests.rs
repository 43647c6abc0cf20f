use broadside::{
    Board, Coord, SearchPolicy, ShotOutcome, TargetingSession, SHIPS,
};

/// Fire one session-independent shot (used to seed a scenario), updating
/// the defender, the attacker's fog and the session.
fn fire(
    session: &mut TargetingSession,
    attacker: &mut Board,
    defender: &mut Board,
    coord: Coord,
) -> ShotOutcome {
    let outcome = defender.attack(coord).unwrap();
    let sunk = match outcome {
        ShotOutcome::Sunk(_) => defender
            .fleet()
            .last_destroyed()
            .map(|(_, run)| run.clone()),
        _ => None,
    };
    attacker.record_shot(coord, outcome, sunk.as_ref()).unwrap();
    session.observe(coord, outcome, sunk.as_ref(), attacker);
    outcome
}

/// Let the session drive shots until the defender's fleet is gone or the
/// budget runs out. Returns the number of shots fired.
fn drive(
    session: &mut TargetingSession,
    attacker: &mut Board,
    defender: &mut Board,
    budget: usize,
) -> usize {
    let mut fired = 0;
    while !defender.all_sunk() && fired < budget {
        let coord = session.next_shot(attacker);
        fire(session, attacker, defender, coord);
        fired += 1;
    }
    fired
}

#[test]
fn test_hit_in_search_engages_neighbors() {
    let mut attacker = Board::new();
    let mut defender = Board::new();
    defender
        .commit_placement(SHIPS[2], Coord::new(4, 2), Coord::new(4, 4))
        .unwrap();
    let mut session = TargetingSession::new(SearchPolicy::Sweep);

    let outcome = fire(&mut session, &mut attacker, &mut defender, Coord::new(4, 2));
    assert_eq!(outcome, ShotOutcome::Hit);
    assert!(!session.is_searching());
    assert_eq!(session.pending_len(), 4);
    assert_eq!(session.marker_count(), 1);

    let next = session.next_shot(&attacker);
    let expected = [
        Coord::new(3, 2),
        Coord::new(5, 2),
        Coord::new(4, 1),
        Coord::new(4, 3),
    ];
    assert!(expected.contains(&next), "unexpected probe {next}");
}

#[test]
fn test_destroy_rides_the_line_and_returns_to_search() {
    let mut attacker = Board::new();
    let mut defender = Board::new();
    defender
        .commit_placement(SHIPS[2], Coord::new(4, 2), Coord::new(4, 4))
        .unwrap();
    let mut session = TargetingSession::new(SearchPolicy::Sweep);

    fire(&mut session, &mut attacker, &mut defender, Coord::new(4, 2));
    let fired = drive(&mut session, &mut attacker, &mut defender, 20);
    assert!(defender.all_sunk());
    // two more ship cells plus a handful of probe misses at most
    assert!(fired <= 8, "took {fired} shots to finish the cruiser");
    assert!(session.is_searching());
    assert_eq!(session.pending_len(), 0);
    assert_eq!(session.marker_count(), 0);
}

#[test]
fn test_scenario_hit_then_right_then_sink() {
    // spec-style walk: hits at (4,2) and (4,3) must extend to (4,4)
    let mut attacker = Board::new();
    let mut defender = Board::new();
    defender
        .commit_placement(SHIPS[2], Coord::new(4, 2), Coord::new(4, 4))
        .unwrap();
    let mut session = TargetingSession::new(SearchPolicy::Sweep);

    fire(&mut session, &mut attacker, &mut defender, Coord::new(4, 2));
    fire(&mut session, &mut attacker, &mut defender, Coord::new(4, 3));
    // the line continues rightward
    assert_eq!(session.next_shot(&attacker), Coord::new(4, 4));
    let outcome = fire(&mut session, &mut attacker, &mut defender, Coord::new(4, 4));
    assert_eq!(outcome, ShotOutcome::Sunk("Cruiser"));
    assert!(session.is_searching());
    assert_eq!(session.marker_count(), 0);
}

#[test]
fn test_miss_in_search_stays_searching() {
    let mut attacker = Board::new();
    let mut defender = Board::new();
    defender
        .commit_placement(SHIPS[2], Coord::new(9, 7), Coord::new(9, 9))
        .unwrap();
    let mut session = TargetingSession::new(SearchPolicy::Sweep);

    let coord = session.next_shot(&attacker);
    let outcome = fire(&mut session, &mut attacker, &mut defender, coord);
    assert_eq!(outcome, ShotOutcome::Miss);
    assert!(session.is_searching());
    assert_eq!(session.pending_len(), 0);
}

#[test]
fn test_middle_hit_reconciles_to_both_ends() {
    // first hit lands mid-ship; the machine must find both ends
    let mut attacker = Board::new();
    let mut defender = Board::new();
    defender
        .commit_placement(SHIPS[1], Coord::new(6, 3), Coord::new(6, 6))
        .unwrap();
    let mut session = TargetingSession::new(SearchPolicy::Sweep);

    fire(&mut session, &mut attacker, &mut defender, Coord::new(6, 4));
    drive(&mut session, &mut attacker, &mut defender, 30);
    assert!(defender.all_sunk());
    assert!(session.is_searching());
    assert_eq!(session.marker_count(), 0);
}

#[test]
fn test_interrupted_probe_finishes_second_ship() {
    // two touching ships: sinking the first must not orphan the hit
    // already scored on the second
    let mut attacker = Board::new();
    let mut defender = Board::new();
    defender
        .commit_placement(SHIPS[4], Coord::new(3, 2), Coord::new(2, 2))
        .unwrap();
    defender
        .commit_placement(SHIPS[2], Coord::new(4, 2), Coord::new(4, 4))
        .unwrap();
    let mut session = TargetingSession::new(SearchPolicy::Sweep);

    // clip the destroyer first, then engage the cruiser
    fire(&mut session, &mut attacker, &mut defender, Coord::new(3, 2));
    fire(&mut session, &mut attacker, &mut defender, Coord::new(4, 2));
    assert_eq!(session.marker_count(), 2);

    drive(&mut session, &mut attacker, &mut defender, 40);
    assert!(defender.all_sunk(), "both ships should go down");
    assert!(session.is_searching());
    assert_eq!(session.marker_count(), 0);
    assert_eq!(session.pending_len(), 0);
}

#[test]
fn test_density_policy_prefers_open_center() {
    let attacker = Board::new();
    let mut session = TargetingSession::new(SearchPolicy::Density);
    let coord = session.next_shot(&attacker);
    // on an untouched board the analytic argmax is away from the edges
    assert!(coord.row > 0 && coord.row < 9);
    assert!(coord.col > 0 && coord.col < 9);
}
