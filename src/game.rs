//! Turn-based match loop between two players.
//!
//! Strictly single-threaded on the authoritative path: one shot is chosen,
//! applied and resolved before the next decision is made.

use log::debug;
use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::{BoardError, ShotOutcome};
use crate::player::Player;

/// Status of a game from one player's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// Evaluate a board: lost when its own fleet is gone, won when every
    /// enemy ship has been reported sunk.
    pub fn of(board: &Board) -> GameStatus {
        if board.all_sunk() {
            GameStatus::Lost
        } else if board.enemy_defeated() {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }
}

/// Result of one finished match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOutcome {
    /// Index (0 or 1) of the winning player.
    pub winner: usize,
    /// Shots fired by each side.
    pub shots: [usize; 2],
}

/// Play one full game between two players with freshly placed fleets.
/// Returns the winner and per-side shot counts.
pub fn play_match(
    players: [&mut dyn Player; 2],
    rng: &mut SmallRng,
) -> Result<MatchOutcome, BoardError> {
    let [p0, p1] = players;
    let mut boards = [Board::new(), Board::new()];
    p0.place_ships(rng, &mut boards[0])?;
    p1.place_ships(rng, &mut boards[1])?;
    let mut players = [p0, p1];
    let mut shots = [0usize; 2];
    let mut turn = 0usize;
    loop {
        let defender_idx = 1 - turn;
        let coord = players[turn].select_shot(rng, &boards[turn]);

        let (outcome, sunk) = {
            let (left, right) = boards.split_at_mut(1);
            let (attacker, defender) = if turn == 0 {
                (&mut left[0], &mut right[0])
            } else {
                (&mut right[0], &mut left[0])
            };
            let outcome = defender.attack(coord)?;
            let sunk = match outcome {
                ShotOutcome::Sunk(_) => defender
                    .fleet()
                    .last_destroyed()
                    .map(|(_, run)| run.clone()),
                _ => None,
            };
            attacker.record_shot(coord, outcome, sunk.as_ref())?;
            (outcome, sunk)
        };
        players[turn].handle_shot_result(coord, outcome, sunk.as_ref(), &boards[turn]);
        shots[turn] += 1;
        debug!("player {turn} fired at {coord}: {outcome:?}");

        if boards[defender_idx].all_sunk() {
            return Ok(MatchOutcome {
                winner: turn,
                shots,
            });
        }
        turn = defender_idx;
    }
}
