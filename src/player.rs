use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::{BoardError, ShotOutcome};
use crate::grid::Coord;
use crate::ship::Placement;

/// Interface implemented by different player types.
pub trait Player {
    /// Place the whole fleet onto the player's own board.
    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), BoardError>;

    /// Choose the next target given the player's board (fog included).
    fn select_shot(&mut self, rng: &mut SmallRng, board: &Board) -> Coord;

    /// Inform the player of the result of its last shot, after its fog has
    /// been updated. `sunk` carries the destroyed placement on a sink.
    fn handle_shot_result(
        &mut self,
        _coord: Coord,
        _outcome: ShotOutcome,
        _sunk: Option<&Placement>,
        _board: &Board,
    ) {
    }
}
