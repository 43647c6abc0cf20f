use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::{BoardError, ShotOutcome};
use crate::config::TargetingConfig;
use crate::grid::Coord;
use crate::player::Player;
use crate::ship::Placement;
use crate::strategy::Strategy;

/// AI player driving one of the interchangeable strategies.
pub struct AiPlayer {
    strategy: Strategy,
    cfg: TargetingConfig,
}

impl AiPlayer {
    pub fn new(strategy: Strategy) -> Self {
        Self::with_config(strategy, TargetingConfig::default())
    }

    pub fn with_config(strategy: Strategy, cfg: TargetingConfig) -> Self {
        Self { strategy, cfg }
    }
}

impl Player for AiPlayer {
    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), BoardError> {
        board.place_fleet_random(rng, self.cfg.placement_attempts)
    }

    fn select_shot(&mut self, rng: &mut SmallRng, board: &Board) -> Coord {
        self.strategy.select_shot(board, rng)
    }

    fn handle_shot_result(
        &mut self,
        coord: Coord,
        outcome: ShotOutcome,
        sunk: Option<&Placement>,
        board: &Board,
    ) {
        self.strategy.observe(coord, outcome, sunk, board);
    }
}
