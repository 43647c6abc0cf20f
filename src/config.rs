//! Standard game configuration: board size, ship catalogue and the
//! runtime knobs supplied to the estimator and placement code.

use serde::{Deserialize, Serialize};

use crate::ship::ShipSpec;

pub const BOARD_SIZE: usize = 10;
pub const NUM_SHIPS: usize = 5;
pub const SHIPS: [ShipSpec; NUM_SHIPS] = [
    ShipSpec::new("Aircraft Carrier", 5),
    ShipSpec::new("Battleship", 4),
    ShipSpec::new("Cruiser", 3),
    ShipSpec::new("Submarine", 3),
    ShipSpec::new("Destroyer", 2),
];

/// Total number of ship segments in the standard catalogue.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Runtime knobs for Monte Carlo estimation and randomized placement.
/// Supplied at construction time and never mutated mid-game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetingConfig {
    /// Number of Monte Carlo fleet layouts sampled per estimate.
    pub trials: usize,
    /// Per-ship attempt budget before a placement or trial is abandoned.
    pub placement_attempts: usize,
}

impl Default for TargetingConfig {
    fn default() -> Self {
        Self {
            trials: 800,
            placement_attempts: 64,
        }
    }
}
