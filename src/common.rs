//! Common types: shot outcomes and board errors.

use crate::grid::GridError;

/// Result of one shot at the opponent's grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Shot hit an afloat ship segment.
    Hit,
    /// Shot found open water.
    Miss,
    /// Shot hit and completed a ship, carrying its name.
    Sunk(&'static str),
}

impl ShotOutcome {
    pub fn is_hit(&self) -> bool {
        !matches!(self, ShotOutcome::Miss)
    }
}

/// Errors returned by board operations. None of these ever reach a player
/// in normal flow; they mark caller bugs or exhausted retry budgets.
#[derive(Debug, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying grid error (out-of-bounds coordinate).
    Grid(GridError),
    /// Placement touches an Occupied cell, leaves the grid, or is not a
    /// straight run of the ship's length. Callers that consult
    /// `legal_swing_points` first never see this.
    InvalidPlacement,
    /// Randomized placement ran out of attempts on a crowded board.
    /// Recovered by the caller retrying or discarding the trial.
    ExhaustedPlacementAttempts,
    /// A resolved cell was attacked again; the targeting layer must filter
    /// candidates against fog before firing.
    RepeatedAttack,
    /// Ship name not present in the catalogue.
    NameNotFound,
}

impl From<GridError> for BoardError {
    fn from(err: GridError) -> Self {
        BoardError::Grid(err)
    }
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::Grid(e) => write!(f, "grid error: {}", e),
            BoardError::InvalidPlacement => write!(f, "placement is blocked or out of bounds"),
            BoardError::ExhaustedPlacementAttempts => {
                write!(f, "no legal placement found within the attempt budget")
            }
            BoardError::RepeatedAttack => write!(f, "cell was already attacked"),
            BoardError::NameNotFound => write!(f, "ship name not found in catalogue"),
        }
    }
}

impl std::error::Error for BoardError {}
