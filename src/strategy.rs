//! Interchangeable shot-selection policies.
//!
//! A closed enum: unimplemented strategies simply do not exist as
//! variants, so there is nothing to raise at runtime. The selector itself
//! is pure dispatch; the only carried state is the Hunter's own session.

use rand::rngs::SmallRng;
use rand::{Rng, RngCore};

use crate::board::{Board, CellMask};
use crate::common::ShotOutcome;
use crate::config::{TargetingConfig, BOARD_SIZE};
use crate::estimator::{analytic_density, monte_carlo_density, ProbabilityGrid};
use crate::grid::Coord;
use crate::ship::Placement;
use crate::targeting::{SearchPolicy, TargetingSession};

/// External move predictor: consumes a normalized density snapshot and the
/// current unknown-cell mask, returns one coordinate. No further
/// obligations on this side; training and inference live elsewhere.
pub trait MoveOracle: Send {
    fn choose(&mut self, density: &ProbabilityGrid, unknown: CellMask) -> Coord;
}

/// Shot-choosing policy for one attacker.
pub enum Strategy {
    /// Uniformly random among unattacked cells.
    Random,
    /// Analytic-density argmax restricted to the checkerboard lattice
    /// while lattice cells remain, then plain argmax.
    Density,
    /// Monte Carlo estimator argmax once an unresolved hit exists;
    /// analytic argmax before that.
    MonteCarlo(TargetingConfig),
    /// Hunt/target/destroy state machine.
    Hunter(TargetingSession),
    /// External move oracle.
    Oracle(Box<dyn MoveOracle>),
}

impl Strategy {
    pub fn hunter(policy: SearchPolicy) -> Self {
        Strategy::Hunter(TargetingSession::new(policy))
    }

    /// Pick the next shot. Every branch filters candidates against fog, so
    /// a repeated attack cannot be produced here.
    pub fn select_shot(&mut self, board: &Board, rng: &mut SmallRng) -> Coord {
        let unknown = board.fog_unknown();
        match self {
            Strategy::Random => {
                let open: Vec<Coord> = unknown.iter().collect();
                if open.is_empty() {
                    Coord::new(0, 0)
                } else {
                    open[rng.random_range(0..open.len())]
                }
            }
            Strategy::Density => {
                let lengths = board.enemy_lengths_remaining();
                let grid = analytic_density(unknown, &lengths);
                let stride = lengths
                    .iter()
                    .copied()
                    .filter(|&l| l > 0)
                    .min()
                    .unwrap_or(1);
                let lattice = unknown & sweep_lattice(stride);
                let candidates = if lattice.is_empty() { unknown } else { lattice };
                grid.argmax(candidates)
                    .or_else(|| unknown.iter().next())
                    .unwrap_or(Coord::new(0, 0))
            }
            Strategy::MonteCarlo(cfg) => {
                let lengths = board.enemy_lengths_remaining();
                let unresolved = board.unresolved_hits();
                let grid = if unresolved.is_empty() {
                    analytic_density(unknown, &lengths)
                } else {
                    monte_carlo_density(unknown, unresolved, &lengths, cfg, rng.next_u64())
                };
                grid.argmax(unknown)
                    .or_else(|| unknown.iter().next())
                    .unwrap_or(Coord::new(0, 0))
            }
            Strategy::Hunter(session) => session.next_shot(board),
            Strategy::Oracle(oracle) => {
                let lengths = board.enemy_lengths_remaining();
                let density = analytic_density(unknown, &lengths).normalized();
                oracle.choose(&density, unknown)
            }
        }
    }

    /// Feed back the result of the last shot. Only the Hunter carries
    /// cross-turn memory.
    pub fn observe(
        &mut self,
        coord: Coord,
        outcome: ShotOutcome,
        sunk: Option<&Placement>,
        board: &Board,
    ) {
        if let Strategy::Hunter(session) = self {
            session.observe(coord, outcome, sunk, board);
        }
    }
}

/// Diagonal-stripe lattice of the given stride; any straight run of
/// `stride` cells crosses it.
fn sweep_lattice(stride: usize) -> CellMask {
    let mut mask = CellMask::new();
    let stride = stride.max(1);
    for row in 0..BOARD_SIZE {
        let mut col = row % stride;
        while col < BOARD_SIZE {
            let _ = mask.insert(Coord::new(row, col));
            col += stride;
        }
    }
    mask
}
