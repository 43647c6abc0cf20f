//! Probability-density estimation over hidden fleet placements.
//!
//! Two interchangeable estimators produce the same grid shape: an analytic
//! enumeration of single-ship placements against fog, and a Monte Carlo
//! sampler over full fleet layouts for positions contaminated by
//! confirmed-but-unattributed hits. Both are read-only with respect to
//! board state.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::board::CellMask;
use crate::config::{TargetingConfig, BOARD_SIZE};
use crate::grid::Coord;
use crate::ship::{Orientation, Placement};

const N: usize = BOARD_SIZE;

/// Likelihood that a ship segment occupies each cell. Raw placement counts
/// for the analytic estimator, weighted sample frequencies for Monte Carlo.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbabilityGrid {
    cells: [[f64; N]; N],
}

impl ProbabilityGrid {
    pub fn zero() -> Self {
        ProbabilityGrid {
            cells: [[0.0; N]; N],
        }
    }

    pub fn get(&self, coord: Coord) -> f64 {
        self.cells[coord.row][coord.col]
    }

    /// Sum of all cell values.
    pub fn total(&self) -> f64 {
        self.cells.iter().flatten().sum()
    }

    pub fn max(&self) -> f64 {
        self.cells.iter().flatten().fold(0.0f64, |m, &v| m.max(v))
    }

    /// Scaled into [0, 1] by the maximum entry. All-zero grids stay zero.
    pub fn normalized(&self) -> Self {
        let max = self.max();
        if max == 0.0 {
            return *self;
        }
        let mut out = *self;
        for row in out.cells.iter_mut() {
            for v in row.iter_mut() {
                *v /= max;
            }
        }
        out
    }

    /// Highest-density coordinate among `candidates`, first in row-major
    /// scan order on ties. `None` when the candidate mask is empty.
    pub fn argmax(&self, candidates: CellMask) -> Option<Coord> {
        let mut best: Option<(Coord, f64)> = None;
        for coord in candidates.iter() {
            let v = self.get(coord);
            match best {
                Some((_, bv)) if bv >= v => {}
                _ => best = Some((coord, v)),
            }
        }
        best.map(|(c, _)| c)
    }

    fn add_mask(&mut self, mask: CellMask, weight: f64) {
        for coord in mask.iter() {
            self.cells[coord.row][coord.col] += weight;
        }
    }

    fn merge(mut self, other: Self) -> Self {
        for r in 0..N {
            for c in 0..N {
                self.cells[r][c] += other.cells[r][c];
            }
        }
        self
    }
}

/// Exhaustive single-ship enumeration against fog. For each remaining
/// length, every run lying entirely on Unknown cells adds one to each cell
/// it covers. Contributions are computed per ship independently; overlap
/// between different ships is deliberately not excluded, since the full
/// joint enumeration is combinatorially explosive and downstream selection
/// assumes the simpler grid.
pub fn analytic_density(unknown: CellMask, lengths: &[usize]) -> ProbabilityGrid {
    let mut grid = ProbabilityGrid::zero();
    for &len in lengths {
        if len == 0 || len > N {
            continue;
        }
        for orient in [Orientation::Horizontal, Orientation::Vertical] {
            let (max_row, max_col) = match orient {
                Orientation::Horizontal => (N, N - len + 1),
                Orientation::Vertical => (N - len + 1, N),
            };
            for r in 0..max_row {
                for c in 0..max_col {
                    let run = Placement::run(Coord::new(r, c), orient, len);
                    let open = run
                        .cells()
                        .iter()
                        .all(|&cell| unknown.contains(cell).unwrap_or(false));
                    if !open {
                        continue;
                    }
                    for &cell in run.cells() {
                        grid.cells[cell.row][cell.col] += 1.0;
                    }
                }
            }
        }
    }
    grid
}

/// Monte Carlo estimate over full fleet layouts consistent with fog: each
/// trial places every remaining ship on cells that are Unknown or
/// confirmed-unsunk hits. Trials covering unresolved hits are replicated
/// in the aggregate, biasing the frequency map toward hypotheses that
/// explain the known hits. Trials are independent and fan out across the
/// rayon pool; the aggregate is a plain commutative sum, deterministic for
/// a given `seed`.
pub fn monte_carlo_density(
    unknown: CellMask,
    unresolved_hits: CellMask,
    lengths: &[usize],
    cfg: &TargetingConfig,
    seed: u64,
) -> ProbabilityGrid {
    let allowed = unknown | unresolved_hits;
    (0..cfg.trials as u64)
        .into_par_iter()
        .filter_map(|trial| {
            let mut rng = SmallRng::seed_from_u64(
                seed.wrapping_add(trial.wrapping_mul(0x9E37_79B9_7F4A_7C15)),
            );
            sample_layout(allowed, lengths, cfg.placement_attempts, &mut rng)
        })
        .map(|layout| {
            let explained = (layout & unresolved_hits).count();
            let mut grid = ProbabilityGrid::zero();
            grid.add_mask(layout, 1.0 + explained as f64);
            grid
        })
        .reduce(ProbabilityGrid::zero, ProbabilityGrid::merge)
}

/// One candidate layout of all remaining ships inside `allowed`, ships
/// pairwise disjoint. Gives up on the whole trial when any single ship
/// exhausts its attempt budget; the caller discards the trial rather than
/// retrying at the top level.
fn sample_layout(
    allowed: CellMask,
    lengths: &[usize],
    attempts: usize,
    rng: &mut SmallRng,
) -> Option<CellMask> {
    let mut placed = CellMask::new();
    for &len in lengths {
        if len == 0 {
            continue;
        }
        if len > N {
            return None;
        }
        let mut done = false;
        for _ in 0..attempts {
            let orient = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_row, max_col) = match orient {
                Orientation::Horizontal => (N, N - len + 1),
                Orientation::Vertical => (N - len + 1, N),
            };
            let origin = Coord::new(rng.random_range(0..max_row), rng.random_range(0..max_col));
            let run = Placement::run(origin, orient, len);
            let fits = run.cells().iter().all(|&c| {
                allowed.contains(c).unwrap_or(false) && !placed.contains(c).unwrap_or(true)
            });
            if fits {
                for &c in run.cells() {
                    let _ = placed.insert(c);
                }
                done = true;
                break;
            }
        }
        if !done {
            return None;
        }
    }
    Some(placed)
}
