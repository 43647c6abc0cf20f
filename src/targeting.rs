//! Hunt/target/destroy state machine.
//!
//! A `TargetingSession` mimics disciplined human play: sweep for a first
//! hit, probe the four neighbors to find the ship's orientation, then ride
//! the line until it ends. Dead ends are reconciled from the recorded hit
//! markers, so a second ship discovered mid-probe is never forgotten. One
//! session per attacker per game; no global state.

use log::debug;

use crate::board::{Board, FogState};
use crate::common::ShotOutcome;
use crate::config::BOARD_SIZE;
use crate::estimator::analytic_density;
use crate::grid::{Coord, Direction};
use crate::ship::Placement;

/// How Search mode picks its next shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPolicy {
    /// Checkerboard sweep with stride equal to the shortest afloat enemy
    /// ship, so every possible placement is eventually crossed.
    Sweep,
    /// Argmax over the analytic probability grid.
    Density,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Search,
    Target,
    Destroy(Direction),
}

/// A confirmed hit not yet attributed to a sunk ship, tagged with the
/// probing direction that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HitMarker {
    coord: Coord,
    dir: Direction,
}

/// Per-attacker targeting memory, persisting across turns.
///
/// Invariants: in Search mode the pending stack and marker list are empty;
/// Destroy mode always has exactly one active direction being extended.
pub struct TargetingSession {
    mode: Mode,
    pending: Vec<(Coord, Direction)>,
    markers: Vec<HitMarker>,
    last_probe: Option<(Coord, Direction)>,
    policy: SearchPolicy,
}

impl TargetingSession {
    pub fn new(policy: SearchPolicy) -> Self {
        TargetingSession {
            mode: Mode::Search,
            pending: Vec::new(),
            markers: Vec::new(),
            last_probe: None,
            policy,
        }
    }

    /// True when no ship is currently engaged.
    pub fn is_searching(&self) -> bool {
        self.mode == Mode::Search
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    /// Choose the next cell to fire at, given our fog view on `board`.
    /// The caller must stop the game before fog runs out of Unknown cells.
    pub fn next_shot(&mut self, board: &Board) -> Coord {
        loop {
            match self.mode {
                Mode::Search => return self.search_pick(board),
                Mode::Target | Mode::Destroy(_) => {
                    // lazy deletion: both Target and Destroy may have
                    // enqueued a neighbor that was resolved meanwhile
                    while let Some((coord, dir)) = self.pending.pop() {
                        if unresolved(board, coord) {
                            self.last_probe = Some((coord, dir));
                            return coord;
                        }
                    }
                    self.reconcile(board);
                }
            }
        }
    }

    /// Feed back the outcome of the shot at `coord`, after the attacker's
    /// fog has been updated. `sunk` carries the destroyed placement when a
    /// ship went down, so its markers can be retired.
    pub fn observe(
        &mut self,
        coord: Coord,
        outcome: ShotOutcome,
        sunk: Option<&Placement>,
        board: &Board,
    ) {
        let probe_dir = match self.last_probe.take() {
            Some((c, d)) if c == coord => d,
            _ => Direction::Start,
        };
        match outcome {
            ShotOutcome::Miss => match self.mode {
                Mode::Search => {}
                Mode::Target => {
                    if self.pending.is_empty() {
                        self.reconcile(board);
                    }
                }
                // the active line is exhausted in this direction
                Mode::Destroy(_) => self.reconcile(board),
            },
            ShotOutcome::Hit | ShotOutcome::Sunk(_) => {
                match self.mode {
                    Mode::Search => {
                        self.markers.push(HitMarker {
                            coord,
                            dir: Direction::Start,
                        });
                        self.push_neighbors(coord, board);
                        self.mode = Mode::Target;
                    }
                    Mode::Target | Mode::Destroy(_) => {
                        self.markers.push(HitMarker {
                            coord,
                            dir: probe_dir,
                        });
                        match coord.step(probe_dir, BOARD_SIZE) {
                            Some(next) if unresolved(board, next) => {
                                self.pending.push((next, probe_dir));
                                self.mode = Mode::Destroy(probe_dir);
                            }
                            // line ends at the grid edge or a resolved cell
                            _ => self.reconcile(board),
                        }
                    }
                }
                if let ShotOutcome::Sunk(name) = outcome {
                    self.retire_sunk(coord, sunk, board);
                    debug!("sunk {name}, mode now {:?}", self.mode);
                }
            }
        }
        debug!(
            "targeting at {coord}: {:?} -> {:?}, stack {}, markers {}",
            outcome,
            self.mode,
            self.pending.len(),
            self.markers.len()
        );
    }

    /// Drop markers belonging to the sunk ship. With nothing left
    /// outstanding the hunt is over; otherwise another ship was clipped
    /// during probing and we reconcile from its markers.
    fn retire_sunk(&mut self, coord: Coord, sunk: Option<&Placement>, board: &Board) {
        match sunk {
            Some(run) => self.markers.retain(|m| !run.contains(m.coord)),
            None => self.markers.retain(|m| m.coord != coord),
        }
        if self.markers.is_empty() {
            self.pending.clear();
            self.mode = Mode::Search;
        } else {
            self.reconcile(board);
        }
    }

    /// Rebuild the pending stack from the most recent marker that still has
    /// unresolved orthogonal neighbors; with none left, clear everything
    /// and go back to Search.
    fn reconcile(&mut self, board: &Board) {
        self.pending.clear();
        for i in (0..self.markers.len()).rev() {
            let cands = neighbor_candidates(self.markers[i].coord, board);
            if !cands.is_empty() {
                self.pending = cands;
                self.mode = Mode::Target;
                return;
            }
        }
        self.markers.clear();
        self.mode = Mode::Search;
    }

    fn push_neighbors(&mut self, coord: Coord, board: &Board) {
        self.pending.extend(neighbor_candidates(coord, board));
    }

    fn search_pick(&mut self, board: &Board) -> Coord {
        let unknown = board.fog_unknown();
        let lengths = board.enemy_lengths_remaining();
        let pick = match self.policy {
            SearchPolicy::Sweep => sweep_pick(board, &lengths),
            SearchPolicy::Density => {
                analytic_density(unknown, &lengths).argmax(unknown)
            }
        };
        pick.or_else(|| unknown.iter().next())
            .unwrap_or(Coord::new(0, 0))
    }
}

fn unresolved(board: &Board, coord: Coord) -> bool {
    matches!(board.fog(coord), Ok(FogState::Unknown))
}

fn neighbor_candidates(coord: Coord, board: &Board) -> Vec<(Coord, Direction)> {
    Direction::CARDINAL
        .iter()
        .filter_map(|&d| coord.step(d, BOARD_SIZE).map(|n| (n, d)))
        .filter(|&(n, _)| unresolved(board, n))
        .collect()
}

/// First unknown cell on the diagonal-stripe lattice with stride equal to
/// the shortest afloat enemy ship; every placement of that length or more
/// crosses the lattice, so coverage is guaranteed. Falls back to any
/// unknown cell once the lattice is exhausted.
fn sweep_pick(board: &Board, lengths: &[usize]) -> Option<Coord> {
    let stride = lengths.iter().copied().filter(|&l| l > 0).min().unwrap_or(1);
    for row in 0..BOARD_SIZE {
        let mut col = row % stride;
        while col < BOARD_SIZE {
            let coord = Coord::new(row, col);
            if unresolved(board, coord) {
                return Some(coord);
            }
            col += stride;
        }
    }
    board.fog_unknown().iter().next()
}
