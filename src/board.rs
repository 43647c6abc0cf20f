//! Board state: the authoritative own grid, the fleet registry and the
//! attacker's fog-of-war knowledge of the opposing grid.

use rand::rngs::SmallRng;
use rand::Rng;

use crate::common::{BoardError, ShotOutcome};
use crate::config::{BOARD_SIZE, NUM_SHIPS, SHIPS};
use crate::grid::{Coord, Direction, Mask};
use crate::ship::{Placement, ShipSpec};

/// Mask sized for the standard board.
pub type CellMask = Mask<u128, BOARD_SIZE>;

/// Authoritative state of a cell on the owner's grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Empty,
    Occupied,
    Hit,
    Miss,
}

/// What an attacker knows about an opponent cell. Strictly derived from
/// attack history; never reveals unattacked Occupied cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FogState {
    Unknown,
    Hit,
    Miss,
}

/// Ships of one fleet: those still afloat and those destroyed, with the
/// destroyed placements recorded at the moment of sinking.
#[derive(Debug, Clone, Default)]
pub struct FleetRegistry {
    afloat: Vec<(ShipSpec, Placement)>,
    destroyed: Vec<(ShipSpec, Placement)>,
}

impl FleetRegistry {
    pub fn afloat(&self) -> &[(ShipSpec, Placement)] {
        &self.afloat
    }

    pub fn destroyed(&self) -> &[(ShipSpec, Placement)] {
        &self.destroyed
    }

    pub fn last_destroyed(&self) -> Option<&(ShipSpec, Placement)> {
        self.destroyed.last()
    }

    /// True when no placed ship remains afloat.
    pub fn all_sunk(&self) -> bool {
        self.afloat.is_empty()
    }
}

/// One player's complete board state. Owns the authoritative own grid and
/// fleet, plus this player's fog view of the enemy grid. Mutated only by
/// placement calls pre-game and attack/record calls in-game.
pub struct Board {
    ship_map: CellMask,
    hits: CellMask,
    misses: CellMask,
    fleet: FleetRegistry,
    // fog: this player's knowledge of the enemy grid
    fog_hits: CellMask,
    fog_misses: CellMask,
    fog_sunk: CellMask,
    enemy_afloat: [bool; NUM_SHIPS],
}

impl Board {
    /// An empty board: no ships placed, nothing attacked, full fog.
    pub fn new() -> Self {
        Board {
            ship_map: CellMask::new(),
            hits: CellMask::new(),
            misses: CellMask::new(),
            fleet: FleetRegistry::default(),
            fog_hits: CellMask::new(),
            fog_misses: CellMask::new(),
            fog_sunk: CellMask::new(),
            enemy_afloat: [true; NUM_SHIPS],
        }
    }

    pub fn fleet(&self) -> &FleetRegistry {
        &self.fleet
    }

    pub fn ship_map(&self) -> CellMask {
        self.ship_map
    }

    /// True when every placed ship on this board is sunk.
    pub fn all_sunk(&self) -> bool {
        self.fleet.all_sunk()
    }

    /// True when every enemy ship has been reported sunk to us.
    pub fn enemy_defeated(&self) -> bool {
        !self.enemy_afloat.iter().any(|&afloat| afloat)
    }

    /// State of an own-grid cell.
    pub fn cell(&self, coord: Coord) -> Result<CellState, BoardError> {
        let state = if self.hits.contains(coord)? {
            CellState::Hit
        } else if self.misses.contains(coord)? {
            CellState::Miss
        } else if self.ship_map.contains(coord)? {
            CellState::Occupied
        } else {
            CellState::Empty
        };
        Ok(state)
    }

    /// Our fog view of an enemy cell.
    pub fn fog(&self, coord: Coord) -> Result<FogState, BoardError> {
        let state = if self.fog_hits.contains(coord)? {
            FogState::Hit
        } else if self.fog_misses.contains(coord)? {
            FogState::Miss
        } else {
            FogState::Unknown
        };
        Ok(state)
    }

    /// Enemy cells we know nothing about yet.
    pub fn fog_unknown(&self) -> CellMask {
        !(self.fog_hits | self.fog_misses)
    }

    /// Confirmed enemy hits not yet attributed to a sunk ship.
    pub fn unresolved_hits(&self) -> CellMask {
        self.fog_hits & !self.fog_sunk
    }

    /// Lengths of enemy ships not yet reported sunk; zero entries keep the
    /// array fixed-size for sunk ships.
    pub fn enemy_lengths_remaining(&self) -> [usize; NUM_SHIPS] {
        let mut lens = [0usize; NUM_SHIPS];
        for (i, spec) in SHIPS.iter().enumerate() {
            if self.enemy_afloat[i] {
                lens[i] = spec.length();
            }
        }
        lens
    }

    /// Candidate opposite endpoints for a ship of `length` anchored at
    /// `anchor`: one per axis direction whose full run stays in bounds and
    /// crosses only Empty cells. No tie-breaking; the caller chooses.
    pub fn legal_swing_points(&self, anchor: Coord, length: usize) -> Vec<Coord> {
        if length == 0 {
            return Vec::new();
        }
        if length == 1 {
            return if self.ship_map.contains(anchor).unwrap_or(true) {
                Vec::new()
            } else {
                vec![anchor]
            };
        }
        let mut points = Vec::new();
        for dir in Direction::CARDINAL {
            let Some(endpoint) = anchor.step_by(dir, length - 1, BOARD_SIZE) else {
                continue;
            };
            let Some(run) = Placement::between(anchor, endpoint) else {
                continue;
            };
            let clear = run
                .cells()
                .iter()
                .all(|&c| !self.ship_map.contains(c).unwrap_or(true));
            if clear {
                points.push(endpoint);
            }
        }
        points
    }

    /// Mark the inclusive run from `anchor` to `endpoint` Occupied for
    /// `spec` and register it with the fleet. `InvalidPlacement` if the run
    /// is crooked, the wrong length, or touches an Occupied cell; callers
    /// that consult `legal_swing_points` first never trigger this.
    pub fn commit_placement(
        &mut self,
        spec: ShipSpec,
        anchor: Coord,
        endpoint: Coord,
    ) -> Result<Placement, BoardError> {
        let run = Placement::between(anchor, endpoint).ok_or(BoardError::InvalidPlacement)?;
        if run.len() != spec.length() {
            return Err(BoardError::InvalidPlacement);
        }
        for &c in run.cells() {
            if self.ship_map.contains(c).map_err(BoardError::Grid)? {
                return Err(BoardError::InvalidPlacement);
            }
        }
        for &c in run.cells() {
            self.ship_map.insert(c)?;
        }
        self.fleet.afloat.push((spec, run.clone()));
        Ok(run)
    }

    /// Place the whole standard fleet at random: a uniformly random Empty
    /// anchor, then a uniformly random legal swing point, retrying up to
    /// `attempts` times per ship before giving up.
    pub fn place_fleet_random(
        &mut self,
        rng: &mut SmallRng,
        attempts: usize,
    ) -> Result<(), BoardError> {
        for spec in SHIPS {
            let mut placed = false;
            for _ in 0..attempts {
                let open: Vec<Coord> = (!self.ship_map).iter().collect();
                if open.is_empty() {
                    break;
                }
                let anchor = open[rng.random_range(0..open.len())];
                let swings = self.legal_swing_points(anchor, spec.length());
                if swings.is_empty() {
                    continue;
                }
                let endpoint = swings[rng.random_range(0..swings.len())];
                self.commit_placement(spec, anchor, endpoint)?;
                placed = true;
                break;
            }
            if !placed {
                return Err(BoardError::ExhaustedPlacementAttempts);
            }
        }
        Ok(())
    }

    /// Resolve an incoming shot against this board. Attacking a resolved
    /// cell is a caller error; the targeting layer filters against fog.
    /// Sink detection runs after the hit and is deterministic.
    pub fn attack(&mut self, coord: Coord) -> Result<ShotOutcome, BoardError> {
        if self.hits.contains(coord)? || self.misses.contains(coord)? {
            return Err(BoardError::RepeatedAttack);
        }
        if self.ship_map.contains(coord)? {
            self.hits.insert(coord)?;
            match self.check_sunk() {
                Some(name) => Ok(ShotOutcome::Sunk(name)),
                None => Ok(ShotOutcome::Hit),
            }
        } else {
            self.misses.insert(coord)?;
            Ok(ShotOutcome::Miss)
        }
    }

    /// Move the first fully-hit afloat ship to the destroyed list and
    /// return its name. Each ship is reported at most once.
    pub fn check_sunk(&mut self) -> Option<&'static str> {
        let idx = self.fleet.afloat.iter().position(|(_, run)| {
            run.cells()
                .iter()
                .all(|&c| self.hits.contains(c).unwrap_or(false))
        })?;
        let (spec, run) = self.fleet.afloat.remove(idx);
        let name = spec.name();
        self.fleet.destroyed.push((spec, run));
        Some(name)
    }

    /// Record the result of our own shot at the enemy grid. `sunk_cells`
    /// carries the destroyed placement when the outcome is a sink, so fog
    /// can attribute the hits to a dead ship.
    pub fn record_shot(
        &mut self,
        coord: Coord,
        outcome: ShotOutcome,
        sunk_cells: Option<&Placement>,
    ) -> Result<(), BoardError> {
        if self.fog_hits.contains(coord)? || self.fog_misses.contains(coord)? {
            return Err(BoardError::RepeatedAttack);
        }
        match outcome {
            ShotOutcome::Miss => self.fog_misses.insert(coord)?,
            ShotOutcome::Hit => self.fog_hits.insert(coord)?,
            ShotOutcome::Sunk(name) => {
                self.fog_hits.insert(coord)?;
                let idx = SHIPS
                    .iter()
                    .position(|s| s.name() == name)
                    .ok_or(BoardError::NameNotFound)?;
                self.enemy_afloat[idx] = false;
                match sunk_cells {
                    Some(run) => {
                        for &c in run.cells() {
                            self.fog_sunk.insert(c)?;
                        }
                    }
                    None => self.fog_sunk.insert(coord)?,
                }
            }
        }
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
