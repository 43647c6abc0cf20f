//! Ship catalogue entries and committed placements.

use core::fmt;

use crate::grid::Coord;

/// Axis a placement runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A catalogue entry: ship name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipSpec {
    name: &'static str,
    length: usize,
}

impl ShipSpec {
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

/// An ordered, contiguous, straight run of cells occupied by one ship.
#[derive(Clone, PartialEq, Eq)]
pub struct Placement {
    cells: Vec<Coord>,
}

impl Placement {
    /// The inclusive run from `anchor` to `endpoint`, ordered anchor-first.
    /// Returns `None` unless the two cells share a row or a column.
    pub fn between(anchor: Coord, endpoint: Coord) -> Option<Placement> {
        let mut cells: Vec<Coord> = if anchor.row == endpoint.row {
            let (lo, hi) = ordered(anchor.col, endpoint.col);
            (lo..=hi).map(|c| Coord::new(anchor.row, c)).collect()
        } else if anchor.col == endpoint.col {
            let (lo, hi) = ordered(anchor.row, endpoint.row);
            (lo..=hi).map(|r| Coord::new(r, anchor.col)).collect()
        } else {
            return None;
        };
        if cells.first() != Some(&anchor) {
            cells.reverse();
        }
        Some(Placement { cells })
    }

    /// A run of `len` cells from `origin` along `orient`. Bounds are the
    /// caller's concern; cells only ever grow away from the origin.
    pub fn run(origin: Coord, orient: Orientation, len: usize) -> Placement {
        let cells = (0..len)
            .map(|k| match orient {
                Orientation::Horizontal => Coord::new(origin.row, origin.col + k),
                Orientation::Vertical => Coord::new(origin.row + k, origin.col),
            })
            .collect();
        Placement { cells }
    }

    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }

    /// Axis of the run. Single-cell placements report `Horizontal`.
    pub fn orientation(&self) -> Orientation {
        match (self.cells.first(), self.cells.get(1)) {
            (Some(a), Some(b)) if a.col == b.col => Orientation::Vertical,
            _ => Orientation::Horizontal,
        }
    }
}

impl fmt::Debug for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Placement[")?;
        for (i, c) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, "]")
    }
}

fn ordered(a: usize, b: usize) -> (usize, usize) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
