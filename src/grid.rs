//! Grid primitives: coordinates, probing directions and packed cell masks.
//!
//! A `Mask` packs an N×N grid of booleans into a single unsigned integer,
//! which keeps board snapshots `Copy` and makes overlap checks a single
//! bitwise AND. All board-level state (occupancy, hits, misses, fog) is
//! built out of these.

use core::fmt;
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};
use num_traits::{PrimInt, Unsigned, Zero};

/// Errors returned by grid operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Row or column index is out of bounds [0..N).
    OutOfBounds { row: usize, col: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::OutOfBounds { row, col } => {
                write!(f, "coordinate ({}, {}) is outside the grid", row, col)
            }
        }
    }
}

/// A cell position on an N×N grid. Immutable value type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Coord { row, col }
    }

    /// The neighbor one step along `dir`, if it stays on an `n`×`n` grid.
    /// `Direction::Start` has no step.
    pub fn step(self, dir: Direction, n: usize) -> Option<Coord> {
        let (row, col) = (self.row, self.col);
        let next = match dir {
            Direction::Up if row > 0 => Coord::new(row - 1, col),
            Direction::Down if row + 1 < n => Coord::new(row + 1, col),
            Direction::Left if col > 0 => Coord::new(row, col - 1),
            Direction::Right if col + 1 < n => Coord::new(row, col + 1),
            _ => return None,
        };
        Some(next)
    }

    /// The cell `dist` steps along `dir`, if the whole walk stays on the grid.
    pub fn step_by(self, dir: Direction, dist: usize, n: usize) -> Option<Coord> {
        let mut cur = self;
        for _ in 0..dist {
            cur = cur.step(dir, n)?;
        }
        Some(cur)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Probing direction. `Start` tags a hit obtained while searching, before
/// any direction along the ship has been established.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    Start,
}

impl Direction {
    /// The four steppable directions, in neighbor-probing order.
    pub const CARDINAL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

/// A fixed-size N×N cell mask stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Mask<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> Mask<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    const CELLS: usize = N * N;

    #[inline]
    fn full_bits() -> T {
        if Self::CELLS == core::mem::size_of::<T>() * 8 {
            !T::zero()
        } else {
            (T::one() << Self::CELLS) - T::one()
        }
    }

    /// An empty mask (no cells set).
    #[inline]
    pub fn new() -> Self {
        Mask { bits: T::zero() }
    }

    /// A mask with every cell set.
    #[inline]
    pub fn full() -> Self {
        Mask {
            bits: Self::full_bits(),
        }
    }

    /// Number of set cells.
    pub fn count(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Whether `coord` is set.
    pub fn contains(&self, coord: Coord) -> Result<bool, GridError> {
        Self::check_bounds(coord)?;
        let idx = coord.row * N + coord.col;
        Ok(((self.bits >> idx) & T::one()) != T::zero())
    }

    /// Set `coord`.
    pub fn insert(&mut self, coord: Coord) -> Result<(), GridError> {
        Self::check_bounds(coord)?;
        let idx = coord.row * N + coord.col;
        self.bits = self.bits | (T::one() << idx);
        Ok(())
    }

    /// Clear `coord`.
    pub fn remove(&mut self, coord: Coord) -> Result<(), GridError> {
        Self::check_bounds(coord)?;
        let idx = coord.row * N + coord.col;
        self.bits = self.bits & !(T::one() << idx);
        Ok(())
    }

    #[inline]
    fn check_bounds(coord: Coord) -> Result<(), GridError> {
        if coord.row >= N || coord.col >= N {
            Err(GridError::OutOfBounds {
                row: coord.row,
                col: coord.col,
            })
        } else {
            Ok(())
        }
    }

    /// Iterator over the set cells in row-major order.
    pub fn iter(self) -> impl Iterator<Item = Coord> {
        (0..Self::CELLS).filter_map(move |idx| {
            if ((self.bits >> idx) & T::one()) != T::zero() {
                Some(Coord::new(idx / N, idx % N))
            } else {
                None
            }
        })
    }

    /// Build a mask from coordinates, failing on the first out-of-bounds one.
    pub fn from_coords<I>(iter: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = Coord>,
    {
        let mut mask = Self::new();
        for c in iter {
            mask.insert(c)?;
        }
        Ok(mask)
    }
}

impl<T, const N: usize> Default for Mask<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for Mask<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mask<{}>:", N)?;
        for r in 0..N {
            for c in 0..N {
                let set = ((self.bits >> (r * N + c)) & T::one()) != T::zero();
                write!(f, "{} ", if set { '#' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T, const N: usize> BitAnd for Mask<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        Mask {
            bits: self.bits & rhs.bits,
        }
    }
}

impl<T, const N: usize> BitOr for Mask<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Mask {
            bits: self.bits | rhs.bits,
        }
    }
}

impl<T, const N: usize> Not for Mask<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn not(self) -> Self {
        Mask {
            bits: !self.bits & Self::full_bits(),
        }
    }
}

impl<T, const N: usize> BitAndAssign for Mask<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn bitand_assign(&mut self, rhs: Self) {
        self.bits = self.bits & rhs.bits;
    }
}

impl<T, const N: usize> BitOrAssign for Mask<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits = self.bits | rhs.bits;
    }
}
