//! Generation step for an unbounded Game of Life
//!
//! State is a sparse set of living cells. Cells may have any integer
//! coordinates; the viewport only matters to the renderer.

use std::collections::HashSet;

/// A board coordinate. Rows grow downwards, columns to the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: i64,
    pub col: i64,
}

impl Cell {
    pub const fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }

    /// Returns this cell moved by the given deltas, or `None` if either
    /// coordinate would leave the `i64` range.
    pub fn checked_offset(self, rows: i64, cols: i64) -> Option<Self> {
        Some(Self::new(self.row.checked_add(rows)?, self.col.checked_add(cols)?))
    }
}

impl From<(i64, i64)> for Cell {
    fn from((row, col): (i64, i64)) -> Self {
        Self::new(row, col)
    }
}

/// The entire simulation state for one generation.
pub type LivingSet = HashSet<Cell>;

const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The Moore neighborhood of `cell`.
///
/// Coordinates past the `i64` limits do not exist, so a cell on the edge of
/// the coordinate space has fewer than 8 neighbors.
pub fn neighbors(cell: Cell) -> impl Iterator<Item = Cell> {
    NEIGHBOR_OFFSETS
        .into_iter()
        .filter_map(move |(dr, dc)| cell.checked_offset(dr, dc))
}

/// Every living cell plus all of its neighbors.
///
/// These are the only cells whose next state can be alive.
pub fn participants(cells: &LivingSet) -> LivingSet {
    let mut all = cells.clone();
    for &cell in cells {
        all.extend(neighbors(cell));
    }
    all
}

fn live_neighbors(cell: Cell, cells: &LivingSet) -> usize {
    neighbors(cell).filter(|n| cells.contains(n)).count()
}

/// Computes the next generation: birth on 3 neighbors, survival on 2 or 3.
///
/// Only participants are evaluated, so the cost scales with the living set
/// rather than any board area. The input is never modified.
pub fn step(cells: &LivingSet) -> LivingSet {
    participants(cells)
        .into_iter()
        .filter(|&cell| match (cells.contains(&cell), live_neighbors(cell, cells)) {
            (true, 2) | (true, 3) => true, // Survival
            (false, 3) => true,            // Birth
            _ => false,
        })
        .collect()
}
