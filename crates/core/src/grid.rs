//! Grid module - the 4x4 playfield
//!
//! The grid is a 4x4 matrix where each slot is empty or holds one tile.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (row, col) with (0, 0) at the top-left.
//!
//! Placement onto an occupied slot applies the combination rule: equal
//! values double (both tiles consumed), a divisible pair collapses to the
//! quotient, anything else is rejected without touching the grid.

use just_divide_types::{PlaceResult, Tile, GRID_SIZE};

/// Total number of slots on the grid
const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// A grid slot - empty or holding one tile.
pub type Cell = Option<Tile>;

/// Whether two tile values can combine (equal or one divides the other).
///
/// Divisibility is checked via max/min so argument order never matters: the
/// operation is commutative by construction.
pub fn can_combine(a: u32, b: u32) -> bool {
    a == b || a.max(b) % a.min(b) == 0
}

/// The game grid - 4x4 slots using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Flat array of cells, row-major order (row * GRID_SIZE + col)
    cells: [Cell; CELL_COUNT],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(row: usize, col: usize) -> Option<usize> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return None;
        }
        Some(row * GRID_SIZE + col)
    }

    /// Get the cell at (row, col). Returns None if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// The tile at (row, col), if the slot is in bounds and occupied.
    pub fn tile(&self, row: usize, col: usize) -> Option<Tile> {
        self.get(row, col).flatten()
    }

    /// Set the cell at (row, col). Returns false if out of bounds.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Place a tile value onto a slot, combining with any occupant.
    ///
    /// - Empty slot: the value moves in ([`PlaceResult::Placed`]).
    /// - Equal occupant: both tiles are consumed, the slot empties, and the
    ///   award is twice the value ([`PlaceResult::Doubled`]).
    /// - Divisible occupant: the slot holds the quotient of the larger by
    ///   the smaller (empty when the quotient is 1) and the award is the
    ///   larger value ([`PlaceResult::Divided`]).
    /// - Anything else: [`PlaceResult::Rejected`] with no mutation, so a
    ///   rejection is always side-effect-free.
    pub fn place(&mut self, value: u32, row: usize, col: usize) -> PlaceResult {
        let Some(idx) = Self::index(row, col) else {
            return PlaceResult::OutOfBounds;
        };

        let Some(dest) = self.cells[idx] else {
            self.cells[idx] = Some(Tile::new(value));
            return PlaceResult::Placed;
        };

        let dest_val = dest.value;
        if dest_val == value {
            self.cells[idx] = None;
            return PlaceResult::Doubled { award: value * 2 };
        }

        let a = dest_val.max(value);
        let b = dest_val.min(value);
        if a % b == 0 {
            let quotient = a / b;
            self.cells[idx] = if quotient == 1 {
                None
            } else {
                Some(Tile::new(quotient))
            };
            return PlaceResult::Divided { quotient, award: a };
        }

        PlaceResult::Rejected
    }

    /// True iff no slot is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// True iff any 4-connected pair of occupied slots can combine.
    ///
    /// Used only for termination; placement legality is per-slot and
    /// independent of global state.
    pub fn any_merge_possible(&self) -> bool {
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let Some(tile) = self.tile(row, col) else {
                    continue;
                };
                // Checking right and down covers every adjacent pair once.
                for (nr, nc) in [(row, col + 1), (row + 1, col)] {
                    if let Some(neighbor) = self.tile(nr, nc) {
                        if can_combine(tile.value, neighbor.value) {
                            return true;
                        }
                    }
                }
            }
        }
        false
    }

    /// Game-over condition: full grid with no combinable adjacent pair.
    pub fn is_terminal(&self) -> bool {
        self.is_full() && !self.any_merge_possible()
    }

    /// Number of empty slots.
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Create from per-row values (None = empty slot).
    pub fn from_values(rows: [[Option<u32>; GRID_SIZE]; GRID_SIZE]) -> Self {
        let mut grid = Self::new();
        for (r, row) in rows.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                grid.set(r, c, value.map(Tile::new));
            }
        }
        grid
    }

    /// Convert to per-row values for assertions and display.
    pub fn to_values(&self) -> [[Option<u32>; GRID_SIZE]; GRID_SIZE] {
        let mut rows = [[None; GRID_SIZE]; GRID_SIZE];
        for (r, row) in rows.iter_mut().enumerate() {
            for (c, value) in row.iter_mut().enumerate() {
                *value = self.tile(r, c).map(|t| t.value);
            }
        }
        rows
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
