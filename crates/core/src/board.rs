//! Board module - manages the 4x4 tile grid
//!
//! Cells are stored in a flat array in row-major order (`row * BOARD_SIZE + col`).
//! An empty cell is `None`; an occupied cell holds a [`Tile`] with a power-of-two
//! value and the stable [`TileId`] it was spawned with.
//!
//! Coordinates are `(row, col)` with `(0, 0)` at the top-left.

use arrayvec::ArrayVec;

use crate::types::{Direction, TileId, BOARD_SIZE, CELL_COUNT};

/// A tile on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub id: TileId,
    pub value: u32,
}

/// One row or column read in the direction of travel (index 0 is the wall)
pub type Lane = [Option<Tile>; BOARD_SIZE];

/// Board positions in row-major order
pub type CellList = ArrayVec<(usize, usize), CELL_COUNT>;

/// Largest value that can be placed directly; merging two of them still fits in a `u32`
pub const MAX_TILE_VALUE: u32 = 1 << 30;

/// Whether `value` may be placed on the board (a power of two in `2..=MAX_TILE_VALUE`)
#[inline]
pub fn is_tile_value(value: u32) -> bool {
    (2..=MAX_TILE_VALUE).contains(&value) && value.is_power_of_two()
}

/// Value equality between two cells, both non-zero
#[inline]
pub fn is_power_tile_equal(a: u32, b: u32) -> bool {
    a != 0 && a == b
}

/// The game board - 4x4 cells plus the id counter for new tiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Tile>; CELL_COUNT],
    next_id: u32,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; CELL_COUNT],
            next_id: 1,
        }
    }

    /// Build a board from a value grid (0 = empty)
    ///
    /// Tiles get ids in row-major order starting at 1. Cells holding a value
    /// that is not a valid tile value are left empty.
    pub fn from_values(values: [[u32; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        let mut board = Self::new();
        for (row, line) in values.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                if value != 0 {
                    board.place_tile(row, col, value);
                }
            }
        }
        board
    }

    #[inline(always)]
    fn index(row: usize, col: usize) -> Option<usize> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return None;
        }
        Some(row * BOARD_SIZE + col)
    }

    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Get the tile at `(row, col)`; `None` if empty or out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        Self::index(row, col).and_then(|idx| self.cells[idx])
    }

    /// Cell value at `(row, col)`; 0 if empty or out of bounds
    pub fn value(&self, row: usize, col: usize) -> u32 {
        self.get(row, col).map_or(0, |t| t.value)
    }

    /// Place a new tile on an empty cell, assigning it a fresh id
    ///
    /// Returns `None` if the position is out of bounds, already occupied, or
    /// the value is not a power of two of at least 2.
    pub fn place_tile(&mut self, row: usize, col: usize, value: u32) -> Option<TileId> {
        let idx = Self::index(row, col)?;
        if self.cells[idx].is_some() || !is_tile_value(value) {
            return None;
        }
        let id = TileId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.cells[idx] = Some(Tile { id, value });
        Some(id)
    }

    /// All empty cells in row-major order
    pub fn empty_cells(&self) -> CellList {
        let mut out = CellList::new();
        for (idx, cell) in self.cells.iter().enumerate() {
            if cell.is_none() {
                out.push((idx / BOARD_SIZE, idx % BOARD_SIZE));
            }
        }
        out
    }

    pub fn has_any_empty_cell(&self) -> bool {
        self.cells.iter().any(|c| c.is_none())
    }

    /// Whether any cell has a right or down neighbour (no wraparound) of equal value
    pub fn has_any_adjacent_equal_pair(&self) -> bool {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let v = self.value(row, col);
                if col + 1 < BOARD_SIZE && is_power_tile_equal(v, self.value(row, col + 1)) {
                    return true;
                }
                if row + 1 < BOARD_SIZE && is_power_tile_equal(v, self.value(row + 1, col)) {
                    return true;
                }
            }
        }
        false
    }

    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn max_value(&self) -> u32 {
        self.cells.iter().flatten().map(|t| t.value).max().unwrap_or(0)
    }

    pub fn contains_value(&self, value: u32) -> bool {
        self.cells.iter().flatten().any(|t| t.value == value)
    }

    /// Snapshot of cell values (0 = empty)
    pub fn values(&self) -> [[u32; BOARD_SIZE]; BOARD_SIZE] {
        let mut out = [[0u32; BOARD_SIZE]; BOARD_SIZE];
        for (idx, cell) in self.cells.iter().enumerate() {
            if let Some(tile) = cell {
                out[idx / BOARD_SIZE][idx % BOARD_SIZE] = tile.value;
            }
        }
        out
    }

    /// Snapshot of tile ids (`None` = empty)
    pub fn ids(&self) -> [[Option<TileId>; BOARD_SIZE]; BOARD_SIZE] {
        let mut out = [[None; BOARD_SIZE]; BOARD_SIZE];
        for (idx, cell) in self.cells.iter().enumerate() {
            out[idx / BOARD_SIZE][idx % BOARD_SIZE] = cell.map(|t| t.id);
        }
        out
    }

    /// Board position of the `step`-th cell of lane `index` when traveling in `direction`
    ///
    /// Step 0 is the cell against the wall the tiles slide toward.
    #[inline]
    pub fn lane_position(direction: Direction, index: usize, step: usize) -> (usize, usize) {
        let last = BOARD_SIZE - 1;
        match direction {
            Direction::Left => (index, step),
            Direction::Right => (index, last - step),
            Direction::Up => (step, index),
            Direction::Down => (last - step, index),
        }
    }

    /// Read lane `index` in travel order for `direction`
    pub fn lane(&self, direction: Direction, index: usize) -> Lane {
        let mut lane = [None; BOARD_SIZE];
        for (step, slot) in lane.iter_mut().enumerate() {
            let (row, col) = Self::lane_position(direction, index, step);
            *slot = self.get(row, col);
        }
        lane
    }

    /// Write a travel-order lane back to its board positions
    pub fn write_lane(&mut self, direction: Direction, index: usize, lane: &Lane) {
        for (step, tile) in lane.iter().enumerate() {
            let (row, col) = Self::lane_position(direction, index, step);
            if let Some(idx) = Self::index(row, col) {
                self.cells[idx] = *tile;
            }
        }
    }

    /// Remove every tile (the id counter keeps running)
    pub fn clear(&mut self) {
        self.cells = [None; CELL_COUNT];
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Option<Tile>] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
