//! The occupancy grid and the collision engine.
//!
//! A 10x20 grid in a flat array, row-major. Cells are written only by the
//! lock merge and the line-shift compaction; the active piece never lives in
//! the grid. `collides` is the single validation authority: every transition
//! (move, rotate, gravity step, spawn) checks through it before mutating
//! state.

use crate::core::pieces;
use crate::types::{Cell, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// The game board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat cell storage, `y * WIDTH + x`.
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH || y < 0 || y >= BOARD_HEIGHT {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    /// Locked kind at `(x, y)`, `None` when empty or out of bounds.
    pub fn kind_at(&self, x: i8, y: i8) -> Cell {
        Self::index(x, y).and_then(|i| self.cells[i])
    }

    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        self.kind_at(x, y).is_some()
    }

    /// Write a cell. Returns false when `(x, y)` is out of bounds.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// Whether a piece at pose `(x, y, rotation)` overlaps a wall, the
    /// floor, or a locked cell.
    ///
    /// Cells above the visible board (`y + i < 0`) collide only with the
    /// side walls and floor, never with board contents, so pieces may spawn
    /// or kick partially above the grid.
    pub fn collides(&self, kind: PieceKind, rotation: Rotation, x: i8, y: i8) -> bool {
        let size = pieces::grid_size(kind);
        for i in 0..size {
            for j in 0..size {
                if !pieces::occupied(kind, rotation, j, i) {
                    continue;
                }
                let bx = x + j;
                let by = y + i;
                if bx < 0 || bx >= BOARD_WIDTH || by >= BOARD_HEIGHT {
                    return true;
                }
                if by >= 0 && self.is_occupied(bx, by) {
                    return true;
                }
            }
        }
        false
    }

    /// Merge a locked piece into the grid. Cells above the visible board
    /// are silently dropped.
    pub fn merge(&mut self, kind: PieceKind, rotation: Rotation, x: i8, y: i8) {
        let size = pieces::grid_size(kind);
        for i in 0..size {
            for j in 0..size {
                if pieces::occupied(kind, rotation, j, i) {
                    self.set(x + j, y + i, Some(kind));
                }
            }
        }
    }

    pub fn is_row_full(&self, y: i8) -> bool {
        if !(0..BOARD_HEIGHT).contains(&y) {
            return false;
        }
        let start = (y as usize) * (BOARD_WIDTH as usize);
        self.cells[start..start + BOARD_WIDTH as usize]
            .iter()
            .all(|cell| cell.is_some())
    }

    /// Remove every full row, shifting the rows above each one down.
    ///
    /// Compacts bottom-to-top with a write cursor so relative row order is
    /// preserved. Returns the number of rows removed (the simultaneous
    /// clear count used for scoring).
    pub fn clear_full_rows(&mut self) -> usize {
        let width = BOARD_WIDTH as usize;
        let mut cleared = 0;
        let mut write_y = BOARD_HEIGHT as usize;

        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y as i8) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src = read_y * width;
                    self.cells.copy_within(src..src + width, write_y * width);
                }
            }
        }

        // Rows vacated at the top become empty.
        for cell in &mut self.cells[..write_y * width] {
            *cell = None;
        }

        cleared
    }

    /// Number of occupied cells on the whole board.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
