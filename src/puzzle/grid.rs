use macroquad::prelude::*;

pub const GRID_WIDTH: usize = 10;
pub const GRID_HEIGHT: usize = 22;
/// Rows at the top of the grid that are never drawn. Pieces spawn here.
pub const HIDDEN_ROWS: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellStatus {
    Empty,
    /// Settled blocks and the active piece. Both block placement.
    Locked,
    Projection,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    pub status: CellStatus,
    pub color: Color,
}

impl Cell {
    pub const EMPTY: Cell = Cell {
        status: CellStatus::Empty,
        color: BLANK,
    };

    pub fn is_locked(&self) -> bool {
        self.status == CellStatus::Locked
    }
}

/// Row-major cell storage, `(0, 0)` at the top-left of the hidden buffer.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Default for Grid {
    fn default() -> Self {
        Grid::new(GRID_WIDTH, GRID_HEIGHT)
    }
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Grid {
            width,
            height,
            cells: vec![Cell::EMPTY; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    pub fn get(&self, x: i32, y: i32) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, x: i32, y: i32) -> Option<&mut Cell> {
        self.index(x, y).map(move |i| &mut self.cells[i])
    }

    /// Returns false when `(x, y)` is off the grid.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.get_mut(x, y) {
            Some(slot) => {
                *slot = cell;
                true
            }
            None => false,
        }
    }

    pub fn row(&self, y: usize) -> &[Cell] {
        &self.cells[y * self.width..(y + 1) * self.width]
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::EMPTY);
    }

    fn row_is_full(&self, y: usize) -> bool {
        self.row(y).iter().all(Cell::is_locked)
    }

    /// Removes every fully locked row, shifting the rows above it down.
    /// Returns how many rows were removed.
    pub fn clear_lines(&mut self) -> u32 {
        let mut cleared = 0;
        let mut y = self.height;
        while y > 0 {
            if self.row_is_full(y - 1) {
                cleared += 1;
                // Shift rows 0..y-1 down by one; the same index is checked again.
                self.cells.copy_within(0..(y - 1) * self.width, self.width);
                self.cells[..self.width].fill(Cell::EMPTY);
            } else {
                y -= 1;
            }
        }
        cleared
    }
}
