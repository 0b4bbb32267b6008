//! Writing pieces into the grid and testing where they fit.

use super::grid::{Cell, CellStatus, Grid};
use super::piece::Piece;

impl Grid {
    /// Writes `piece` at anchor `(x, y)` with the given status.
    ///
    /// Fails on a cell left or right of the grid, below the bottom row, or
    /// already locked; anything written before the failing cell is cleared
    /// again, so a failed call leaves the grid as it found it.
    pub fn try_place(&mut self, piece: &Piece, status: CellStatus, x: i32, y: i32) -> bool {
        for (i, offset) in piece.cells.iter().enumerate() {
            let (cx, cy) = (x + offset.x, y + offset.y);
            if !matches!(self.get(cx, cy), Some(cell) if !cell.is_locked()) {
                self.remove_cells(piece, x, y, i);
                return false;
            }
            self.set(
                cx,
                cy,
                Cell {
                    status,
                    color: piece.color,
                },
            );
        }
        true
    }

    pub fn remove_piece(&mut self, piece: &Piece, x: i32, y: i32) {
        self.remove_cells(piece, x, y, piece.cells.len());
    }

    fn remove_cells(&mut self, piece: &Piece, x: i32, y: i32, count: usize) {
        for offset in &piece.cells[..count] {
            self.set(x + offset.x, y + offset.y, Cell::EMPTY);
        }
    }

    pub fn fits(&mut self, piece: &Piece, x: i32, y: i32) -> bool {
        if self.try_place(piece, CellStatus::Locked, x, y) {
            self.remove_piece(piece, x, y);
            true
        } else {
            false
        }
    }

    /// Lowest row the piece can reach falling straight down from `start_y`.
    /// Returns `start_y - 1` when it does not fit at `start_y` at all.
    pub fn project(&mut self, piece: &Piece, x: i32, start_y: i32) -> i32 {
        let mut y = start_y;
        while self.try_place(piece, CellStatus::Projection, x, y) {
            self.remove_piece(piece, x, y);
            y += 1;
        }
        y - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::grid::{GRID_HEIGHT, GRID_WIDTH};
    use crate::puzzle::piece::{Rotation, Shape, ALL_SHAPES};
    use macroquad::prelude::*;

    fn lock(grid: &mut Grid, x: i32, y: i32) {
        grid.set(
            x,
            y,
            Cell {
                status: CellStatus::Locked,
                color: GRAY,
            },
        );
    }

    #[test]
    fn place_then_remove_restores_grid() {
        let mut grid = Grid::default();
        lock(&mut grid, 0, 21);
        lock(&mut grid, 9, 10);
        for shape in ALL_SHAPES {
            for (x, y) in [(0, 0), (3, 5), (5, 17)] {
                let before = grid.clone();
                let piece = shape.template();
                assert!(grid.try_place(&piece, CellStatus::Locked, x, y));
                assert_ne!(grid, before);
                grid.remove_piece(&piece, x, y);
                assert_eq!(grid, before, "{shape:?} at ({x}, {y})");
            }
        }
    }

    #[test]
    fn failed_placement_rolls_back_partial_writes() {
        let mut grid = Grid::default();
        // I spans (x..x+4, y+2); block its last cell.
        lock(&mut grid, 6, 7);
        let before = grid.clone();
        assert!(!grid.try_place(&Shape::I.template(), CellStatus::Locked, 3, 5));
        assert_eq!(grid, before);
    }

    #[test]
    fn walls_and_floor_block_placement() {
        let mut grid = Grid::default();
        let piece = Shape::I.template();
        assert!(!grid.try_place(&piece, CellStatus::Locked, -1, 0));
        assert!(!grid.try_place(&piece, CellStatus::Locked, GRID_WIDTH as i32 - 3, 0));
        assert!(!grid.try_place(&piece, CellStatus::Locked, 0, GRID_HEIGHT as i32 - 2));
        assert!(grid.try_place(&piece, CellStatus::Locked, 0, GRID_HEIGHT as i32 - 3));
    }

    #[test]
    fn projection_cells_do_not_block() {
        let mut grid = Grid::default();
        let piece = Shape::O.template();
        assert!(grid.try_place(&piece, CellStatus::Projection, 3, 0));
        assert!(grid.try_place(&piece, CellStatus::Locked, 3, 0));
    }

    #[test]
    fn project_lands_on_floor_and_stacks() {
        let mut grid = Grid::default();
        let piece = Shape::O.template();
        let before = grid.clone();
        // O occupies local rows 1..=2, so it rests with its anchor 3 above the floor.
        let landing = grid.project(&piece, 3, 0);
        assert_eq!(landing, GRID_HEIGHT as i32 - 3);
        assert_eq!(grid, before);

        lock(&mut grid, 4, 15);
        assert_eq!(grid.project(&piece, 3, 0), 12);
    }

    #[test]
    fn project_returns_maximal_valid_row() {
        let mut grid = Grid::default();
        for x in 0..GRID_WIDTH as i32 {
            lock(&mut grid, x, 21 - (x % 4));
        }
        for shape in ALL_SHAPES {
            let mut piece = shape.template();
            piece.rotate(Rotation::Right);
            for x in -1..GRID_WIDTH as i32 {
                if !grid.fits(&piece, x, 0) {
                    continue;
                }
                let landing = grid.project(&piece, x, 0);
                assert!(grid.fits(&piece, x, landing));
                assert!(!grid.fits(&piece, x, landing + 1));
            }
        }
    }

    #[test]
    fn project_below_blocked_start_returns_row_above() {
        let mut grid = Grid::default();
        let piece = Shape::T.template();
        for x in 0..GRID_WIDTH as i32 {
            lock(&mut grid, x, 6);
        }
        assert_eq!(grid.project(&piece, 3, 5), 4);
    }
}
