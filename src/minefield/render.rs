use macroquad::prelude::*;

use super::field::{FieldStatus, Minefield};
use crate::backend::Canvas;

pub const CELL_SIZE: f32 = 20.0;

const NUMBER_COLORS: [Color; 8] = [BLUE, LIME, RED, DARKBLUE, MAROON, VIOLET, BLACK, DARKGRAY];

pub fn window_size(field: &Minefield) -> (i32, i32) {
    (
        (field.width() as f32 * CELL_SIZE) as i32,
        (field.height() as f32 * CELL_SIZE) as i32,
    )
}

/// Lost fields show every cell; won fields show a greyed flag on each mine.
pub fn draw_field(field: &Minefield, canvas: &mut impl Canvas) {
    canvas.clear(LIGHTGRAY);
    let lost = field.status() == FieldStatus::Lost;
    let won = field.status() == FieldStatus::Won;

    for y in 0..field.height() {
        for x in 0..field.width() {
            let Some(cell) = field.cell(x, y) else {
                continue;
            };
            let (px, py) = (x as f32 * CELL_SIZE, y as f32 * CELL_SIZE);
            if cell.uncovered || lost {
                if cell.mine {
                    canvas.draw_mine(px, py, CELL_SIZE);
                } else {
                    let n = field.neighbor_mines(x, y);
                    if n > 0 {
                        let inset = CELL_SIZE / if n == 1 { 3.0 } else { 4.0 };
                        canvas.draw_text(
                            &n.to_string(),
                            px + inset,
                            py + CELL_SIZE / 20.0,
                            CELL_SIZE,
                            NUMBER_COLORS[(n - 1) as usize],
                        );
                    }
                }
            } else {
                canvas.fill_rect(px, py, CELL_SIZE, CELL_SIZE, GRAY);
                if cell.flagged || won {
                    canvas.draw_flag(px, py, CELL_SIZE, if won { LIGHTGRAY } else { WHITE });
                }
            }
            canvas.outline_rect(px, py, CELL_SIZE, CELL_SIZE, DARKGRAY);
        }
    }
}
