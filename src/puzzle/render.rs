use macroquad::prelude::*;

use super::game::GameState;
use super::grid::{CellStatus, HIDDEN_ROWS};
use super::piece::Shape;
use crate::backend::Canvas;

pub const WINDOW_WIDTH: i32 = 420;
pub const WINDOW_HEIGHT: i32 = 450;
pub const BLOCK_SIZE: f32 = 20.0;

const BACKGROUND: Color = Color::new(0.96, 0.96, 0.96, 1.0);
const LABEL_SIZE: f32 = 20.0;
/// Rows between consecutive pieces in the queue preview.
const PREVIEW_SPACING: f32 = 4.0;

struct Layout {
    well_x: f32,
    well_y: f32,
    well_w: f32,
    well_h: f32,
}

impl Layout {
    fn for_game(game: &GameState) -> Self {
        let grid = game.grid();
        let well_w = grid.width() as f32 * BLOCK_SIZE;
        let well_h = (grid.height() - HIDDEN_ROWS) as f32 * BLOCK_SIZE;
        Layout {
            well_x: (WINDOW_WIDTH as f32 - well_w) / 2.0,
            well_y: (WINDOW_HEIGHT as f32 - well_h) / 2.0,
            well_w,
            well_h,
        }
    }
}

pub fn draw_game(game: &GameState, canvas: &mut impl Canvas) {
    let layout = Layout::for_game(game);
    canvas.clear(BACKGROUND);
    draw_well(game, &layout, canvas);
    draw_stats(game, canvas);
    draw_hold(game, &layout, canvas);
    draw_queue(game, &layout, canvas);
}

fn draw_well(game: &GameState, layout: &Layout, canvas: &mut impl Canvas) {
    let grid = game.grid();
    for y in HIDDEN_ROWS..grid.height() {
        for (x, cell) in grid.row(y).iter().enumerate() {
            let px = layout.well_x + x as f32 * BLOCK_SIZE;
            let py = layout.well_y + (y - HIDDEN_ROWS) as f32 * BLOCK_SIZE;
            match cell.status {
                CellStatus::Empty => {}
                CellStatus::Locked => canvas.draw_cell(px, py, BLOCK_SIZE, cell.color),
                CellStatus::Projection => canvas.draw_ghost(px, py, BLOCK_SIZE, cell.color),
            }
        }
    }
    canvas.outline_rect(layout.well_x, layout.well_y, layout.well_w, layout.well_h, BLACK);
}

fn draw_stats(game: &GameState, canvas: &mut impl Canvas) {
    let stats = game.stats();
    let rows = [
        ("Score:", stats.score),
        ("Time:", stats.time / 60),
        ("Dropped:", stats.dropped),
    ];
    for (i, (label, value)) in rows.iter().enumerate() {
        let y = 120.0 + i as f32 * 45.0;
        canvas.draw_text(label, 10.0, y, LABEL_SIZE, RED);
        canvas.draw_text(&(value % 100_000).to_string(), 10.0, y + 20.0, LABEL_SIZE, BLACK);
    }
}

fn draw_shape(shape: Shape, x: f32, y: f32, color: Color, canvas: &mut impl Canvas) {
    for cell in shape.template().cells {
        canvas.draw_cell(
            x + cell.x as f32 * BLOCK_SIZE,
            y + cell.y as f32 * BLOCK_SIZE,
            BLOCK_SIZE,
            color,
        );
    }
}

fn draw_hold(game: &GameState, layout: &Layout, canvas: &mut impl Canvas) {
    if let Some(shape) = game.hold() {
        let color = if game.can_swap() { shape.color() } else { LIGHTGRAY };
        let x = layout.well_x - 10.0 - 4.0 * BLOCK_SIZE;
        draw_shape(shape, x, layout.well_y, color, canvas);
    }
}

fn draw_queue(game: &GameState, layout: &Layout, canvas: &mut impl Canvas) {
    let x = layout.well_x + layout.well_w + 10.0;
    for (i, shape) in game.preview().enumerate() {
        let y = layout.well_y + i as f32 * PREVIEW_SPACING * BLOCK_SIZE;
        draw_shape(shape, x, y, shape.color(), canvas);
    }
}
