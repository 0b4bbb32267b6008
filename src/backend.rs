//! Window-side collaborator: drawing primitives and input polling on top of
//! macroquad. Game code draws through [`Canvas`] so render passes can run
//! without a window.

use macroquad::prelude::*;

use crate::minefield::FieldInput;
use crate::puzzle::{Action, FrameInput};

pub const GHOST_ALPHA: f32 = 0.5;

pub trait Canvas {
    fn clear(&mut self, color: Color);
    /// One bevelled block with its top-left corner at `(x, y)`.
    fn draw_cell(&mut self, x: f32, y: f32, size: f32, color: Color);
    /// Translucent block used for the landing preview.
    fn draw_ghost(&mut self, x: f32, y: f32, size: f32, color: Color);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);
    fn outline_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);
    /// Text with its top-left corner at `(x, y)`.
    fn draw_text(&mut self, text: &str, x: f32, y: f32, size: f32, color: Color);
    fn draw_mine(&mut self, x: f32, y: f32, size: f32);
    fn draw_flag(&mut self, x: f32, y: f32, size: f32, tint: Color);
}

pub struct MacroquadCanvas;

impl Canvas for MacroquadCanvas {
    fn clear(&mut self, color: Color) {
        clear_background(color);
    }

    fn draw_cell(&mut self, x: f32, y: f32, size: f32, color: Color) {
        draw_snes_block(x, y, size, color);
    }

    fn draw_ghost(&mut self, x: f32, y: f32, size: f32, color: Color) {
        draw_rectangle(x, y, size, size, fade(color));
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        draw_rectangle(x, y, w, h, color);
    }

    fn outline_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        draw_rectangle_lines(x, y, w, h, 1.0, color);
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, size: f32, color: Color) {
        // macroquad positions text by its baseline.
        draw_text(text, x, y + size * 0.8, size, color);
    }

    fn draw_mine(&mut self, x: f32, y: f32, size: f32) {
        let (cx, cy) = (x + size / 2.0, y + size / 2.0);
        let r = size * 0.3;
        draw_line(cx - r * 1.4, cy, cx + r * 1.4, cy, 2.0, BLACK);
        draw_line(cx, cy - r * 1.4, cx, cy + r * 1.4, 2.0, BLACK);
        draw_circle(cx, cy, r, BLACK);
        draw_circle(cx - r * 0.35, cy - r * 0.35, r * 0.25, WHITE);
    }

    fn draw_flag(&mut self, x: f32, y: f32, size: f32, tint: Color) {
        let pole_x = x + size * 0.6;
        draw_line(pole_x, y + size * 0.15, pole_x, y + size * 0.85, 2.0, BLACK);
        draw_rectangle(x + size * 0.25, y + size * 0.8, size * 0.5, size * 0.08, BLACK);
        let red = Color::new(RED.r * tint.r, RED.g * tint.g, RED.b * tint.b, tint.a);
        draw_triangle(
            vec2(pole_x, y + size * 0.15),
            vec2(pole_x, y + size * 0.5),
            vec2(x + size * 0.15, y + size * 0.33),
            red,
        );
    }
}

pub fn fade(color: Color) -> Color {
    Color::new(color.r, color.g, color.b, color.a * GHOST_ALPHA)
}

fn draw_snes_block(x: f32, y: f32, size: f32, color: Color) {
    draw_rectangle(x, y, size, size, color);
    let highlight = Color::new(
        (color.r + 0.4).min(1.0),
        (color.g + 0.4).min(1.0),
        (color.b + 0.4).min(1.0),
        color.a,
    );
    let shadow = Color::new(
        (color.r * 0.5).max(0.0),
        (color.g * 0.5).max(0.0),
        (color.b * 0.5).max(0.0),
        color.a,
    );
    let border = size * 0.15;
    draw_rectangle(x, y, size, border, highlight);
    draw_rectangle(x, y, border, size, highlight);
    draw_rectangle(x, y + size - border, size, border, shadow);
    draw_rectangle(x + size - border, y, border, size, shadow);
}

/// A minimized window reports an empty framebuffer.
pub fn is_minimized() -> bool {
    screen_width() < 1.0 || screen_height() < 1.0
}

const ACTION_KEYS: [(KeyCode, Action); 6] = [
    (KeyCode::Space, Action::HardDrop),
    (KeyCode::Right, Action::MoveRight),
    (KeyCode::Left, Action::MoveLeft),
    (KeyCode::Up, Action::RotateCw),
    (KeyCode::RightShift, Action::RotateCcw),
    (KeyCode::C, Action::Hold),
];

pub const RESTART_KEY: KeyCode = KeyCode::F4;

/// The action bound to the first pressed key in [`ACTION_KEYS`] order.
fn first_action(pressed: impl Fn(KeyCode) -> bool) -> Option<Action> {
    ACTION_KEYS
        .iter()
        .find(|(key, _)| pressed(*key))
        .map(|&(_, action)| action)
}

pub fn poll_puzzle_input() -> FrameInput {
    FrameInput {
        action: first_action(is_key_pressed),
        soft_drop: is_key_down(KeyCode::Down),
        restart: is_key_pressed(RESTART_KEY),
        minimized: is_minimized(),
    }
}

pub fn poll_field_input(cell_size: f32) -> FieldInput {
    let (mx, my) = mouse_position();
    let cell = if mx >= 0.0 && my >= 0.0 {
        Some(((mx / cell_size) as usize, (my / cell_size) as usize))
    } else {
        None
    };
    let reveal = cell.filter(|_| is_mouse_button_released(MouseButton::Left));
    let flag = cell.filter(|_| reveal.is_none() && is_mouse_button_pressed(MouseButton::Right));
    FieldInput {
        reveal,
        flag,
        restart: is_key_pressed(RESTART_KEY),
    }
}
