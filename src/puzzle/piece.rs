use macroquad::prelude::*;

/// Position inside a piece's 5x5 local grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Offset {
    pub x: i32,
    pub y: i32,
}

impl Offset {
    pub const fn new(x: i32, y: i32) -> Self {
        Offset { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    I,
    J,
    L,
    O,
    T,
    S,
    Z,
}

pub const ALL_SHAPES: [Shape; 7] = [
    Shape::I,
    Shape::J,
    Shape::L,
    Shape::O,
    Shape::T,
    Shape::S,
    Shape::Z,
];

const fn o(x: i32, y: i32) -> Offset {
    Offset::new(x, y)
}

const SHAPE_CELLS: [[Offset; 4]; 7] = [
    [o(0, 2), o(1, 2), o(2, 2), o(3, 2)], // I
    [o(0, 1), o(0, 2), o(1, 2), o(2, 2)], // J
    [o(2, 1), o(0, 2), o(1, 2), o(2, 2)], // L
    [o(1, 1), o(2, 1), o(1, 2), o(2, 2)], // O
    [o(1, 1), o(0, 2), o(1, 2), o(2, 2)], // T
    [o(1, 1), o(2, 1), o(0, 2), o(1, 2)], // S
    [o(0, 1), o(1, 1), o(1, 2), o(2, 2)], // Z
];

const SHAPE_PIVOTS: [Offset; 7] = [
    o(2, 2), // I
    o(1, 2), // J
    o(1, 2), // L
    o(0, 0), // O (doesn't rotate)
    o(1, 2), // T
    o(1, 2), // S
    o(1, 2), // Z
];

const SHAPE_COLORS: [Color; 7] = [SKYBLUE, BLUE, ORANGE, YELLOW, PURPLE, GREEN, RED];

impl Shape {
    /// Fresh, unrotated copy of this shape's template.
    pub fn template(self) -> Piece {
        Piece {
            cells: SHAPE_CELLS[self as usize],
            pivot: SHAPE_PIVOTS[self as usize],
            color: SHAPE_COLORS[self as usize],
            shape: self,
        }
    }

    pub fn color(self) -> Color {
        SHAPE_COLORS[self as usize]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rotation {
    Left,
    Right,
}

impl Rotation {
    fn sign(self) -> i32 {
        match self {
            Rotation::Left => -1,
            Rotation::Right => 1,
        }
    }

    pub fn inverse(self) -> Rotation {
        match self {
            Rotation::Left => Rotation::Right,
            Rotation::Right => Rotation::Left,
        }
    }
}

/// An in-play copy of a shape template. Rotation rewrites `cells` in place;
/// the grid anchor is tracked by the owner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Piece {
    pub cells: [Offset; 4],
    pub pivot: Offset,
    pub color: Color,
    pub shape: Shape,
}

impl Piece {
    pub fn rotate(&mut self, rotation: Rotation) {
        if self.shape == Shape::O {
            return;
        }
        let d = rotation.sign();
        let Offset { x: px, y: py } = self.pivot;
        for cell in self.cells.iter_mut() {
            let (x, y) = (cell.x, cell.y);
            *cell = Offset::new(px - d * (y - py), py + d * (x - px));
        }
    }
}
