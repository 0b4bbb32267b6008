//! The falling-block puzzle: grid, pieces, queue, placement and the per-frame
//! state machine, plus the read-only render pass.

pub mod game;
pub mod grid;
pub mod piece;
pub mod placement;
pub mod queue;
pub mod render;

pub use game::{Action, FrameInput, GameState, MatchStats, Phase, StepOutcome};
pub use grid::{Cell, CellStatus, Grid, GRID_HEIGHT, GRID_WIDTH, HIDDEN_ROWS};
pub use piece::{Offset, Piece, Rotation, Shape, ALL_SHAPES};
pub use queue::PieceQueue;
