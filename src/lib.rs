//! Two small real-time grid games sharing one rendering backend: a
//! falling-block puzzle and a mine-clearing puzzle.
//!
//! Game state lives in plain owned structs ([`puzzle::GameState`],
//! [`minefield::Minefield`]) that advance one frame at a time from decoded
//! input and are drawn by a separate read-only pass through
//! [`backend::Canvas`].

pub mod backend;
pub mod config;
pub mod minefield;
pub mod puzzle;
