//! The mine-clearing puzzle: lazily mined field, flood reveal, flags.

pub mod field;
pub mod render;

pub use field::{FieldEvent, FieldInput, FieldStatus, MineCell, Minefield, RevealOutcome};
