//! Startup configuration for both games.
//!
//! The block puzzle reads an optional JSON file; the minefield takes its
//! dimensions from the command line. Both are validated before any window or
//! game state exists.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

pub const DEFAULT_GRAVITY_PERIOD: u32 = 50;
pub const DEFAULT_PREVIEW_LEN: usize = 5;
pub const MAX_PREVIEW_LEN: usize = 6;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PuzzleConfig {
    /// Frames between automatic one-row drops.
    pub gravity_period: u32,
    /// Number of upcoming pieces shown next to the well.
    pub preview_len: usize,
    pub seed: Option<u64>,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        PuzzleConfig {
            gravity_period: DEFAULT_GRAVITY_PERIOD,
            preview_len: DEFAULT_PREVIEW_LEN,
            seed: None,
        }
    }
}

impl PuzzleConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        let config: PuzzleConfig = serde_json::from_str(text).context("invalid puzzle config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("in {}", path.display()))
    }

    pub fn validate(&self) -> Result<()> {
        if self.gravity_period == 0 {
            bail!("gravity_period must be at least 1");
        }
        if !(1..=MAX_PREVIEW_LEN).contains(&self.preview_len) {
            bail!("preview_len must be between 1 and {MAX_PREVIEW_LEN}");
        }
        Ok(())
    }
}

pub const MIN_SIDE: u32 = 4;
pub const MAX_SIDE: u32 = 30;

/// Minefield dimensions. Only [`FieldConfig::new`] and `Default` build one,
/// so `mines` is always below `width * height`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldConfig {
    width: u32,
    height: u32,
    mines: u32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            width: 9,
            height: 9,
            mines: 10,
        }
    }
}

impl FieldConfig {
    pub fn new(width: u32, height: u32, mines: u32) -> Result<Self> {
        let sides = MIN_SIDE..=MAX_SIDE;
        if !sides.contains(&width) || !sides.contains(&height) {
            bail!("Invalid parameters: width and height must be between {MIN_SIDE} and {MAX_SIDE}");
        }
        if mines == 0 || mines >= width * height {
            bail!(
                "Invalid parameters: mine count must be at least 1 and less than {}",
                width * height
            );
        }
        Ok(FieldConfig {
            width,
            height,
            mines,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn mines(&self) -> u32 {
        self.mines
    }

    pub fn cells(&self) -> usize {
        (self.width * self.height) as usize
    }
}
