use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::config::FieldConfig;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MineCell {
    pub uncovered: bool,
    pub mine: bool,
    pub flagged: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldStatus {
    Playing,
    Lost,
    Won,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Finished field, out of bounds, flagged or already uncovered.
    Ignored,
    Uncovered(usize),
    Detonated,
    Won,
}

/// Clicks decoded from the pointer this frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldInput {
    pub reveal: Option<(usize, usize)>,
    pub flag: Option<(usize, usize)>,
    pub restart: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldEvent {
    Idle,
    Revealed(RevealOutcome),
    Flagged { mines_to_flag: i64 },
    Restarted,
}

pub struct Minefield {
    width: usize,
    height: usize,
    mines: usize,
    cells: Vec<MineCell>,
    flagged: u32,
    remaining: usize,
    mines_placed: bool,
    status: FieldStatus,
    rng: StdRng,
}

fn neighbors(x: usize, y: usize, width: usize, height: usize) -> impl Iterator<Item = (usize, usize)> {
    let xs = x.saturating_sub(1)..=(x + 1).min(width - 1);
    xs.flat_map(move |nx| {
        (y.saturating_sub(1)..=(y + 1).min(height - 1)).map(move |ny| (nx, ny))
    })
    .filter(move |&(nx, ny)| (nx, ny) != (x, y))
}

impl Minefield {
    pub fn new(config: FieldConfig, rng: StdRng) -> Self {
        let width = config.width() as usize;
        let height = config.height() as usize;
        let mines = config.mines() as usize;
        Minefield {
            width,
            height,
            mines,
            cells: vec![MineCell::default(); width * height],
            flagged: 0,
            remaining: config.cells() - mines,
            mines_placed: false,
            status: FieldStatus::Playing,
            rng,
        }
    }

    pub fn seeded(config: FieldConfig, seed: u64) -> Self {
        Minefield::new(config, StdRng::seed_from_u64(seed))
    }

    /// Covers every cell again. Mines are re-placed on the next first reveal.
    pub fn reset(&mut self) {
        self.cells.fill(MineCell::default());
        self.flagged = 0;
        self.remaining = self.cells.len() - self.mines;
        self.mines_placed = false;
        self.status = FieldStatus::Playing;
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn status(&self) -> FieldStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status != FieldStatus::Playing
    }

    pub fn mines_placed(&self) -> bool {
        self.mines_placed
    }

    /// Covered cells without a mine still to be uncovered.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn flagged(&self) -> u32 {
        self.flagged
    }

    /// Negative once more flags are down than there are mines.
    pub fn mines_to_flag(&self) -> i64 {
        self.mines as i64 - self.flagged as i64
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<&MineCell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Mines in the 3x3 block centred on `(x, y)`.
    pub fn neighbor_mines(&self, x: usize, y: usize) -> u8 {
        let own = self.cell(x, y).map_or(0, |c| c.mine as u8);
        own + neighbors(x, y, self.width, self.height)
            .filter(|&(nx, ny)| self.cells[ny * self.width + nx].mine)
            .count() as u8
    }

    /// Scatters the configured number of mines, keeping the clicked cell and
    /// its neighbours clear. On crowded fields only the clicked cell is kept
    /// clear.
    pub fn place_mines(&mut self, x: usize, y: usize) {
        let total = self.width * self.height;
        let mines = self.mines;
        let clicked = y * self.width + x;
        let crowded = mines + 8 >= total;

        let mut candidates: Vec<usize> = (0..total)
            .filter(|&i| {
                if crowded {
                    i != clicked
                } else {
                    (i % self.width).abs_diff(x) > 1 || (i / self.width).abs_diff(y) > 1
                }
            })
            .collect();
        candidates.shuffle(&mut self.rng);
        for &i in candidates.iter().take(mines) {
            self.cells[i].mine = true;
        }
        self.mines_placed = true;
    }

    /// Lays out mines explicitly instead of at random on the first reveal.
    pub fn set_mines(&mut self, positions: &[(usize, usize)]) {
        self.reset();
        for &(x, y) in positions {
            if let Some(i) = self.index(x, y) {
                self.cells[i].mine = true;
            }
        }
        self.mines = self.cells.iter().filter(|c| c.mine).count();
        self.remaining = self.cells.len() - self.mines;
        self.mines_placed = true;
    }

    pub fn reveal(&mut self, x: usize, y: usize) -> RevealOutcome {
        let Some(i) = self.index(x, y) else {
            return RevealOutcome::Ignored;
        };
        if self.is_finished() || self.cells[i].uncovered || self.cells[i].flagged {
            return RevealOutcome::Ignored;
        }
        if !self.mines_placed {
            self.place_mines(x, y);
        }
        if self.cells[i].mine {
            self.status = FieldStatus::Lost;
            return RevealOutcome::Detonated;
        }

        let mut uncovered = 0;
        let mut pending = vec![(x, y)];
        while let Some((cx, cy)) = pending.pop() {
            let cell = &mut self.cells[cy * self.width + cx];
            if cell.uncovered || cell.flagged {
                continue;
            }
            cell.uncovered = true;
            self.remaining -= 1;
            uncovered += 1;
            if self.neighbor_mines(cx, cy) == 0 {
                pending.extend(neighbors(cx, cy, self.width, self.height));
            }
        }

        if self.remaining == 0 {
            self.status = FieldStatus::Won;
            return RevealOutcome::Won;
        }
        RevealOutcome::Uncovered(uncovered)
    }

    /// Returns whether the flag changed.
    pub fn toggle_flag(&mut self, x: usize, y: usize) -> bool {
        if self.is_finished() {
            return false;
        }
        let Some(i) = self.index(x, y) else {
            return false;
        };
        let cell = &mut self.cells[i];
        if cell.uncovered {
            return false;
        }
        cell.flagged = !cell.flagged;
        if cell.flagged {
            self.flagged += 1;
        } else {
            self.flagged -= 1;
        }
        true
    }

    pub fn handle_input(&mut self, input: &FieldInput) -> FieldEvent {
        if input.restart {
            self.reset();
            return FieldEvent::Restarted;
        }
        if let Some((x, y)) = input.reveal {
            return FieldEvent::Revealed(self.reveal(x, y));
        }
        if let Some((x, y)) = input.flag {
            if self.toggle_flag(x, y) {
                return FieldEvent::Flagged {
                    mines_to_flag: self.mines_to_flag(),
                };
            }
        }
        FieldEvent::Idle
    }
}
