use rand::rngs::StdRng;
use rand::SeedableRng;

use super::grid::{CellStatus, Grid};
use super::piece::{Piece, Rotation, Shape};
use super::queue::PieceQueue;
use crate::config::PuzzleConfig;

/// Discrete per-frame commands, highest priority first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    HardDrop,
    MoveRight,
    MoveLeft,
    RotateCw,
    RotateCcw,
    Hold,
}

/// Everything the simulation reads from the backend for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub action: Option<Action>,
    /// Down is held this frame.
    pub soft_drop: bool,
    pub restart: bool,
    /// The window is minimized; the clocks do not advance.
    pub minimized: bool,
}

impl FrameInput {
    pub fn action(action: Action) -> Self {
        FrameInput {
            action: Some(action),
            ..FrameInput::default()
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MatchStats {
    /// Lines cleared.
    pub score: u32,
    /// Frames played.
    pub time: u32,
    /// Pieces locked.
    pub dropped: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Spawning,
    Falling,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    Falling,
    Locked { lines: u32 },
    /// The match ended and was reset; carries the finished match's stats.
    ToppedOut(MatchStats),
    Restarted,
}

pub struct GameState {
    grid: Grid,
    queue: PieceQueue,
    piece: Piece,
    x: i32,
    y: i32,
    projection_y: Option<i32>,
    hold: Option<Shape>,
    can_swap: bool,
    gravity: u32,
    gravity_period: u32,
    phase: Phase,
    stats: MatchStats,
}

impl GameState {
    pub fn new(config: &PuzzleConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        GameState {
            grid: Grid::default(),
            queue: PieceQueue::new(config.preview_len, rng),
            piece: Shape::I.template(),
            x: 0,
            y: 0,
            projection_y: None,
            hold: None,
            can_swap: true,
            gravity: 0,
            gravity_period: config.gravity_period.max(1),
            phase: Phase::Spawning,
            stats: MatchStats::default(),
        }
    }

    /// Starts a new match. The random sequence continues from where it was.
    pub fn reset(&mut self) {
        self.grid.clear();
        self.queue.clear();
        self.projection_y = None;
        self.hold = None;
        self.can_swap = true;
        self.gravity = 0;
        self.phase = Phase::Spawning;
        self.stats = MatchStats::default();
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn stats(&self) -> MatchStats {
        self.stats
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn hold(&self) -> Option<Shape> {
        self.hold
    }

    pub fn can_swap(&self) -> bool {
        self.can_swap
    }

    pub fn preview(&self) -> impl Iterator<Item = Shape> + '_ {
        self.queue.preview()
    }

    /// The falling piece and its anchor, once one has spawned.
    pub fn active(&self) -> Option<(&Piece, i32, i32)> {
        match self.phase {
            Phase::Falling => Some((&self.piece, self.x, self.y)),
            Phase::Spawning => None,
        }
    }

    pub fn projection_row(&self) -> Option<i32> {
        self.projection_y
    }

    fn spawn_x(&self) -> i32 {
        (self.grid.width() as i32 - 4) / 2
    }

    /// Advances the simulation by one frame.
    pub fn step(&mut self, input: &FrameInput) -> StepOutcome {
        if input.restart {
            self.reset();
            return StepOutcome::Restarted;
        }

        match self.phase {
            Phase::Spawning => {
                self.piece = self.queue.dequeue();
                self.x = self.spawn_x();
                self.y = 0;
                self.can_swap = true;
                self.gravity = 0;
                self.phase = Phase::Falling;
            }
            Phase::Falling => {
                self.grid.remove_piece(&self.piece, self.x, self.y);
                if let Some(row) = self.projection_y.take() {
                    self.grid.remove_piece(&self.piece, self.x, row);
                }
            }
        }

        if let Some(action) = input.action {
            self.apply(action);
        }
        if input.soft_drop && self.grid.fits(&self.piece, self.x, self.y + 1) {
            self.y += 1;
            self.gravity = 0;
        }

        self.y += (self.gravity / self.gravity_period) as i32;
        self.gravity %= self.gravity_period;

        let landing = self.grid.project(&self.piece, self.x, self.y);
        if landing >= self.y {
            self.grid
                .try_place(&self.piece, CellStatus::Projection, self.x, landing);
            self.projection_y = Some(landing);
        }

        let outcome = if self
            .grid
            .try_place(&self.piece, CellStatus::Locked, self.x, self.y)
        {
            StepOutcome::Falling
        } else if self.y == 0 {
            let finished = self.stats;
            self.reset();
            return StepOutcome::ToppedOut(finished);
        } else {
            self.lock()
        };

        if !input.minimized {
            self.gravity += 1;
            self.stats.time += 1;
        }
        outcome
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::HardDrop => {
                self.y = self.grid.project(&self.piece, self.x, self.y);
                self.gravity = self.gravity_period;
            }
            Action::MoveRight => self.shift(1),
            Action::MoveLeft => self.shift(-1),
            Action::RotateCw => self.rotate(Rotation::Right),
            Action::RotateCcw => self.rotate(Rotation::Left),
            Action::Hold => self.swap_hold(),
        }
    }

    fn shift(&mut self, dx: i32) {
        if self.grid.fits(&self.piece, self.x + dx, self.y) {
            self.x += dx;
        }
    }

    fn rotate(&mut self, rotation: Rotation) {
        self.piece.rotate(rotation);
        if !self.grid.fits(&self.piece, self.x, self.y) {
            self.piece.rotate(rotation.inverse());
        }
    }

    fn swap_hold(&mut self) {
        if !self.can_swap {
            return;
        }
        self.piece = match self.hold.replace(self.piece.shape) {
            Some(held) => held.template(),
            None => self.queue.dequeue(),
        };
        self.x = self.spawn_x();
        self.y = 0;
        self.gravity = 0;
        self.can_swap = false;
    }

    /// The piece could not move to its current row: settle it one row up.
    fn lock(&mut self) -> StepOutcome {
        self.stats.dropped += 1;
        self.y -= 1;
        self.grid
            .try_place(&self.piece, CellStatus::Locked, self.x, self.y);
        let lines = self.grid.clear_lines();
        self.stats.score += lines;
        self.phase = Phase::Spawning;
        StepOutcome::Locked { lines }
    }
}
