use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use macroquad::prelude::*;

use grid_puzzles::backend::{poll_puzzle_input, MacroquadCanvas};
use grid_puzzles::config::PuzzleConfig;
use grid_puzzles::puzzle::render::{draw_game, WINDOW_HEIGHT, WINDOW_WIDTH};
use grid_puzzles::puzzle::{GameState, StepOutcome};

#[derive(Debug, Parser)]
#[command(name = "blockpuzzle")]
#[command(about = "Falling-block puzzle")]
struct Cli {
    /// JSON file overriding gravity_period, preview_len or seed.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    seed: Option<u64>,
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Block Puzzle".to_owned(),
        window_width: WINDOW_WIDTH,
        window_height: WINDOW_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => PuzzleConfig::load(path)?,
        None => PuzzleConfig::default(),
    };
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    macroquad::Window::from_config(window_conf(), run(config));
    Ok(())
}

async fn run(config: PuzzleConfig) {
    let mut game = GameState::new(&config);
    let mut canvas = MacroquadCanvas;
    println!("--NEW GAME--");

    loop {
        match game.step(&poll_puzzle_input()) {
            StepOutcome::ToppedOut(stats) => {
                println!(
                    "Topped out: {} lines, {} pieces, {}s",
                    stats.score,
                    stats.dropped,
                    stats.time / 60
                );
                println!("--NEW GAME--");
            }
            StepOutcome::Restarted => println!("--NEW GAME--"),
            StepOutcome::Falling | StepOutcome::Locked { .. } => {}
        }
        draw_game(&game, &mut canvas);
        next_frame().await;
    }
}
