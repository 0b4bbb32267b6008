use anyhow::Result;
use clap::Parser;
use macroquad::prelude::*;
use ::rand::rngs::StdRng;
use ::rand::SeedableRng;

use grid_puzzles::backend::{poll_field_input, MacroquadCanvas};
use grid_puzzles::config::FieldConfig;
use grid_puzzles::minefield::render::{draw_field, window_size, CELL_SIZE};
use grid_puzzles::minefield::{FieldEvent, Minefield, RevealOutcome};

#[derive(Debug, Parser)]
#[command(name = "minesweeper")]
#[command(about = "Mine-clearing puzzle")]
struct Cli {
    /// Columns, 4 to 30.
    #[arg(default_value_t = 9)]
    width: u32,
    /// Rows, 4 to 30.
    #[arg(default_value_t = 9)]
    height: u32,
    /// At least 1 and fewer than width * height.
    #[arg(default_value_t = 10)]
    mines: u32,
    #[arg(long)]
    seed: Option<u64>,
}

/// clap's first line, without the usage and `--help` hint that follow.
fn one_line(err: &clap::Error) -> String {
    let text = err.to_string();
    text.lines().next().unwrap_or_default().trim().to_owned()
}

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.use_stderr() => {
            eprintln!("{}", one_line(&err));
            std::process::exit(2);
        }
        Err(err) => err.exit(),
    };
    let config = FieldConfig::new(cli.width, cli.height, cli.mines)?;
    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let field = Minefield::new(config, rng);

    let (width, height) = window_size(&field);
    let conf = Conf {
        window_title: "Minesweeper".to_owned(),
        window_width: width,
        window_height: height,
        window_resizable: false,
        ..Default::default()
    };
    macroquad::Window::from_config(conf, run(field));
    Ok(())
}

async fn run(mut field: Minefield) {
    let mut canvas = MacroquadCanvas;
    println!("--NEW GAME--");

    loop {
        draw_field(&field, &mut canvas);

        match field.handle_input(&poll_field_input(CELL_SIZE)) {
            FieldEvent::Flagged { mines_to_flag } => println!("Mines to flag: {mines_to_flag}"),
            FieldEvent::Revealed(RevealOutcome::Detonated) => println!("Boom. Press F4 to play again."),
            FieldEvent::Revealed(RevealOutcome::Won) => println!("Field cleared. Press F4 to play again."),
            FieldEvent::Restarted => println!("--NEW GAME--"),
            FieldEvent::Revealed(_) | FieldEvent::Idle => {}
        }
        next_frame().await;
    }
}
