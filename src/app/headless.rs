//! Runs the board without a terminal UI, printing each generation.

use anyhow::Result;
use std::io::Write;

use crate::controller::{Controller, FrameCause};
use lifeboard_core::config::LifeConfig;
use lifeboard_core::BoardSize;

/// Plays the configured board until `generations` ticks have been printed
/// or the board dies. Returns the last generation reached.
pub async fn run_headless(
    config: &LifeConfig,
    generations: u64,
    out: &mut impl Write,
) -> Result<u64> {
    let size = BoardSize::new(config.board.width, config.board.height)?;
    let cells = config
        .board
        .pattern
        .seed_cells(size.width(), size.height(), config.board.seed);

    let mut playback = config.playback.clone();
    playback.start_playing = false;
    let (handle, mut frames, task) = Controller::spawn(&playback);
    handle.choose_size_with(size, cells)?;

    let mut last = 0;
    if let Some(frame) = frames.recv().await {
        writeln!(out, "Generation {}", frame.generation)?;
        write!(out, "{}", frame.grid)?;
        if frame.grid.population() > 0 && generations > 0 {
            handle.toggle_play()?;
            while let Some(frame) = frames.recv().await {
                if frame.cause != FrameCause::Ticked {
                    continue;
                }
                last = frame.generation;
                writeln!(out, "Generation {}", frame.generation)?;
                write!(out, "{}", frame.grid)?;
                if last >= generations || frame.grid.population() == 0 {
                    break;
                }
            }
        }
    }

    tracing::info!(generation = last, "Headless run finished");
    handle.shutdown()?;
    task.await??;
    Ok(last)
}
