//! Command line flags layered over the TOML config.

use anyhow::Result;
use clap::Parser;
use lifeboard_core::config::LifeConfig;
use lifeboard_core::{BoardSize, Pattern};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Mode to run the board in
    #[arg(short, long, value_enum, default_value = "interactive")]
    pub mode: Mode,

    /// Custom config file path
    #[arg(short, long, default_value = "lifeboard.toml")]
    pub config: String,

    /// Board width in cells (at least 3)
    #[arg(long)]
    pub width: Option<u32>,

    /// Board height in cells (at least 3)
    #[arg(long)]
    pub height: Option<u32>,

    /// Starting pattern (empty, block, blinker, toad, beacon, glider, random)
    #[arg(short, long)]
    pub pattern: Option<Pattern>,

    /// Seed for the random pattern
    #[arg(long)]
    pub seed: Option<u64>,

    /// Milliseconds between generations while playing
    #[arg(long)]
    pub interval_ms: Option<u64>,

    /// Generations to print in headless mode
    #[arg(short, long, default_value_t = 20)]
    pub generations: u64,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Interactive,
    Headless,
}

impl Args {
    /// Overrides `config` with every flag that was given, then checks the
    /// resulting board size.
    pub fn apply(&self, config: &mut LifeConfig) -> Result<()> {
        if let Some(width) = self.width {
            config.board.width = width;
        }
        if let Some(height) = self.height {
            config.board.height = height;
        }
        if let Some(pattern) = self.pattern {
            config.board.pattern = pattern;
        }
        if self.seed.is_some() {
            config.board.seed = self.seed;
        }
        if let Some(ms) = self.interval_ms {
            config.playback.tick_interval_ms = ms;
        }
        // Reject undersized boards here so the controller never sees one.
        BoardSize::new(config.board.width, config.board.height)?;
        Ok(())
    }
}
