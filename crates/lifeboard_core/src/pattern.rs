//! Named starting patterns, placed in the middle of a board.

use std::fmt;
use std::str::FromStr;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Share of cells alive in a `Random` board.
const RANDOM_DENSITY: f64 = 0.25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Pattern {
    Empty,
    Block,
    Blinker,
    Toad,
    Beacon,
    #[default]
    Glider,
    Random,
}

impl Pattern {
    pub const ALL: [Pattern; 7] = [
        Pattern::Empty,
        Pattern::Block,
        Pattern::Blinker,
        Pattern::Toad,
        Pattern::Beacon,
        Pattern::Glider,
        Pattern::Random,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Pattern::Empty => "empty",
            Pattern::Block => "block",
            Pattern::Blinker => "blinker",
            Pattern::Toad => "toad",
            Pattern::Beacon => "beacon",
            Pattern::Glider => "glider",
            Pattern::Random => "random",
        }
    }

    /// Live cells as `(x, y)` offsets from the shape's top-left corner.
    fn shape(self) -> &'static [(u32, u32)] {
        match self {
            Pattern::Empty | Pattern::Random => &[],
            Pattern::Block => &[(0, 0), (1, 0), (0, 1), (1, 1)],
            Pattern::Blinker => &[(0, 0), (1, 0), (2, 0)],
            Pattern::Toad => &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
            Pattern::Beacon => &[
                (0, 0),
                (1, 0),
                (0, 1),
                (1, 1),
                (2, 2),
                (3, 2),
                (2, 3),
                (3, 3),
            ],
            Pattern::Glider => &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
        }
    }

    /// Produces a `width * height` buffer holding this pattern.
    ///
    /// Shapes are centred and clipped to the board. `seed` only affects
    /// `Random`; without one the generator is seeded from entropy.
    pub fn seed_cells(self, width: u32, height: u32, seed: Option<u64>) -> Vec<u8> {
        let mut cells = vec![0u8; width as usize * height as usize];

        if self == Pattern::Random {
            let mut rng = match seed {
                Some(s) => ChaCha8Rng::seed_from_u64(s),
                None => ChaCha8Rng::from_entropy(),
            };
            for cell in cells.iter_mut() {
                *cell = u8::from(rng.gen_bool(RANDOM_DENSITY));
            }
            return cells;
        }

        let shape = self.shape();
        let shape_w = shape.iter().map(|&(x, _)| x + 1).max().unwrap_or(0);
        let shape_h = shape.iter().map(|&(_, y)| y + 1).max().unwrap_or(0);
        let off_x = width.saturating_sub(shape_w) / 2;
        let off_y = height.saturating_sub(shape_h) / 2;

        for &(dx, dy) in shape {
            let (x, y) = (off_x + dx, off_y + dy);
            if x < width && y < height {
                cells[(y * width + x) as usize] = 1;
            }
        }
        cells
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pattern {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Pattern::ALL
            .into_iter()
            .find(|p| p.name() == wanted)
            .ok_or_else(|| EngineError::UnknownPattern(s.to_string()))
    }
}
