//! The automaton engine: one grid plus a generation counter.
//!
//! Neighbours are counted with bounded edges: positions outside the board
//! are simply absent, never wrapped.

use crate::error::Result;
use crate::grid::Grid;

#[derive(Debug, Clone)]
pub struct Automaton {
    grid: Grid,
    next: Vec<u8>,
    ticks: u64,
}

impl Automaton {
    pub fn new(width: u32, height: u32, initial: Option<&[u8]>) -> Result<Self> {
        Ok(Self::from_grid(Grid::create(width, height, initial)?))
    }

    pub fn from_grid(grid: Grid) -> Self {
        Self {
            next: vec![0; grid.len()],
            grid,
            ticks: 0,
        }
    }

    /// Advances one generation.
    ///
    /// The next state is computed entirely into a scratch buffer before it
    /// is swapped in, so no cell is read after it was written this tick.
    pub fn tick(&mut self) {
        let w = self.grid.width() as usize;
        let h = self.grid.height() as usize;
        let cur = self.grid.cells();
        self.next.resize(cur.len(), 0);

        for y in 0..h {
            let top = y.saturating_sub(1);
            let bottom = (y + 1).min(h - 1);
            for x in 0..w {
                let left = x.saturating_sub(1);
                let right = (x + 1).min(w - 1);

                let mut block = 0u8;
                for ny in top..=bottom {
                    let row = ny * w;
                    block += cur[row + left..=row + right].iter().sum::<u8>();
                }
                let me = cur[y * w + x];
                self.next[y * w + x] = next_state(me, block - me);
            }
        }

        std::mem::swap(self.grid.cells_mut(), &mut self.next);
        self.ticks += 1;
    }

    /// Sets one cell. Does not advance the generation.
    pub fn set_cell(&mut self, index: u32, value: u8) -> Result<()> {
        self.grid.set(index, value)
    }

    pub fn get(&self, index: u32) -> Result<u8> {
        self.grid.get(index)
    }

    /// True while at least one cell is alive.
    pub fn is_alive(&self) -> bool {
        self.grid.cells().contains(&1)
    }

    pub fn cells(&self) -> &[u8] {
        self.grid.cells()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    pub fn generation(&self) -> u64 {
        self.ticks
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }
}

#[inline]
fn next_state(current: u8, neighbours: u8) -> u8 {
    match (current, neighbours) {
        (1, 2) | (1, 3) => 1,
        (0, 3) => 1,
        _ => 0,
    }
}
