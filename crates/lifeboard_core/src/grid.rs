//! Flat cell buffer with dimensions.
//!
//! Index `i` maps to row `i / width`, column `i % width`. The buffer holds
//! `0` (dead) or `1` (alive) and always has exactly `width * height` cells.

use std::fmt;
use std::slice::ChunksExact;

use crate::cell::CellState;
use crate::error::{EngineError, Result};

/// Smallest playable side length.
pub const MIN_SIDE: u32 = 3;

/// Validated board dimensions. Holding one proves both sides are at least
/// [`MIN_SIDE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardSize {
    width: u32,
    height: u32,
}

impl BoardSize {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        validate_dimensions(width, height)?;
        Ok(Self { width, height })
    }

    pub fn width(self) -> u32 {
        self.width
    }

    pub fn height(self) -> u32 {
        self.height
    }

    pub fn cell_count(self) -> usize {
        self.width as usize * self.height as usize
    }

    /// One larger in each dimension.
    pub fn grown(self) -> Self {
        Self {
            width: self.width.saturating_add(1),
            height: self.height.saturating_add(1),
        }
    }

    /// One smaller in each dimension, never below the minimum.
    pub fn shrunk(self) -> Self {
        Self {
            width: self.width.saturating_sub(1).max(MIN_SIDE),
            height: self.height.saturating_sub(1).max(MIN_SIDE),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<u8>,
}

impl Grid {
    /// Creates a grid, all dead unless `initial` is given.
    pub fn create(width: u32, height: u32, initial: Option<&[u8]>) -> Result<Self> {
        validate_dimensions(width, height)?;
        let len = width as usize * height as usize;

        let cells = match initial {
            Some(values) => {
                if values.len() != len {
                    return Err(EngineError::LengthMismatch {
                        expected: len,
                        actual: values.len(),
                    });
                }
                if let Some(&bad) = values.iter().find(|&&v| v > 1) {
                    return Err(EngineError::InvalidCellValue(bad));
                }
                values.to_vec()
            }
            None => vec![0; len],
        };

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Builds a grid from nested rows, as a presentation layer or test would
    /// describe a board.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self> {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, Vec::len) as u32;
        validate_dimensions(width, height)?;

        let mut cells = Vec::with_capacity(width as usize * height as usize);
        for row in rows {
            if row.len() != width as usize {
                return Err(EngineError::LengthMismatch {
                    expected: width as usize,
                    actual: row.len(),
                });
            }
            cells.extend(row.into_iter().map(u8::from));
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> BoardSize {
        BoardSize {
            width: self.width,
            height: self.height,
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, index: u32) -> Result<u8> {
        self.cells
            .get(index as usize)
            .copied()
            .ok_or(EngineError::IndexOutOfRange {
                index,
                len: self.cells.len(),
            })
    }

    pub fn set(&mut self, index: u32, value: u8) -> Result<()> {
        let len = self.cells.len();
        let state = CellState::try_from(value)?;
        let cell = self
            .cells
            .get_mut(index as usize)
            .ok_or(EngineError::IndexOutOfRange { index, len })?;
        *cell = state.into();
        Ok(())
    }

    /// Index of column `x`, row `y`; `None` outside the board.
    pub fn index_of(&self, x: u32, y: u32) -> Option<u32> {
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// `(column, row)` of an index; `None` outside the board.
    pub fn coords(&self, index: u32) -> Option<(u32, u32)> {
        ((index as usize) < self.cells.len()).then(|| (index % self.width, index / self.width))
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Row slices, top to bottom.
    pub fn rows(&self) -> ChunksExact<'_, u8> {
        self.cells.chunks_exact(self.width as usize)
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c == 1).count()
    }

    pub(crate) fn cells_mut(&mut self) -> &mut Vec<u8> {
        &mut self.cells
    }
}

fn validate_dimensions(width: u32, height: u32) -> Result<()> {
    if width < MIN_SIDE || height < MIN_SIDE {
        return Err(EngineError::InvalidDimension { width, height });
    }
    Ok(())
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &cell in row {
                write!(f, "{}", CellState::from(cell == 1))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
