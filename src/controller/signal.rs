use std::sync::Arc;

use lifeboard_core::{BoardSize, Grid};

/// Request to set one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edit {
    pub index: u32,
    pub value: u8,
}

impl Edit {
    pub fn new(index: u32, value: u8) -> Self {
        Self { index, value }
    }

    /// What a pointer dragged over a cell paints.
    pub fn alive(index: u32) -> Self {
        Self { index, value: 1 }
    }
}

/// Input to the controller. Every collaborator talks to it through these.
#[derive(Debug, Clone, PartialEq)]
pub enum Signal {
    SizeChosen {
        size: BoardSize,
        initial: Option<Vec<u8>>,
    },
    DragBegin,
    CellHovered(Edit),
    /// Pointer released or left the board.
    DragEnd,
    TogglePlay,
    Shutdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameCause {
    Resized,
    Edited,
    Ticked,
}

/// One emitted board state.
///
/// `generation` never decreases within one `epoch`; a new epoch starts at 0.
#[derive(Debug, Clone)]
pub struct Frame {
    pub grid: Arc<Grid>,
    pub generation: u64,
    pub epoch: u64,
    pub cause: FrameCause,
}

impl Frame {
    pub fn population(&self) -> usize {
        self.grid.population()
    }
}

/// Display state that changes independently of frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Status {
    pub size: Option<BoardSize>,
    pub is_playing: bool,
    pub generation: u64,
    pub epoch: u64,
}

impl Status {
    pub fn play_label(&self) -> &'static str {
        if self.is_playing {
            "Pause"
        } else {
            "Play"
        }
    }
}
