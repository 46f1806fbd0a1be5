pub mod automaton;
pub mod cell;
pub mod config;
pub mod error;
pub mod grid;
pub mod pattern;

pub use automaton::Automaton;
pub use cell::CellState;
pub use error::{EngineError, Result};
pub use grid::{BoardSize, Grid, MIN_SIDE};
pub use pattern::Pattern;
