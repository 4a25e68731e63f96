pub mod board;
pub mod config;
pub mod error;
pub mod flag;
pub mod game;
pub mod generator;
pub mod outcome;
pub mod position;
pub mod reveal;

pub use board::{Board, Cell, MineAdjacency, Visibility};
pub use config::GameConfig;
pub use error::{GameError, Result};
pub use flag::toggle_flag;
pub use game::{Action, Game};
pub use generator::{generate, generate_with, CellPicker};
pub use outcome::{evaluate, Outcome};
pub use position::Position;
pub use reveal::{reveal, RevealOutcome};
