use crate::Position;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("Position {0:?} is out of bounds")]
    OutOfBounds(Position),
    #[error("Invalid mine count ({mines}) for board size {rows}x{cols}, need 0 < mines < cells")]
    InvalidMineCount {
        rows: usize,
        cols: usize,
        mines: usize,
    },
    #[error("Mine at {0:?} was listed more than once")]
    DuplicateMine(Position),
}

pub type Result<T> = std::result::Result<T, GameError>;
