use crate::Position;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Position {0:?} is out of bounds")]
    OutOfBounds(Position),
    #[error("Board dimensions {width}x{height} must both be at least 1")]
    EmptyBoard { width: u32, height: u32 },
    #[error("Too many mines ({mines}) for board size {width}x{height}")]
    TooManyMines { width: u32, height: u32, mines: u32 },
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },
    #[error("{field} must be between {min} and {max}, got {input}")]
    NumberTooLarge {
        field: &'static str,
        input: String,
        min: u32,
        max: u32,
    },
    #[error("Expected a number, got {0:?}")]
    InvalidNumber(String),
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
