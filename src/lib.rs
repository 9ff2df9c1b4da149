pub mod board;
pub mod error;
pub mod game;
pub mod position;
pub mod settings;
pub mod ui;

pub use board::{Board, Cell, CellState};
pub use error::GameError;
pub use game::{Action, Direction, Game, GameState};
pub use position::Position;
pub use settings::{Difficulty, Settings};
