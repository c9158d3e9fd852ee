use crate::search::eval::GameStatus;
use thiserror::Error;

/// Errors raised by the drivers around the search: parsing boards, applying
/// moves and protocol commands. The evaluator and searcher themselves never fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("position {position} is out of bounds (must be 0-8)")]
    InvalidPosition { position: usize },

    #[error("invalid move: position {position} is already occupied")]
    Occupied { position: usize },

    #[error("game already over: {status}")]
    GameOver { status: GameStatus },

    #[error("board must have 9 cells, got {got} in '{context}'")]
    InvalidBoardLength { got: usize, context: String },

    #[error("invalid character '{character}' at cell {position} in '{context}'")]
    InvalidCellCharacter { character: char, position: usize, context: String },

    #[error("invalid player '{input}' (expected 'ai', 'human', 'x' or 'o')")]
    InvalidPlayer { input: String },

    #[error("invalid seat '{input}' (expected 'engine' or 'random')")]
    InvalidSeat { input: String },

    #[error("unknown command '{command}'")]
    UnknownCommand { command: String },

    #[error("missing argument for '{command}'")]
    MissingArgument { command: String },

    #[error("invalid argument '{value}' for '{command}'")]
    InvalidArgument { command: String, value: String },
}

pub type Result<T> = std::result::Result<T, Error>;
