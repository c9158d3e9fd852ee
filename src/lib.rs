// Exhaustive minimax tic-tac-toe engine
pub mod board;
pub mod error;
pub mod game;
pub mod perft;
pub mod protocol;
pub mod search;
pub mod selfplay;

pub use board::{Board, Cell, Player};
pub use error::{Error, Result};
pub use search::eval::GameStatus;
pub use search::minimax::{best_move, Move, SearchResult, Searcher};
