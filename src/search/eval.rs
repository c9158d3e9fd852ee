use crate::board::{Board, Cell, Player};
use serde::{Deserialize, Serialize};
use std::fmt;

// Terminal scores from the maximizing (Ai) side. Depth independent.
pub const WIN_SCORE: i32 = 10;
pub const LOSS_SCORE: i32 = -10;
pub const TIE_SCORE: i32 = 0;

pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8], // rows
    [0, 3, 6], [1, 4, 7], [2, 5, 8], // columns
    [0, 4, 8], [2, 4, 6],            // diagonals
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    Won(Player),
    Tie,
    InProgress,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool { self != GameStatus::InProgress }

    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Won(p) => Some(p),
            _ => None,
        }
    }

    /// Token used by the text protocol.
    pub fn as_str(self) -> &'static str {
        match self {
            GameStatus::Won(Player::Ai) => "ai_won",
            GameStatus::Won(Player::Human) => "human_won",
            GameStatus::Tie => "tie",
            GameStatus::InProgress => "in_progress",
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Won(p) => write!(f, "{} won", p),
            GameStatus::Tie => write!(f, "tie"),
            GameStatus::InProgress => write!(f, "in progress"),
        }
    }
}

pub fn has_won(board: &Board, player: Player) -> bool {
    let target = Cell::Marked(player);
    let cells = board.cells();
    WINNING_LINES.iter().any(|line| line.iter().all(|&i| cells[i] == target))
}

// Human is checked first; a board won by both sides is unreachable and not validated.
pub fn status(board: &Board) -> GameStatus {
    if has_won(board, Player::Human) { return GameStatus::Won(Player::Human); }
    if has_won(board, Player::Ai) { return GameStatus::Won(Player::Ai); }
    if board.is_full() { return GameStatus::Tie; }
    GameStatus::InProgress
}

/// Empty cell indices in ascending order. Move ordering in the search (and
/// therefore its tie-break) depends on this order.
pub fn available_positions(board: &Board) -> Vec<usize> {
    board.cells().iter().enumerate().filter(|(_, c)| c.is_empty()).map(|(i, _)| i).collect()
}

pub fn terminal_score(status: GameStatus) -> Option<i32> {
    match status {
        GameStatus::Won(Player::Ai) => Some(WIN_SCORE),
        GameStatus::Won(Player::Human) => Some(LOSS_SCORE),
        GameStatus::Tie => Some(TIE_SCORE),
        GameStatus::InProgress => None,
    }
}
