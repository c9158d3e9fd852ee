use crate::board::{Board, Player};
use crate::search::eval::{available_positions, status, GameStatus};
use serde::Serialize;

// Make/unmake perft. A finished game has no moves, so it contributes nothing
// past the ply it ended on.
pub fn perft(board: &mut Board, to_move: Player, depth: u32) -> u64 {
    if depth == 0 { return 1; }
    if status(board).is_terminal() { return 0; }
    let mut nodes = 0u64;
    for pos in available_positions(board) {
        board.mark(pos, to_move);
        nodes += perft(board, to_move.opponent(), depth - 1);
        board.unmark(pos);
    }
    nodes
}

/// Outcome totals over every complete game reachable from a position.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameCount {
    pub ai_wins: u64,
    pub human_wins: u64,
    pub ties: u64,
}

impl GameCount {
    pub fn total(&self) -> u64 { self.ai_wins + self.human_wins + self.ties }
}

pub fn count_games(board: &mut Board, to_move: Player) -> GameCount {
    let mut acc = GameCount::default();
    count_into(board, to_move, &mut acc);
    acc
}

fn count_into(board: &mut Board, to_move: Player, acc: &mut GameCount) {
    match status(board) {
        GameStatus::Won(Player::Ai) => acc.ai_wins += 1,
        GameStatus::Won(Player::Human) => acc.human_wins += 1,
        GameStatus::Tie => acc.ties += 1,
        GameStatus::InProgress => {
            for pos in available_positions(board) {
                board.mark(pos, to_move);
                count_into(board, to_move.opponent(), acc);
                board.unmark(pos);
            }
        }
    }
}
