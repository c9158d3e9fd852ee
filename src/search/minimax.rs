use crate::board::{Board, Player};
use crate::search::eval::{available_positions, status, terminal_score, TIE_SCORE};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A candidate decision. Terminal leaves carry no position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub position: Option<usize>,
    pub score: i32,
}

impl Move {
    pub const fn terminal(score: i32) -> Self { Self { position: None, score } }

    pub const fn at(position: usize, score: i32) -> Self { Self { position: Some(position), score } }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Some(p) => write!(f, "position {} score {}", p, self.score),
            None => write!(f, "position none score {}", self.score),
        }
    }
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub bestmove: Option<usize>,
    pub score: i32,
    pub nodes: u64,
}

/// Exhaustive minimax over the remaining game tree. No pruning, no caching.
///
/// `nodes` counts minimax invocations (the root included) and accumulates
/// across `best_move` calls until `search` or `reset_nodes` clears it.
#[derive(Default, Debug)]
pub struct Searcher {
    pub(crate) nodes: u64,
}

impl Searcher {
    pub fn new() -> Self { Self::default() }

    pub fn nodes(&self) -> u64 { self.nodes }

    pub fn reset_nodes(&mut self) { self.nodes = 0; }

    /// Root search with a fresh node count.
    pub fn search(&mut self, board: &mut Board, to_move: Player) -> SearchResult {
        self.nodes = 0;
        let best = self.best_move(board, to_move);
        log::debug!("search {} to_move={} -> {} nodes={}", board.to_compact(), to_move, best, self.nodes);
        SearchResult { bestmove: best.position, score: best.score, nodes: self.nodes }
    }

    /// Best move for `to_move` assuming optimal replies. The board is marked and
    /// unmarked in place and is identical to its input when this returns.
    pub fn best_move(&mut self, board: &mut Board, to_move: Player) -> Move {
        self.nodes += 1;
        if let Some(score) = terminal_score(status(board)) {
            return Move::terminal(score);
        }

        let mut candidates: Vec<Move> = Vec::with_capacity(9);
        for pos in available_positions(board) {
            board.mark(pos, to_move);
            let score = self.best_move(board, to_move.opponent()).score;
            board.unmark(pos);
            candidates.push(Move::at(pos, score));
        }

        // A non-terminal board always has an empty cell, so candidates is never empty here.
        debug_assert!(!candidates.is_empty(), "in-progress board {} has no moves", board.to_compact());
        select(&candidates, to_move).unwrap_or(Move::terminal(TIE_SCORE))
    }
}

/// First candidate with the strictly best score for `player`: highest for the
/// maximizer, lowest for the minimizer. Earlier (lower index) candidates win ties.
pub fn select(candidates: &[Move], player: Player) -> Option<Move> {
    let mut iter = candidates.iter().copied();
    let mut best = iter.next()?;
    for m in iter {
        let better = if player.is_maximizing() { m.score > best.score } else { m.score < best.score };
        if better { best = m; }
    }
    Some(best)
}

/// One-shot search with a throwaway `Searcher`.
pub fn best_move(board: &mut Board, to_move: Player) -> Move {
    Searcher::default().best_move(board, to_move)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_keeps_first_of_equal_scores() {
        let moves = [Move::at(1, 0), Move::at(3, 10), Move::at(5, 10), Move::at(7, -10)];
        assert_eq!(select(&moves, Player::Ai), Some(Move::at(3, 10)));
        assert_eq!(select(&moves, Player::Human), Some(Move::at(7, -10)));
        let ties = [Move::at(2, 0), Move::at(4, 0)];
        assert_eq!(select(&ties, Player::Human), Some(Move::at(2, 0)));
        assert_eq!(select(&[], Player::Ai), None);
    }
}
