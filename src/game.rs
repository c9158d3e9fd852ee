use crate::board::{Board, Player};
use crate::error::{Error, Result};
use crate::search::eval::{status, GameStatus};
use crate::search::minimax::{SearchResult, Searcher};
use serde::{Deserialize, Serialize};

/// Turn driver: owns the board and the side to move for one game.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    to_move: Player,
    first: Player,
    history: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub start: String,
    pub first: Player,
    pub moves: Vec<usize>,
    pub status: GameStatus,
    pub board: String,
}

impl Game {
    pub fn new(first: Player) -> Self { Self::from_position(Board::new(), first) }

    pub fn from_position(board: Board, to_move: Player) -> Self {
        Self { board, to_move, first: to_move, history: Vec::new() }
    }

    pub fn board(&self) -> &Board { &self.board }

    pub fn to_move(&self) -> Player { self.to_move }

    pub fn history(&self) -> &[usize] { &self.history }

    pub fn status(&self) -> GameStatus { status(&self.board) }

    /// Applies a move for the side to move and hands the turn over.
    pub fn play(&mut self, pos: usize) -> Result<GameStatus> {
        let st = self.status();
        if st.is_terminal() { return Err(Error::GameOver { status: st }); }
        self.board.place(pos, self.to_move)?;
        self.history.push(pos);
        self.to_move = self.to_move.opponent();
        let st = self.status();
        if st.is_terminal() { log::info!("game over after {} plies: {}", self.history.len(), st); }
        Ok(st)
    }

    /// Searches for the side to move and plays the chosen position.
    pub fn play_engine(&mut self, searcher: &mut Searcher) -> Result<SearchResult> {
        let st = self.status();
        if st.is_terminal() { return Err(Error::GameOver { status: st }); }
        let res = searcher.search(&mut self.board, self.to_move);
        let pos = res.bestmove.ok_or(Error::GameOver { status: st })?;
        self.play(pos)?;
        Ok(res)
    }

    pub fn record(&self) -> GameRecord {
        let mut start = self.board;
        for &pos in &self.history { start.unmark(pos); }
        GameRecord {
            start: start.to_compact(),
            first: self.first,
            moves: self.history.clone(),
            status: self.status(),
            board: self.board.to_compact(),
        }
    }
}

impl Default for Game {
    // Ai opens by default.
    fn default() -> Self { Self::new(Player::Ai) }
}
