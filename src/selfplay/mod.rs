use crate::board::Player;
use crate::error::{Error, Result};
use crate::game::{Game, GameRecord};
use crate::perft::GameCount;
use crate::search::eval::{available_positions, GameStatus};
use crate::search::minimax::Searcher;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Who picks moves for a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Seat {
    Engine,
    Random,
}

impl FromStr for Seat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "engine" | "minimax" => Ok(Seat::Engine),
            "random" => Ok(Seat::Random),
            other => Err(Error::InvalidSeat { input: other.to_string() }),
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seat::Engine => write!(f, "engine"),
            Seat::Random => write!(f, "random"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct SelfPlayParams {
    pub games: usize,
    pub first: Player,
    pub ai: Seat,
    pub human: Seat,
    pub seed: u64,
}

impl Default for SelfPlayParams {
    fn default() -> Self {
        Self { games: 100, first: Player::Ai, ai: Seat::Engine, human: Seat::Random, seed: 42 }
    }
}

impl SelfPlayParams {
    pub fn seat(&self, player: Player) -> Seat {
        match player {
            Player::Ai => self.ai,
            Player::Human => self.human,
        }
    }
}

pub fn generate_games(params: &SelfPlayParams) -> Result<Vec<GameRecord>> {
    let mut rng = SmallRng::seed_from_u64(params.seed);
    let mut searcher = Searcher::default();
    let mut games = Vec::with_capacity(params.games);
    for gi in 0..params.games {
        let record = play_game(params, &mut searcher, &mut rng)?;
        log::debug!("game {} moves={:?} status={}", gi, record.moves, record.status);
        games.push(record);
    }
    Ok(games)
}

pub fn play_game(params: &SelfPlayParams, searcher: &mut Searcher, rng: &mut SmallRng) -> Result<GameRecord> {
    let mut game = Game::new(params.first);
    while !game.status().is_terminal() {
        match params.seat(game.to_move()) {
            Seat::Engine => { game.play_engine(searcher)?; }
            Seat::Random => {
                let pos = select_random_move(&game, rng);
                game.play(pos)?;
            }
        }
    }
    Ok(game.record())
}

fn select_random_move(game: &Game, rng: &mut SmallRng) -> usize {
    let moves = available_positions(game.board());
    // Only called on in-progress boards, which always have an empty cell.
    moves[rng.gen_range(0..moves.len())]
}

pub fn summarize(games: &[GameRecord]) -> GameCount {
    let mut count = GameCount::default();
    for g in games {
        match g.status {
            GameStatus::Won(Player::Ai) => count.ai_wins += 1,
            GameStatus::Won(Player::Human) => count.human_wins += 1,
            GameStatus::Tie => count.ties += 1,
            GameStatus::InProgress => {}
        }
    }
    count
}
