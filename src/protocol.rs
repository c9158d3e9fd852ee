use std::io::{self, BufRead, Write};
use crate::board::{Board, Player};
use crate::error::{Error, Result};
use crate::game::Game;
use crate::search::minimax::Searcher;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Text(String),
    Quit,
}

/// Line-oriented engine loop. Commands:
/// `new`, `position <board> [ai|human]`, `play <index>`, `go`, `status`, `show`, `quit`.
pub struct ProtocolEngine {
    game: Game,
    searcher: Searcher,
}

impl Default for ProtocolEngine {
    fn default() -> Self { Self::new() }
}

impl ProtocolEngine {
    pub fn new() -> Self { Self { game: Game::default(), searcher: Searcher::default() } }

    pub fn game(&self) -> &Game { &self.game }

    fn cmd_new(&mut self) -> Response {
        self.game = Game::default();
        Response::Text("ok".to_string())
    }

    fn cmd_position(&mut self, args: &str) -> Result<Response> {
        let mut tokens = args.split_whitespace();
        let board: Board = tokens.next()
            .ok_or_else(|| Error::MissingArgument { command: "position".to_string() })?
            .parse()?;
        // Without an explicit side, Ai is assumed to have opened.
        let to_move = match tokens.next() {
            Some(p) => p.parse()?,
            None if board.marks(Player::Ai) > board.marks(Player::Human) => Player::Human,
            None => Player::Ai,
        };
        self.game = Game::from_position(board, to_move);
        Ok(Response::Text("ok".to_string()))
    }

    fn cmd_play(&mut self, args: &str) -> Result<Response> {
        let arg = args.split_whitespace().next()
            .ok_or_else(|| Error::MissingArgument { command: "play".to_string() })?;
        let pos: usize = arg.parse()
            .map_err(|_| Error::InvalidArgument { command: "play".to_string(), value: arg.to_string() })?;
        let st = self.game.play(pos)?;
        Ok(Response::Text(format!("status {}", st.as_str())))
    }

    // Searches a scratch copy; `go` never changes the position.
    fn cmd_go(&mut self) -> Response {
        let mut board = *self.game.board();
        let res = self.searcher.search(&mut board, self.game.to_move());
        let best = res.bestmove.map_or_else(|| "none".to_string(), |p| p.to_string());
        Response::Text(format!("bestmove {} score {} nodes {}", best, res.score, res.nodes))
    }

    pub fn handle_line(&mut self, line: &str) -> Result<Response> {
        let line = line.trim();
        let (cmd, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        match cmd {
            "new" => Ok(self.cmd_new()),
            "position" => self.cmd_position(rest),
            "play" => self.cmd_play(rest),
            "go" => Ok(self.cmd_go()),
            "status" => Ok(Response::Text(format!("status {}", self.game.status().as_str()))),
            "show" => Ok(Response::Text(self.game.board().to_string().trim_end().to_string())),
            "quit" => Ok(Response::Quit),
            other => Err(Error::UnknownCommand { command: other.to_string() }),
        }
    }

    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() { continue; }
            match self.handle_line(&line) {
                Ok(Response::Text(s)) => writeln!(out, "{}", s)?,
                Ok(Response::Quit) => break,
                Err(e) => writeln!(out, "error {}", e)?,
            }
            out.flush()?;
        }
        Ok(())
    }

    pub fn run_loop(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run(stdin.lock(), stdout.lock())
    }
}
