use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::time::Instant;
use tictac::game::Game;
use tictac::protocol::ProtocolEngine;
use tictac::search::eval::available_positions;
use tictac::{Board, GameStatus, Player, Searcher};

#[derive(Parser, Debug)]
#[command(author, version, about = "Play tic-tac-toe against an exhaustive minimax engine", long_about = None)]
struct Args {
    /// Operation mode: 'watch' (engine plays both sides), 'human' (you play O), 'protocol' (stdin commands)
    #[arg(long, default_value = "watch")]
    mode: String,

    /// Side to move first: 'ai' or 'human'
    #[arg(long, default_value = "ai")]
    first: Player,

    /// Starting board, e.g. "XX_/OO_/___"
    #[arg(long)]
    board: Option<String>,

    /// Print the finished game record as JSON
    #[arg(long)]
    json: bool,
}

fn get_human_move(board: &Board) -> Result<usize> {
    let legal = available_positions(board);
    loop {
        print!("Enter your move (0-8): ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            anyhow::bail!("stdin closed before a move was entered");
        }
        match input.trim().parse::<usize>() {
            Ok(pos) if legal.contains(&pos) => return Ok(pos),
            Ok(_) => println!("Illegal move! Free cells: {:?}", legal),
            Err(_) => println!("Invalid move format! Enter a cell index like '4'"),
        }
    }
}

fn play(args: &Args, human_seat: bool) -> Result<Game> {
    let board = match args.board.as_deref() {
        Some(s) => s.parse::<Board>().context("invalid --board")?,
        None => Board::new(),
    };
    let mut game = Game::from_position(board, args.first);
    let mut searcher = Searcher::default();

    println!("{}", game.board());
    while game.status() == GameStatus::InProgress {
        if human_seat && game.to_move() == Player::Human {
            let pos = get_human_move(game.board())?;
            game.play(pos)?;
        } else {
            let t0 = Instant::now();
            let res = game.play_engine(&mut searcher)?;
            let dt = t0.elapsed();
            println!("{} plays: position {} score {}", game.to_move().opponent(),
                res.bestmove.map_or_else(|| "none".to_string(), |p| p.to_string()), res.score);
            println!("nodes {} elapsed {:.3}s", res.nodes, dt.as_secs_f64());
        }
        println!("{}", game.board());
    }

    match game.status() {
        GameStatus::Won(Player::Human) => println!("Human won!"),
        GameStatus::Won(Player::Ai) => println!("AI won!"),
        _ => println!("Tie game."),
    }
    Ok(game)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let game = match args.mode.to_lowercase().as_str() {
        "watch" | "w" => play(&args, false)?,
        "human" | "h" => play(&args, true)?,
        "protocol" | "p" => {
            ProtocolEngine::new().run_loop()?;
            return Ok(());
        }
        other => anyhow::bail!("Invalid mode '{}': use 'watch', 'human' or 'protocol'", other),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&game.record())?);
    }
    Ok(())
}
