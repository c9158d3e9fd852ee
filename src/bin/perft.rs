use clap::Parser;
use std::time::Instant;
use tictac::perft::{count_games, perft};
use tictac::{Board, Player};

#[derive(Parser, Debug)]
#[command(name = "perft", about = "Perft driver for the tic-tac-toe move tree")]
struct Args {
    /// Search depth in plies
    #[arg(value_name = "DEPTH")]
    depth: u32,
    /// Board text (e.g. "X__/_O_/___") or "empty"
    #[arg(value_name = "BOARD", default_value = "empty")]
    board: String,
    /// Side to move at the root
    #[arg(long, default_value = "ai")]
    first: Player,
    /// Also enumerate every complete game and its outcome
    #[arg(long, default_value_t = false)]
    games: bool,
    /// Report elapsed time and NPS
    #[arg(long, default_value_t = false)]
    nps: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let mut board = if args.board == "empty" { Board::new() } else { args.board.parse::<Board>()? };

    let t0 = Instant::now();
    let nodes = perft(&mut board, args.first, args.depth);
    let dt = t0.elapsed().as_secs_f64();
    if args.nps { println!("nodes: {nodes} elapsed: {:.3}s nps: {:.1}", dt, nodes as f64 / dt.max(f64::EPSILON)); }
    else { println!("nodes: {nodes}"); }

    if args.games {
        let c = count_games(&mut board, args.first);
        println!("games: {} ai_wins: {} human_wins: {} ties: {}", c.total(), c.ai_wins, c.human_wins, c.ties);
    }
    Ok(())
}
