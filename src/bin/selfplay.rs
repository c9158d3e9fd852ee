use clap::Parser;
use tictac::selfplay::{generate_games, summarize, Seat, SelfPlayParams};
use tictac::Player;

#[derive(Parser, Debug)]
#[command(name = "tictac-selfplay", about = "Play batches of games between engine and random seats")]
struct Args {
    #[arg(long, default_value_t = 100)]
    games: usize,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Seat for the X side: 'engine' or 'random'
    #[arg(long, default_value = "engine")]
    ai: Seat,
    /// Seat for the O side: 'engine' or 'random'
    #[arg(long, default_value = "random")]
    human: Seat,
    #[arg(long, default_value = "ai")]
    first: Player,
    /// Print every game record as one JSON line
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let a = Args::parse();
    let params = SelfPlayParams { games: a.games, first: a.first, ai: a.ai, human: a.human, seed: a.seed };
    eprintln!("Playing {} games (ai={}, human={}, first={}, seed={})", a.games, a.ai, a.human, a.first, a.seed);
    let games = generate_games(&params)?;
    if a.json {
        for g in &games { println!("{}", serde_json::to_string(g)?); }
    }
    let s = summarize(&games);
    println!("games: {} ai_wins: {} human_wins: {} ties: {}", s.total(), s.ai_wins, s.human_wins, s.ties);
    Ok(())
}
