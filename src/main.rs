//! Command-line runner: simulate N games and tally the wins.
//!
//! ## Usage
//!
//! ```text
//! frost-fairies <n_players> [n_games]
//! ```
//!
//! Every turn of every game is rendered to stderr; the final
//! `"{wins} wins / {games} games"` line goes to stdout.

use std::env;
use std::process;

use frost_fairies::{report, GameEngine, GameRng, Outcome};

struct Args {
    n_players: usize,
    n_games: u32,
}

fn parse_args(args: &[String]) -> Result<Args, String> {
    let n_players = match args.first() {
        Some(raw) => match raw.parse::<usize>() {
            Ok(n) if n >= 1 => n,
            _ => return Err(format!("invalid player count: {raw:?} (expected a positive integer)")),
        },
        None => return Err("missing player count".to_string()),
    };

    let n_games = match args.get(1) {
        Some(raw) => match raw.parse::<u32>() {
            Ok(n) if n >= 1 => n,
            _ => return Err(format!("invalid game count: {raw:?} (expected a positive integer)")),
        },
        None => 1,
    };

    if args.len() > 2 {
        return Err(format!("unexpected argument: {:?}", args[2]));
    }

    Ok(Args { n_players, n_games })
}

fn main() {
    let raw: Vec<String> = env::args().skip(1).collect();
    let args = match parse_args(&raw) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!("usage: frost-fairies <n_players> [n_games]");
            process::exit(2);
        }
    };

    let mut seeder = GameRng::from_entropy();
    let mut wins = 0u32;

    for _ in 0..args.n_games {
        let mut engine = GameEngine::new(args.n_players, seeder.gen_seed());
        for snapshot in &mut engine {
            eprintln!("{}\n", report::render(&snapshot));
        }
        if engine.outcome() == Some(Outcome::Win) {
            wins += 1;
        }
    }

    println!("{}", report::tally(wins, args.n_games));
}
