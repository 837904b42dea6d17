//! Terminal game loop.
//!
//! Reads move codes from stdin, renders the board after every accepted
//! move, and offers a rematch that reuses the session's search cache.

use std::io::{self, BufRead, Write};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mnk::{Game, GameConfig};

#[derive(Parser, Debug)]
#[command(name = "mnk", about = "Play generalized tic-tac-toe against the computer")]
struct Args {
    /// Board width (columns).
    #[arg(long, default_value_t = 3)]
    width: usize,

    /// Board height (rows).
    #[arg(long, default_value_t = 3)]
    height: usize,

    /// Run length required to win.
    #[arg(long, default_value_t = 3)]
    win_count: usize,

    /// Let the computer (O) open the game.
    #[arg(long)]
    computer_first: bool,

    /// Play a few random opening marks for each side.
    #[arg(long)]
    random_openings: bool,

    /// Pin the RNG seed for reproducible fallback moves.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = GameConfig::new(args.width, args.height, args.win_count);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut cache = mnk::SearchCache::new();

    loop {
        let mut game = Game::with_cache(config, cache);
        if let Some(seed) = args.seed {
            game = game.with_seed(seed);
        }

        println!("{} in a row to win.", config.win_count);

        if args.random_openings {
            println!("Opening moves chosen randomly to make it interesting.");
            for _ in 0..3 {
                if game.is_over() {
                    break;
                }
                game.random_opening();
            }
            println!("{}", game.render());
        }

        if args.computer_first && !game.is_over() {
            println!("Computer moves first as O.");
            if game.computer_move() {
                println!("Computer moves perfectly.");
            } else {
                println!("Computer moves randomly.");
            }
            println!("{}", game.render());
        } else if !args.computer_first {
            println!("You move first as X.");
        }

        while !game.is_over() {
            print!("Enter move: ");
            io::stdout().flush()?;

            let Some(line) = lines.next() else {
                return Ok(());
            };
            match game.place_code(line?.trim()) {
                Ok(()) => println!("{}", game.render()),
                Err(reason) => println!("{reason}"),
            }
        }

        match game.winner() {
            Some(mark) => println!("Winner: {mark}"),
            None => println!("Draw"),
        }

        println!("Again (y/n):");
        let Some(line) = lines.next() else {
            return Ok(());
        };
        if !line?.trim().eq_ignore_ascii_case("y") {
            return Ok(());
        }

        // Carry the learned positions into the rematch.
        cache = game.into_cache();
    }
}
