//! Primedle CLI
//!
//! Interactive terminal front end for the five-digit-prime guessing game.
//! Owns the session record between turns and renders the structured results
//! the library hands back.

use std::io::{self, BufRead, Write};

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use primedle::{GameSession, Outcome, SecretPool, MAX_ATTEMPTS};

const BANNER_TEXT: &str = include_str!("text/banner.txt");

#[derive(Parser)]
#[command(name = "primedle")]
#[command(about = "Guess the five-digit prime")]
#[command(version)]
struct Cli {
    /// Seed the random number generator for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
}

fn print_banner() {
    for line in BANNER_TEXT.lines().take(6) {
        println!("{}", line);
    }
}

fn print_help() {
    println!("{}", BANNER_TEXT);
}

fn print_board(game: &GameSession) {
    println!();
    if game.attempts().is_empty() {
        println!("No guesses yet.");
    } else {
        for (i, attempt) in game.attempts().iter().enumerate() {
            println!("Guess {}: {} → {}", i + 1, attempt.guess, attempt.feedback);
        }
    }
    println!(
        "{} of {} attempts used, {} hint(s) taken.",
        game.attempts().len(),
        MAX_ATTEMPTS,
        game.hints_used()
    );
    println!();
}

/// Submit one guess; returns true when the game reached a terminal outcome.
fn play_guess(game: &mut GameSession, guess: &str, pool: &SecretPool) -> bool {
    match game.submit_guess(guess, pool) {
        Ok((feedback, outcome)) => {
            println!("Guess {}: {} → {}", game.attempts().len(), guess, feedback);
            match outcome {
                Outcome::Ongoing => {
                    println!("{} attempts left.", game.attempts_left());
                    false
                }
                Outcome::Won => {
                    println!();
                    println!(
                        "🎉 You guessed the number! {} in {} attempts.",
                        game.secret(),
                        game.attempts().len()
                    );
                    println!();
                    true
                }
                Outcome::Lost => {
                    println!();
                    println!("Out of attempts! The prime was {}.", game.secret());
                    println!();
                    true
                }
            }
        }
        Err(err) => {
            println!("{}", err);
            false
        }
    }
}

fn run_interactive(mut rng: StdRng) {
    print_banner();
    println!();

    println!("Sieving the five-digit range...");
    let pool = SecretPool::new();
    println!("{} candidate primes.", pool.len());
    println!();
    println!("Type a 5-digit prime to guess, or 'help' for commands.");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut session: Option<GameSession> = None;

    loop {
        if session.is_none() {
            let secret = pool.choose(&mut rng).expect("candidate pool is empty");
            session = Some(GameSession::new(secret));
            println!();
            println!(
                "New game: I picked a 5-digit prime. You have {} guesses.",
                MAX_ATTEMPTS
            );
        }

        print!("> ");
        stdout.flush().unwrap();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).unwrap() == 0 {
            break;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        match parts[0].to_lowercase().as_str() {
            "help" | "h" | "?" => {
                print_help();
            }
            "quit" | "exit" | "q" => {
                println!("Goodbye!");
                break;
            }
            "board" | "b" => {
                let game = session.as_ref().expect("active session");
                print_board(game);
            }
            "new" | "restart" => {
                println!("Abandoning this prime and drawing a fresh one.");
                session = None;
            }
            "hint" => {
                let game = session.as_mut().expect("active session");
                match game.request_hint(&mut rng) {
                    Ok(hint) => println!("{}", hint),
                    Err(err) => println!("{}", err),
                }
            }
            token if token.bytes().all(|b| b.is_ascii_digit()) => {
                let game = session.as_mut().expect("active session");
                if play_guess(game, token, &pool) {
                    session = None;
                }
            }
            other => {
                println!("Unknown command: {}", other);
                println!("Type 'help' for available commands.");
            }
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    run_interactive(rng);
}
