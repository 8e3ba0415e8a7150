//! Igo-Sensei: play a small-board teaching game in the terminal.
//!
//! ## Usage
//!
//! - `igo-sensei` - Show a demo
//! - `igo-sensei play` - Play against the random opponent
//! - `igo-sensei sgf <file>` - Load a game record and show the final position
//!
//! Set `RUST_LOG=debug` to see captures, ko and ladder verdicts.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::info;

use igo_sensei::board::{Board, Color, Rules};
use igo_sensei::constants::{DEFAULT_HANDICAP, DEFAULT_SIZE, MAX_WIDTH};
use igo_sensei::coord::{coord_to_point, move_to_coord};
use igo_sensei::playout::{RandomOpponent, place_handicap};
use igo_sensei::position::{Move, MoveRecord};
use igo_sensei::score::Score;
use igo_sensei::sgf;

/// Igo-Sensei: a Go teaching engine for small boards
#[derive(Parser)]
#[command(name = "igo-sensei")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play as Black against the random opponent
    Play {
        /// Board size (NxN)
        #[arg(long, default_value_t = DEFAULT_SIZE)]
        size: usize,
        /// Handicap stones placed at random for you
        #[arg(long, default_value_t = DEFAULT_HANDICAP)]
        handicap: usize,
        /// Seed for the opponent and handicap placement
        #[arg(long)]
        seed: Option<u64>,
        /// Reject self-capture instead of allowing it
        #[arg(long)]
        no_self_capture: bool,
    },
    /// Load an SGF game record and print the final position
    Sgf {
        /// Path to the .sgf file
        file: PathBuf,
    },
    /// Run a short demo game between two random players
    Demo,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Play {
            size,
            handicap,
            seed,
            no_self_capture,
        }) => {
            if !(2..=MAX_WIDTH).contains(&size) {
                bail!("board size must be between 2 and {MAX_WIDTH}, got {size}");
            }
            let rules = if no_self_capture {
                Rules::default().without_self_capture()
            } else {
                Rules::default()
            };
            run_game(Board::with_rules(size, size, rules), handicap, seed)
        }
        Some(Commands::Sgf { file }) => {
            let text = fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            let board = sgf::load(&text).with_context(|| format!("loading {}", file.display()))?;
            println!("{board}");
            print_score(&board.area_score());
            Ok(())
        }
        Some(Commands::Demo) | None => {
            run_demo();
            Ok(())
        }
    }
}

fn run_game(mut board: Board, handicap: usize, seed: Option<u64>) -> Result<()> {
    let seed = seed.unwrap_or_else(|| fastrand::u64(..));
    info!("new {}x{} game, handicap {handicap}, seed {seed}", board.width(), board.height());
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut opponent = RandomOpponent::with_seed(seed);
    let mut history: Vec<MoveRecord> = Vec::new();

    if handicap >= 2 {
        place_handicap(&mut board, &mut rng, handicap);
        history.extend(reply(&mut board, &mut opponent));
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    println!("Enter a move (e.g. C3), 'pass', 'undo' or 'quit'.");
    while !board.is_game_over() {
        println!("\n{board}");
        print!("{} to play> ", board.turn());
        stdout.flush()?;

        let Some(line) = stdin.lock().lines().next() else {
            return Ok(());
        };
        let line = line?;
        let input = line.trim();
        match input {
            "" => continue,
            "quit" => return Ok(()),
            "undo" => {
                if !undo_turn(&mut board, &mut history) {
                    println!("Nothing to take back yet.");
                }
                continue;
            }
            _ => {}
        }

        let mv = match coord_to_point(&board, input) {
            Ok(mv) => mv,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };
        match board.play(mv) {
            Ok(record) => {
                if record.is_self_capture() {
                    println!("Oops, that stone had no way out and was taken off.");
                } else if !record.captives().is_empty() {
                    println!("You captured {} stones!", record.captives().len());
                }
                history.push(record);
            }
            Err(e) => {
                println!("{e}");
                continue;
            }
        }
        if !board.is_game_over() {
            history.extend(reply(&mut board, &mut opponent));
        }
    }

    println!("\n{board}");
    print_score(&board.area_score());
    Ok(())
}

/// Take back the player's last move together with the opponent's reply.
///
/// Only a complete pair is undone, so the opening reply to the handicap
/// stones stays on the board and Black keeps the move.
fn undo_turn(board: &mut Board, history: &mut Vec<MoveRecord>) -> bool {
    let [.., own, answer] = history.as_slice() else {
        return false;
    };
    if own.turn != Color::Black || answer.turn != Color::White {
        return false;
    }
    for _ in 0..2 {
        if let Some(record) = history.pop() {
            board.undo_play(&record);
        }
    }
    true
}

/// Let the opponent answer, announcing its move.
fn reply(board: &mut Board, opponent: &mut RandomOpponent) -> Option<MoveRecord> {
    let mv = opponent.choose(board);
    let record = board.play(mv).ok()?;
    match mv {
        Move::Pass => println!("I pass."),
        Move::Play(_) => println!("I play {}.", move_to_coord(board, mv)),
    }
    Some(record)
}

fn print_score(score: &Score) {
    println!("Black {} - White {}", score.black, score.white);
    match score.winner() {
        Some(Color::Black) => println!("Black wins by {}.", score.margin()),
        Some(Color::White) => println!("White wins by {}.", -score.margin()),
        None => println!("It's a draw."),
    }
}

fn run_demo() {
    println!("Igo-Sensei: Go rules engine for teaching\n");

    let mut board = Board::square(DEFAULT_SIZE);
    let mut opponent = RandomOpponent::with_seed(2020);
    let history = opponent.play_out(&mut board, 200);
    println!("=== Random game ({} moves) ===", history.len());
    println!("{board}");
    print_score(&board.area_score());

    for record in history.iter().rev() {
        board.undo_play(record);
    }
    println!("\nAfter undoing every move the board is empty again: {}", board == Board::square(DEFAULT_SIZE));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undo_keeps_handicap_reply() {
        let mut board = Board::square(5);
        let mut rng = fastrand::Rng::with_seed(11);
        place_handicap(&mut board, &mut rng, 2);
        let mut opponent = RandomOpponent::with_seed(11);
        let mut history: Vec<MoveRecord> = reply(&mut board, &mut opponent).into_iter().collect();
        assert_eq!(history.len(), 1);
        let after_reply = board.clone();

        assert!(!undo_turn(&mut board, &mut history));
        assert_eq!(history.len(), 1);
        assert_eq!(board, after_reply);
        assert_eq!(board.turn(), Color::Black);

        let mv = opponent.choose(&mut board);
        history.push(board.play(mv).unwrap());
        history.extend(reply(&mut board, &mut opponent));
        assert_eq!(history.len(), 3);

        assert!(undo_turn(&mut board, &mut history));
        assert_eq!(history.len(), 1);
        assert_eq!(board, after_reply);
    }
}
