//! Command-line front end: generate a puzzle, print it, and optionally play it from stdin.
//!
//! Print an easy kids puzzle:
//!
//! ```text
//! $ word-search-puzzle --category kids --difficulty easy --level 1
//! ```
//!
//! Play it by typing gestures, one per line:
//!
//! ```text
//! $ word-search-puzzle --seed 7 --play
//! start 0-0
//! move 0-3
//! end
//! hint
//! quit
//! ```
//!
//! Each `end` that completes a word prints `Found WORD (found/total)`; `hint` prints a clue such as
//!
//! ```text
//! Look for a 3-letter word starting with "C"
//! ```

use std::io::{self, BufRead};
use std::process::ExitCode;

use clap::Parser;
use log::{debug, error, LevelFilter};
use rand::{rngs::StdRng, SeedableRng};

use word_search_puzzle::{Category, CellId, Generator, GeneratorConfig, MatchEngine, Puzzle};

/// Generate and play word search puzzles.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version)]
struct Args {
    /// Word category: kids, teenagers or adults
    #[arg(short, long, default_value = "kids")]
    category: String,

    /// Difficulty: easy (10x10), medium (15x15) or hard (20x20); anything else gives 12x12
    #[arg(short, long, default_value = "easy")]
    difficulty: String,

    /// Puzzle level; one extra word every ten levels
    #[arg(short, long, default_value_t = 1)]
    level: u32,

    /// Seed for a reproducible puzzle
    #[arg(short, long)]
    seed: Option<u64>,

    /// Random placements tried per word before giving up
    #[arg(long, default_value_t = word_search_puzzle::generator::DEFAULT_MAX_PLACEMENT_ATTEMPTS)]
    max_attempts: usize,

    /// Print the puzzle as JSON
    #[arg(short, long, default_value_t = false)]
    json: bool,

    /// List the cells of every word
    #[arg(long, default_value_t = false)]
    solution: bool,

    /// Play the puzzle with gestures read from stdin
    #[arg(short, long, default_value_t = false, conflicts_with = "json")]
    play: bool,

    /// Enable debug messages
    #[arg(long, default_value_t = false)]
    debug: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if args.debug {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    if let Err(e) = args.category.parse::<Category>() {
        let names: Vec<&str> = Category::ALL.iter().map(Category::name).collect();
        error!("{}. Use one of: {}.", e, names.join(", "));
        return ExitCode::FAILURE;
    }

    let config = GeneratorConfig {
        max_placement_attempts: args.max_attempts,
    };
    let mut generator = match args.seed {
        Some(seed) => Generator::with_seed(seed).config(config),
        None => Generator::with_config(config),
    };

    let puzzle = match generator.generate(&args.category, &args.difficulty, args.level) {
        Ok(puzzle) => puzzle,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    if args.json {
        match serde_json::to_string_pretty(&puzzle) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("Cannot serialize the puzzle: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        print!("{}", puzzle);
    }

    if args.solution {
        print_solution(&puzzle);
    }

    if args.play {
        let hint_rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        if let Err(e) = play(puzzle, hint_rng) {
            error!("Cannot read gestures: {}", e);
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}

fn print_solution(puzzle: &Puzzle) {
    println!();
    for word in &puzzle.words {
        match puzzle.grid.find_word(word) {
            Some(cells) => {
                let cells: Vec<String> = cells.iter().map(CellId::to_string).collect();
                println!("{}: {}", word, cells.join(" "));
            }
            None => println!("{}: not found", word),
        }
    }
}

/// One line of play-mode input.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Start(CellId),
    Move(CellId),
    End,
    Hint,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let mut parts = line.split_whitespace();
    let command = parts.next()?;
    let cell = parts.next().and_then(|cell| cell.parse::<CellId>().ok());

    match (command, cell) {
        ("start", Some(cell)) => Some(Command::Start(cell)),
        ("move", Some(cell)) => Some(Command::Move(cell)),
        ("end", _) => Some(Command::End),
        ("hint", _) => Some(Command::Hint),
        ("quit", _) => Some(Command::Quit),
        _ => None,
    }
}

fn play(puzzle: Puzzle, mut rng: StdRng) -> io::Result<()> {
    let mut engine = MatchEngine::new(puzzle);

    for line in io::stdin().lock().lines() {
        let line = line?;

        let Some(command) = parse_command(&line) else {
            debug!("Ignoring input {:?}", line);
            continue;
        };

        match command {
            Command::Start(cell) => engine.on_gesture_start(cell),
            Command::Move(cell) => engine.on_gesture_move(cell),
            Command::End => {
                if let Some(found) = engine.on_gesture_end() {
                    println!(
                        "Found {} ({}/{})",
                        found.word,
                        engine.found_count(),
                        engine.total_words()
                    );
                }
            }
            Command::Hint => {
                if let Some(hint) = engine.hint(&mut rng) {
                    println!("{}", hint);
                }
            }
            Command::Quit => break,
        }

        if engine.is_complete() {
            println!("Puzzle complete!");
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{parse_command, Command};
    use word_search_puzzle::CellId;

    #[test]
    fn parse_play_commands() {
        assert_eq!(parse_command("start 3-4"), Some(Command::Start(CellId::new(3, 4))));
        assert_eq!(parse_command("  move 10-2 "), Some(Command::Move(CellId::new(10, 2))));
        assert_eq!(parse_command("end"), Some(Command::End));
        assert_eq!(parse_command("hint"), Some(Command::Hint));
        assert_eq!(parse_command("quit"), Some(Command::Quit));
        assert_eq!(parse_command("start"), None);
        assert_eq!(parse_command("move x"), None);
        assert_eq!(parse_command(""), None);
    }
}
