//! Word Ladder - CLI
//!
//! Word ladder puzzle game with TUI and CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use word_ladder::{
    commands::{check_ladder, generate_puzzles, run_simple},
    engine::{GameEngine, GameSettings, PuzzleConfig},
    output::{print_check_result, print_puzzles},
    wordlists::loader::load_dictionary,
};

#[derive(Parser)]
#[command(
    name = "word_ladder",
    about = "Word ladder puzzle: change one letter at a time to reach the target word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary file, one word per line (default: embedded word list)
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,

    /// Start word for new games
    #[arg(long, global = true, default_value = "soul")]
    start: String,

    /// Target word for new games
    #[arg(long, global = true, default_value = "mate")]
    target: String,

    /// Word length for random puzzles
    #[arg(short, long, global = true, default_value = "4")]
    length: usize,

    /// Start new games from random words
    #[arg(short, long, global = true)]
    random: bool,

    /// Show the whole ladder as a path
    #[arg(long, global = true)]
    show_path: bool,

    /// Do not report rejected words
    #[arg(long, global = true)]
    hide_errors: bool,

    /// Seed for reproducible random words
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Print random start/target pairs
    Random {
        /// Number of puzzles to draw
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,
    },

    /// Check a complete ladder, first word to last
    Check {
        /// Ladder words, start word first and target word last
        #[arg(required = true)]
        words: Vec<String>,
    },
}

fn init_tracing() {
    // Logs go to stderr and stay quiet by default so the TUI is not disturbed
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "word_ladder=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn build_engine(cli: &Cli) -> Result<GameEngine> {
    let dictionary = load_dictionary(cli.dictionary.as_ref()).context("failed to load dictionary")?;

    let mut engine = match cli.seed {
        Some(seed) => GameEngine::seeded(dictionary, seed),
        None => GameEngine::new(dictionary),
    };
    engine.set_settings(GameSettings {
        show_error_message: !cli.hide_errors,
        show_path: cli.show_path,
        use_random_words: cli.random,
    });
    engine.set_puzzle(PuzzleConfig::new(&cli.start, &cli.target, cli.length));

    Ok(engine)
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let mut engine = build_engine(&cli)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(engine),
        Commands::Simple => {
            engine.new_game().context("failed to start game")?;
            run_simple(&mut engine)
        }
        Commands::Random { count } => {
            let puzzles = generate_puzzles(&mut engine, cli.length, count)?;
            print_puzzles(&puzzles);
            Ok(())
        }
        Commands::Check { words } => {
            let result = check_ladder(&mut engine, &words)?;
            print_check_result(&result);
            Ok(())
        }
    }
}

fn run_play_command(mut engine: GameEngine) -> Result<()> {
    use word_ladder::interactive::{App, run_tui};

    engine.new_game().context("failed to start game")?;
    run_tui(App::new(engine))
}
