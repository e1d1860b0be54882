//! Wordle Hints - CLI
//!
//! Constraint-tracking Wordle helper with TUI and CLI modes.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};
use wordle_hints::{
    archive::fetch_past_answers,
    commands::{
        SolveConfig, rank_with_hints, run_benchmark, run_simple, run_test_all, sample_words,
        solve_word,
    },
    config::Config,
    core::{FeedbackSymbols, Word},
    output::{
        print_benchmark_result, print_constraints, print_ranking, print_solve_result,
        print_test_all_statistics,
    },
    ranking::CandidateRanker,
    solver::{Session, Strategy},
    wordlists::{WORDS, loader::load_from_file, without, words_from_slice},
};

/// Settings file read from the working directory when `--config` is not given
const DEFAULT_CONFIG: &str = "wordle_hints.toml";

#[derive(Parser)]
#[command(
    name = "wordle_hints",
    about = "Wordle helper that tracks feedback and ranks the remaining words by letter frequency",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: unique-first (default), all, unique
    #[arg(short, long, global = true, default_value_t = Strategy::default())]
    strategy: Strategy,

    /// Word list file, one word per line (default: built-in list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// File of past answers to remove from the word list
    #[arg(long, global = true)]
    past: Option<PathBuf>,

    /// Download past answers from the archive and remove them from the word list
    #[arg(long, global = true)]
    fetch_past: bool,

    /// TOML settings file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (prompt loop without TUI)
    Simple,

    /// Play against a known answer
    Solve {
        /// The target word to solve
        word: String,

        /// Show candidate counts and scores per turn
        #[arg(short, long)]
        verbose: bool,
    },

    /// Rank the candidates left after some hints
    Rank {
        /// A guess and its feedback, e.g. crane:g-y--
        #[arg(long = "hint", value_name = "GUESS:FEEDBACK")]
        hints: Vec<String>,

        /// Number of words to show
        #[arg(short, long, default_value = "20")]
        top: usize,
    },

    /// Fetch the past answers archive
    Archive {
        /// Write the answers to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Simulate games against a random sample of words
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Seed for a reproducible sample
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Simulate a game for every word in the list
    TestAll {
        /// Limit number of words to test
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    let config = load_config(cli.config.as_deref())?;
    let symbols = config.symbols().context("invalid feedback symbols")?;

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);
    let session = || build_session(&cli, &config);

    match command {
        Commands::Play => run_play_command(session()?, symbols),
        Commands::Simple => run_simple(session()?, symbols).context("prompt loop failed"),
        Commands::Solve { word, verbose } => run_solve_command(&session()?, word, verbose),
        Commands::Rank { hints, top } => run_rank_command(session()?, &hints, top, &symbols),
        Commands::Archive { output } => run_archive_command(&config, output.as_deref()),
        Commands::Benchmark { count, seed } => {
            run_benchmark_command(&session()?, count, seed);
            Ok(())
        }
        Commands::TestAll { limit } => {
            run_test_all_command(&session()?, limit);
            Ok(())
        }
    }
}

/// Log to stderr, filtered by `RUST_LOG` or `level`
fn init_tracing(level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .with_context(|| format!("invalid log level {level:?}"))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init()
        .context("failed to initialise logging")
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Config::load_or_default(DEFAULT_CONFIG)
            .with_context(|| format!("failed to load config {DEFAULT_CONFIG}")),
    }
}

/// The candidate list: built-in or `--wordlist`, minus any past answers
fn load_words(cli: &Cli, config: &Config) -> Result<Vec<Word>> {
    let mut words = match &cli.wordlist {
        Some(path) => load_from_file(path)
            .with_context(|| format!("failed to read word list {}", path.display()))?,
        None => words_from_slice(WORDS),
    };
    if words.is_empty() {
        bail!("the word list has no valid words");
    }

    let mut past = Vec::new();
    if let Some(path) = &cli.past {
        past.extend(
            load_from_file(path)
                .with_context(|| format!("failed to read past answers {}", path.display()))?,
        );
    }
    if cli.fetch_past {
        past.extend(fetch_past_answers(&config.archive).context("failed to fetch past answers")?);
    }

    if !past.is_empty() {
        let before = words.len();
        words = without(&words, &past);
        info!(
            removed = before - words.len(),
            remaining = words.len(),
            "removed past answers"
        );
    }
    Ok(words)
}

fn build_session(cli: &Cli, config: &Config) -> Result<Session> {
    let words = load_words(cli, config)?;
    let weights = config.weights().context("invalid letter weights")?;
    Ok(
        Session::new(words, CandidateRanker::new(weights), cli.strategy)
            .with_max_rounds(config.max_rounds),
    )
}

fn run_play_command(session: Session, symbols: FeedbackSymbols) -> Result<()> {
    use wordle_hints::interactive::{App, run_tui};

    let app = App::new(session, symbols);
    run_tui(app)
}

fn run_solve_command(session: &Session, word: String, verbose: bool) -> Result<()> {
    let mut config = SolveConfig::new(word);
    config.max_guesses = session.max_rounds();
    let result = solve_word(&config, session)?;

    print_solve_result(&result, verbose);
    Ok(())
}

fn run_rank_command(
    mut session: Session,
    hints: &[String],
    top: usize,
    symbols: &FeedbackSymbols,
) -> Result<()> {
    let ranking = rank_with_hints(&mut session, hints, symbols)?;
    if !hints.is_empty() {
        print_constraints(session.constraints());
    }
    print_ranking(&ranking, top);
    Ok(())
}

fn run_archive_command(config: &Config, output: Option<&Path>) -> Result<()> {
    let answers = fetch_past_answers(&config.archive).context("failed to fetch past answers")?;
    let text: String = answers.iter().map(|w| format!("{w}\n")).collect();

    match output {
        Some(path) => {
            fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))?;
            println!("Wrote {} past answers to {}", answers.len(), path.display());
        }
        None => print!("{text}"),
    }
    Ok(())
}

fn run_benchmark_command(session: &Session, count: usize, seed: Option<u64>) {
    match seed {
        Some(seed) => println!("Running benchmark on {count} random words (seed {seed})..."),
        None => println!("Running benchmark on {count} random words..."),
    }

    let test_words = sample_words(session.source(), count, seed);
    let result = run_benchmark(session, &test_words);
    print_benchmark_result(&result);
}

fn run_test_all_command(session: &Session, limit: Option<usize>) {
    println!("\n{}", "═".repeat(70));
    println!(" Comprehensive Wordle Hints Test ");
    println!("{}", "═".repeat(70));
    println!("\nTesting against {} words", session.source().len());
    println!("Strategy: {}", session.strategy());
    println!();

    let stats = run_test_all(session, session.source(), limit, true);
    print_test_all_statistics(&stats);
}
