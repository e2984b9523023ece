//! Wordplay - CLI
//!
//! Scrabble-scored word game: play hands yourself, watch the computer play,
//! or benchmark the computer player over many hands.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::time::Duration;
use wordplay::{
    commands::{auto, bench, play},
    core::Hand,
    dictionary::WordIndex,
    output,
    pool::{DEFAULT_WORKERS, WorkerPool},
    search::CandidateSearch,
    wordlists::loader,
};

#[derive(Parser)]
#[command(
    name = "wordplay",
    about = "Scrabble-scored word game with a parallel dictionary engine and a computer player",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line (default: bundled list)
    #[arg(short, long, global = true)]
    wordlist: Option<String>,

    /// Letters dealt per hand; also caps indexed word length
    #[arg(short = 'n', long, global = true, default_value_t = 7,
          value_parser = clap::value_parser!(u8).range(4..=8))]
    hand_size: u8,

    /// Worker threads for the dictionary build and candidate search
    #[arg(long, global = true, default_value_t = DEFAULT_WORKERS)]
    workers: usize,

    /// Optional per-phase deadline in milliseconds
    #[arg(long, global = true)]
    deadline_ms: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive session (default): deal hands, play yourself or watch the computer
    Play,

    /// Computer plays a single dealt hand
    Auto,

    /// Computer plays many hands and reports aggregate scores
    Bench {
        /// Number of hands to play
        #[arg(short = 'c', long, default_value = "100")]
        hands: usize,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let hand_size = usize::from(cli.hand_size);
    let deadline = cli.deadline_ms.map(Duration::from_millis);

    let pool = WorkerPool::with_deadline(cli.workers, deadline)?;

    println!("Loading word list...");
    // words longer than the hand can never be played, so the hand size
    // bounds the index
    let index = match &cli.wordlist {
        Some(path) => WordIndex::build(&pool, loader::open_lines(path)?, hand_size)?,
        None => WordIndex::build(&pool, loader::embedded_lines(), hand_size)?,
    };
    println!("  {} words loaded.", index.len());

    let search = CandidateSearch::default();

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => play::run_session(&pool, &search, &index, hand_size)
            .map_err(|e| anyhow::anyhow!(e)),
        Commands::Auto => {
            let hand = Hand::deal(&index, hand_size)?;
            let report = auto::play_hand(&pool, &search, &index, hand)?;
            output::print_play_report(&report);
            Ok(())
        }
        Commands::Bench { hands } => {
            let result = bench::run_bench(&pool, &search, &index, hand_size, hands)
                .map_err(|e| anyhow::anyhow!(e))?;
            output::print_bench_result(&result);
            Ok(())
        }
    }
}
