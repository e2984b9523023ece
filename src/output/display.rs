//! Display functions for hands and command results

use crate::commands::{BenchResult, PlayReport};
use crate::core::Hand;
use colored::Colorize;
use rand::seq::SliceRandom;

/// Print the letters currently in a hand, optionally in shuffled order.
pub fn print_hand(hand: &Hand, shuffled: bool) {
    let mut tiles = hand.tiles();
    if shuffled {
        tiles.shuffle(&mut rand::rng());
    }
    let rendered: Vec<String> = tiles.iter().map(|&tile| (tile as char).to_string()).collect();
    println!(
        "Current hand: {}",
        rendered.join(" ").bright_cyan().bold()
    );
}

/// Print a computer-played hand turn by turn.
pub fn print_play_report(report: &PlayReport) {
    let mut running_total = 0u32;
    for turn in &report.turns {
        running_total += turn.score;
        println!();
        print_hand(&turn.hand_before, false);
        println!(
            "\"{}\" earned {} points. Total: {} points",
            turn.word.bright_white().bold(),
            turn.score,
            running_total
        );
    }

    println!();
    if report.leftover.is_empty() {
        println!("{}", "Game over! Every letter used.".green().bold());
    } else {
        println!(
            "{} (left over: {})",
            "No playable words remain.".yellow(),
            report.leftover
        );
    }
    println!(
        "Total score: {} points.",
        report.total_score.to_string().bright_yellow().bold()
    );
}

/// Print benchmark results.
pub fn print_bench_result(result: &BenchResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n{}", "Scores:".bright_cyan().bold());
    println!("   Hands played:     {}", result.hands);
    println!(
        "   Average score:    {}",
        format!("{:.1}", result.average_score).bright_yellow().bold()
    );
    println!(
        "   Best hand:        {}",
        result.max_score.to_string().green()
    );
    println!(
        "   Worst hand:       {}",
        result.min_score.to_string().yellow()
    );
    println!("   Words played:     {}", result.total_words);
    println!(
        "   Hands cleared:    {} ({:.1}%)",
        result.cleared,
        if result.hands > 0 {
            result.cleared as f64 / result.hands as f64 * 100.0
        } else {
            0.0
        }
    );
    println!(
        "   Time taken:       {:.2}s",
        result.duration.as_secs_f64()
    );
}
