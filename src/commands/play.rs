//! Interactive session
//!
//! The menu loop of the original game: deal a new hand, replay the last one,
//! or quit; each hand can be played by the player or handed to the computer.
//! All game rules live in the core; this module only sequences calls and
//! reads stdin.

use crate::commands::auto;
use crate::core::Hand;
use crate::dictionary::WordIndex;
use crate::output;
use crate::pool::WorkerPool;
use crate::scoring;
use crate::search::CandidateSearch;
use colored::Colorize;
use std::io::{self, Write};

/// Run the interactive session loop.
///
/// # Errors
///
/// Returns an error if reading user input fails or a search fails.
pub fn run_session(
    pool: &WorkerPool,
    search: &CandidateSearch,
    index: &WordIndex,
    hand_size: usize,
) -> Result<(), String> {
    print_welcome(hand_size);

    let mut last_hand: Option<Hand> = None;

    loop {
        println!();
        let choice =
            get_user_input("Enter 'n' for a new hand, 'r' to replay the last hand, or 'x' to exit")?;
        match choice.as_str() {
            "n" => {
                let hand = match Hand::deal(index, hand_size) {
                    Ok(hand) => hand,
                    Err(e) => {
                        println!("{}", e.to_string().red());
                        continue;
                    }
                };
                last_hand = Some(hand.clone());
                play_dealt(pool, search, index, hand)?;
            }
            "r" => {
                if let Some(hand) = last_hand.clone() {
                    play_dealt(pool, search, index, hand)?;
                } else {
                    println!("You have not played a hand yet. Deal a new hand first!");
                }
            }
            "x" => return Ok(()),
            _ => println!("Invalid command."),
        }
    }
}

fn print_welcome(hand_size: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "W O R D P L A Y".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!(
        "\nYou are dealt {hand_size} scrambled letters. Make any dictionary word\n\
         from them; letters score as in Scrabble, a word is worth its letter\n\
         sum times its length, and using every remaining letter earns a\n\
         50-point bonus. Play a hand yourself, then replay it with 'r' to\n\
         see how the computer does."
    );
}

fn play_dealt(
    pool: &WorkerPool,
    search: &CandidateSearch,
    index: &WordIndex,
    hand: Hand,
) -> Result<(), String> {
    loop {
        println!();
        let who = get_user_input("Enter 'u' to play yourself, or 'c' to let the computer play")?;
        match who.as_str() {
            "u" => return play_hand_interactive(index, hand),
            "c" => {
                let report =
                    auto::play_hand(pool, search, index, hand).map_err(|e| e.to_string())?;
                output::print_play_report(&report);
                return Ok(());
            }
            _ => println!("Invalid command."),
        }
    }
}

fn play_hand_interactive(index: &WordIndex, mut hand: Hand) -> Result<(), String> {
    let mut total = 0u32;

    while hand.remaining() > 0 {
        println!();
        output::print_hand(&hand, false);
        let input =
            get_user_input("Enter a word, 'r' to shuffle the letters, or '.' to finish")?;
        match input.as_str() {
            "." => break,
            "r" => output::print_hand(&hand, true),
            word => {
                let word = word.to_lowercase();
                if !hand.is_valid_play(&word, index) {
                    println!("{}", "Invalid word, please try again.".red());
                    continue;
                }
                // score against the hand as it stands, before the play
                let score = scoring::score(index, &word, hand.remaining()).unwrap_or(0);
                total += score;
                println!(
                    "Congratulations, '{}' earned you {} points. Your score is now {}.",
                    word.bright_white().bold(),
                    score,
                    total.to_string().bright_yellow().bold()
                );
                hand = hand.apply(&word);
            }
        }
    }

    if hand.is_empty() {
        println!("\n{}", "You used every letter!".green().bold());
    }
    println!("Game over. You scored {total} points.");
    Ok(())
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
