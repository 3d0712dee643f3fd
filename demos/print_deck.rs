//! Prints a shuffled-then-sorted deck with three jokers, one card per line.

use std::process::ExitCode;

use cardeck::{Deck, options};

fn main() -> ExitCode {
    let deck = match Deck::new(vec![
        options::with_jokers(3),
        options::shuffle(),
        options::sort(options::default_comparator),
    ]) {
        Ok(deck) => deck,
        Err(err) => {
            eprintln!("Failed to build deck: {err}");
            return ExitCode::FAILURE;
        }
    };

    for card in &deck {
        println!("{card}");
    }

    ExitCode::SUCCESS
}
