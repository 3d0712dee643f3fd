//! Playing-card decks with optional `no_std` support.
//!
//! The crate provides a [`Deck`] built from the canonical 52-card deck by a
//! pipeline of [options](options), applied strictly left to right: multiple
//! decks, jokers, shuffles, sorting and filtering. A built deck supports
//! drawing from the front and inserting at the bottom.
//!
//! # Example
//!
//! ```
//! use cardeck::{Deck, options};
//!
//! let deck = Deck::new(vec![
//!     options::with_jokers(3),
//!     options::shuffle_with_seed(42),
//!     options::sort(options::default_comparator),
//! ])
//! .unwrap();
//!
//! assert_eq!(deck.len(), 55);
//! assert_eq!(deck.cards()[3].to_string(), "Ace of Clovers");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod options;

// Re-export main types
pub use card::{Card, DECK_SIZE, RANK_COUNT, Rank, SUIT_COUNT, Suit, cards_of_rank, standard_cards};
pub use deck::Deck;
pub use error::{DrawError, OptionError};
pub use options::{DeckBuilder, DeckOption};
