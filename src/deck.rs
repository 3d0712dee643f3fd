//! The deck and its post-construction operations.

use alloc::vec::{self, Vec};
use core::fmt;
use core::slice;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, standard_cards};
use crate::error::{DrawError, OptionError};
use crate::options::{DeckBuilder, DeckOption};

/// An ordered sequence of cards. The front of the deck is index 0.
///
/// No uniqueness is enforced: multi-deck construction and
/// [`insert_bottom`](Deck::insert_bottom) may hold several copies of a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds a deck by applying `options`, in order, to the canonical deck.
    ///
    /// Stops at the first option that fails and returns its error unchanged.
    ///
    /// # Errors
    ///
    /// Returns the error of the first failing option.
    ///
    /// # Example
    ///
    /// ```
    /// use cardeck::{Deck, options};
    ///
    /// let deck = Deck::new(vec![options::with_jokers(3), options::sort(options::default_comparator)])
    ///     .unwrap();
    /// assert_eq!(deck.len(), 55);
    /// assert!(deck.cards()[..3].iter().all(|card| card.is_joker()));
    /// ```
    pub fn new<I>(options: I) -> Result<Self, OptionError>
    where
        I: IntoIterator<Item = DeckOption>,
    {
        let mut cards = standard_cards().to_vec();
        for option in options {
            cards = option.apply(cards)?;
        }
        Ok(Self { cards })
    }

    /// Returns the canonical 52-card deck, ordered by suit then rank.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            cards: standard_cards().to_vec(),
        }
    }

    /// Returns a builder that records options in call order.
    pub const fn builder() -> DeckBuilder {
        DeckBuilder::new()
    }

    /// Applies a single option to this deck.
    ///
    /// On failure the deck keeps the cards it had before the call.
    ///
    /// # Errors
    ///
    /// Returns the option's error.
    pub fn apply(&mut self, option: DeckOption) -> Result<(), OptionError> {
        self.cards = option.apply(self.cards.clone())?;
        Ok(())
    }

    /// Removes and returns the card at the front of the deck.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::EmptyDeck`] if there are no cards left.
    ///
    /// # Example
    ///
    /// ```
    /// use cardeck::{Card, Deck, Rank, Suit};
    ///
    /// let mut deck = Deck::standard();
    /// assert_eq!(deck.draw(), Ok(Card::new(Rank::Ace, Suit::Clovers)));
    /// assert_eq!(deck.len(), 51);
    /// ```
    pub fn draw(&mut self) -> Result<Card, DrawError> {
        if self.cards.is_empty() {
            return Err(DrawError::EmptyDeck);
        }
        Ok(self.cards.remove(0))
    }

    /// Appends `cards` to the bottom of the deck, keeping their order.
    pub fn insert_bottom<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        self.cards.extend(cards);
    }

    /// Shuffles the deck in place with a seed taken from the system clock.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    pub fn shuffle(&mut self) {
        self.shuffle_with_seed(crate::options::clock_seed());
    }

    /// Shuffles the deck in place, deterministically for a given seed.
    ///
    /// Produces the same order as [`shuffle_with_seed`](crate::options::shuffle_with_seed)
    /// applied to the same cards.
    pub fn shuffle_with_seed(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Returns the cards, front first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns an iterator over the cards, front first.
    pub fn iter(&self) -> slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Consumes the deck, returning its cards.
    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.cards {
            writeln!(f, "{card}")?;
        }
        Ok(())
    }
}
