//! Deck construction options.
//!
//! A deck is built by starting from the canonical 52 cards and running a list
//! of [`DeckOption`]s over it, strictly in the order given. Options are order
//! sensitive: shuffling and then sorting yields a sorted deck, sorting and then
//! shuffling does not.
//!
//! Options can be passed to [`Deck::new`] directly or recorded with the
//! chained [`DeckBuilder`]:
//!
//! ```
//! use cardeck::{Deck, options};
//!
//! let direct = Deck::new(vec![
//!     options::with_jokers(2),
//!     options::shuffle_with_seed(7),
//!     options::sort(options::default_comparator),
//! ])
//! .unwrap();
//!
//! let built = Deck::builder()
//!     .with_jokers(2)
//!     .shuffle_with_seed(7)
//!     .sort(options::default_comparator)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(direct, built);
//! ```

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, standard_cards};
use crate::deck::Deck;
use crate::error::OptionError;

type Transform = Box<dyn FnOnce(Vec<Card>) -> Result<Vec<Card>, OptionError>>;

/// A single step of the deck construction pipeline.
///
/// Each option receives the whole card sequence and returns the new sequence
/// or an error. Custom options are created with [`DeckOption::new`].
pub struct DeckOption {
    transform: Transform,
}

impl DeckOption {
    /// Wraps a transformation as an option.
    ///
    /// # Example
    ///
    /// ```
    /// use cardeck::{Deck, OptionError, options::DeckOption};
    ///
    /// let at_least_60 = DeckOption::new(|cards| {
    ///     if cards.len() < 60 {
    ///         return Err(OptionError::new("deck too small"));
    ///     }
    ///     Ok(cards)
    /// });
    ///
    /// assert!(Deck::new(vec![at_least_60]).is_err());
    /// ```
    #[must_use]
    pub fn new<F>(transform: F) -> Self
    where
        F: FnOnce(Vec<Card>) -> Result<Vec<Card>, OptionError> + 'static,
    {
        Self {
            transform: Box::new(transform),
        }
    }

    /// Runs the option over `cards`.
    ///
    /// # Errors
    ///
    /// Returns whatever error the option produces.
    pub fn apply(self, cards: Vec<Card>) -> Result<Vec<Card>, OptionError> {
        (self.transform)(cards)
    }
}

impl fmt::Debug for DeckOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeckOption").finish_non_exhaustive()
    }
}

/// Replaces the current cards with `count` canonical decks.
///
/// Whatever the earlier options produced is discarded, so jokers, shuffles or
/// filters placed before this option have no effect. Put it first.
///
/// # Example
///
/// ```
/// use cardeck::{DECK_SIZE, Deck, options};
///
/// let deck = Deck::new(vec![options::with_decks(3)]).unwrap();
/// assert_eq!(deck.len(), 3 * DECK_SIZE);
///
/// let empty = Deck::new(vec![options::with_jokers(2), options::with_decks(0)]).unwrap();
/// assert!(empty.is_empty());
/// ```
#[must_use]
pub fn with_decks(count: usize) -> DeckOption {
    DeckOption::new(move |_| {
        let standard = standard_cards();
        let mut cards = Vec::with_capacity(count * standard.len());
        for _ in 0..count {
            cards.extend_from_slice(&standard);
        }
        Ok(cards)
    })
}

/// Appends `count` jokers to the end of the deck.
#[must_use]
pub fn with_jokers(count: usize) -> DeckOption {
    DeckOption::new(move |mut cards| {
        cards.extend(core::iter::repeat_n(Card::joker(), count));
        Ok(cards)
    })
}

/// Shuffles the deck with a seed taken from the system clock.
///
/// Results are not reproducible; use [`shuffle_with_seed`] for that.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[must_use]
pub fn shuffle() -> DeckOption {
    shuffle_with_seed(clock_seed())
}

/// Shuffles the deck deterministically.
///
/// The same seed applied to the same sequence always yields the same order.
///
/// # Example
///
/// ```
/// use cardeck::{Deck, options};
///
/// let a = Deck::new(vec![options::shuffle_with_seed(42)]).unwrap();
/// let b = Deck::new(vec![options::shuffle_with_seed(42)]).unwrap();
/// assert_eq!(a, b);
/// ```
#[must_use]
pub fn shuffle_with_seed(seed: u64) -> DeckOption {
    shuffle_with(ChaCha8Rng::seed_from_u64(seed))
}

/// Shuffles the deck with the given random number generator.
#[must_use]
pub fn shuffle_with<R>(mut rng: R) -> DeckOption
where
    R: Rng + 'static,
{
    DeckOption::new(move |mut cards| {
        cards.shuffle(&mut rng);
        Ok(cards)
    })
}

/// Sorts the deck with `comparator`.
///
/// The sort is stable: cards that compare equal keep their relative order.
#[must_use]
pub fn sort<F>(comparator: F) -> DeckOption
where
    F: Fn(&Card, &Card) -> Ordering + 'static,
{
    DeckOption::new(move |mut cards| {
        cards.sort_by(comparator);
        Ok(cards)
    })
}

/// Orders jokers first, then regular cards by suit and rank.
///
/// # Example
///
/// ```
/// use core::cmp::Ordering;
/// use cardeck::{Card, Rank, Suit, options::default_comparator};
///
/// let king = Card::new(Rank::King, Suit::Clovers);
/// let two = Card::new(Rank::Two, Suit::Diamonds);
/// assert_eq!(default_comparator(&king, &two), Ordering::Less);
/// assert_eq!(default_comparator(&Card::joker(), &king), Ordering::Less);
/// ```
#[must_use]
pub fn default_comparator(a: &Card, b: &Card) -> Ordering {
    match (a.is_joker(), b.is_joker()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a
            .suit()
            .cmp(&b.suit())
            .then_with(|| a.rank().cmp(&b.rank())),
    }
}

/// Removes the given cards from the deck.
///
/// Each card in each exclusion set removes at most one matching card (see
/// [`Card::matches`]), the first one found. Excluding a card twice removes two
/// copies; excluding a card the deck does not hold is a no-op.
///
/// # Example
///
/// ```
/// use cardeck::{Card, Deck, Rank, Suit, options};
///
/// let ace_of_clovers = Card::new(Rank::Ace, Suit::Clovers);
/// let deck = Deck::new(vec![
///     options::with_decks(2),
///     options::filter([[ace_of_clovers]]),
/// ])
/// .unwrap();
///
/// assert_eq!(deck.iter().filter(|card| card.matches(&ace_of_clovers)).count(), 1);
/// ```
#[must_use]
pub fn filter<I, S>(exclusions: I) -> DeckOption
where
    I: IntoIterator<Item = S>,
    S: IntoIterator<Item = Card>,
{
    let exclusions: Vec<Card> = exclusions.into_iter().flatten().collect();
    DeckOption::new(move |mut cards| {
        for excluded in &exclusions {
            if let Some(index) = cards.iter().position(|card| card.matches(excluded)) {
                cards.remove(index);
            }
        }
        Ok(cards)
    })
}

/// Removes every card for which `predicate` returns `true`.
///
/// # Example
///
/// ```
/// use cardeck::{Deck, Suit, options};
///
/// let deck = Deck::new(vec![options::filter_by(|card| card.suit() == Suit::Hearts)]).unwrap();
/// assert_eq!(deck.len(), 39);
/// ```
#[must_use]
pub fn filter_by<P>(mut predicate: P) -> DeckOption
where
    P: FnMut(&Card) -> bool + 'static,
{
    DeckOption::new(move |mut cards| {
        cards.retain(|card| !predicate(card));
        Ok(cards)
    })
}

#[cfg(feature = "std")]
pub(crate) fn clock_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

/// Records deck options in call order.
///
/// Every method appends one option; [`build`](DeckBuilder::build) runs them
/// against the canonical deck exactly like [`Deck::new`].
#[derive(Debug, Default)]
#[must_use]
pub struct DeckBuilder {
    options: Vec<DeckOption>,
}

impl DeckBuilder {
    /// Creates a builder with no options.
    pub const fn new() -> Self {
        Self {
            options: Vec::new(),
        }
    }

    /// Appends a custom option.
    pub fn option(mut self, option: DeckOption) -> Self {
        self.options.push(option);
        self
    }

    /// Appends [`with_decks`]. Discards everything recorded before it.
    pub fn with_decks(self, count: usize) -> Self {
        self.option(with_decks(count))
    }

    /// Appends [`with_jokers`].
    pub fn with_jokers(self, count: usize) -> Self {
        self.option(with_jokers(count))
    }

    /// Appends [`shuffle`].
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    pub fn shuffle(self) -> Self {
        self.option(shuffle())
    }

    /// Appends [`shuffle_with_seed`].
    pub fn shuffle_with_seed(self, seed: u64) -> Self {
        self.option(shuffle_with_seed(seed))
    }

    /// Appends [`sort`].
    pub fn sort<F>(self, comparator: F) -> Self
    where
        F: Fn(&Card, &Card) -> Ordering + 'static,
    {
        self.option(sort(comparator))
    }

    /// Appends [`filter`].
    pub fn filter<I, S>(self, exclusions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: IntoIterator<Item = Card>,
    {
        self.option(filter(exclusions))
    }

    /// Appends [`filter_by`].
    pub fn filter_by<P>(self, predicate: P) -> Self
    where
        P: FnMut(&Card) -> bool + 'static,
    {
        self.option(filter_by(predicate))
    }

    /// Builds the deck.
    ///
    /// # Errors
    ///
    /// Returns the error of the first option that fails.
    pub fn build(self) -> Result<Deck, OptionError> {
        Deck::new(self.options)
    }
}
