//! Card types and deck utilities.

use core::fmt;

/// Card suit, ordered by declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Clovers.
    Clovers,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// Every suit in declaration order.
    pub const ALL: [Self; SUIT_COUNT] =
        [Self::Clovers, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Clovers => "Clovers",
            Self::Diamonds => "Diamonds",
            Self::Hearts => "Hearts",
            Self::Spades => "Spades",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Card rank, ordered Ace low through King.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Ace.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// Every rank in declaration order.
    pub const ALL: [Self; RANK_COUNT] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the name of the rank.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ace => "Ace",
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A playing card.
///
/// Jokers carry [`Rank::Ace`] and [`Suit::Clovers`] as placeholders. Those
/// fields never identify a real card, so a joker is only ever equal to, or
/// [matched](Card::matches) by, another joker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
    is_joker: bool,
}

impl Card {
    /// Creates a regular (non-joker) card.
    ///
    /// # Example
    ///
    /// ```
    /// use cardeck::{Card, Rank, Suit};
    ///
    /// let card = Card::new(Rank::Queen, Suit::Hearts);
    /// assert_eq!(card.to_string(), "Queen of Hearts");
    /// ```
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            is_joker: false,
        }
    }

    /// Creates a joker.
    #[must_use]
    pub const fn joker() -> Self {
        Self {
            rank: Rank::Ace,
            suit: Suit::Clovers,
            is_joker: true,
        }
    }

    /// Returns the rank. Meaningless for jokers.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the suit. Meaningless for jokers.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns whether this card is a joker.
    #[must_use]
    pub const fn is_joker(&self) -> bool {
        self.is_joker
    }

    /// Returns whether `other` shows the same face as this card.
    ///
    /// Regular cards match on rank and suit. Jokers match only other jokers,
    /// even though their placeholder fields equal the Ace of Clovers.
    ///
    /// # Example
    ///
    /// ```
    /// use cardeck::{Card, Rank, Suit};
    ///
    /// let ace = Card::new(Rank::Ace, Suit::Clovers);
    /// assert!(ace.matches(&Card::new(Rank::Ace, Suit::Clovers)));
    /// assert!(!ace.matches(&Card::joker()));
    /// assert!(Card::joker().matches(&Card::joker()));
    /// ```
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        match (self.is_joker, other.is_joker) {
            (true, true) => true,
            (false, false) => self.rank == other.rank && self.suit == other.suit,
            _ => false,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_joker {
            f.write_str("Joker")
        } else {
            write!(f, "{} of {}", self.rank, self.suit)
        }
    }
}

/// Number of suits in a standard deck.
pub const SUIT_COUNT: usize = 4;

/// Number of ranks per suit.
pub const RANK_COUNT: usize = 13;

/// Number of cards per deck.
pub const DECK_SIZE: usize = SUIT_COUNT * RANK_COUNT;

/// Returns the canonical deck: every suit in order, each holding Ace through King.
#[must_use]
pub fn standard_cards() -> [Card; DECK_SIZE] {
    let mut cards = [Card::joker(); DECK_SIZE];
    for (i, suit) in Suit::ALL.into_iter().enumerate() {
        for (j, rank) in Rank::ALL.into_iter().enumerate() {
            cards[i * RANK_COUNT + j] = Card::new(rank, suit);
        }
    }
    cards
}

/// Returns one card of `rank` per suit, in suit order.
///
/// Handy as an exclusion set for [`filter`](crate::options::filter).
///
/// # Example
///
/// ```
/// use cardeck::{Deck, Rank, options};
///
/// let deck = Deck::new(vec![options::filter([cardeck::cards_of_rank(Rank::Two)])]).unwrap();
/// assert_eq!(deck.len(), 48);
/// assert!(deck.iter().all(|card| card.rank() != Rank::Two));
/// ```
#[must_use]
pub fn cards_of_rank(rank: Rank) -> [Card; SUIT_COUNT] {
    Suit::ALL.map(|suit| Card::new(rank, suit))
}
