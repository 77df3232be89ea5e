//! Deck compositions: the enumerable set of cards a deck is built from.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// The set of cards a deck is built from.
///
/// A composition is the full 52-card set minus an explicitly enumerated
/// excluded subset. Building a deck from a composition yields exactly one
/// card per remaining (rank, suit) pair, so a deck never contains
/// duplicates by construction.
///
/// # Example
///
/// ```
/// use cardtable::{Composition, Rank, Suit};
///
/// let composition = Composition::standard()
///     .without_all(&[Rank::Jack, Rank::Queen, Rank::King, Rank::Ace],
///                  &[Suit::Hearts, Suit::Diamonds]);
/// assert_eq!(composition.size(), 44);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Composition {
    /// Cards excluded from the full set. Kept duplicate-free.
    excluded: Vec<Card>,
}

impl Composition {
    /// The full 52-card composition.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            excluded: Vec::new(),
        }
    }

    /// Excludes a single card.
    ///
    /// Excluding a card twice has no further effect.
    ///
    /// # Example
    ///
    /// ```
    /// use cardtable::{Composition, Rank, Suit};
    ///
    /// let composition = Composition::standard().without(Rank::Ace, Suit::Spades);
    /// assert_eq!(composition.size(), 51);
    /// ```
    #[must_use]
    pub fn without(mut self, rank: Rank, suit: Suit) -> Self {
        let card = Card::new(suit, rank);
        if !self.excluded.contains(&card) {
            self.excluded.push(card);
        }
        self
    }

    /// Excludes the cross product of the given ranks and suits.
    #[must_use]
    pub fn without_all(mut self, ranks: &[Rank], suits: &[Suit]) -> Self {
        for &suit in suits {
            for &rank in ranks {
                self = self.without(rank, suit);
            }
        }
        self
    }

    /// Returns whether the composition contains the given card.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        !self.excluded.contains(&card)
    }

    /// Returns the number of cards in the composition.
    #[must_use]
    pub fn size(&self) -> usize {
        DECK_SIZE - self.excluded.len()
    }

    /// Enumerates the composition, suit-major and rank-ascending.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        Suit::ALL
            .into_iter()
            .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Card::new(suit, rank)))
            .filter(|card| self.contains(*card))
    }
}
