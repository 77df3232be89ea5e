//! The deck: an ordered stack of undealt cards.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::Card;
use crate::composition::Composition;
use crate::error::DrawError;

/// An ordered stack of undealt cards.
///
/// The last element is the top of the deck; [`Deck::draw`] pops it. A deck
/// starts in composition order and is randomized in place with
/// [`Deck::shuffle`], which takes the random source explicitly so a seeded
/// generator gives a reproducible order.
///
/// # Example
///
/// ```
/// use cardtable::{Composition, Deck};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(42);
/// let mut deck = Deck::build(&Composition::standard());
/// deck.shuffle(&mut rng);
/// let card = deck.draw().unwrap();
/// let _ = card;
/// assert_eq!(deck.remaining(), 51);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Undealt cards, top of the deck last.
    cards: Vec<Card>,
}

impl Deck {
    /// Builds an unshuffled deck with one card per pair in the composition.
    #[must_use]
    pub fn build(composition: &Composition) -> Self {
        let mut cards = Vec::with_capacity(composition.size());
        cards.extend(composition.cards());
        Self { cards }
    }

    /// Creates a deck with an exact card order, top of the deck last.
    ///
    /// Useful for rigging draws in tests or restoring a known order.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Shuffles the deck in place.
    ///
    /// Uniform over permutations given a uniform random source; the multiset
    /// of cards is unchanged.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::EmptyDeck`] if no cards remain. Drawing stays
    /// unavailable until [`Deck::reset`] rebuilds the deck.
    pub fn draw(&mut self) -> Result<Card, DrawError> {
        self.cards.pop().ok_or(DrawError::EmptyDeck)
    }

    /// Returns the number of undealt cards.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is out of cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the undealt cards, top of the deck last.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Rebuilds the deck to the full composition and reshuffles it.
    ///
    /// Equivalent to [`Deck::build`] followed by [`Deck::shuffle`].
    pub fn reset<R: Rng + ?Sized>(&mut self, composition: &Composition, rng: &mut R) {
        self.cards.clear();
        self.cards.extend(composition.cards());
        self.cards.shuffle(rng);
    }
}
