//! Table engine: the command surface a front end drives.

extern crate alloc;

use core::sync::atomic::{AtomicU8, Ordering};

use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::sync::Mutex;

use crate::dealt::DealtCard;
use crate::deck::Deck;
use crate::error::DrawError;
use crate::options::TableOptions;

/// A card table that manages the deck and the cards in play.
///
/// The table owns the deck, the random source, and the registry of dealt
/// cards. The front end drives it through explicit commands: [`Table::draw`]
/// for a pick-up, [`Table::flip`] for a face toggle, [`Table::reset`] to
/// gather everything back into a fresh shuffle. Use [`TableOptions`] to
/// configure the composition and the starting face of drawn cards.
pub struct Table {
    /// The deck of undealt cards.
    pub deck: Mutex<Deck>,
    /// Table options.
    pub options: TableOptions,
    /// Next card ID to assign.
    next_id: AtomicU8,
    /// Cards in play (`card_id` -> dealt card).
    pub dealt: Mutex<HashMap<u8, DealtCard>>,
    /// Card IDs in deal order.
    dealt_order: Mutex<Vec<u8>>,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

impl Table {
    /// Creates a new table with the given seed.
    ///
    /// The deck is built from the configured composition and shuffled once.
    ///
    /// # Example
    ///
    /// ```
    /// use cardtable::{Table, TableOptions};
    ///
    /// let table = Table::new(TableOptions::default(), 42);
    /// assert_eq!(table.remaining(), 52);
    /// ```
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::build(&options.composition);
        deck.shuffle(&mut rng);

        Self {
            deck: Mutex::new(deck),
            options,
            next_id: AtomicU8::new(0),
            dealt: Mutex::new(HashMap::new()),
            dealt_order: Mutex::new(Vec::new()),
            rng: Mutex::new(rng),
        }
    }

    /// Draws the top card and puts it in play.
    ///
    /// The card starts face up or face down per
    /// [`TableOptions::deal_face_up`]. Returns the ID assigned to the card.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::EmptyDeck`] if the deck is out of cards.
    pub fn draw(&self) -> Result<u8, DrawError> {
        let card = self.deck.lock().draw()?;

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.dealt
            .lock()
            .insert(id, DealtCard::new(card, self.options.deal_face_up));
        self.dealt_order.lock().push(id);
        Ok(id)
    }

    /// Returns the dealt card with the given ID.
    pub fn card(&self, card_id: u8) -> Option<DealtCard> {
        self.dealt.lock().get(&card_id).copied()
    }

    /// Flips the dealt card with the given ID.
    ///
    /// Returns the new face-up value, or `None` if the ID is not in play.
    pub fn flip(&self, card_id: u8) -> Option<bool> {
        let mut dealt = self.dealt.lock();
        let card = dealt.get_mut(&card_id)?;
        card.flip();
        Some(card.is_face_up())
    }

    /// Removes the dealt card with the given ID from play.
    ///
    /// The card does not return to the deck; [`Table::reset`] rebuilds the
    /// full composition. Returns the removed card, or `None` if the ID is
    /// not in play.
    pub fn discard(&self, card_id: u8) -> Option<DealtCard> {
        let removed = self.dealt.lock().remove(&card_id);
        if removed.is_some() {
            self.dealt_order.lock().retain(|&id| id != card_id);
        }
        removed
    }

    /// Returns the cards in play, in deal order.
    pub fn dealt_cards(&self) -> Vec<(u8, DealtCard)> {
        let order = self.dealt_order.lock();
        let dealt = self.dealt.lock();
        order
            .iter()
            .filter_map(|id| dealt.get(id).map(|card| (*id, *card)))
            .collect()
    }

    /// Returns the number of cards in play.
    pub fn dealt_count(&self) -> usize {
        self.dealt.lock().len()
    }

    /// Returns the number of undealt cards in the deck.
    pub fn remaining(&self) -> usize {
        self.deck.lock().remaining()
    }

    /// Returns whether the deck is out of cards.
    pub fn deck_is_empty(&self) -> bool {
        self.deck.lock().is_empty()
    }

    /// Gathers all cards back and reshuffles.
    ///
    /// Every card in play is cleared, the deck is rebuilt to the full
    /// configured composition and reshuffled, and card IDs restart at 0.
    #[expect(
        clippy::significant_drop_tightening,
        reason = "locks are held for entire operation"
    )]
    pub fn reset(&self) {
        self.dealt.lock().clear();
        self.dealt_order.lock().clear();
        self.next_id.store(0, Ordering::SeqCst);

        let mut deck = self.deck.lock();
        let mut rng = self.rng.lock();
        deck.reset(&self.options.composition, &mut rng);
    }
}
