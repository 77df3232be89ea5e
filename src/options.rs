//! Table configuration options.

use crate::composition::Composition;

/// Configuration options for a card table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use cardtable::{Composition, Rank, Suit, TableOptions};
///
/// let options = TableOptions::default()
///     .with_composition(Composition::standard().without(Rank::Ace, Suit::Spades))
///     .with_deal_face_up(false);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// The composition the deck is built from.
    pub composition: Composition,
    /// Whether drawn cards start face up.
    pub deal_face_up: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            composition: Composition::standard(),
            deal_face_up: true,
        }
    }
}

impl TableOptions {
    /// Sets the deck composition.
    ///
    /// # Example
    ///
    /// ```
    /// use cardtable::{Composition, Rank, Suit, TableOptions};
    ///
    /// let composition = Composition::standard().without(Rank::King, Suit::Clubs);
    /// let options = TableOptions::default().with_composition(composition.clone());
    /// assert_eq!(options.composition, composition);
    /// ```
    #[must_use]
    pub fn with_composition(mut self, composition: Composition) -> Self {
        self.composition = composition;
        self
    }

    /// Sets whether drawn cards start face up.
    ///
    /// # Example
    ///
    /// ```
    /// use cardtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_deal_face_up(false);
    /// assert!(!options.deal_face_up);
    /// ```
    #[must_use]
    pub const fn with_deal_face_up(mut self, face_up: bool) -> Self {
        self.deal_face_up = face_up;
        self
    }
}
