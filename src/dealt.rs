//! A card in play: immutable identity plus a face-up flag.

use crate::card::Card;

/// A card that has been drawn from the deck.
///
/// The identity never changes after the draw; only the face-up flag is
/// mutable, toggled with [`DealtCard::flip`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DealtCard {
    /// The card's identity.
    identity: Card,
    /// Whether the card face is showing.
    face_up: bool,
}

impl DealtCard {
    /// Creates a dealt card with the given starting face.
    #[must_use]
    pub const fn new(identity: Card, face_up: bool) -> Self {
        Self { identity, face_up }
    }

    /// Returns the card's identity.
    #[must_use]
    pub const fn identity(&self) -> Card {
        self.identity
    }

    /// Returns whether the card face is showing.
    #[must_use]
    pub const fn is_face_up(&self) -> bool {
        self.face_up
    }

    /// Toggles the face-up flag.
    ///
    /// Two consecutive flips restore the original face.
    pub const fn flip(&mut self) {
        self.face_up = !self.face_up;
    }
}
