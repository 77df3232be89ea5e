//! A card table engine with optional `no_std` support.
//!
//! The crate provides a [`Table`] type that owns a shuffled [`Deck`] and the
//! cards in play, driven by explicit commands: draw, flip, discard, reset.
//! The deck is built from a [`Composition`] (the full 52-card set or a
//! reduced one) and shuffled with a seeded random source, so a front end
//! gets reproducible deals from the same seed.
//!
//! # Example
//!
//! ```
//! use cardtable::{Table, TableOptions};
//!
//! let table = Table::new(TableOptions::default(), 42);
//! let id = table.draw().unwrap();
//! table.flip(id);
//! table.reset();
//! assert_eq!(table.remaining(), 52);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod composition;
pub mod dealt;
pub mod deck;
pub mod error;
pub mod options;
pub mod table;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use composition::Composition;
pub use dealt::DealtCard;
pub use deck::Deck;
pub use error::DrawError;
pub use options::TableOptions;
pub use table::Table;
