//! Cards and decks.
//!
//! - `Color`: green or red, shared by cards and the die
//! - `CardId`: owner + number + copy, unique across both decks
//! - `Card`: a card in play with its knocked-out flag
//! - `create_deck`: the per-player deck generator

pub mod card;
pub mod deck;

pub use card::{Card, CardId, Color};
pub use deck::{create_deck, ids_unique, FACE_COUNT, MAX_NUMBER, MIN_NUMBER};
