//! Deck generation.
//!
//! A deck holds every face number 1..=6 the same number of times, all in the
//! owner's color. With the default six stacks that is twelve cards, two of
//! each number.

use rustc_hash::FxHashSet;

use super::card::{Card, CardId};
use crate::core::Player;

/// Lowest face on the die.
pub const MIN_NUMBER: u8 = 1;
/// Highest face on the die.
pub const MAX_NUMBER: u8 = 6;
/// Number of distinct faces.
pub const FACE_COUNT: usize = (MAX_NUMBER - MIN_NUMBER + 1) as usize;

/// Build a fresh deck of `size` cards for `owner`.
///
/// Cards come out grouped by number, copies adjacent:
/// `1,1,2,2,...,6,6` for the default size. `size` must be a positive multiple
/// of [`FACE_COUNT`] with at most `u8::MAX` copies per face;
/// `MatchConfig::validate` guarantees both.
#[must_use]
pub fn create_deck(owner: Player, size: usize) -> Vec<Card> {
    let copies = (size / FACE_COUNT) as u8;

    (MIN_NUMBER..=MAX_NUMBER)
        .flat_map(|number| (0..copies).map(move |copy| Card::new(CardId::new(owner, number, copy))))
        .collect()
}

/// True if no two cards share an id.
#[must_use]
pub fn ids_unique<'a>(cards: impl IntoIterator<Item = &'a Card>) -> bool {
    let mut seen = FxHashSet::default();
    cards.into_iter().all(|card| seen.insert(card.id()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Color;

    #[test]
    fn test_default_deck_shape() {
        let deck = create_deck(Player::One, 12);

        assert_eq!(deck.len(), 12);
        for number in MIN_NUMBER..=MAX_NUMBER {
            assert_eq!(deck.iter().filter(|c| c.number() == number).count(), 2);
        }
        assert!(deck.iter().all(|c| c.color() == Color::Green));
        assert!(deck.iter().all(|c| !c.is_knocked_out()));
    }

    #[test]
    fn test_player_two_is_red() {
        let deck = create_deck(Player::Two, 12);
        assert!(deck.iter().all(|c| c.color() == Color::Red && c.owner() == Player::Two));
    }

    #[test]
    fn test_ids_unique_across_decks() {
        let p1 = create_deck(Player::One, 12);
        let p2 = create_deck(Player::Two, 12);

        assert!(ids_unique(&p1));
        assert!(ids_unique(p1.iter().chain(p2.iter())));
    }

    #[test]
    fn test_ids_unique_detects_duplicates() {
        let mut deck = create_deck(Player::One, 12);
        deck.push(deck[0]);
        assert!(!ids_unique(&deck));
    }

    #[test]
    fn test_larger_deck() {
        let deck = create_deck(Player::Two, 18);
        assert_eq!(deck.len(), 18);
        assert_eq!(deck.iter().filter(|c| c.number() == 6).count(), 3);
        assert!(ids_unique(&deck));
    }
}
