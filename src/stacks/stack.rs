//! A single two-card stack.
//!
//! The bottom slot always fills first, so "top occupied, bottom empty" is
//! not representable. During gameplay a stack only ever moves
//! Full -> Half -> Empty.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::Roll;

/// Occupancy of a stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StackState {
    Empty,
    Half,
    Full,
}

impl std::fmt::Display for StackState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            StackState::Empty => "empty",
            StackState::Half => "half",
            StackState::Full => "full",
        })
    }
}

/// Bottom/top pair of card slots.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stack {
    #[default]
    Empty,
    /// Bottom occupied, top empty. The bottom card is exposed.
    Half { bottom: Card },
    /// Both occupied. The top card is exposed, the bottom concealed.
    Full { bottom: Card, top: Card },
}

impl Stack {
    #[must_use]
    pub fn state(&self) -> StackState {
        match self {
            Stack::Empty => StackState::Empty,
            Stack::Half { .. } => StackState::Half,
            Stack::Full { .. } => StackState::Full,
        }
    }

    #[must_use]
    pub fn bottom(&self) -> Option<&Card> {
        match self {
            Stack::Empty => None,
            Stack::Half { bottom } | Stack::Full { bottom, .. } => Some(bottom),
        }
    }

    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        match self {
            Stack::Full { top, .. } => Some(top),
            _ => None,
        }
    }

    /// The only card a roll can hit: top if present, else bottom.
    #[must_use]
    pub fn exposed(&self) -> Option<&Card> {
        self.top().or_else(|| self.bottom())
    }

    /// Cards currently in the stack, bottom first.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.bottom().into_iter().chain(self.top())
    }

    #[must_use]
    pub fn card_count(&self) -> usize {
        match self {
            Stack::Empty => 0,
            Stack::Half { .. } => 1,
            Stack::Full { .. } => 2,
        }
    }

    /// Fill the next slot, bottom before top.
    ///
    /// Hands the card back if the stack is already full.
    pub fn place(&mut self, card: Card) -> Result<StackState, Card> {
        *self = match *self {
            Stack::Empty => Stack::Half { bottom: card },
            Stack::Half { bottom } => Stack::Full { bottom, top: card },
            Stack::Full { .. } => return Err(card),
        };
        Ok(self.state())
    }

    /// Apply a roll to the exposed card.
    ///
    /// On a match the exposed card is marked knocked out and leaves its slot:
    /// Full becomes Half (the bottom is now exposed) and Half becomes Empty.
    /// Returns the eliminated card, or `None` on a miss.
    pub fn knock_out(&mut self, roll: Roll) -> Option<Card> {
        let (mut hit, next) = match *self {
            Stack::Full { bottom, top } if top.matches(roll.number(), roll.color()) => {
                (top, Stack::Half { bottom })
            }
            Stack::Half { bottom } if bottom.matches(roll.number(), roll.color()) => {
                (bottom, Stack::Empty)
            }
            _ => return None,
        };

        hit.knock_out();
        *self = next;
        Some(hit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, Color};
    use crate::core::Player;

    fn red(number: u8, copy: u8) -> Card {
        Card::new(CardId::new(Player::Two, number, copy))
    }

    fn roll(number: u8, color: Color) -> Roll {
        Roll::new(number, color).unwrap()
    }

    fn full(bottom: Card, top: Card) -> Stack {
        Stack::Full { bottom, top }
    }

    #[test]
    fn test_place_bottom_then_top() {
        let mut stack = Stack::default();
        assert_eq!(stack.state(), StackState::Empty);

        assert_eq!(stack.place(red(1, 0)), Ok(StackState::Half));
        assert_eq!(stack.bottom(), Some(&red(1, 0)));
        assert_eq!(stack.top(), None);

        assert_eq!(stack.place(red(2, 0)), Ok(StackState::Full));
        assert_eq!(stack.bottom(), Some(&red(1, 0)));
        assert_eq!(stack.top(), Some(&red(2, 0)));
    }

    #[test]
    fn test_place_into_full_returns_card() {
        let mut stack = full(red(1, 0), red(2, 0));
        let before = stack;

        assert_eq!(stack.place(red(3, 0)), Err(red(3, 0)));
        assert_eq!(stack, before);
    }

    #[test]
    fn test_exposed() {
        assert_eq!(Stack::Empty.exposed(), None);
        assert_eq!(Stack::Half { bottom: red(5, 0) }.exposed(), Some(&red(5, 0)));
        assert_eq!(full(red(5, 0), red(6, 1)).exposed(), Some(&red(6, 1)));
    }

    #[test]
    fn test_top_hit_exposes_bottom() {
        let mut stack = full(red(2, 0), red(3, 0));

        let hit = stack.knock_out(roll(3, Color::Red)).unwrap();

        assert_eq!(hit.id(), red(3, 0).id());
        assert!(hit.is_knocked_out());
        assert_eq!(stack, Stack::Half { bottom: red(2, 0) });
        assert!(!stack.exposed().unwrap().is_knocked_out());
    }

    #[test]
    fn test_bottom_hit_empties() {
        let mut stack = Stack::Half { bottom: red(5, 1) };

        let hit = stack.knock_out(roll(5, Color::Red)).unwrap();

        assert!(hit.is_knocked_out());
        assert_eq!(stack, Stack::Empty);
    }

    #[test]
    fn test_concealed_bottom_not_targetable() {
        let mut stack = full(red(4, 0), red(1, 0));
        let before = stack;

        assert_eq!(stack.knock_out(roll(4, Color::Red)), None);
        assert_eq!(stack, before);
    }

    #[test]
    fn test_miss_and_wrong_color() {
        let mut stack = full(red(4, 0), red(1, 0));
        let before = stack;

        assert_eq!(stack.knock_out(roll(1, Color::Green)), None);
        assert_eq!(stack.knock_out(roll(2, Color::Red)), None);
        assert_eq!(stack, before);

        let mut empty = Stack::Empty;
        assert_eq!(empty.knock_out(roll(1, Color::Red)), None);
        assert_eq!(empty, Stack::Empty);
    }

    #[test]
    fn test_cards_iteration() {
        let stack = full(red(1, 0), red(2, 0));
        let numbers: Vec<_> = stack.cards().map(Card::number).collect();
        assert_eq!(numbers, vec![1, 2]);
        assert_eq!(stack.card_count(), 2);
    }
}
