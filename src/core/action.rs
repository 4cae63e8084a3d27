//! Action representation and history records.
//!
//! An `Action` is one engine operation with its arguments. Collaborators may
//! call the dedicated methods directly or route everything through
//! `rules::apply_action`; either way, successful actions are recorded as
//! `ActionRecord`s so a match can be replayed exactly.

use serde::{Deserialize, Serialize};

use super::player::Player;
use super::rng::Roll;
use crate::cards::CardId;

/// A complete engine action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Move a card from the unplaced pool onto a stack.
    PlaceCard { stack: usize, card: CardId },
    /// Freeze the arranging player's stacks.
    LockArrangement,
    /// Resolve a die roll from the random source.
    Roll(Roll),
    /// Spend a cheat token to resolve a chosen roll.
    Cheat(Roll),
}

impl Action {
    /// Short verb for logs and phase errors.
    #[must_use]
    pub const fn verb(&self) -> &'static str {
        match self {
            Action::PlaceCard { .. } => "place a card",
            Action::LockArrangement => "lock an arrangement",
            Action::Roll(_) => "roll",
            Action::Cheat(_) => "spend a cheat token",
        }
    }
}

/// A recorded action with metadata for history tracking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: Player,

    /// The action taken.
    pub action: Action,

    /// Turn number when the action was taken.
    pub turn: u32,

    /// Position in the match's history.
    pub sequence: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: Player, action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            turn,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Color;

    #[test]
    fn test_action_equality() {
        let card = CardId::new(Player::One, 2, 0);
        let a1 = Action::PlaceCard { stack: 0, card };
        let a2 = Action::PlaceCard { stack: 0, card };
        let a3 = Action::PlaceCard { stack: 1, card };

        assert_eq!(a1, a2);
        assert_ne!(a1, a3);

        let roll = Roll::new(3, Color::Red).unwrap();
        assert_ne!(Action::Roll(roll), Action::Cheat(roll));
    }

    #[test]
    fn test_action_record_serialization() {
        let roll = Roll::new(4, Color::Green).unwrap();
        let record = ActionRecord::new(Player::Two, Action::Cheat(roll), 3, 17);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
