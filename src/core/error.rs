//! Engine error taxonomy.
//!
//! Every variant is a local, caller-correctable condition. A miss on a roll
//! is not an error. Operations that fail leave the match untouched.

use thiserror::Error;

use super::player::Player;
use super::state::Phase;
use crate::cards::CardId;

/// Why a card could not be placed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("stack {index} out of range (have {stack_count})")]
    StackOutOfRange { index: usize, stack_count: usize },
    #[error("card {0} is not in the unplaced pool")]
    CardNotAvailable(CardId),
    #[error("stack {0} is already full")]
    StackFull(usize),
    #[error("malformed card id {0:?}")]
    MalformedCardId(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("invalid placement: {0}")]
    InvalidPlacement(#[from] PlacementError),
    #[error("arrangement incomplete: {placed} of {required} cards placed")]
    ArrangementIncomplete { placed: usize, required: usize },
    #[error("cannot {action} during {phase}")]
    InvalidPhase { action: &'static str, phase: Phase },
    #[error("{0} has no cheat tokens remaining")]
    NoTokensRemaining(Player),
    #[error("roll number {0} is not on the die")]
    InvalidRoll(u8),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("snapshot error: {0}")]
    Snapshot(String),
}

impl From<bincode::Error> for EngineError {
    fn from(value: bincode::Error) -> Self {
        Self::Snapshot(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = EngineError::from(PlacementError::StackFull(4));
        assert_eq!(err.to_string(), "invalid placement: stack 4 is already full");

        let err = EngineError::InvalidPhase {
            action: "roll",
            phase: Phase::Arrangement { arranging: Player::One },
        };
        assert_eq!(err.to_string(), "cannot roll during arrangement (Player 1 arranging)");

        let err = EngineError::NoTokensRemaining(Player::Two);
        assert_eq!(err.to_string(), "Player 2 has no cheat tokens remaining");
    }
}
