//! Win-condition evaluation.

use crate::core::{MatchState, Phase, Player};
use crate::stacks::Arrangement;

/// A player has lost once every one of their stacks is empty.
#[must_use]
pub fn has_lost(arrangement: &Arrangement) -> bool {
    arrangement.is_cleared()
}

/// Check the defender after `attacker` resolved a roll.
///
/// Only the defender is evaluated: a player cannot lose on their own roll.
#[must_use]
pub fn evaluate(state: &MatchState, attacker: Player) -> Option<Player> {
    if !matches!(state.phase(), Phase::Gameplay { .. }) {
        return None;
    }
    has_lost(state.arrangement(attacker.other())).then_some(attacker)
}
