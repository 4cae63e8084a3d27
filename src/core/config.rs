//! Match configuration.
//!
//! The defaults are the standard game: six stacks per player (twelve cards,
//! two of each number) and three cheat tokens each. Builder methods allow
//! variants; `validate` rejects shapes the deck generator cannot fill.

use serde::{Deserialize, Serialize};

use super::error::EngineError;
use crate::cards::FACE_COUNT;

/// Largest stack count whose deck fits `u8` copy indices per face.
pub const MAX_STACK_COUNT: usize = u8::MAX as usize * FACE_COUNT / 2;

/// How many stacks a single roll may resolve.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum KnockoutRule {
    /// Only the lowest-index matching stack is hit. At most one card leaves
    /// play per roll.
    #[default]
    FirstMatch,
    /// Every stack whose exposed card matches is hit on the same roll.
    AllMatching,
}

/// Complete match configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Stacks per player. Each holds two cards.
    pub stack_count: usize,

    /// Starting cheat tokens per player.
    pub cheat_tokens: u8,

    /// Resolution rule for rolls that match several exposed cards.
    pub knockout_rule: KnockoutRule,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            stack_count: 6,
            cheat_tokens: 3,
            knockout_rule: KnockoutRule::FirstMatch,
        }
    }
}

impl MatchConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_stack_count(mut self, count: usize) -> Self {
        self.stack_count = count;
        self
    }

    #[must_use]
    pub fn with_cheat_tokens(mut self, tokens: u8) -> Self {
        self.cheat_tokens = tokens;
        self
    }

    #[must_use]
    pub fn with_knockout_rule(mut self, rule: KnockoutRule) -> Self {
        self.knockout_rule = rule;
        self
    }

    /// Cards in each player's deck.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.stack_count * 2
    }

    /// Check that every face number fits the deck an equal number of times.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.stack_count == 0 || self.deck_size() % FACE_COUNT != 0 {
            return Err(EngineError::InvalidConfig(format!(
                "stack count must be a positive multiple of {}, got {}",
                FACE_COUNT / 2,
                self.stack_count
            )));
        }
        if self.stack_count > MAX_STACK_COUNT {
            return Err(EngineError::InvalidConfig(format!(
                "stack count {} exceeds the maximum of {MAX_STACK_COUNT}",
                self.stack_count
            )));
        }
        Ok(())
    }
}
