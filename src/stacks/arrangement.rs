//! A player's full set of stacks.

use serde::{Deserialize, Serialize};

use super::stack::{Stack, StackState};
use crate::cards::Card;
use crate::core::error::PlacementError;

/// One player's stacks plus the cards knocked out of them.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Arrangement {
    stacks: Vec<Stack>,
    discard: Vec<Card>,
}

impl Arrangement {
    /// `stack_count` empty stacks.
    #[must_use]
    pub fn new(stack_count: usize) -> Self {
        Self {
            stacks: vec![Stack::Empty; stack_count],
            discard: Vec::new(),
        }
    }

    #[must_use]
    pub fn stacks(&self) -> &[Stack] {
        &self.stacks
    }

    #[must_use]
    pub fn stack(&self, index: usize) -> Option<&Stack> {
        self.stacks.get(index)
    }

    #[must_use]
    pub fn stack_count(&self) -> usize {
        self.stacks.len()
    }

    /// Knocked-out cards in elimination order.
    #[must_use]
    pub fn discard(&self) -> &[Card] {
        &self.discard
    }

    /// Check that `index` names a stack with a free slot.
    pub fn check_slot(&self, index: usize) -> Result<(), PlacementError> {
        match self.stacks.get(index) {
            None => Err(PlacementError::StackOutOfRange {
                index,
                stack_count: self.stacks.len(),
            }),
            Some(stack) if stack.state() == StackState::Full => Err(PlacementError::StackFull(index)),
            Some(_) => Ok(()),
        }
    }

    /// Place a card into the next free slot of stack `index`.
    pub fn place(&mut self, index: usize, card: Card) -> Result<StackState, PlacementError> {
        self.check_slot(index)?;
        self.stacks[index]
            .place(card)
            .map_err(|_| PlacementError::StackFull(index))
    }

    /// Cards currently sitting in stacks.
    #[must_use]
    pub fn placed_count(&self) -> usize {
        self.stacks.iter().map(Stack::card_count).sum()
    }

    /// Every stack holds two cards.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.stacks.iter().all(|s| s.state() == StackState::Full)
    }

    /// Every stack is empty. After arrangement this means the player lost.
    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.stacks.iter().all(|s| s.state() == StackState::Empty)
    }

    /// Stacks that can still be hit.
    pub fn live_stacks(&self) -> impl Iterator<Item = (usize, &Stack)> {
        self.stacks
            .iter()
            .enumerate()
            .filter(|(_, s)| s.state() != StackState::Empty)
    }

    /// Mutable access for the knockout resolver.
    pub(crate) fn stacks_mut(&mut self) -> &mut [Stack] {
        &mut self.stacks
    }

    pub(crate) fn push_discard(&mut self, card: Card) {
        self.discard.push(card);
    }
}
