//! Stacks and arrangements.
//!
//! A `Stack` is a bottom/top pair of slots; an `Arrangement` is one
//! player's row of stacks together with the cards knocked out of them.

pub mod arrangement;
pub mod stack;

pub use arrangement::Arrangement;
pub use stack::{Stack, StackState};
