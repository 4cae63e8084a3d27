//! Game rules.
//!
//! - `knockout`: applying a roll to the defender's stacks
//! - `victory`: the loss condition
//! - `engine`: phase-checked operations on `MatchState`
//! - `actions`: the value-returning interface, dispatch, legal actions, replay

pub mod actions;
pub mod engine;
pub mod knockout;
pub mod victory;

pub use actions::{
    apply_action, can_lock, legal_actions, lock_arrangement, place_card, replay, reset_game,
    roll_and_resolve, use_cheat_token,
};
pub use engine::RollOutcome;
pub use knockout::{resolve_roll, Knockout, Knockouts};
pub use victory::has_lost;
