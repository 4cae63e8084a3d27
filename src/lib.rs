//! # diicii-knockout
//!
//! Rules engine for a two-player dice-and-card knockout game.
//!
//! Each player secretly arranges twelve cards of their color into six
//! two-card stacks. Players then alternate rolling a die that yields a number
//! and a color; a roll knocks out an opponent's exposed card showing that
//! number and color. The first player whose stacks are all emptied loses.
//!
//! ## Design
//!
//! - **Single aggregate**: all match state lives in `MatchState`. No global
//!   or ambient state; the presentation layer owns the current value.
//!
//! - **Injected randomness**: the engine never rolls on its own. Callers pass
//!   a `Roll` or a `RollSource`, so every transition is deterministic and
//!   replayable from the action history.
//!
//! - **Atomic operations**: each operation validates before mutating, so a
//!   rejected call leaves the state unchanged.
//!
//! ## Modules
//!
//! - `core`: players, dice, configuration, actions, errors, state
//! - `cards`: card identity and deck generation
//! - `stacks`: two-slot stacks and per-player arrangements
//! - `rules`: knockout resolution, win condition, engine operations
//! - `view`: per-player projections with concealment applied
//!
//! ## Example
//!
//! ```
//! use diicii_knockout::{DiceRng, MatchState, Phase};
//!
//! let mut state = MatchState::new();
//!
//! // Both players stack their cards in pool order.
//! for _ in 0..2 {
//!     let player = state.arranging_player().unwrap();
//!     while let Some(card) = state.unplaced().first().map(|c| c.id()) {
//!         let stack = state.arrangement(player).placed_count() / 2;
//!         state.place_card(stack, card).unwrap();
//!     }
//!     state.lock_arrangement().unwrap();
//! }
//!
//! let mut dice = DiceRng::new(42);
//! while state.winner().is_none() {
//!     state.roll_dice(&mut dice).unwrap();
//! }
//! assert!(matches!(state.phase(), Phase::Victory { .. }));
//! ```

pub mod cards;
pub mod core;
pub mod rules;
pub mod stacks;
pub mod view;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, DiceRng, DiceRngState, EngineError, KnockoutRule, MatchConfig,
    MatchState, Phase, PlacementError, Player, PlayerMap, Roll, RollSource, ScriptedRolls,
};

pub use crate::cards::{Card, CardId, Color};

pub use crate::stacks::{Arrangement, Stack, StackState};

pub use crate::rules::{Knockout, RollOutcome};

pub use crate::view::{MatchView, SlotView, StackView};
