//! Core engine types: players, dice, configuration, actions, errors, state.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Action, ActionRecord};
pub use config::{KnockoutRule, MatchConfig, MAX_STACK_COUNT};
pub use error::{EngineError, PlacementError};
pub use player::{Player, PlayerMap};
pub use rng::{DiceRng, DiceRngState, Roll, RollSource, ScriptedRolls};
pub use state::{MatchState, Phase};
