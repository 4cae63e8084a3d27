//! Match state: the single aggregate the engine owns.
//!
//! ## Phase
//!
//! `Arrangement(arranging)` -> `Gameplay(turn)` -> `Victory(winner)`.
//! Victory is terminal; only a reset starts a new match.
//!
//! ## MatchState
//!
//! - Phase and turn counter
//! - Both players' arrangements (and discard piles)
//! - The arranging player's unplaced pool
//! - Cheat-token balances
//! - Last roll and the action history
//!
//! Collaborators read it through accessors or `view_for`; all mutation goes
//! through the operations in `rules`. `im::Vector` keeps history clones
//! cheap, which matters because the functional API clones per call.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{Action, ActionRecord};
use super::config::MatchConfig;
use super::error::EngineError;
use super::player::{Player, PlayerMap};
use super::rng::Roll;
use crate::cards::{create_deck, Card, MAX_NUMBER, MIN_NUMBER};
use crate::stacks::Arrangement;

/// Where the match is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Arrangement { arranging: Player },
    Gameplay { turn: Player },
    Victory { winner: Player },
}

impl Phase {
    /// The player expected to act, if any.
    #[must_use]
    pub fn acting_player(self) -> Option<Player> {
        match self {
            Phase::Arrangement { arranging } => Some(arranging),
            Phase::Gameplay { turn } => Some(turn),
            Phase::Victory { .. } => None,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Arrangement { arranging } => write!(f, "arrangement ({arranging} arranging)"),
            Phase::Gameplay { turn } => write!(f, "gameplay ({turn} to roll)"),
            Phase::Victory { winner } => write!(f, "victory ({winner} won)"),
        }
    }
}

/// Complete state of one match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    config: MatchConfig,

    pub(crate) phase: Phase,

    /// Turn number during gameplay (starts at 1).
    pub(crate) turn_number: u32,

    pub(crate) arrangements: PlayerMap<Arrangement>,

    /// Cards the arranging player has not placed yet.
    pub(crate) unplaced: Vec<Card>,

    pub(crate) cheat_tokens: PlayerMap<u8>,

    pub(crate) last_roll: Option<Roll>,

    /// Every successful action, in order.
    pub(crate) history: Vector<ActionRecord>,
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchState {
    /// Fresh standard match: Player 1 arranging with a full green deck.
    #[must_use]
    pub fn new() -> Self {
        Self::fresh(MatchConfig::default())
    }

    /// Fresh match with a custom configuration.
    pub fn with_config(config: MatchConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self::fresh(config))
    }

    fn fresh(config: MatchConfig) -> Self {
        let stack_count = config.stack_count;
        Self {
            phase: Phase::Arrangement {
                arranging: Player::One,
            },
            turn_number: 1,
            arrangements: PlayerMap::new(|_| Arrangement::new(stack_count)),
            unplaced: create_deck(Player::One, config.deck_size()),
            cheat_tokens: PlayerMap::with_value(config.cheat_tokens),
            last_roll: None,
            history: Vector::new(),
            config,
        }
    }

    /// Throw the match away and start over with the same configuration.
    pub fn reset(&mut self) {
        log::info!("match reset");
        *self = Self::fresh(self.config.clone());
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// The arranging player, during arrangement.
    #[must_use]
    pub fn arranging_player(&self) -> Option<Player> {
        match self.phase {
            Phase::Arrangement { arranging } => Some(arranging),
            _ => None,
        }
    }

    /// The player whose turn it is, during gameplay.
    #[must_use]
    pub fn turn_player(&self) -> Option<Player> {
        match self.phase {
            Phase::Gameplay { turn } => Some(turn),
            _ => None,
        }
    }

    /// The winner, once the match is over.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        match self.phase {
            Phase::Victory { winner } => Some(winner),
            _ => None,
        }
    }

    #[must_use]
    pub fn arrangement(&self, player: Player) -> &Arrangement {
        &self.arrangements[player]
    }

    /// The arranging player's unplaced pool (empty outside arrangement).
    #[must_use]
    pub fn unplaced(&self) -> &[Card] {
        &self.unplaced
    }

    #[must_use]
    pub fn cheat_tokens(&self, player: Player) -> u8 {
        self.cheat_tokens[player]
    }

    #[must_use]
    pub fn last_roll(&self) -> Option<Roll> {
        self.last_roll
    }

    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    // === History ===

    pub(crate) fn record(&mut self, player: Player, action: Action) {
        let sequence = u32::try_from(self.history.len()).unwrap_or(u32::MAX);
        let record = ActionRecord::new(player, action, self.turn_number, sequence);
        self.history.push_back(record);
    }

    // === Snapshots ===

    /// Encode the whole match as bytes.
    pub fn snapshot(&self) -> Result<Vec<u8>, EngineError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a match produced by `snapshot`.
    ///
    /// Rejects bytes whose arrangements do not fit the embedded config or
    /// whose cards could not have come from a real deck.
    pub fn restore(bytes: &[u8]) -> Result<Self, EngineError> {
        let state: Self = bincode::deserialize(bytes)?;
        state.check_shape()?;
        Ok(state)
    }

    fn check_shape(&self) -> Result<(), EngineError> {
        self.config.validate()?;

        let on_die = |card: &Card| (MIN_NUMBER..=MAX_NUMBER).contains(&card.number());

        for (player, arrangement) in self.arrangements.iter() {
            if arrangement.stack_count() != self.config.stack_count {
                return Err(EngineError::Snapshot(format!(
                    "{player} has {} stacks, config expects {}",
                    arrangement.stack_count(),
                    self.config.stack_count
                )));
            }

            let mut cards = arrangement
                .stacks()
                .iter()
                .flat_map(|s| s.cards())
                .chain(arrangement.discard());
            if let Some(card) = cards.find(|c| c.owner() != player || !on_die(*c)) {
                return Err(EngineError::Snapshot(format!(
                    "{player}'s arrangement holds foreign card {}",
                    card.id()
                )));
            }
        }

        if let Some(card) = self.unplaced.iter().find(|c| !on_die(*c)) {
            return Err(EngineError::Snapshot(format!("unplaced card {} is off the die", card.id())));
        }
        Ok(())
    }
}
