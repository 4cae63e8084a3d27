//! Engine operations on `MatchState`.
//!
//! Every operation checks the phase first, validates all of its input, and
//! only then mutates. A rejected operation leaves the state exactly as it
//! was and is logged at `warn`.
//!
//! Roll resolution runs in a fixed order:
//! 1. apply the roll to the defender's stacks
//! 2. evaluate the defender for a loss; on a loss the match ends and the
//!    turn does not advance
//! 3. otherwise hand the turn to the other player, hit or miss

use serde::{Deserialize, Serialize};

use super::knockout::{resolve_roll, Knockouts};
use super::victory;
use crate::cards::{create_deck, CardId, Color};
use crate::core::{
    Action, EngineError, MatchState, Phase, PlacementError, Player, Roll, RollSource,
};
use crate::stacks::StackState;

/// What a resolved roll did, for the collaborator to stage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollOutcome {
    /// The attacking player.
    pub roller: Player,
    pub roll: Roll,
    /// A cheat token paid for this roll.
    pub cheated: bool,
    pub knockouts: Knockouts,
    /// Set when this roll emptied the defender's last stack.
    pub winner: Option<Player>,
    /// Whose turn it is now; `None` once the match is over.
    pub next_turn: Option<Player>,
}

impl RollOutcome {
    #[must_use]
    pub fn is_hit(&self) -> bool {
        !self.knockouts.is_empty()
    }
}

pub(crate) const PLACE: &str = "place a card";
const ROLL: &str = "roll";
const CHEAT: &str = "spend a cheat token";

pub(crate) fn logged<T>(verb: &str, result: Result<T, EngineError>) -> Result<T, EngineError> {
    if let Err(err) = &result {
        log::warn!("rejected attempt to {verb}: {err}");
    }
    result
}

impl MatchState {
    pub(crate) fn require_arrangement(&self, verb: &'static str) -> Result<Player, EngineError> {
        self.arranging_player().ok_or(EngineError::InvalidPhase {
            action: verb,
            phase: self.phase,
        })
    }

    fn require_gameplay(&self, verb: &'static str) -> Result<Player, EngineError> {
        self.turn_player().ok_or(EngineError::InvalidPhase {
            action: verb,
            phase: self.phase,
        })
    }

    // === Arrangement ===

    /// Move `card` from the unplaced pool onto stack `stack_index`.
    ///
    /// Fills the bottom slot first, then the top. Returns the stack's new
    /// occupancy.
    pub fn place_card(&mut self, stack_index: usize, card: CardId) -> Result<StackState, EngineError> {
        let action = Action::PlaceCard {
            stack: stack_index,
            card,
        };
        let result = self.apply_placement(stack_index, card, action);
        logged(action.verb(), result)
    }

    fn apply_placement(
        &mut self,
        stack_index: usize,
        card_id: CardId,
        action: Action,
    ) -> Result<StackState, EngineError> {
        let player = self.require_arrangement(action.verb())?;
        self.arrangements[player].check_slot(stack_index)?;

        let pos = self
            .unplaced
            .iter()
            .position(|c| c.id() == card_id)
            .ok_or(PlacementError::CardNotAvailable(card_id))?;

        let card = self.unplaced.remove(pos);
        let occupancy = self.arrangements[player].place(stack_index, card)?;

        log::debug!("{player} placed {card_id} on stack {stack_index} ({occupancy})");
        self.record(player, action);
        Ok(occupancy)
    }

    /// True iff the arranging player has filled every stack.
    #[must_use]
    pub fn can_lock(&self) -> bool {
        self.arranging_player().is_some_and(|player| {
            self.unplaced.is_empty() && self.arrangements[player].is_complete()
        })
    }

    /// Freeze the arranging player's stacks.
    ///
    /// Player 1 hands over to Player 2, who receives a fresh red deck.
    /// Player 2 locking starts gameplay with Player 1 to roll.
    pub fn lock_arrangement(&mut self) -> Result<Phase, EngineError> {
        let action = Action::LockArrangement;
        let result = self.apply_lock();
        logged(action.verb(), result)
    }

    fn apply_lock(&mut self) -> Result<Phase, EngineError> {
        let player = self.require_arrangement(Action::LockArrangement.verb())?;
        if !self.can_lock() {
            return Err(EngineError::ArrangementIncomplete {
                placed: self.arrangements[player].placed_count(),
                required: self.config().deck_size(),
            });
        }

        self.record(player, Action::LockArrangement);
        self.phase = match player {
            Player::One => {
                self.unplaced = create_deck(Player::Two, self.config().deck_size());
                Phase::Arrangement {
                    arranging: Player::Two,
                }
            }
            Player::Two => Phase::Gameplay { turn: Player::One },
        };

        log::info!("{player} locked their arrangement, now {}", self.phase);
        Ok(self.phase)
    }

    // === Gameplay ===

    /// Resolve a roll produced by the random source.
    pub fn roll_and_resolve(&mut self, roll: Roll) -> Result<RollOutcome, EngineError> {
        let result = self
            .require_gameplay(ROLL)
            .map(|attacker| self.resolve(attacker, roll, false));
        logged(ROLL, result)
    }

    /// Draw from `source` and resolve. The source is untouched if the match
    /// is not in gameplay.
    pub fn roll_dice(&mut self, source: &mut impl RollSource) -> Result<RollOutcome, EngineError> {
        let result = self.require_gameplay(ROLL).map(|attacker| {
            let roll = source.roll();
            self.resolve(attacker, roll, false)
        });
        logged(ROLL, result)
    }

    /// Spend one of the active player's cheat tokens to resolve a chosen roll.
    pub fn use_cheat_token(&mut self, number: u8, color: Color) -> Result<RollOutcome, EngineError> {
        let result = self.apply_cheat(number, color);
        logged(CHEAT, result)
    }

    fn apply_cheat(&mut self, number: u8, color: Color) -> Result<RollOutcome, EngineError> {
        let attacker = self.require_gameplay(CHEAT)?;
        let roll = Roll::new(number, color)?;

        let tokens = &mut self.cheat_tokens[attacker];
        if *tokens == 0 {
            return Err(EngineError::NoTokensRemaining(attacker));
        }
        *tokens -= 1;

        log::info!("{attacker} spent a cheat token on {roll} ({} left)", *tokens);
        Ok(self.resolve(attacker, roll, true))
    }

    fn resolve(&mut self, attacker: Player, roll: Roll, cheated: bool) -> RollOutcome {
        let defender = attacker.other();
        let rule = self.config().knockout_rule;

        self.last_roll = Some(roll);
        let knockouts = resolve_roll(&mut self.arrangements[defender], roll, rule);
        self.record(attacker, if cheated { Action::Cheat(roll) } else { Action::Roll(roll) });

        let winner = victory::evaluate(self, attacker);
        let next_turn = match winner {
            Some(winner) => {
                self.phase = Phase::Victory { winner };
                log::info!("{winner} wins on turn {}", self.turn_number);
                None
            }
            None => {
                self.phase = Phase::Gameplay { turn: defender };
                self.turn_number = self.turn_number.saturating_add(1);
                log::trace!("turn {} passes to {defender}", self.turn_number);
                Some(defender)
            }
        };

        RollOutcome {
            roller: attacker,
            roll,
            cheated,
            knockouts,
            winner,
            next_turn,
        }
    }
}
