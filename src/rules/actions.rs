//! Value-in, value-out engine interface plus action dispatch.
//!
//! The free functions here take a `MatchState` by reference and return a new
//! one, leaving the input untouched. This is the surface a presentation
//! layer holds on to: it owns the current value and swaps it on success.
//!
//! ```
//! use diicii_knockout::rules;
//!
//! let state = rules::reset_game();
//! let card = state.unplaced()[0].id().to_string();
//!
//! let next = rules::place_card(&state, 0, &card).unwrap();
//! assert_eq!(next.unplaced().len(), 11);
//! assert_eq!(state.unplaced().len(), 12);
//! ```

use crate::cards::{CardId, Color};
use crate::core::{Action, ActionRecord, EngineError, MatchConfig, MatchState, Phase, Roll};
use crate::stacks::StackState;

use super::engine::{logged, PLACE};

/// Start a new standard match.
#[must_use]
pub fn reset_game() -> MatchState {
    MatchState::new()
}

/// Place the card named by `card_id` (e.g. `"p1-3-green-0"`) on a stack.
///
/// The phase is checked before the id is parsed, so a placement outside
/// arrangement always fails with `InvalidPhase`.
pub fn place_card(state: &MatchState, stack_index: usize, card_id: &str) -> Result<MatchState, EngineError> {
    let card = logged(PLACE, parse_placement(state, card_id))?;
    let mut next = state.clone();
    next.place_card(stack_index, card)?;
    Ok(next)
}

fn parse_placement(state: &MatchState, card_id: &str) -> Result<CardId, EngineError> {
    state.require_arrangement(PLACE)?;
    Ok(card_id.parse::<CardId>()?)
}

#[must_use]
pub fn can_lock(state: &MatchState) -> bool {
    state.can_lock()
}

pub fn lock_arrangement(state: &MatchState) -> Result<MatchState, EngineError> {
    let mut next = state.clone();
    next.lock_arrangement()?;
    Ok(next)
}

pub fn roll_and_resolve(state: &MatchState, roll: Roll) -> Result<MatchState, EngineError> {
    let mut next = state.clone();
    next.roll_and_resolve(roll)?;
    Ok(next)
}

pub fn use_cheat_token(state: &MatchState, number: u8, color: Color) -> Result<MatchState, EngineError> {
    let mut next = state.clone();
    next.use_cheat_token(number, color)?;
    Ok(next)
}

/// Apply any action in place.
pub fn apply_action(state: &mut MatchState, action: &Action) -> Result<(), EngineError> {
    match *action {
        Action::PlaceCard { stack, card } => state.place_card(stack, card).map(drop),
        Action::LockArrangement => state.lock_arrangement().map(drop),
        Action::Roll(roll) => state.roll_and_resolve(roll).map(drop),
        Action::Cheat(roll) => state.use_cheat_token(roll.number(), roll.color()).map(drop),
    }
}

/// Every action that would currently succeed.
///
/// During gameplay each of the twelve die faces is listed as a `Roll`; the
/// random source decides which one actually happens.
#[must_use]
pub fn legal_actions(state: &MatchState) -> Vec<Action> {
    match state.phase() {
        Phase::Arrangement { arranging } => {
            let open_stacks: Vec<usize> = state
                .arrangement(arranging)
                .stacks()
                .iter()
                .enumerate()
                .filter(|(_, s)| s.state() != StackState::Full)
                .map(|(i, _)| i)
                .collect();

            let mut actions: Vec<Action> = state
                .unplaced()
                .iter()
                .flat_map(|card| {
                    open_stacks.iter().map(move |&stack| Action::PlaceCard {
                        stack,
                        card: card.id(),
                    })
                })
                .collect();

            if state.can_lock() {
                actions.push(Action::LockArrangement);
            }
            actions
        }
        Phase::Gameplay { turn } => {
            let mut actions: Vec<Action> = Roll::all().map(Action::Roll).collect();
            if state.cheat_tokens(turn) > 0 {
                actions.extend(Roll::all().map(Action::Cheat));
            }
            actions
        }
        Phase::Victory { .. } => Vec::new(),
    }
}

/// Rebuild a match by replaying recorded actions onto a fresh state.
pub fn replay<'a>(
    config: MatchConfig,
    records: impl IntoIterator<Item = &'a ActionRecord>,
) -> Result<MatchState, EngineError> {
    let mut state = MatchState::with_config(config)?;
    for record in records {
        apply_action(&mut state, &record.action)?;
    }
    Ok(state)
}
