//! Property tests for the engine invariants.
//!
//! Placement sequences, arrangements, and roll sequences are generated by
//! proptest; every step is checked against the invariants that must hold
//! for any input.

use diicii_knockout::{
    Color, EngineError, MatchState, Phase, Player, Roll, StackState,
};
use proptest::prelude::*;

fn face() -> impl Strategy<Value = Roll> {
    (1u8..=6, any::<bool>()).prop_map(|(number, green)| {
        let color = if green { Color::Green } else { Color::Red };
        Roll::new(number, color).unwrap()
    })
}

/// A permutation of the twelve pool positions.
fn permutation() -> impl Strategy<Value = Vec<usize>> {
    Just((0..12).collect::<Vec<usize>>()).prop_shuffle()
}

/// Place the pool so that card `perm[k]` lands on stack `k / 2`, then lock.
fn arrange_permuted(state: &mut MatchState, perm: &[usize]) {
    let pool: Vec<_> = state.unplaced().iter().map(|c| c.id()).collect();
    for (k, &pick) in perm.iter().enumerate() {
        state.place_card(k / 2, pool[pick]).unwrap();
    }
    state.lock_arrangement().unwrap();
}

fn occupancy(state: &MatchState, player: Player) -> Vec<usize> {
    state
        .arrangement(player)
        .stacks()
        .iter()
        .map(|s| s.card_count())
        .collect()
}

fn any_exposed_match(state: &MatchState, defender: Player, roll: Roll) -> bool {
    state
        .arrangement(defender)
        .stacks()
        .iter()
        .filter_map(|s| s.exposed())
        .any(|c| c.matches(roll.number(), roll.color()))
}

proptest! {
    #[test]
    fn pool_plus_placed_is_conserved(
        moves in prop::collection::vec((0usize..8, 0usize..16), 0..40)
    ) {
        let mut state = MatchState::new();
        let player = Player::One;

        for (stack, pick) in moves {
            let card = state
                .unplaced()
                .get(pick)
                .map(|c| c.id())
                .unwrap_or_else(|| diicii_knockout::CardId::new(player, 1, 0));
            let before = state.clone();

            match state.place_card(stack, card) {
                Ok(_) => {}
                Err(EngineError::InvalidPlacement(_)) => prop_assert_eq!(&state, &before),
                Err(other) => prop_assert!(false, "unexpected error {}", other),
            }

            let placed = state.arrangement(player).placed_count();
            prop_assert_eq!(state.unplaced().len() + placed, 12);
            prop_assert_eq!(state.can_lock(), state.unplaced().is_empty());
        }
    }

    #[test]
    fn gameplay_invariants_hold(
        p1 in permutation(),
        p2 in permutation(),
        turns in prop::collection::vec((face(), any::<bool>()), 1..120),
    ) {
        let mut state = MatchState::new();
        arrange_permuted(&mut state, &p1);
        arrange_permuted(&mut state, &p2);
        prop_assert_eq!(state.phase(), Phase::Gameplay { turn: Player::One });

        for (roll, cheat) in turns {
            let before = state.clone();
            let occupancy_before = [occupancy(&state, Player::One), occupancy(&state, Player::Two)];

            let result = if cheat {
                state.use_cheat_token(roll.number(), roll.color())
            } else {
                state.roll_and_resolve(roll)
            };

            match before.phase() {
                Phase::Victory { .. } => {
                    // Terminal: everything is rejected and nothing moves.
                    let is_invalid_phase = matches!(result, Err(EngineError::InvalidPhase { .. }));
                    prop_assert!(is_invalid_phase);
                    prop_assert_eq!(&state, &before);
                    continue;
                }
                Phase::Gameplay { turn } => {
                    if cheat && before.cheat_tokens(turn) == 0 {
                        prop_assert_eq!(result, Err(EngineError::NoTokensRemaining(turn)));
                        prop_assert_eq!(&state, &before);
                        continue;
                    }

                    let outcome = result.unwrap();
                    let defender = turn.other();

                    // At most one card leaves play per roll.
                    prop_assert!(outcome.knockouts.len() <= 1);
                    prop_assert_eq!(outcome.is_hit(), any_exposed_match(&before, defender, roll));

                    // A miss changes no stack.
                    if !outcome.is_hit() {
                        prop_assert_eq!(state.arrangement(Player::One), before.arrangement(Player::One));
                        prop_assert_eq!(state.arrangement(Player::Two), before.arrangement(Player::Two));
                    }

                    // The roller's own stacks never change.
                    prop_assert_eq!(state.arrangement(turn), before.arrangement(turn));

                    // Tokens only move for cheats, by exactly one.
                    let spent = u8::from(cheat);
                    prop_assert_eq!(state.cheat_tokens(turn), before.cheat_tokens(turn) - spent);
                    prop_assert_eq!(state.cheat_tokens(defender), before.cheat_tokens(defender));

                    match outcome.winner {
                        Some(winner) => {
                            prop_assert_eq!(winner, turn);
                            prop_assert!(state.arrangement(defender).is_cleared());
                            prop_assert_eq!(state.phase(), Phase::Victory { winner });
                            prop_assert_eq!(state.turn_number(), before.turn_number());
                        }
                        None => {
                            prop_assert_eq!(state.phase(), Phase::Gameplay { turn: defender });
                            prop_assert_eq!(state.turn_number(), before.turn_number() + 1);
                        }
                    }
                }
                Phase::Arrangement { .. } => unreachable!(),
            }

            // Occupancy never grows, and an emptied stack stays empty.
            for (player, earlier) in Player::ALL.into_iter().zip(occupancy_before.iter()) {
                let now = occupancy(&state, player);
                for (a, b) in earlier.iter().zip(now.iter()) {
                    prop_assert!(b <= a);
                }
            }
            for player in Player::ALL {
                let knocked = state.arrangement(player).discard().len();
                let live: usize = occupancy(&state, player).iter().sum();
                prop_assert_eq!(knocked + live, 12);
                prop_assert!(state.arrangement(player).discard().iter().all(|c| c.is_knocked_out()));
                prop_assert!(state
                    .arrangement(player)
                    .stacks()
                    .iter()
                    .flat_map(|s| s.cards())
                    .all(|c| !c.is_knocked_out()));
            }
        }
    }

    #[test]
    fn non_matching_rolls_are_idempotent(
        p1 in permutation(),
        p2 in permutation(),
        roll in face(),
    ) {
        let mut state = MatchState::new();
        arrange_permuted(&mut state, &p1);
        arrange_permuted(&mut state, &p2);

        prop_assume!(!any_exposed_match(&state, Player::Two, roll));

        let before = state.clone();
        let outcome = state.roll_and_resolve(roll).unwrap();

        prop_assert!(!outcome.is_hit());
        prop_assert_eq!(state.arrangement(Player::Two), before.arrangement(Player::Two));
        prop_assert!(state
            .arrangement(Player::Two)
            .stacks()
            .iter()
            .all(|s| s.state() == StackState::Full));
    }
}
