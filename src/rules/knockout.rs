//! Knockout resolution.
//!
//! Applies one roll to the defender's arrangement. Only exposed cards can
//! be hit: the top of a full stack, or the bottom of a half stack. A miss is
//! a normal outcome and leaves every stack untouched.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::{KnockoutRule, Roll};
use crate::stacks::{Arrangement, StackState};

/// One card leaving play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Knockout {
    /// Index of the stack that was hit.
    pub stack: usize,
    /// The eliminated card, already flagged.
    pub card: Card,
    /// Stack occupancy before the hit.
    pub from: StackState,
    /// Stack occupancy after the hit.
    pub to: StackState,
}

/// Knockouts from a single roll. Almost always zero or one.
pub type Knockouts = SmallVec<[Knockout; 1]>;

/// Resolve `roll` against `defender`.
///
/// Stacks are scanned in index order. Under `FirstMatch` scanning stops at
/// the first hit; under `AllMatching` every matching stack is hit.
/// Eliminated cards go to the defender's discard pile.
pub fn resolve_roll(defender: &mut Arrangement, roll: Roll, rule: KnockoutRule) -> Knockouts {
    let mut hits = Knockouts::new();

    for (index, stack) in defender.stacks_mut().iter_mut().enumerate() {
        let from = stack.state();
        let Some(card) = stack.knock_out(roll) else {
            continue;
        };

        log::debug!("roll {roll} knocked out {} from stack {index}", card.id());
        hits.push(Knockout {
            stack: index,
            card,
            from,
            to: stack.state(),
        });

        if rule == KnockoutRule::FirstMatch {
            break;
        }
    }

    for hit in &hits {
        defender.push_discard(hit.card);
    }

    if hits.is_empty() {
        log::trace!("roll {roll} missed");
    }

    hits
}
