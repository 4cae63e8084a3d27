//! Per-player projection of a match.
//!
//! Concealment rules:
//! - your own stacks are fully visible to you
//! - an opponent's bottom card is hidden while a top card covers it
//! - while one player arranges, the other's arrangement is fully hidden
//! - at victory everything is revealed

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{MatchState, Phase, Player, Roll};
use crate::stacks::{Stack, StackState};

/// What a viewer sees in one slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotView {
    Empty,
    Hidden,
    Visible(Card),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackView {
    pub state: StackState,
    pub bottom: SlotView,
    pub top: SlotView,
}

/// Everything a single player is allowed to render.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchView {
    pub viewer: Player,
    pub phase: Phase,
    /// Who is expected to act next; `None` once the match is over.
    pub to_act: Option<Player>,
    pub turn_number: u32,
    pub own_stacks: Vec<StackView>,
    pub opponent_stacks: Vec<StackView>,
    /// The viewer's unplaced pool; empty unless the viewer is arranging.
    pub unplaced: Vec<Card>,
    pub own_tokens: u8,
    pub opponent_tokens: u8,
    pub last_roll: Option<Roll>,
    pub can_lock: bool,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Reveal {
    All,
    ExposedOnly,
    Nothing,
}

fn slot(card: Option<&Card>, visible: bool) -> SlotView {
    match card {
        None => SlotView::Empty,
        Some(card) if visible => SlotView::Visible(*card),
        Some(_) => SlotView::Hidden,
    }
}

fn project(stack: &Stack, reveal: Reveal) -> StackView {
    let (bottom_visible, top_visible) = match reveal {
        Reveal::All => (true, true),
        Reveal::ExposedOnly => (stack.top().is_none(), true),
        Reveal::Nothing => (false, false),
    };

    StackView {
        state: stack.state(),
        bottom: slot(stack.bottom(), bottom_visible),
        top: slot(stack.top(), top_visible),
    }
}

impl MatchState {
    /// Project the match for `viewer`.
    #[must_use]
    pub fn view_for(&self, viewer: Player) -> MatchView {
        let opponent = viewer.other();
        let opponent_reveal = match self.phase() {
            Phase::Arrangement { .. } => Reveal::Nothing,
            Phase::Gameplay { .. } => Reveal::ExposedOnly,
            Phase::Victory { .. } => Reveal::All,
        };
        let arranging = self.arranging_player() == Some(viewer);

        let stacks = |player: Player, reveal: Reveal| {
            self.arrangement(player)
                .stacks()
                .iter()
                .map(|s| project(s, reveal))
                .collect::<Vec<_>>()
        };

        MatchView {
            viewer,
            phase: self.phase(),
            to_act: self.phase().acting_player(),
            turn_number: self.turn_number(),
            own_stacks: stacks(viewer, Reveal::All),
            opponent_stacks: stacks(opponent, opponent_reveal),
            unplaced: if arranging { self.unplaced().to_vec() } else { Vec::new() },
            own_tokens: self.cheat_tokens(viewer),
            opponent_tokens: self.cheat_tokens(opponent),
            last_roll: self.last_roll(),
            can_lock: arranging && self.can_lock(),
        }
    }
}
