//! Read-only projections for the presentation layer.

pub mod projection;

pub use projection::{MatchView, SlotView, StackView};
