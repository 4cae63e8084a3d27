//! Card identity and runtime card state.
//!
//! A `Card` is immutable apart from its knocked-out flag, which only ever
//! moves from `false` to `true`.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::error::PlacementError;
use crate::core::Player;

/// Card and die color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Green,
    Red,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::Green, Color::Red];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::Green => "green",
            Color::Red => "red",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "green" => Ok(Color::Green),
            "red" => Ok(Color::Red),
            other => Err(format!("unknown color {other:?}")),
        }
    }
}

/// Unique card identity.
///
/// Identity is the owner, the face number, and which copy of that number it
/// is, so ids are unique within a deck and across both decks by construction.
/// The textual form is `p{seat}-{number}-{color}-{copy}`, e.g. `p2-5-red-1`.
///
/// ```
/// use diicii_knockout::cards::CardId;
/// use diicii_knockout::core::Player;
///
/// let id = CardId::new(Player::Two, 5, 1);
/// assert_eq!(id.to_string(), "p2-5-red-1");
/// assert_eq!("p2-5-red-1".parse::<CardId>().unwrap(), id);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId {
    owner: Player,
    number: u8,
    copy: u8,
}

impl CardId {
    #[must_use]
    pub const fn new(owner: Player, number: u8, copy: u8) -> Self {
        Self { owner, number, copy }
    }

    #[must_use]
    pub const fn owner(self) -> Player {
        self.owner
    }

    #[must_use]
    pub const fn number(self) -> u8 {
        self.number
    }

    #[must_use]
    pub const fn copy(self) -> u8 {
        self.copy
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "p{}-{}-{}-{}",
            self.owner.number(),
            self.number,
            self.owner.color(),
            self.copy
        )
    }
}

impl FromStr for CardId {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || PlacementError::MalformedCardId(s.to_string());

        let mut parts = s.split('-');
        let (Some(seat), Some(number), Some(color), Some(copy), None) =
            (parts.next(), parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(malformed());
        };

        let owner = match seat {
            "p1" => Player::One,
            "p2" => Player::Two,
            _ => return Err(malformed()),
        };
        let number: u8 = number.parse().map_err(|_| malformed())?;
        let copy: u8 = copy.parse().map_err(|_| malformed())?;
        let color: Color = color.parse().map_err(|_| malformed())?;

        if color != owner.color() || !(1..=6).contains(&number) {
            return Err(malformed());
        }

        Ok(Self::new(owner, number, copy))
    }
}

/// A card in play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    knocked_out: bool,
}

impl Card {
    /// A fresh, live card.
    #[must_use]
    pub const fn new(id: CardId) -> Self {
        Self {
            id,
            knocked_out: false,
        }
    }

    #[must_use]
    pub const fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub const fn number(&self) -> u8 {
        self.id.number
    }

    /// Cards share their owner's color.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.id.owner.color()
    }

    #[must_use]
    pub const fn owner(&self) -> Player {
        self.id.owner
    }

    #[must_use]
    pub const fn is_knocked_out(&self) -> bool {
        self.knocked_out
    }

    /// Mark the card eliminated. There is no way back.
    pub fn knock_out(&mut self) {
        self.knocked_out = true;
    }

    /// True if this card is live and shows the given face.
    #[must_use]
    pub fn matches(&self, number: u8, color: Color) -> bool {
        !self.knocked_out && self.number() == number && self.color() == color
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.number(), self.color())
    }
}
