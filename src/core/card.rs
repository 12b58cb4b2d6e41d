//! Card and color value types.
//!
//! Cards are value types: two cards of the same variant (and color, for
//! fairies) are interchangeable. Hands and decks count them as multisets
//! rather than tracking identities.
//!
//! Both enums carry a canonical fixed ordering (`Color::ALL`,
//! `Card::HAND_KINDS`). Every place the engine has to pick "some" element
//! from an unordered collection walks one of these orderings so that a
//! seeded game replays identically.

use serde::{Deserialize, Serialize};

/// One of the four flower colors.
///
/// The declaration order is the canonical ordering: `Purple < Pink <
/// Yellow < Orange`. Jewel tie-breaks and board rendering both use it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Color {
    Purple,
    Pink,
    Yellow,
    Orange,
}

impl Color {
    /// All colors in canonical order.
    pub const ALL: [Color; 4] = [Color::Purple, Color::Pink, Color::Yellow, Color::Orange];

    /// Number of colors.
    pub const COUNT: usize = 4;

    /// Dense index of this color (0-based, canonical order).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::Purple => "purple",
            Color::Pink => "pink",
            Color::Yellow => "yellow",
            Color::Orange => "orange",
        };
        write!(f, "{name}")
    }
}

/// A card from the main deck.
///
/// `Frost` never enters a hand: it resolves immediately against the board.
/// Everything else is held, and only `Fairy` and `Rainbow` cards have any
/// purchasing power.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Card {
    /// Adds one frost unit to a storm-chosen board color.
    Frost,
    Wand,
    Unicorn,
    /// Wildcard covering missing fairies in a jewel purchase.
    Rainbow,
    /// Currency for the jewel of its color.
    Fairy(Color),
}

impl Card {
    /// The seven card values that can occupy a hand, in canonical order.
    ///
    /// Weighted hand sampling walks this array so the draw order over a
    /// multiset is reproducible.
    pub const HAND_KINDS: [Card; 7] = [
        Card::Wand,
        Card::Unicorn,
        Card::Rainbow,
        Card::Fairy(Color::Purple),
        Card::Fairy(Color::Pink),
        Card::Fairy(Color::Yellow),
        Card::Fairy(Color::Orange),
    ];

    /// Whether this card resolves against the board instead of a hand.
    #[must_use]
    pub const fn is_frost(self) -> bool {
        matches!(self, Card::Frost)
    }
}
