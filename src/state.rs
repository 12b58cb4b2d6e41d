//! Game state: hands, the frost board, per-turn snapshots.
//!
//! ## Hand
//!
//! A multiset of cards. Iteration walks `Card::HAND_KINDS` in canonical
//! order so everything built on top of it (discard sampling, rendering,
//! serialization) is deterministic.
//!
//! ## Board
//!
//! Per-color frost counters. Counts only grow; the game is lost the moment
//! any color reaches [`Board::LOSS_THRESHOLD`].
//!
//! ## Snapshot
//!
//! The read-only state emitted once per turn. Snapshots are owned by the
//! caller; reading or cloning one never touches the engine. The jewel set
//! is an `im::OrdSet`, so cloning it per turn is cheap and iteration is
//! ordered.

use im::OrdSet;
use rustc_hash::FxHashMap;
use serde::de::{Deserializer, SeqAccess, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::core::{Card, Color, PlayerMap};

/// Maximum cards a player may hold after a turn resolves.
pub const HAND_LIMIT: u32 = 5;

/// Jewels needed to win (one per color).
pub const JEWEL_GOAL: usize = Color::COUNT;

/// A player's hand: a multiset of cards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Hand {
    counts: FxHashMap<Card, u32>,
}

impl Hand {
    /// An empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// How many copies of `card` are held.
    #[must_use]
    pub fn count(&self, card: Card) -> u32 {
        self.counts.get(&card).copied().unwrap_or(0)
    }

    /// Add one copy of `card`.
    pub fn add(&mut self, card: Card) {
        *self.counts.entry(card).or_insert(0) += 1;
    }

    /// Remove `n` copies of `card`. Panics if fewer than `n` are held.
    pub fn remove(&mut self, card: Card, n: u32) {
        let held = self.count(card);
        assert!(held >= n, "removing {n} copies of {card:?} but only {held} held");
        if held == n {
            self.counts.remove(&card);
        } else {
            self.counts.insert(card, held - n);
        }
    }

    /// Remove every copy of `card`, returning how many were held.
    pub fn take_all(&mut self, card: Card) -> u32 {
        self.counts.remove(&card).unwrap_or(0)
    }

    /// Total cards held.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    /// Iterate `(card, count)` pairs with nonzero count, in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Card, u32)> + '_ {
        Card::HAND_KINDS
            .iter()
            .filter_map(|&card| match self.count(card) {
                0 => None,
                n => Some((card, n)),
            })
    }
}

// Serialized as ordered (card, count) pairs: JSON objects cannot key on an
// enum with data, and the pair form keeps the output stable.
impl Serialize for Hand {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for Hand {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct HandVisitor;

        impl<'de> Visitor<'de> for HandVisitor {
            type Value = Hand;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a sequence of (card, count) pairs")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Hand, A::Error> {
                let mut hand = Hand::new();
                while let Some((card, count)) = seq.next_element::<(Card, u32)>()? {
                    if count > 0 {
                        hand.counts.insert(card, count);
                    }
                }
                Ok(hand)
            }
        }

        deserializer.deserialize_seq(HandVisitor)
    }
}

/// The shared board: frost accumulated per flower color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    frost: [u8; Color::COUNT],
}

impl Board {
    /// Frost units at which a single color loses the game.
    pub const LOSS_THRESHOLD: u8 = 4;

    /// Frost count for a color.
    #[must_use]
    pub fn frost(&self, color: Color) -> u8 {
        self.frost[color.index()]
    }

    /// Add one frost unit to a color.
    pub fn add_frost(&mut self, color: Color) {
        self.frost[color.index()] += 1;
    }

    /// Total frost units on the board.
    #[must_use]
    pub fn total_frost(&self) -> u32 {
        self.frost.iter().map(|&c| u32::from(c)).sum()
    }

    /// Whether any color has reached the loss threshold.
    #[must_use]
    pub fn is_lost(&self) -> bool {
        self.frost.iter().any(|&c| c >= Self::LOSS_THRESHOLD)
    }

    /// Iterate `(color, frost)` pairs in canonical color order.
    pub fn iter(&self) -> impl Iterator<Item = (Color, u8)> + '_ {
        Color::ALL.iter().map(|&color| (color, self.frost(color)))
    }
}

/// Why a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// All four jewels were collected.
    Win,
    /// Some flower froze over.
    Loss,
}

/// Read-only state of the game after one turn resolved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Turn index, starting at 0.
    pub turn: u32,
    /// Every player's hand.
    pub hands: PlayerMap<Hand>,
    /// The shared frost board.
    pub board: Board,
    /// Jewels collected so far.
    pub jewels: OrdSet<Color>,
}

impl Snapshot {
    /// Whether this state is a completed win.
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.jewels.len() == JEWEL_GOAL
    }

    /// Total cards held across all hands.
    #[must_use]
    pub fn cards_in_hands(&self) -> u32 {
        self.hands.iter().map(|(_, hand)| hand.total()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hand_add_count_total() {
        let mut hand = Hand::new();
        assert_eq!(hand.total(), 0);

        hand.add(Card::Wand);
        hand.add(Card::Fairy(Color::Pink));
        hand.add(Card::Fairy(Color::Pink));
        assert_eq!(hand.count(Card::Fairy(Color::Pink)), 2);
        assert_eq!(hand.count(Card::Unicorn), 0);
        assert_eq!(hand.total(), 3);
    }

    #[test]
    fn test_hand_remove_and_take_all() {
        let mut hand = Hand::new();
        for _ in 0..3 {
            hand.add(Card::Rainbow);
        }
        hand.remove(Card::Rainbow, 2);
        assert_eq!(hand.count(Card::Rainbow), 1);

        assert_eq!(hand.take_all(Card::Rainbow), 1);
        assert_eq!(hand.count(Card::Rainbow), 0);
        assert_eq!(hand.take_all(Card::Rainbow), 0);
    }

    #[test]
    #[should_panic(expected = "only 1 held")]
    fn test_hand_remove_too_many_panics() {
        let mut hand = Hand::new();
        hand.add(Card::Wand);
        hand.remove(Card::Wand, 2);
    }

    #[test]
    fn test_hand_iter_canonical_order() {
        let mut hand = Hand::new();
        hand.add(Card::Fairy(Color::Orange));
        hand.add(Card::Wand);
        hand.add(Card::Rainbow);
        hand.add(Card::Wand);

        let pairs: Vec<_> = hand.iter().collect();
        assert_eq!(
            pairs,
            vec![
                (Card::Wand, 2),
                (Card::Rainbow, 1),
                (Card::Fairy(Color::Orange), 1),
            ]
        );
    }

    #[test]
    fn test_hand_serde_round_trip() {
        let mut hand = Hand::new();
        hand.add(Card::Unicorn);
        hand.add(Card::Fairy(Color::Purple));
        hand.add(Card::Fairy(Color::Purple));

        let json = serde_json::to_string(&hand).unwrap();
        let back: Hand = serde_json::from_str(&json).unwrap();
        assert_eq!(hand, back);
    }

    #[test]
    fn test_board_frost_and_loss() {
        let mut board = Board::default();
        assert_eq!(board.frost(Color::Pink), 0);
        assert!(!board.is_lost());

        for _ in 0..3 {
            board.add_frost(Color::Pink);
        }
        assert_eq!(board.frost(Color::Pink), 3);
        assert!(!board.is_lost());

        board.add_frost(Color::Pink);
        assert!(board.is_lost());
        assert_eq!(board.total_frost(), 4);
    }

    #[test]
    fn test_board_iter_order() {
        let mut board = Board::default();
        board.add_frost(Color::Yellow);
        let counts: Vec<_> = board.iter().collect();
        assert_eq!(
            counts,
            vec![
                (Color::Purple, 0),
                (Color::Pink, 0),
                (Color::Yellow, 1),
                (Color::Orange, 0),
            ]
        );
    }

    #[test]
    fn test_snapshot_win_and_serde() {
        let snapshot = Snapshot {
            turn: 12,
            hands: PlayerMap::new(2, |_| Hand::new()),
            board: Board::default(),
            jewels: Color::ALL.iter().copied().collect(),
        };
        assert!(snapshot.is_win());
        assert_eq!(snapshot.cards_in_hands(), 0);

        let json = serde_json::to_string(&snapshot).unwrap();
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, back);
    }

    #[test]
    fn test_snapshot_partial_jewels_not_win() {
        let snapshot = Snapshot {
            turn: 0,
            hands: PlayerMap::new(1, |_| {
                let mut hand = Hand::new();
                hand.add(Card::Wand);
                hand
            }),
            board: Board::default(),
            jewels: OrdSet::unit(Color::Purple),
        };
        assert!(!snapshot.is_win());
        assert_eq!(snapshot.cards_in_hands(), 1);
    }
}
