//! The two draw piles: the main card deck and the storm deck.
//!
//! Both are finite, shuffled once at setup, and drawn without replacement.
//! The top of a pile is the last element of its backing `Vec`, so a draw is
//! a `pop`. Drawing from an empty pile is a precondition violation: with the
//! standard compositions a game always terminates before either pile runs
//! out, so an empty draw means the engine was misconfigured and panics
//! rather than wrapping around.

use crate::core::{Card, Color, GameRng};

/// Number of frost cards in the main deck.
pub const FROST_CARDS: usize = 15;
/// Number of wand cards in the main deck.
pub const WAND_CARDS: usize = 3;
/// Number of unicorn cards in the main deck.
pub const UNICORN_CARDS: usize = 4;
/// Number of rainbow cards in the main deck.
pub const RAINBOW_CARDS: usize = 3;
/// Number of fairy cards per color in the main deck.
pub const FAIRIES_PER_COLOR: usize = 8;
/// Number of storm entries per color in the storm deck.
pub const STORMS_PER_COLOR: usize = 11;

/// The main deck: 57 cards, drawn one per turn.
#[derive(Clone, Debug)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Total cards in the standard composition.
    pub const SIZE: usize =
        FROST_CARDS + WAND_CARDS + UNICORN_CARDS + RAINBOW_CARDS + FAIRIES_PER_COLOR * Color::COUNT;

    /// Build the standard composition and shuffle it.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut cards = Self::composition();
        rng.shuffle(&mut cards);
        Self { cards }
    }

    /// Build a deck from an explicit pile. The last element is drawn first.
    ///
    /// Intended for deterministic setups; the pile does not have to follow
    /// the standard composition.
    #[must_use]
    pub fn from_pile(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    fn composition() -> Vec<Card> {
        let mut cards = Vec::with_capacity(Self::SIZE);
        cards.resize(FROST_CARDS, Card::Frost);
        for _ in 0..WAND_CARDS {
            cards.push(Card::Wand);
        }
        for _ in 0..UNICORN_CARDS {
            cards.push(Card::Unicorn);
        }
        for _ in 0..RAINBOW_CARDS {
            cards.push(Card::Rainbow);
        }
        for color in Color::ALL {
            for _ in 0..FAIRIES_PER_COLOR {
                cards.push(Card::Fairy(color));
            }
        }
        cards
    }

    /// Draw the top card. Panics if the deck is empty.
    pub fn draw(&mut self) -> Card {
        match self.cards.pop() {
            Some(card) => card,
            None => panic!("drew from an empty deck: the game should have ended first"),
        }
    }

    /// Cards left in the pile.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}

/// The storm deck: 44 colors, one drawn per frost card.
#[derive(Clone, Debug)]
pub struct StormDeck {
    colors: Vec<Color>,
}

impl StormDeck {
    /// Total entries in the standard composition.
    pub const SIZE: usize = STORMS_PER_COLOR * Color::COUNT;

    /// Build the standard composition and shuffle it.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut colors = Vec::with_capacity(Self::SIZE);
        for color in Color::ALL {
            for _ in 0..STORMS_PER_COLOR {
                colors.push(color);
            }
        }
        rng.shuffle(&mut colors);
        Self { colors }
    }

    /// Build a storm deck from an explicit pile. The last element is drawn
    /// first.
    #[must_use]
    pub fn from_pile(colors: Vec<Color>) -> Self {
        Self { colors }
    }

    /// Draw the top color. Panics if the pile is empty.
    pub fn draw(&mut self) -> Color {
        match self.colors.pop() {
            Some(color) => color,
            None => panic!("drew from an empty storm deck: the game should have ended first"),
        }
    }

    /// Entries left in the pile.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.colors.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_standard_composition() {
        let mut rng = GameRng::new(42);
        let mut deck = Deck::shuffled(&mut rng);
        assert_eq!(deck.remaining(), 57);
        assert_eq!(Deck::SIZE, 57);

        let mut frost = 0;
        let mut wand = 0;
        let mut unicorn = 0;
        let mut rainbow = 0;
        let mut fairies = [0usize; Color::COUNT];
        for _ in 0..Deck::SIZE {
            match deck.draw() {
                Card::Frost => frost += 1,
                Card::Wand => wand += 1,
                Card::Unicorn => unicorn += 1,
                Card::Rainbow => rainbow += 1,
                Card::Fairy(color) => fairies[color.index()] += 1,
            }
        }
        assert_eq!(frost, FROST_CARDS);
        assert_eq!(wand, WAND_CARDS);
        assert_eq!(unicorn, UNICORN_CARDS);
        assert_eq!(rainbow, RAINBOW_CARDS);
        assert_eq!(fairies, [FAIRIES_PER_COLOR; Color::COUNT]);
    }

    #[test]
    fn test_storm_deck_standard_composition() {
        let mut rng = GameRng::new(42);
        let mut storm = StormDeck::shuffled(&mut rng);
        assert_eq!(storm.remaining(), 44);

        let mut per_color = [0usize; Color::COUNT];
        for _ in 0..StormDeck::SIZE {
            per_color[storm.draw().index()] += 1;
        }
        assert_eq!(per_color, [STORMS_PER_COLOR; Color::COUNT]);
    }

    #[test]
    fn test_draw_decrements() {
        let mut deck = Deck::from_pile(vec![Card::Wand, Card::Unicorn]);
        assert_eq!(deck.remaining(), 2);
        assert_eq!(deck.draw(), Card::Unicorn); // top = last
        assert_eq!(deck.remaining(), 1);
        assert_eq!(deck.draw(), Card::Wand);
        assert_eq!(deck.remaining(), 0);
    }

    #[test]
    fn test_shuffle_deterministic_per_seed() {
        let mut a = Deck::shuffled(&mut GameRng::new(5));
        let mut b = Deck::shuffled(&mut GameRng::new(5));
        for _ in 0..Deck::SIZE {
            assert_eq!(a.draw(), b.draw());
        }
    }

    #[test]
    #[should_panic(expected = "empty deck")]
    fn test_empty_deck_draw_panics() {
        let mut deck = Deck::from_pile(vec![]);
        let _ = deck.draw();
    }

    #[test]
    #[should_panic(expected = "empty storm deck")]
    fn test_empty_storm_draw_panics() {
        let mut storm = StormDeck::from_pile(vec![]);
        let _ = storm.draw();
    }
}
