//! The game engine: one instance plays exactly one game.
//!
//! `GameEngine` owns the two draw piles, the hands, the board and the jewel
//! set, and advances the game one card draw per turn. It implements
//! `Iterator<Item = Snapshot>`: each `next()` resolves one turn and yields
//! the resulting read-only snapshot, then returns `None` forever once a
//! terminal turn has been played. Dropping the iterator early simply drops
//! the state; nothing runs in the background.
//!
//! ## Turn resolution
//!
//! 1. Draw the top card of the main deck.
//! 2. A frost card draws a storm color and frosts that flower; it enters
//!    no hand. Any other card goes to the acting player's hand, after which
//!    at most one jewel may be purchased and the hand is discarded down to
//!    [`HAND_LIMIT`].
//! 3. The snapshot is emitted, then the terminal check runs: a frozen
//!    flower is a loss, four jewels a win, loss taking precedence.
//!
//! ## Purchases
//!
//! A color is direct-eligible with 3 of its fairies in hand, and
//! rainbow-eligible when rainbows make up the shortfall. Direct beats
//! rainbow-assisted, and ties go to the first eligible color in
//! `Color::ALL` order, so a seeded game replays identically. Every
//! purchase consumes exactly 3 cards: 3 fairies, or all held fairies of
//! the color plus exactly enough rainbows to reach 3.

use im::OrdSet;
use smallvec::SmallVec;

use crate::core::{Card, Color, GameRng, PlayerId, PlayerMap};
use crate::decks::{Deck, StormDeck};
use crate::state::{Board, Hand, Outcome, Snapshot, HAND_LIMIT, JEWEL_GOAL};

/// Fairy-equivalents required to purchase one jewel.
const JEWEL_COST: u32 = 3;

/// Engine for a single game.
#[derive(Debug)]
pub struct GameEngine {
    deck: Deck,
    storm: StormDeck,
    hands: PlayerMap<Hand>,
    board: Board,
    jewels: OrdSet<Color>,
    rng: GameRng,
    turn: u32,
    discarded: u32,
    outcome: Option<Outcome>,
}

impl GameEngine {
    /// Set up a fresh game: zeroed board, empty hands and jewel set, both
    /// piles independently shuffled from `seed`.
    ///
    /// Panics if `n_players` is 0.
    #[must_use]
    pub fn new(n_players: usize, seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        let deck = Deck::shuffled(&mut rng);
        let storm = StormDeck::shuffled(&mut rng);
        Self::with_piles(n_players, deck, storm, rng)
    }

    /// Set up a game over explicit piles.
    ///
    /// This is the deterministic entry point: tests and replay tooling
    /// inject a fixed permutation here instead of shuffling. `rng` still
    /// drives in-game randomness (the weighted discards).
    #[must_use]
    pub fn with_piles(n_players: usize, deck: Deck, storm: StormDeck, rng: GameRng) -> Self {
        assert!(n_players >= 1, "must have at least 1 player");
        Self {
            deck,
            storm,
            hands: PlayerMap::with_default(n_players),
            board: Board::default(),
            jewels: OrdSet::new(),
            rng,
            turn: 0,
            discarded: 0,
            outcome: None,
        }
    }

    /// How the game ended, once it has.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Cards left in the main deck.
    #[must_use]
    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Cards removed from hands by the discard-down rule so far.
    #[must_use]
    pub fn cards_discarded(&self) -> u32 {
        self.discarded
    }

    /// Try to purchase one jewel for `player`, preferring direct purchases
    /// and breaking ties in canonical color order.
    fn purchase_jewel(&mut self, player: PlayerId) {
        let hand = &self.hands[player];
        let rainbows = hand.count(Card::Rainbow);

        let mut direct: SmallVec<[Color; 4]> = SmallVec::new();
        let mut assisted: SmallVec<[Color; 4]> = SmallVec::new();
        for color in Color::ALL {
            if self.jewels.contains(&color) {
                continue;
            }
            let fairies = hand.count(Card::Fairy(color));
            if fairies >= JEWEL_COST {
                direct.push(color);
            } else if rainbows + fairies >= JEWEL_COST {
                assisted.push(color);
            }
        }

        if let Some(&color) = direct.first() {
            self.hands[player].remove(Card::Fairy(color), JEWEL_COST);
            self.jewels.insert(color);
        } else if let Some(&color) = assisted.first() {
            let hand = &mut self.hands[player];
            let fairies = hand.take_all(Card::Fairy(color));
            hand.remove(Card::Rainbow, JEWEL_COST - fairies);
            self.jewels.insert(color);
        }
    }

    /// Discard uniformly-random card instances until the hand fits.
    ///
    /// Sampling is weighted by multiplicity: a card held twice is twice as
    /// likely to go as one held once.
    fn discard_down(&mut self, player: PlayerId) {
        while self.hands[player].total() > HAND_LIMIT {
            let weights: SmallVec<[u32; 7]> = Card::HAND_KINDS
                .iter()
                .map(|&card| self.hands[player].count(card))
                .collect();
            let index = self
                .rng
                .choose_weighted(&weights)
                .expect("hand over the limit cannot be empty");
            self.hands[player].remove(Card::HAND_KINDS[index], 1);
            self.discarded += 1;
        }
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            turn: self.turn,
            hands: self.hands.clone(),
            board: self.board,
            jewels: self.jewels.clone(),
        }
    }
}

impl Iterator for GameEngine {
    type Item = Snapshot;

    /// Resolve one turn and yield its snapshot; `None` once terminal.
    fn next(&mut self) -> Option<Snapshot> {
        if self.outcome.is_some() {
            return None;
        }

        let n_players = self.hands.player_count();
        let player = PlayerId::new((self.turn as usize % n_players) as u8);

        match self.deck.draw() {
            Card::Frost => {
                let color = self.storm.draw();
                self.board.add_frost(color);
            }
            card => {
                self.hands[player].add(card);
                self.purchase_jewel(player);
                self.discard_down(player);
            }
        }

        let snapshot = self.snapshot();

        // Loss first: a flower freezing over ends the game even if the
        // final jewel arrived the same turn.
        if self.board.is_lost() {
            self.outcome = Some(Outcome::Loss);
        } else if self.jewels.len() == JEWEL_GOAL {
            self.outcome = Some(Outcome::Win);
        }
        self.turn += 1;

        Some(snapshot)
    }
}
