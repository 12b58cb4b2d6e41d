//! Text rendering of snapshots and the final tally.
//!
//! Pure string producers; the binary decides where they go (snapshots to
//! stderr, the tally to stdout).

use std::fmt::Write as _;

use crate::core::{Card, Color};
use crate::state::Snapshot;

const FROST_ICON: &str = "❄️  ";

fn color_icon(color: Color) -> &'static str {
    match color {
        Color::Purple => "🟣 ",
        Color::Pink => "🔴 ",
        Color::Yellow => "🟡 ",
        Color::Orange => "🟠 ",
    }
}

fn card_icon(card: Card) -> &'static str {
    match card {
        Card::Frost => FROST_ICON,
        Card::Wand => "🪄",
        Card::Unicorn => "🦄",
        Card::Rainbow => "🌈",
        Card::Fairy(color) => color_icon(color),
    }
}

/// Render one turn: turn number, jewels, per-color frost, every hand.
#[must_use]
pub fn render(snapshot: &Snapshot) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Turn {}", snapshot.turn);

    out.push_str("Jewels ");
    for &color in &snapshot.jewels {
        out.push_str(color_icon(color));
    }
    out.push('\n');

    out.push_str("Flowers ");
    let flowers: Vec<String> = snapshot
        .board
        .iter()
        .map(|(color, frost)| format!("{}{}", color_icon(color), FROST_ICON.repeat(frost as usize)))
        .collect();
    out.push_str(&flowers.join("    "));
    out.push('\n');

    out.push_str("Hands ");
    for (_, hand) in snapshot.hands.iter() {
        for (card, count) in hand.iter() {
            for _ in 0..count {
                out.push_str(card_icon(card));
            }
        }
        out.push_str("    ");
    }

    out
}

/// The single summary line printed after all games.
#[must_use]
pub fn tally(wins: u32, games: u32) -> String {
    format!("{wins} wins / {games} games")
}
