//! ANSI rendering of cards and hands for terminals.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::card::{Card, Rank, Suit};
use crate::hand::Hand;

const WHITE_BACKGROUND: &str = "47";
const RED: &str = "31";
const BLACK: &str = "30";

/// Wraps `text` in an ANSI SGR sequence.
#[must_use]
pub fn colorize(text: &str, codes: &str) -> String {
    format!("\u{1b}[{codes}m{text}\u{1b}[0m")
}

/// Returns the suit symbol.
#[must_use]
pub const fn suit_symbol(suit: Suit) -> &'static str {
    match suit {
        Suit::Hearts => "♥",
        Suit::Spades => "♠",
        Suit::Diamonds => "♦",
        Suit::Clubs => "♣",
    }
}

/// Renders a card as a right-aligned rank and suit without colour, e.g. ` A♠`.
#[must_use]
pub fn plain_card(card: Card) -> String {
    format!("{:>2}{}", card.rank.label(), suit_symbol(card.suit))
}

/// Renders a card on a white face, red for hearts and diamonds, black
/// otherwise.
#[must_use]
pub fn card(card: Card) -> String {
    let fore = if card.suit.is_red() { RED } else { BLACK };
    colorize(
        &format!("{} ", plain_card(card)),
        &format!("{WHITE_BACKGROUND};{fore}"),
    )
}

/// Renders the cards of a hand in dealt order.
#[must_use]
pub fn hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return String::from("(empty)");
    }
    hand.cards()
        .iter()
        .map(|&c| card(c))
        .collect::<Vec<_>>()
        .join("  ")
}

/// Renders the full deck, one row per suit.
#[must_use]
pub fn deck_overview() -> String {
    let mut rows = Vec::with_capacity(Suit::ALL.len());
    for suit in Suit::ALL {
        let row = Rank::ALL
            .iter()
            .map(|&rank| card(Card::new(rank, suit)))
            .collect::<Vec<_>>()
            .join("  ");
        rows.push(row);
    }
    rows.join("\n\n")
}
