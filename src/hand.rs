//! Hands and modulo-ten scoring.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Scores a run of cards: the sum of card values modulo ten.
#[must_use]
pub fn score(cards: &[Card]) -> u8 {
    let total: u32 = cards.iter().map(|card| u32::from(card.value())).sum();
    (total % 10) as u8
}

/// The two sides a hand can be dealt to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The player's hand.
    Player,
    /// The banker's hand.
    Banker,
}

impl Side {
    /// Display name of the side.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Player => "PLAYER",
            Self::Banker => "BANKER",
        }
    }
}

/// A hand dealt to one side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    side: Side,
    cards: Vec<Card>,
}

impl Hand {
    /// Creates an empty hand for `side`.
    #[must_use]
    pub const fn new(side: Side) -> Self {
        Self {
            side,
            cards: Vec::new(),
        }
    }

    /// Creates a hand holding `cards`.
    #[must_use]
    pub fn with_cards(side: Side, cards: Vec<Card>) -> Self {
        Self { side, cards }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the side this hand belongs to.
    #[must_use]
    pub const fn side(&self) -> Side {
        self.side
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the hand's score in `0..=9`.
    #[must_use]
    pub fn score(&self) -> u8 {
        score(&self.cards)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
