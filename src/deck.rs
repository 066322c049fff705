//! The shoe: a single 52-card deck dealt without replacement.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// Most cards a single round can consume (two hands of up to three cards).
pub const MAX_CARDS_PER_ROUND: usize = 6;

/// Enumerates all 52 rank and suit combinations, rank by rank.
#[must_use]
pub fn build_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for rank in Rank::ALL {
        for suit in Suit::ALL {
            cards.push(Card::new(rank, suit));
        }
    }
    cards
}

/// Cards remaining to be dealt.
///
/// The last element of the inner vector is the top of the deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds a full deck and shuffles it with `rng`.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = build_deck();
        cards.shuffle(rng);
        log::debug!("shuffled a fresh {DECK_SIZE}-card deck");
        Self { cards }
    }

    /// Builds a deck that deals `draws` in the given order.
    ///
    /// Useful for replaying a known sequence of cards.
    #[must_use]
    pub fn stacked(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self { cards }
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Draws one card from the top.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] if the deck is empty.
    pub fn draw_one(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Exhausted {
            requested: 1,
            remaining: 0,
        })
    }

    /// Draws `n` cards from the top, in dealing order.
    ///
    /// Nothing is removed when the deck cannot supply all `n` cards.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] if fewer than `n` cards remain.
    pub fn draw(&mut self, n: usize) -> Result<Vec<Card>, DeckError> {
        let remaining = self.cards.len();
        if remaining < n {
            return Err(DeckError::Exhausted {
                requested: n,
                remaining,
            });
        }

        let mut drawn = self.cards.split_off(remaining - n);
        drawn.reverse();
        Ok(drawn)
    }
}
