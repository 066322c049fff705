//! Third-card rule.
//!
//! Both sides follow the same rule: a two-card hand totalling
//! [`THIRD_CARD_THRESHOLD`] or less draws one more card. The banker does not
//! react to the player's third card.

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DeckError;
use crate::hand::Hand;

/// Highest two-card score that still draws a third card.
pub const THIRD_CARD_THRESHOLD: u8 = 5;

/// What the third-card rule did to a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawDecision {
    /// Score of the hand before the rule was applied.
    pub initial_score: u8,
    /// The card drawn, if any.
    pub third_card: Option<Card>,
}

impl DrawDecision {
    /// Returns whether a third card was drawn.
    #[must_use]
    pub const fn drew_third(&self) -> bool {
        self.third_card.is_some()
    }
}

/// Returns whether `hand` must draw a third card.
#[must_use]
pub fn should_draw_third(hand: &Hand) -> bool {
    hand.len() == 2 && hand.score() <= THIRD_CARD_THRESHOLD
}

/// Applies the third-card rule to `hand`, drawing from `deck` when required.
///
/// Hands that do not hold exactly two cards are left untouched.
///
/// # Errors
///
/// Returns [`DeckError::Exhausted`] if a card is required and the deck is
/// empty. The hand is unchanged in that case.
pub fn maybe_draw_third(hand: &mut Hand, deck: &mut Deck) -> Result<DrawDecision, DeckError> {
    let initial_score = hand.score();
    if !should_draw_third(hand) {
        return Ok(DrawDecision {
            initial_score,
            third_card: None,
        });
    }

    let card = deck.draw_one()?;
    hand.add_card(card);
    log::debug!(
        "{:?} draws {card:?} on {initial_score}, now {}",
        hand.side(),
        hand.score()
    );

    Ok(DrawDecision {
        initial_score,
        third_card: Some(card),
    })
}
