//! Round and session result types.

extern crate alloc;

use alloc::string::String;

use crate::bet::{Bet, Outcome};
use crate::hand::{Hand, Side};
use crate::rules::DrawDecision;

/// One side's hand after the third-card rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandSummary {
    /// The final hand.
    pub hand: Hand,
    /// What the third-card rule did.
    pub draw: DrawDecision,
    /// Final score in `0..=9`.
    pub score: u8,
}

/// Result of a completed round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// The bet that was settled.
    pub bet: Bet,
    /// Player hand.
    pub player: HandSummary,
    /// Banker hand.
    pub banker: HandSummary,
    /// Higher-scoring side, `None` on equal scores.
    pub winner: Option<Side>,
    /// How the bet ended.
    pub outcome: Outcome,
    /// Balance before settlement.
    pub balance_before: usize,
    /// Balance after settlement.
    pub balance_after: usize,
}

impl RoundResult {
    /// Net change in balance (positive = profit, negative = loss).
    #[must_use]
    #[expect(clippy::cast_possible_wrap, reason = "balances fit in isize")]
    pub const fn net(&self) -> isize {
        self.balance_after as isize - self.balance_before as isize
    }

    /// Amount added to the balance, zero unless the bet won.
    #[must_use]
    pub const fn winnings(&self) -> usize {
        self.balance_after.saturating_sub(self.balance_before)
    }
}

/// Final figures of a session, as recorded on the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalScore {
    /// Player name.
    pub name: String,
    /// Balance when the session ended. This is what gets persisted.
    pub balance: usize,
    /// Highest balance reached after any round.
    pub high_water_mark: usize,
    /// Rounds completed.
    pub rounds_played: usize,
}
