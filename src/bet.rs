//! Bets and round resolution.

use core::cmp::Ordering;
use core::str::FromStr;

use crate::error::InputError;
use crate::hand::Side;

/// Multiplier applied to the stake on a winning tie bet.
pub const TIE_PAYOUT: usize = 8;

/// What the player is betting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BetSide {
    /// Player hand scores higher.
    Player,
    /// Banker hand scores higher.
    Banker,
    /// Both hands score the same.
    Tie,
}

impl BetSide {
    /// All bet sides, in menu order.
    pub const ALL: [Self; 3] = [Self::Player, Self::Banker, Self::Tie];

    /// Menu code for this side (1 = Player, 2 = Banker, 3 = Tie).
    #[must_use]
    pub const fn code(self) -> u32 {
        match self {
            Self::Player => 1,
            Self::Banker => 2,
            Self::Tie => 3,
        }
    }

    /// Looks up a side by its menu code.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::UnknownBetCode`] for codes other than 1, 2 and 3.
    pub const fn from_code(code: u32) -> Result<Self, InputError> {
        match code {
            1 => Ok(Self::Player),
            2 => Ok(Self::Banker),
            3 => Ok(Self::Tie),
            _ => Err(InputError::UnknownBetCode(code)),
        }
    }

    /// Display name of the side.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Player => "PLAYER",
            Self::Banker => "BANKER",
            Self::Tie => "TIE",
        }
    }
}

impl FromStr for BetSide {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().parse::<u32>().map_err(|_| InputError::NotANumber)?;
        Self::from_code(code)
    }
}

/// Parses a stake typed by the player.
///
/// Only the format is checked here; the session validates the amount against
/// the balance.
///
/// # Errors
///
/// Returns [`InputError::NotANumber`] if `input` is not a non-negative whole
/// number.
pub fn parse_stake(input: &str) -> Result<usize, InputError> {
    input
        .trim()
        .parse::<usize>()
        .map_err(|_| InputError::NotANumber)
}

/// A wager on one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bet {
    /// What the bet is on.
    pub side: BetSide,
    /// Amount at risk.
    pub stake: usize,
}

impl Bet {
    /// Creates a new bet.
    #[must_use]
    pub const fn new(side: BetSide, stake: usize) -> Self {
        Self { side, stake }
    }
}

/// Result of a bet after the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The bet was paid.
    Win,
    /// The stake was lost.
    Loss,
    /// Equal scores on a player or banker bet; nothing changes hands.
    Push,
}

/// Balance and outcome after resolving a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    /// Balance after settlement.
    pub balance: usize,
    /// How the bet ended.
    pub outcome: Outcome,
}

/// Returns the side with the higher score, or `None` on equal scores.
#[must_use]
pub const fn winner(player_score: u8, banker_score: u8) -> Option<Side> {
    if player_score > banker_score {
        Some(Side::Player)
    } else if banker_score > player_score {
        Some(Side::Banker)
    } else {
        None
    }
}

/// Settles `bet` against the two final scores.
///
/// Player and banker bets pay even money and push on equal scores. A tie bet
/// pays [`TIE_PAYOUT`] times the stake and loses the stake on any other
/// result. The stake is assumed to be covered by `balance`; losses saturate
/// at zero.
#[must_use]
pub fn resolve(bet: Bet, player_score: u8, banker_score: u8, balance: usize) -> Resolution {
    let ordering = match bet.side {
        BetSide::Player => player_score.cmp(&banker_score),
        BetSide::Banker => banker_score.cmp(&player_score),
        BetSide::Tie if player_score == banker_score => {
            return Resolution {
                balance: balance.saturating_add(bet.stake.saturating_mul(TIE_PAYOUT)),
                outcome: Outcome::Win,
            };
        }
        BetSide::Tie => Ordering::Less,
    };

    match ordering {
        Ordering::Greater => Resolution {
            balance: balance.saturating_add(bet.stake),
            outcome: Outcome::Win,
        },
        Ordering::Less => Resolution {
            balance: balance.saturating_sub(bet.stake),
            outcome: Outcome::Loss,
        },
        Ordering::Equal => Resolution {
            balance,
            outcome: Outcome::Push,
        },
    }
}
