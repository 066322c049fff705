//! Error types for game operations.

use thiserror::Error;

/// Errors raised by the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Fewer cards remain than were requested.
    #[error("deck exhausted: requested {requested} card(s), {remaining} left")]
    Exhausted {
        /// Cards requested.
        requested: usize,
        /// Cards left in the deck.
        remaining: usize,
    },
}

/// Errors raised while parsing player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    /// Input is not a whole number.
    #[error("invalid input, expected a whole number")]
    NotANumber,
    /// Bet code is outside the known codes.
    #[error("unknown bet option {0}, expected 1, 2 or 3")]
    UnknownBetCode(u32),
}

/// Errors that can occur when placing a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Invalid session state for betting.
    #[error("invalid session state for betting")]
    InvalidState,
    /// Stake is zero.
    #[error("stake must be greater than zero")]
    ZeroStake,
    /// Stake is higher than the current balance.
    #[error("insufficient balance: stake {stake}, balance {balance}")]
    InsufficientBalance {
        /// Requested stake.
        stake: usize,
        /// Balance at the time of the bet.
        balance: usize,
    },
}

/// Errors that can occur while playing or closing a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Invalid session state for this step.
    #[error("invalid session state for this step")]
    InvalidState,
    /// The deck ran out mid-round. The round was abandoned.
    #[error("round abandoned: {0}")]
    Deck(#[from] DeckError),
}

/// Errors raised by a leaderboard store.
#[derive(Debug, Error)]
pub enum LeaderboardError {
    /// A stored line does not match `<name>: <balance> pontos`.
    #[error("malformed leaderboard entry on line {line}")]
    Malformed {
        /// 1-based line number.
        line: usize,
    },
    /// The name is empty or contains a line break.
    #[error("leaderboard names must be non-empty and fit on one line")]
    InvalidName,
    /// Reading or writing the backing file failed.
    #[cfg(feature = "std")]
    #[error("leaderboard i/o failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur when finalizing a session.
#[derive(Debug, Error)]
pub enum FinishError {
    /// The session is not over yet.
    #[error("session is not over")]
    InvalidState,
    /// The final score has already been recorded.
    #[error("final score already recorded")]
    AlreadyRecorded,
    /// The leaderboard store failed.
    #[error(transparent)]
    Store(#[from] LeaderboardError),
}
