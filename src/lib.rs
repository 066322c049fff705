//! A baccarat rules engine with optional `no_std` support.
//!
//! The crate provides a [`Session`] type that runs rounds for one player
//! against the house: dealing from a shuffled deck, applying the third-card
//! rule, scoring hands modulo ten, settling the bet, and recording the final
//! balance on a [`Leaderboard`].
//!
//! # Example
//!
//! ```no_run
//! use baccarat::{Session, SessionOptions};
//!
//! let options = SessionOptions::default();
//! let session = Session::new("Alice", options, 42);
//! let _ = session;
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod bet;
pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod leaderboard;
pub mod options;
pub mod render;
pub mod result;
pub mod rules;
pub mod session;

// Re-export main types
pub use bet::{Bet, BetSide, Outcome, Resolution, TIE_PAYOUT, parse_stake, resolve, winner};
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::{Deck, MAX_CARDS_PER_ROUND, build_deck};
pub use error::{BetError, DeckError, FinishError, InputError, LeaderboardError, RoundError};
pub use hand::{Hand, Side, score};
#[cfg(feature = "std")]
pub use leaderboard::{DEFAULT_LEADERBOARD_PATH, FileLeaderboardStore};
pub use leaderboard::{InMemoryLeaderboardStore, Leaderboard, LeaderboardEntry, LeaderboardStore};
pub use options::{DEFAULT_STARTING_BALANCE, SessionOptions, ShoePolicy};
pub use result::{FinalScore, HandSummary, RoundResult};
pub use rules::{DrawDecision, THIRD_CARD_THRESHOLD, maybe_draw_third, should_draw_third};
pub use session::{Session, SessionState};
