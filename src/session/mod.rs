//! Session controller: balance, shoe, and round flow.

use alloc::string::String;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::bet::Bet;
use crate::deck::{Deck, MAX_CARDS_PER_ROUND};
use crate::options::{SessionOptions, ShoePolicy};

mod finish;
mod round;
pub mod state;

pub use state::SessionState;

/// A single player's baccarat session against the house.
///
/// The session owns the shoe, the RNG and the balance. Drive it with
/// [`Session::place_bet`], [`Session::play_round`] and [`Session::end_round`],
/// then record the result with [`Session::finish`].
///
/// # Example
///
/// ```
/// use baccarat::{Bet, BetSide, InMemoryLeaderboardStore, Session, SessionOptions};
///
/// let mut session = Session::new("Alice", SessionOptions::default(), 7);
/// session.place_bet(Bet::new(BetSide::Banker, 100)).unwrap();
/// let round = session.play_round().unwrap();
/// assert_eq!(session.balance(), round.balance_after);
///
/// session.end_round(false).unwrap();
/// let mut store = InMemoryLeaderboardStore::new();
/// let score = session.finish(&mut store).unwrap();
/// assert_eq!(score.balance, session.balance());
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    name: String,
    options: SessionOptions,
    deck: Deck,
    rng: ChaCha8Rng,
    state: SessionState,
    balance: usize,
    high_water_mark: usize,
    bet: Option<Bet>,
    rounds_played: usize,
    recorded: bool,
    // Set by `set_deck` until the next round is dealt.
    deck_override: bool,
}

impl Session {
    /// Creates a new session for `name` with the given seed.
    #[must_use]
    pub fn new(name: impl Into<String>, options: SessionOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::shuffled(&mut rng);
        let balance = options.starting_balance;

        Self {
            name: name.into(),
            options,
            deck,
            rng,
            state: SessionState::AwaitingBet,
            balance,
            high_water_mark: 0,
            bet: None,
            rounds_played: 0,
            recorded: false,
            deck_override: false,
        }
    }

    /// Returns the player name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the session options.
    #[must_use]
    pub const fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Returns the current balance.
    #[must_use]
    pub const fn balance(&self) -> usize {
        self.balance
    }

    /// Returns the highest balance reached after any round.
    ///
    /// Zero until the first round is settled. Informational only; the
    /// leaderboard records the final balance.
    #[must_use]
    pub const fn high_water_mark(&self) -> usize {
        self.high_water_mark
    }

    /// Returns the bet accepted for the upcoming round, if any.
    #[must_use]
    pub const fn pending_bet(&self) -> Option<Bet> {
        self.bet
    }

    /// Returns the number of settled rounds.
    #[must_use]
    pub const fn rounds_played(&self) -> usize {
        self.rounds_played
    }

    /// Returns the number of cards left in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the shoe.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Replaces the shoe, e.g. to replay a known card sequence.
    ///
    /// The replacement is dealt as-is by the next [`Session::play_round`],
    /// whether it is set before or after [`Session::place_bet`]. The shoe
    /// policy applies again from the round after.
    pub fn set_deck(&mut self, deck: Deck) {
        self.deck = deck;
        self.deck_override = true;
    }

    /// Ends the session from any state.
    ///
    /// A bet that has not been dealt yet is discarded; the balance is
    /// untouched.
    pub fn quit(&mut self) {
        if self.state != SessionState::GameOver {
            log::info!("{} leaves with {}", self.name, self.balance);
        }
        self.bet = None;
        self.state = SessionState::GameOver;
    }

    /// Returns whether the shoe must be rebuilt before dealing a round.
    ///
    /// Always `false` while a deck set with [`Session::set_deck`] is pending.
    #[must_use]
    pub fn needs_reshuffle(&self) -> bool {
        if self.deck_override {
            return false;
        }
        match self.options.shoe {
            ShoePolicy::PerRound => true,
            ShoePolicy::Continuous => self.deck.len() < MAX_CARDS_PER_ROUND,
        }
    }

    /// Rebuilds and shuffles the shoe.
    fn reshuffle(&mut self) {
        self.deck = Deck::shuffled(&mut self.rng);
        self.deck_override = false;
    }

    /// Rebuilds the shoe if the policy asks for it.
    ///
    /// Returns `true` if a reshuffle was performed.
    fn check_and_reshuffle(&mut self) -> bool {
        if self.needs_reshuffle() {
            self.reshuffle();
            true
        } else {
            false
        }
    }
}
