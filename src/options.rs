//! Session configuration options.

/// How the shoe is replenished between rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShoePolicy {
    /// Every round is dealt from a freshly shuffled 52-card deck.
    #[default]
    PerRound,
    /// One deck is carried across rounds and rebuilt once it can no longer
    /// cover a full round.
    Continuous,
}

/// Balance a new session starts with.
pub const DEFAULT_STARTING_BALANCE: usize = 1000;

/// Configuration options for a baccarat session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use baccarat::{SessionOptions, ShoePolicy};
///
/// let options = SessionOptions::default()
///     .with_starting_balance(500)
///     .with_shoe(ShoePolicy::Continuous);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    /// Balance the player starts with.
    pub starting_balance: usize,
    /// Shoe replenishment policy.
    pub shoe: ShoePolicy,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            starting_balance: DEFAULT_STARTING_BALANCE,
            shoe: ShoePolicy::PerRound,
        }
    }
}

impl SessionOptions {
    /// Sets the starting balance.
    ///
    /// # Example
    ///
    /// ```
    /// use baccarat::SessionOptions;
    ///
    /// let options = SessionOptions::default().with_starting_balance(250);
    /// assert_eq!(options.starting_balance, 250);
    /// ```
    #[must_use]
    pub const fn with_starting_balance(mut self, balance: usize) -> Self {
        self.starting_balance = balance;
        self
    }

    /// Sets the shoe replenishment policy.
    ///
    /// # Example
    ///
    /// ```
    /// use baccarat::{SessionOptions, ShoePolicy};
    ///
    /// let options = SessionOptions::default().with_shoe(ShoePolicy::Continuous);
    /// assert_eq!(options.shoe, ShoePolicy::Continuous);
    /// ```
    #[must_use]
    pub const fn with_shoe(mut self, shoe: ShoePolicy) -> Self {
        self.shoe = shoe;
        self
    }
}
