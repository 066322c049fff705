//! Best-balance leaderboard and its stores.
//!
//! The text form holds one entry per line as `<name>: <balance> pontos`,
//! highest balance first.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use crate::error::LeaderboardError;

/// Unit suffix written after every balance.
const POINTS_SUFFIX: &str = " pontos";
const NAME_SEPARATOR: &str = ": ";

/// One player's best recorded balance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    /// Player name.
    pub name: String,
    /// Best final balance seen for this player.
    pub best_balance: usize,
}

/// Entries ordered by best balance, highest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    /// Creates an empty leaderboard.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Parses the text form.
    ///
    /// Blank lines are skipped. The name is everything before the last
    /// `": "` on the line, taken verbatim, so names may contain colons and
    /// surrounding spaces.
    ///
    /// # Errors
    ///
    /// Returns [`LeaderboardError::Malformed`] for the first line that is not
    /// `<name>: <balance> pontos`.
    pub fn parse(text: &str) -> Result<Self, LeaderboardError> {
        let mut board = Self::new();
        for (index, raw) in text.lines().enumerate() {
            let line = raw.trim_end_matches('\r');
            if line.trim().is_empty() {
                continue;
            }
            let malformed = LeaderboardError::Malformed { line: index + 1 };
            let Some((name, rest)) = line.rsplit_once(NAME_SEPARATOR) else {
                return Err(malformed);
            };
            let Some(balance) = rest.strip_suffix(POINTS_SUFFIX) else {
                return Err(malformed);
            };
            let Ok(best_balance) = balance.trim().parse::<usize>() else {
                return Err(malformed);
            };
            board.entries.push(LeaderboardEntry {
                name: name.to_string(),
                best_balance,
            });
        }
        board.sort();
        Ok(board)
    }

    /// Records a final balance for `name`.
    ///
    /// A new name is inserted; an existing entry is raised only when
    /// `balance` beats it. Returns whether the leaderboard changed.
    ///
    /// # Errors
    ///
    /// Returns [`LeaderboardError::InvalidName`] if `name` is empty or spans
    /// more than one line. The leaderboard is left untouched.
    pub fn record(&mut self, name: &str, balance: usize) -> Result<bool, LeaderboardError> {
        validate_name(name)?;
        let changed = match self.entries.iter().position(|entry| entry.name == name) {
            Some(index) if balance > self.entries[index].best_balance => {
                self.entries[index].best_balance = balance;
                true
            }
            Some(_) => false,
            None => {
                self.entries.push(LeaderboardEntry {
                    name: name.to_string(),
                    best_balance: balance,
                });
                true
            }
        };
        self.sort();
        Ok(changed)
    }

    /// Returns the best balance recorded for `name`.
    #[must_use]
    pub fn best(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.best_balance)
    }

    /// Returns the entries, highest balance first.
    #[must_use]
    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // Stable, so equal balances keep their previous order.
    fn sort(&mut self) {
        self.entries.sort_by(|a, b| b.best_balance.cmp(&a.best_balance));
    }
}

/// Names must be non-empty and fit on a single line of the text form.
fn validate_name(name: &str) -> Result<(), LeaderboardError> {
    if name.is_empty() || name.contains(['\n', '\r']) {
        return Err(LeaderboardError::InvalidName);
    }
    Ok(())
}

impl fmt::Display for Leaderboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(
                f,
                "{}{NAME_SEPARATOR}{}{POINTS_SUFFIX}",
                entry.name, entry.best_balance
            )?;
        }
        Ok(())
    }
}

/// Persistence for the leaderboard.
///
/// Stores read and write the whole board at once.
pub trait LeaderboardStore {
    /// Loads the stored leaderboard.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read or parsed.
    fn load(&self) -> Result<Leaderboard, LeaderboardError>;

    /// Replaces the stored leaderboard.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn save(&mut self, board: &Leaderboard) -> Result<(), LeaderboardError>;

    /// Loads, records `balance` for `name`, and writes the board back.
    ///
    /// Returns the updated leaderboard.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is not a valid leaderboard name, or if
    /// loading or saving fails. Nothing is written for an invalid name.
    fn record(&mut self, name: &str, balance: usize) -> Result<Leaderboard, LeaderboardError> {
        let mut board = self.load()?;
        board.record(name, balance)?;
        self.save(&board)?;
        Ok(board)
    }
}

/// Leaderboard kept in memory, for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLeaderboardStore {
    board: Leaderboard,
    saves: usize,
}

impl InMemoryLeaderboardStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `board`.
    #[must_use]
    pub const fn with_board(board: Leaderboard) -> Self {
        Self { board, saves: 0 }
    }

    /// Returns how many times the board has been written.
    #[must_use]
    pub const fn saves(&self) -> usize {
        self.saves
    }
}

impl LeaderboardStore for InMemoryLeaderboardStore {
    fn load(&self) -> Result<Leaderboard, LeaderboardError> {
        Ok(self.board.clone())
    }

    fn save(&mut self, board: &Leaderboard) -> Result<(), LeaderboardError> {
        self.board = board.clone();
        self.saves += 1;
        Ok(())
    }
}

#[cfg(feature = "std")]
pub use file::{DEFAULT_LEADERBOARD_PATH, FileLeaderboardStore};

#[cfg(feature = "std")]
mod file {
    use std::fs;
    use std::io::ErrorKind;
    use std::path::{Path, PathBuf};

    use super::{Leaderboard, LeaderboardStore};
    use crate::error::LeaderboardError;

    /// File the binary keeps its leaderboard in.
    pub const DEFAULT_LEADERBOARD_PATH: &str = "ranking.txt";

    /// Leaderboard kept in a text file, rewritten whole on every save.
    #[derive(Debug, Clone)]
    pub struct FileLeaderboardStore {
        path: PathBuf,
    }

    impl FileLeaderboardStore {
        /// Creates a store backed by the file at `path`.
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        /// Returns the backing file path.
        #[must_use]
        pub fn path(&self) -> &Path {
            &self.path
        }
    }

    impl Default for FileLeaderboardStore {
        fn default() -> Self {
            Self::new(DEFAULT_LEADERBOARD_PATH)
        }
    }

    impl LeaderboardStore for FileLeaderboardStore {
        fn load(&self) -> Result<Leaderboard, LeaderboardError> {
            match fs::read_to_string(&self.path) {
                Ok(text) => Leaderboard::parse(&text),
                Err(err) if err.kind() == ErrorKind::NotFound => Ok(Leaderboard::new()),
                Err(err) => Err(err.into()),
            }
        }

        fn save(&mut self, board: &Leaderboard) -> Result<(), LeaderboardError> {
            fs::write(&self.path, board.to_string())?;
            log::info!(
                "wrote {} leaderboard entries to {}",
                board.len(),
                self.path.display()
            );
            Ok(())
        }
    }
}
