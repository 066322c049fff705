use crate::error::FinishError;
use crate::leaderboard::LeaderboardStore;
use crate::result::FinalScore;

use super::{Session, SessionState};

impl Session {
    /// Records the final balance in `store` and returns the final figures.
    ///
    /// The final balance is what gets recorded, not the high-water mark.
    /// Succeeds once per session.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is not over, the score was already
    /// recorded, or the store fails. A failed write can be retried.
    pub fn finish<S>(&mut self, store: &mut S) -> Result<FinalScore, FinishError>
    where
        S: LeaderboardStore + ?Sized,
    {
        if self.state != SessionState::GameOver {
            return Err(FinishError::InvalidState);
        }
        if self.recorded {
            return Err(FinishError::AlreadyRecorded);
        }

        store.record(&self.name, self.balance)?;
        self.recorded = true;
        log::info!(
            "recorded {} for {} after {} round(s)",
            self.balance,
            self.name,
            self.rounds_played
        );

        Ok(self.final_score())
    }

    /// Returns whether the final score has been recorded.
    #[must_use]
    pub const fn is_recorded(&self) -> bool {
        self.recorded
    }

    /// Returns the session's current figures.
    #[must_use]
    pub fn final_score(&self) -> FinalScore {
        FinalScore {
            name: self.name.clone(),
            balance: self.balance,
            high_water_mark: self.high_water_mark,
            rounds_played: self.rounds_played,
        }
    }
}
