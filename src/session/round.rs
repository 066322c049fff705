use crate::bet::{Bet, resolve, winner};
use crate::error::{BetError, RoundError};
use crate::hand::{Hand, Side};
use crate::result::{HandSummary, RoundResult};
use crate::rules::maybe_draw_third;

use super::{Session, SessionState};

impl Session {
    /// Checks a stake against the current balance without placing it.
    ///
    /// # Errors
    ///
    /// Returns an error if the stake is zero or exceeds the balance.
    pub const fn validate_stake(&self, stake: usize) -> Result<(), BetError> {
        if stake == 0 {
            return Err(BetError::ZeroStake);
        }
        if stake > self.balance {
            return Err(BetError::InsufficientBalance {
                stake,
                balance: self.balance,
            });
        }
        Ok(())
    }

    /// Accepts a bet for the next round.
    ///
    /// The balance is not touched until the round is settled. The shoe is
    /// rebuilt here when the shoe policy requires it, unless a deck was set
    /// with [`Session::set_deck`].
    ///
    /// # Errors
    ///
    /// Returns an error if the session is not awaiting a bet, the stake is
    /// zero, or the stake exceeds the balance.
    pub fn place_bet(&mut self, bet: Bet) -> Result<(), BetError> {
        if self.state != SessionState::AwaitingBet {
            return Err(BetError::InvalidState);
        }
        self.validate_stake(bet.stake)?;

        if self.check_and_reshuffle() {
            log::debug!("shoe rebuilt for round {}", self.rounds_played + 1);
        }

        self.bet = Some(bet);
        self.state = SessionState::RoundInProgress;
        Ok(())
    }

    /// Deals, draws, scores and settles the round for the accepted bet.
    ///
    /// Player and banker each get two cards, player first. The third-card
    /// rule is then applied to the player hand and to the banker hand.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::InvalidState`] if no bet has been accepted.
    /// Returns [`RoundError::Deck`] if the shoe runs out; the round is
    /// abandoned, the bet discarded, the shoe rebuilt, and the session goes
    /// back to awaiting a bet with its balance unchanged.
    pub fn play_round(&mut self) -> Result<RoundResult, RoundError> {
        if self.state != SessionState::RoundInProgress {
            return Err(RoundError::InvalidState);
        }
        let Some(bet) = self.bet else {
            return Err(RoundError::InvalidState);
        };

        self.deck_override = false;
        let (player, banker) = match self.deal() {
            Ok(hands) => hands,
            Err(err) => {
                log::warn!("abandoning round: {err}");
                self.bet = None;
                self.reshuffle();
                self.state = SessionState::AwaitingBet;
                return Err(err);
            }
        };

        let balance_before = self.balance;
        let resolution = resolve(bet, player.score, banker.score, balance_before);
        log::debug!(
            "{:?} bet of {} on {} vs {}: {:?}",
            bet.side,
            bet.stake,
            player.score,
            banker.score,
            resolution.outcome
        );

        self.balance = resolution.balance;
        self.high_water_mark = self.high_water_mark.max(self.balance);
        self.rounds_played += 1;
        self.bet = None;
        self.state = SessionState::RoundResolved;

        Ok(RoundResult {
            bet,
            winner: winner(player.score, banker.score),
            player,
            banker,
            outcome: resolution.outcome,
            balance_before,
            balance_after: self.balance,
        })
    }

    /// Closes a settled round.
    ///
    /// The session goes back to awaiting a bet when `keep_playing` is set and
    /// the balance is above zero; otherwise it is over. Returns the new state.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::InvalidState`] if no round has just been settled.
    pub fn end_round(&mut self, keep_playing: bool) -> Result<SessionState, RoundError> {
        if self.state != SessionState::RoundResolved {
            return Err(RoundError::InvalidState);
        }

        self.state = if self.balance == 0 {
            log::info!("{} is out of money", self.name);
            SessionState::GameOver
        } else if keep_playing {
            SessionState::AwaitingBet
        } else {
            log::info!("{} stops with {}", self.name, self.balance);
            SessionState::GameOver
        };

        Ok(self.state)
    }

    fn deal(&mut self) -> Result<(HandSummary, HandSummary), RoundError> {
        let mut player = Hand::with_cards(Side::Player, self.deck.draw(2)?);
        let mut banker = Hand::with_cards(Side::Banker, self.deck.draw(2)?);

        let player_draw = maybe_draw_third(&mut player, &mut self.deck)?;
        let banker_draw = maybe_draw_third(&mut banker, &mut self.deck)?;

        Ok((
            HandSummary {
                score: player.score(),
                hand: player,
                draw: player_draw,
            },
            HandSummary {
                score: banker.score(),
                hand: banker,
                draw: banker_draw,
            },
        ))
    }
}
