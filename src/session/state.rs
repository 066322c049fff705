//! Session state types.

/// Session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for the player's bet.
    AwaitingBet,
    /// A bet is accepted and the round is ready to be dealt.
    RoundInProgress,
    /// The round is settled; the player decides whether to go on.
    RoundResolved,
    /// The session has ended.
    GameOver,
}
