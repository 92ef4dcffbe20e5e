use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Unknown card id")]
    UnknownCard,
    #[error("A deck needs at least one pair")]
    NoPairs,
    #[error("Not enough symbols, requested {requested} pairs but the pool only has {available}")]
    NotEnoughSymbols { requested: usize, available: usize },
    #[error("Time limit must be at least one second")]
    ZeroTimeLimit,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

pub type Result<T> = core::result::Result<T, GameError>;
