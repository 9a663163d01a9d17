use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("No game is running yet")]
    NotStarted,
    #[error("Unknown cell id")]
    UnknownCell,
    #[error("Game is paused, resume it before playing")]
    Paused,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

pub type Result<T> = std::result::Result<T, GameError>;
