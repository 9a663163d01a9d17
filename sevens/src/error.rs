use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("No match has been dealt yet")]
    NotStarted,
    #[error("Match already ended, no new moves are accepted")]
    AlreadyEnded,
    #[error("The same card appears in more than one pile")]
    DuplicateCard,
    #[error("Piles hold {found} cards, expected {expected}")]
    CardCountMismatch { found: usize, expected: usize },
}

pub type Result<T> = std::result::Result<T, GameError>;
