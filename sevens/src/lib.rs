pub use card::*;
pub use engine::*;
pub use error::*;
pub use session::*;
pub use shuffle::*;
pub use snapshot::*;

pub mod opponent;

mod card;
mod engine;
mod error;
mod session;
mod shuffle;
mod snapshot;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PlayOutcome {
    /// The request was out of turn, mid-wild, or the card was dead.
    Rejected,
    /// Card landed, active suit settled, turn passed.
    Played,
    /// A wild landed without a suit; `resolve_suit` must follow.
    AwaitingSuit,
    /// The hand emptied out, the match is over.
    Won,
}

impl PlayOutcome {
    pub const fn has_update(self) -> bool {
        use PlayOutcome::*;
        match self {
            Rejected => false,
            Played => true,
            AwaitingSuit => true,
            Won => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DrawOutcome {
    /// The request was out of turn or mid-wild.
    Rejected,
    /// Deck was empty; the turn passed with no card moved.
    Skipped,
    /// The drawn card is playable and the turn stays put.
    DrewPlayable,
    /// The drawn card is dead and the turn passed.
    DrewAndPassed,
}

impl DrawOutcome {
    pub const fn has_update(self) -> bool {
        use DrawOutcome::*;
        match self {
            Rejected => false,
            Skipped => true,
            DrewPlayable => true,
            DrewAndPassed => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ResolveOutcome {
    NoChange,
    SuitSet,
}

impl ResolveOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::SuitSet => true,
        }
    }
}
