use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use session::*;
pub use snapshot::*;
pub use types::*;

mod board;
mod cell;
mod engine;
mod error;
mod generator;
mod session;
mod snapshot;
mod types;

/// How the game is driven: `Classic` spawns a row after every successful
/// match, `Timed` spawns rows from a countdown instead.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Mode {
    Classic,
    Timed,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ToggleOutcome {
    /// Selection changed, sum still short of the target.
    Accumulating,
    /// Sum went past the target and the selection was discarded.
    Overshot,
    /// Sum hit the target exactly: cells cleared, points awarded.
    Matched { cleared: usize, points: Score },
}

impl ToggleOutcome {
    pub const fn matched(self) -> bool {
        matches!(self, Self::Matched { .. })
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SpawnOutcome {
    Spawned,
    Overflowed,
}

impl SpawnOutcome {
    pub const fn overflowed(self) -> bool {
        matches!(self, Self::Overflowed)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TickOutcome {
    NoChange,
    CountedDown,
    RowSpawned,
    Overflowed,
}

impl TickOutcome {
    pub const fn has_update(self) -> bool {
        use TickOutcome::*;
        match self {
            NoChange => false,
            CountedDown => true,
            RowSpawned => true,
            Overflowed => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PauseOutcome {
    NoChange,
    Changed,
}

impl PauseOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}
