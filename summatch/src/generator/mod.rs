use crate::*;
pub use random::*;

mod random;

/// Source of fresh cell values and match targets.
///
/// Game state never owns a source; callers pass one into each operation that
/// draws values, so every draw can be scripted.
pub trait ValueSource {
    /// Next value for a spawned cell, in `MIN_CELL_VALUE..=MAX_CELL_VALUE`.
    fn cell_value(&mut self) -> CellValue;

    /// Next match target, in `MIN_TARGET..=MAX_TARGET`.
    fn target(&mut self) -> Sum;
}
