/// Value printed on a single cell, always in `MIN_CELL_VALUE..=MAX_CELL_VALUE`.
pub type CellValue = u8;

/// Sum of selected cell values; match targets live in the same space.
pub type Sum = u16;

/// Identity of a cell, unique within one game and stable across row shifts.
pub type CellId = u32;

/// Row index, 0 at the spawn row, growing upward.
pub type Row = u8;

/// Column index.
pub type Col = u8;

pub type Score = u32;

/// Difficulty level, starting at 1.
pub type Level = u32;

pub const BOARD_COLS: usize = 6;
pub const INITIAL_ROWS: usize = 4;

/// A cell shifted onto this row ends the game.
pub const OVERFLOW_ROW: Row = 10;

pub const MIN_CELL_VALUE: CellValue = 1;
pub const MAX_CELL_VALUE: CellValue = 9;
pub const MIN_TARGET: Sum = 10;
pub const MAX_TARGET: Sum = 25;

pub const BASE_COUNTDOWN_SECS: u32 = 15;
pub const MIN_COUNTDOWN_SECS: u32 = 5;

/// Seconds a timed game waits between automatic row spawns, shrinking as the
/// level climbs but never below `MIN_COUNTDOWN_SECS`.
pub const fn countdown_secs(level: Level) -> u32 {
    let shrunk = BASE_COUNTDOWN_SECS.saturating_sub(level / 2);
    if shrunk < MIN_COUNTDOWN_SECS {
        MIN_COUNTDOWN_SECS
    } else {
        shrunk
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn countdown_shrinks_with_level_but_stays_floored() {
        assert_eq!(countdown_secs(1), BASE_COUNTDOWN_SECS);
        assert_eq!(countdown_secs(2), 14);
        assert_eq!(countdown_secs(10), 10);
        assert_eq!(countdown_secs(20), MIN_COUNTDOWN_SECS);
        assert_eq!(countdown_secs(1_000), MIN_COUNTDOWN_SECS);
    }
}
