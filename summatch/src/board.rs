use hashbrown::HashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// Cells stacked in one column; the index of a cell is its row.
type Column = SmallVec<[Cell; 12]>;

/// Fixed-width grid of cell columns that rows spawn into from the bottom.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    columns: [Column; BOARD_COLS],
    next_id: CellId,
}

impl Board {
    pub fn new() -> Self {
        Self {
            columns: Default::default(),
            next_id: 0,
        }
    }

    /// Shifts every cell up one row and spawns `values` across row 0.
    ///
    /// Returns `true` when the shift pushed a cell onto the overflow row; the
    /// new row lands either way.
    pub fn push_row(&mut self, values: [CellValue; BOARD_COLS]) -> bool {
        let overflowed = self.tallest() >= OVERFLOW_ROW as usize;
        for (column, value) in self.columns.iter_mut().zip(values) {
            let cell = Cell::new(self.next_id, value);
            self.next_id += 1;
            column.insert(0, cell);
        }
        overflowed
    }

    /// Drops every cell whose id is in `ids`, letting columns settle down.
    pub fn remove_all(&mut self, ids: &HashSet<CellId>) -> usize {
        let before = self.len();
        for column in &mut self.columns {
            column.retain(|cell| !ids.contains(&cell.id()));
        }
        before - self.len()
    }

    pub fn len(&self) -> usize {
        self.columns.iter().map(|column| column.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.iter().all(|column| column.is_empty())
    }

    pub fn height(&self, col: Col) -> usize {
        self.columns[col as usize].len()
    }

    pub fn tallest(&self) -> usize {
        self.columns
            .iter()
            .map(|column| column.len())
            .max()
            .unwrap_or(0)
    }

    pub fn contains(&self, id: CellId) -> bool {
        self.columns.iter().flatten().any(|cell| cell.id() == id)
    }

    pub fn cell_at(&self, col: Col, row: Row) -> Option<Cell> {
        self.columns.get(col as usize)?.get(row as usize).copied()
    }

    pub fn value_of(&self, id: CellId) -> Option<CellValue> {
        self.find(id).map(|(_, _, cell)| cell.value())
    }

    /// Locates a cell by id, yielding the position it currently occupies.
    pub fn find(&self, id: CellId) -> Option<(Col, Row, Cell)> {
        self.iter().find(|&(_, _, cell)| cell.id() == id)
    }

    /// Walks the board column by column, bottom row first.
    pub fn iter(&self) -> impl Iterator<Item = (Col, Row, Cell)> + '_ {
        self.columns.iter().enumerate().flat_map(|(col, column)| {
            column
                .iter()
                .enumerate()
                .map(move |(row, &cell)| (col as Col, row as Row, cell))
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
