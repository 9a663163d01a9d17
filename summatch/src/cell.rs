use serde::{Deserialize, Serialize};

use crate::*;

/// One numbered block, tracked by identity so selections survive row shifts.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    id: CellId,
    value: CellValue,
}

impl Cell {
    pub(crate) const fn new(id: CellId, value: CellValue) -> Self {
        Self { id, value }
    }

    pub const fn id(&self) -> CellId {
        self.id
    }

    pub const fn value(&self) -> CellValue {
        self.value
    }
}
