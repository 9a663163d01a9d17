use serde::{Deserialize, Serialize};

use crate::*;

/// Complete view of a game for the presentation side, ready to serialize.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub mode: Mode,
    pub status: GameStatus,
    pub score: Score,
    pub level: Level,
    pub target: Sum,
    pub selection_sum: Sum,
    pub countdown: Option<u32>,
    pub cells: Vec<CellView>,
    pub selected: Vec<CellId>,
}

/// One cell with the position it currently occupies.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CellView {
    pub id: CellId,
    pub value: CellValue,
    pub col: Col,
    pub row: Row,
}

impl Snapshot {
    pub fn from_game(game: &Game) -> Self {
        let cells = game
            .board()
            .iter()
            .map(|(col, row, cell)| CellView {
                id: cell.id(),
                value: cell.value(),
                col,
                row,
            })
            .collect();
        let mut selected: Vec<CellId> = game.selected_ids().collect();
        selected.sort_unstable();

        Self {
            mode: game.mode(),
            status: game.status(),
            score: game.score(),
            level: game.level(),
            target: game.target(),
            selection_sum: game.selection_sum(),
            countdown: game.countdown(),
            cells,
            selected,
        }
    }
}
