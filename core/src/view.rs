use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// What a renderer may show for one cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    #[default]
    Hidden,
    Mine,
    Clear(u8),
}

impl CellView {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    /// Only revealed cells show their content.
    #[default]
    Player,
    /// Every cell shows its true content, used once the game is over.
    Everything,
}

impl Board {
    pub fn cell_view(&self, coords: Coord2, visibility: Visibility) -> CellView {
        if visibility == Visibility::Player && !self.is_revealed(coords) {
            CellView::Hidden
        } else if self.is_mine(coords) {
            CellView::Mine
        } else {
            CellView::Clear(self.count_adjacent_mines(coords))
        }
    }
}

/// Immutable copy of the board as a renderer sees it.
#[derive(Clone, Debug, PartialEq)]
pub struct BoardSnapshot {
    cells: Array2<CellView>,
    size: Coord2,
}

impl BoardSnapshot {
    pub fn capture(board: &Board, visibility: Visibility) -> Self {
        let size = board.size();
        let mut cells = Array2::default(nd_index(size));
        for coords in board.positions() {
            cells[nd_index(coords)] = board.cell_view(coords, visibility);
        }
        Self { cells, size }
    }

    pub fn size(&self) -> Coord2 {
        self.size
    }

    pub fn cell_at(&self, coords: Coord2) -> CellView {
        self.cells[nd_index(coords)]
    }

    pub fn hidden_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_hidden()).count()
    }
}
