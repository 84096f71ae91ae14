use serde::{Deserialize, Serialize};

use crate::*;

/// Board dimensions and mine count, validated before any board is built.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub width: Coord,
    pub height: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(width: Coord, height: Coord, mines: CellCount) -> Self {
        Self {
            width,
            height,
            mines,
        }
    }

    /// Accepts any non-empty board that keeps at least one safe cell; zero mines is allowed.
    pub fn new(width: Coord, height: Coord, mines: CellCount) -> Result<Self> {
        Self::new_unchecked(width, height, mines).validate()
    }

    pub fn validate(self) -> Result<Self> {
        if self.width == 0 || self.height == 0 || self.mines >= self.total_cells() {
            return Err(GameError::InvalidConfiguration {
                width: self.width,
                height: self.height,
                mines: self.mines,
            });
        }
        Ok(self)
    }

    pub const fn beginner() -> Self {
        Self::new_unchecked(9, 9, 10)
    }

    pub const fn intermediate() -> Self {
        Self::new_unchecked(16, 16, 40)
    }

    pub const fn expert() -> Self {
        Self::new_unchecked(30, 16, 99)
    }

    pub const fn size(&self) -> Coord2 {
        (self.width, self.height)
    }

    pub const fn total_cells(&self) -> CellCount {
        cell_count(self.width, self.height)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::beginner()
    }
}
