use thiserror::Error;

use crate::{CellCount, Coord};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error(
        "Invalid configuration: {width}x{height} board with {mines} mines \
         (dimensions must be positive and mines fewer than cells)"
    )]
    InvalidConfiguration {
        width: Coord,
        height: Coord,
        mines: CellCount,
    },
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board grid is larger than 255x255")]
    InvalidBoardShape,
}

pub type Result<T> = core::result::Result<T, GameError>;
