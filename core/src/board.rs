use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
enum CellKind {
    #[default]
    Empty,
    Mine,
}

/// A grid cell. The kind is fixed once the board is built, `revealed` only goes from
/// `false` to `true`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
struct Cell {
    kind: CellKind,
    revealed: bool,
}

impl Cell {
    const fn is_mine(self) -> bool {
        matches!(self.kind, CellKind::Mine)
    }
}

/// Owns the cell grid and the mine layout.
///
/// Every query and mutation takes in-bounds coordinates; anything else is a caller bug and
/// panics. Only the grid is serialized, size and mine count are recomputed on load.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BoardGrid", into = "BoardGrid")]
pub struct Board {
    grid: Array2<Cell>,
    size: Coord2,
    mine_count: CellCount,
}

#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct BoardGrid {
    grid: Array2<Cell>,
}

impl From<Board> for BoardGrid {
    fn from(board: Board) -> Self {
        Self { grid: board.grid }
    }
}

impl TryFrom<BoardGrid> for Board {
    type Error = GameError;

    fn try_from(BoardGrid { grid }: BoardGrid) -> Result<Self> {
        let (width, height) = grid.dim();
        let size = match (Coord::try_from(width), Coord::try_from(height)) {
            (Ok(width), Ok(height)) => (width, height),
            _ => return Err(GameError::InvalidBoardShape),
        };
        let mine_count = grid.iter().filter(|cell| cell.is_mine()).count();
        // a grid of at most 255x255 cells
        let mine_count = mine_count as CellCount;
        GameConfig::new(size.0, size.1, mine_count)?;

        Ok(Self {
            grid,
            size,
            mine_count,
        })
    }
}

impl Board {
    pub(crate) fn empty(size: Coord2) -> Self {
        Self {
            grid: Array2::default(nd_index(size)),
            size,
            mine_count: 0,
        }
    }

    /// Validates `config` and lets `generator` lay out the mines.
    pub fn generate(config: GameConfig, generator: impl MineGenerator) -> Result<Self> {
        let config = config.validate()?;
        let board = generator.generate(config);
        debug_assert_eq!(board.mine_count, config.mines);
        Ok(board)
    }

    /// Random board from the rejection sampler seeded with `seed`.
    pub fn random(config: GameConfig, seed: u64) -> Result<Self> {
        Self::generate(config, RejectionSampler::new(seed))
    }

    /// Board with mines at exactly the given positions; duplicates count once.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        GameConfig::new(size.0, size.1, 0)?;

        let mut board = Self::empty(size);
        for &coords in mine_coords {
            if !board.is_in_bounds(coords) {
                return Err(GameError::InvalidCoords);
            }
            board.place_mine(coords);
        }

        GameConfig::new(size.0, size.1, board.mine_count)?;
        Ok(board)
    }

    /// Returns `false` when the cell already holds a mine.
    pub(crate) fn place_mine(&mut self, coords: Coord2) -> bool {
        let cell = self.cell_mut(coords);
        if cell.is_mine() {
            return false;
        }
        cell.kind = CellKind::Mine;
        self.mine_count += 1;
        true
    }

    pub fn size(&self) -> Coord2 {
        self.size
    }

    pub fn width(&self) -> Coord {
        self.size.0
    }

    pub fn height(&self) -> Coord {
        self.size.1
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn total_cells(&self) -> CellCount {
        cell_count(self.size.0, self.size.1)
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn is_in_bounds(&self, (x, y): Coord2) -> bool {
        x < self.size.0 && y < self.size.1
    }

    pub fn is_mine(&self, coords: Coord2) -> bool {
        self.cell(coords).is_mine()
    }

    pub fn is_revealed(&self, coords: Coord2) -> bool {
        self.cell(coords).revealed
    }

    pub fn count_adjacent_mines(&self, coords: Coord2) -> u8 {
        self.check_bounds(coords);
        let count = self
            .iter_neighbors(coords)
            .filter(|&pos| self.is_mine(pos))
            .count();
        // at most eight neighbors
        count as u8
    }

    /// Marks the cell revealed, returning whether it was hidden before the call.
    pub fn reveal(&mut self, coords: Coord2) -> bool {
        let cell = self.cell_mut(coords);
        let newly_revealed = !cell.revealed;
        cell.revealed = true;
        newly_revealed
    }

    pub fn revealed_count(&self) -> CellCount {
        let count = self.grid.iter().filter(|cell| cell.revealed).count();
        // bounded by total_cells
        count as CellCount
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.check_bounds(coords);
        NeighborIter::new(coords, self.size)
    }

    /// All coordinates in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Coord2> + use<> {
        let (width, height) = self.size;
        (0..height).flat_map(move |y| (0..width).map(move |x| (x, y)))
    }

    pub fn mine_positions(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.positions().filter(|&pos| self.is_mine(pos))
    }

    fn check_bounds(&self, coords: Coord2) {
        assert!(
            self.is_in_bounds(coords),
            "Cannot access position {:?} on board with size {}x{}",
            coords,
            self.size.0,
            self.size.1
        );
    }

    fn cell(&self, coords: Coord2) -> Cell {
        self.check_bounds(coords);
        self.grid[nd_index(coords)]
    }

    fn cell_mut(&mut self, coords: Coord2) -> &mut Cell {
        self.check_bounds(coords);
        &mut self.grid[nd_index(coords)]
    }
}
