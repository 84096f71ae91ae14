use alloc::collections::VecDeque;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl SessionState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Result of a single applied move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    HitMine,
    Continue,
}

/// One game from first move to win or loss.
///
/// Serializes as its board; the counters are rebuilt from the board on load.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "Board", into = "Board")]
pub struct GameSession {
    board: Board,
    unrevealed_safe_count: CellCount,
    state: SessionState,
    triggered_mine: Option<Coord2>,
}

impl GameSession {
    /// Starts or resumes a game on `board`, which may already have revealed cells.
    pub fn new(board: Board) -> Self {
        let hidden_safe = board
            .positions()
            .filter(|&pos| !board.is_mine(pos) && !board.is_revealed(pos))
            .count();
        // bounded by the board's cell count
        let unrevealed_safe_count = hidden_safe as CellCount;
        let triggered_mine = board.mine_positions().find(|&pos| board.is_revealed(pos));

        let state = if triggered_mine.is_some() {
            SessionState::Lost
        } else if unrevealed_safe_count == 0 {
            SessionState::Won
        } else {
            SessionState::InProgress
        };

        Self {
            board,
            unrevealed_safe_count,
            state,
            triggered_mine,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn unrevealed_safe_count(&self) -> CellCount {
        self.unrevealed_safe_count
    }

    pub fn is_won(&self) -> bool {
        self.unrevealed_safe_count == 0
    }

    /// The mine that ended the game, if one did.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// A move is valid when it targets a hidden cell on the board.
    pub fn validate_move(&self, coords: Coord2) -> bool {
        self.board.is_in_bounds(coords) && !self.board.is_revealed(coords)
    }

    /// Reveals `coords` and, when it has no adjacent mines, the whole connected zero
    /// region plus its border.
    ///
    /// # Panics
    ///
    /// When `validate_move(coords)` is false.
    pub fn apply_move(&mut self, coords: Coord2) -> MoveOutcome {
        assert!(
            self.validate_move(coords),
            "Move at {:?} targets a revealed or out of bounds cell",
            coords
        );

        if self.board.is_mine(coords) {
            self.board.reveal(coords);
            self.triggered_mine = Some(coords);
            self.state = SessionState::Lost;
            log::debug!("Hit mine at {:?}", coords);
            return MoveOutcome::HitMine;
        }

        let mut frontier = VecDeque::new();
        let mut opened: CellCount = 1;
        self.open_safe_cell(coords, &mut frontier);

        while let Some(zero_coords) = frontier.pop_front() {
            for neighbor in self.board.iter_neighbors(zero_coords) {
                if !self.board.is_revealed(neighbor) {
                    self.open_safe_cell(neighbor, &mut frontier);
                    opened += 1;
                }
            }
        }

        log::debug!(
            "Move at {:?} opened {} cells, {} safe cells left",
            coords,
            opened,
            self.unrevealed_safe_count
        );

        if self.is_won() {
            self.state = SessionState::Won;
        }
        MoveOutcome::Continue
    }

    /// Reveals a hidden safe cell, queueing it for expansion when its count is zero.
    fn open_safe_cell(&mut self, coords: Coord2, frontier: &mut VecDeque<Coord2>) {
        debug_assert!(!self.board.is_mine(coords), "cascade reached mine at {coords:?}");

        let newly_revealed = self.board.reveal(coords);
        debug_assert!(newly_revealed);
        self.unrevealed_safe_count -= 1;

        let adjacent_mines = self.board.count_adjacent_mines(coords);
        log::trace!("Opened cell at {:?}, mine count: {}", coords, adjacent_mines);
        if adjacent_mines == 0 {
            frontier.push_back(coords);
        }
    }

    pub fn snapshot(&self, visibility: Visibility) -> BoardSnapshot {
        BoardSnapshot::capture(&self.board, visibility)
    }
}

impl From<Board> for GameSession {
    fn from(board: Board) -> Self {
        Self::new(board)
    }
}

impl From<GameSession> for Board {
    fn from(session: GameSession) -> Self {
        session.board
    }
}
