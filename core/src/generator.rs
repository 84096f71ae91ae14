use crate::*;

pub trait MineGenerator {
    fn generate(self, config: GameConfig) -> Board;
}

/// Places mines by drawing uniform `(x, y)` pairs and redrawing whenever the drawn cell
/// already holds a mine. The draw count grows quickly as the board approaches saturation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RejectionSampler {
    seed: u64,
}

impl RejectionSampler {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MineGenerator for RejectionSampler {
    fn generate(self, config: GameConfig) -> Board {
        use rand::prelude::*;

        let mut board = Board::empty(config.size());
        if config.mines == 0 {
            return board;
        }

        let total_cells = config.total_cells();
        if u32::from(config.mines) * 4 > u32::from(total_cells) * 3 {
            log::warn!(
                "High mine density, {} of {} cells, placement will need many redraws",
                config.mines,
                total_cells
            );
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut placed: CellCount = 0;
        let mut draws: u64 = 0;
        while placed < config.mines {
            let coords = (
                rng.random_range(0..config.width),
                rng.random_range(0..config.height),
            );
            draws += 1;
            if board.place_mine(coords) {
                placed += 1;
            }
        }

        log::debug!(
            "Placed {} mines on {}x{} board in {} draws (seed {})",
            placed,
            config.width,
            config.height,
            draws,
            self.seed
        );
        board
    }
}
