use crate::game::Board;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::move_source::MoveSource;

/// Picks uniformly at random among all columns, full or not.
pub struct RandomMoveSource {
    rng: StdRng,
}

impl RandomMoveSource {
    pub fn new() -> Self {
        RandomMoveSource {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible source for a fixed seed
    pub fn seeded(seed: u64) -> Self {
        RandomMoveSource {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomMoveSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSource for RandomMoveSource {
    fn select_column(&mut self, board: &Board) -> usize {
        self.rng.random_range(1..=board.columns())
    }

    fn name(&self) -> &str {
        "Random"
    }
}
