use bevy::prelude::*;
use fastrand::Rng;

use crate::board::PuzzleBoard;
use crate::error::BoardError;
use crate::mode::GameMode;

/// Run-time choices for a puzzle session.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PuzzleConfig {
    pub mode: GameMode,
    /// Fixed seed for reproducible shuffles, fresh entropy when `None`.
    pub seed: Option<u64>,
}

impl PuzzleConfig {
    pub const fn new(mode: GameMode) -> Self {
        Self { mode, seed: None }
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn rng(&self) -> Rng {
        self.seed.map_or_else(Rng::new, Rng::with_seed)
    }

    /// Slices `cells` into a shuffled board for this configuration.
    pub fn build<A>(
        &self,
        cells: impl IntoIterator<Item = A>,
    ) -> Result<PuzzleBoard<A>, BoardError> {
        PuzzleBoard::initialize_board(self.mode, cells, self.rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_configs_build_identical_boards() {
        let config = PuzzleConfig::new(GameMode::Shift).with_seed(42);
        let a = config.build(0..16_u32).unwrap();
        let b = config.build(0..16_u32).unwrap();
        assert_eq!(a.grid().to_string(), b.grid().to_string());
        assert_eq!(a.mode(), GameMode::Shift);
    }

    #[test]
    fn wrong_cell_count_is_reported() {
        let config = PuzzleConfig::default();
        let err = config.build(0..9_u32).unwrap_err();
        assert_eq!(
            err,
            BoardError::CellCount {
                expected: 16,
                found: 9
            }
        );
        assert_eq!(err.to_string(), "Board needs exactly 16 cells, got 9");
    }
}
