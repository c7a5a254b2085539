use strum::{Display, EnumIter};

/// The three ways of playing the same 4x4 image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum GameMode {
    /// Fifteen tiles and one hole; tiles next to the hole slide into it.
    #[default]
    Classic,
    /// Sixteen tiles; five overlapping 2x2 blocks turn clockwise.
    Rotate,
    /// Sixteen tiles; whole rows and columns wrap around.
    Shift,
}

impl GameMode {
    pub const fn has_empty_tile(self) -> bool {
        matches!(self, Self::Classic)
    }
}
