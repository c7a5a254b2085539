use std::fmt::{self, Display, Formatter};

/// Width and height of the board.
pub const BOARD_SIZE: usize = 4;
pub const TOTAL_TILES: usize = BOARD_SIZE * BOARD_SIZE;

/// A cell of the 4x4 board. `x` grows to the right, `y` grows downwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridPos {
    pub x: usize,
    pub y: usize,
}

impl GridPos {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Builds a position from untrusted input, `None` when outside the board.
    pub fn checked(x: i32, y: i32) -> Option<Self> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < BOARD_SIZE && y < BOARD_SIZE).then_some(Self { x, y })
    }

    pub const fn from_index(index: usize) -> Self {
        Self {
            x: index % BOARD_SIZE,
            y: index / BOARD_SIZE,
        }
    }

    /// Row-major index, also used as the solved rank of a tile.
    pub const fn index(self) -> usize {
        self.x + self.y * BOARD_SIZE
    }

    pub const fn manhattan(self, other: Self) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    pub const fn is_adjacent(self, other: Self) -> bool {
        self.manhattan(other) == 1
    }

    /// Every cell of the board in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..TOTAL_TILES).map(Self::from_index)
    }
}

impl Display for GridPos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
