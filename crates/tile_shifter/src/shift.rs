//! Shift mode: sixteen tiles, rows and columns rotate by one cell with wraparound.

use std::ops::RangeInclusive;

use bevy::prelude::*;
use fastrand::Rng;
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::grid::Grid;
use crate::grid_pos::{BOARD_SIZE, GridPos};

pub const SHUFFLE_SHIFTS: RangeInclusive<usize> = 30..=50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum ShiftDirection {
    /// Column moves up, the top tile wraps to the bottom.
    Up,
    /// Column moves down, the bottom tile wraps to the top.
    Down,
    /// Row moves left, the leftmost tile wraps to the right.
    Left,
    /// Row moves right, the rightmost tile wraps to the left.
    Right,
}

impl ShiftDirection {
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Cells of column/row `line` ordered so that each tile moves to the next
    /// entry, the last one wrapping to the first.
    fn cycle(self, line: usize) -> [GridPos; BOARD_SIZE] {
        std::array::from_fn(|i| match self {
            Self::Up => GridPos::new(line, BOARD_SIZE - 1 - i),
            Self::Down => GridPos::new(line, i),
            Self::Left => GridPos::new(BOARD_SIZE - 1 - i, line),
            Self::Right => GridPos::new(i, line),
        })
    }
}

/// Rotates column or row `line` one cell in `direction`.
/// Returns `false` and leaves the grid alone when `line` is off the board.
pub(crate) fn shift<A>(grid: &mut Grid<A>, direction: ShiftDirection, line: usize) -> bool {
    if line >= BOARD_SIZE {
        return false;
    }
    grid.rotate_cycle(&direction.cycle(line));
    true
}

/// Scrambles by replaying random shifts from the current layout.
pub(crate) fn shuffle<A>(grid: &mut Grid<A>, rng: &mut Rng) {
    loop {
        let shifts = rng.usize(SHUFFLE_SHIFTS);
        for _ in 0..shifts {
            if let Some(direction) = rng.choice(ShiftDirection::iter()) {
                shift(grid, direction, rng.usize(..BOARD_SIZE));
            }
        }
        debug!("Shift shuffle applied {shifts} shift(s)");
        if !grid.is_solved() {
            break;
        }
    }
}
