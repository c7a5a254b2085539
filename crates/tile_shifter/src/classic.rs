//! Sliding rules for the Classic mode: one hole, fifteen tiles.

use bevy::prelude::*;
use fastrand::Rng;

use crate::grid::Grid;
use crate::grid_pos::{BOARD_SIZE, GridPos, TOTAL_TILES};
use crate::tile::Tile;

/// The hole starts in the bottom-right corner.
pub const EMPTY_START: GridPos = GridPos::new(BOARD_SIZE - 1, BOARD_SIZE - 1);

/// Number of pairs `(i, j)` with `i < j` and `ranks[i] > ranks[j]`.
pub fn count_inversions(ranks: &[usize]) -> usize {
    ranks
        .iter()
        .enumerate()
        .map(|(i, &rank)| {
            ranks
                .iter()
                .skip(i + 1)
                .filter(|&&later| rank > later)
                .count()
        })
        .sum()
}

/// Parity rule for an even-width board: a layout of the artwork tiles (read
/// row-major, hole skipped) is reachable from the solved board iff the
/// inversion count plus the hole's row counted from the bottom is odd.
pub fn is_solvable(ranks: &[usize], empty: GridPos) -> bool {
    let empty_row_from_bottom = BOARD_SIZE - empty.y;
    (count_inversions(ranks) + empty_row_from_bottom) % 2 == 1
}

/// A tile may slide only into the hole, and only from a neighbouring cell.
pub const fn can_slide(pos: GridPos, empty: GridPos) -> bool {
    pos.is_adjacent(empty)
}

/// Solved ranks of the artwork tiles of `grid`, row-major, hole skipped.
pub fn ranks<A>(grid: &Grid<A>) -> Vec<usize> {
    grid.tiles()
        .filter(|tile| !tile.is_empty())
        .map(|tile| tile.solved().index())
        .collect()
}

/// Re-permutes every artwork tile around the hole, which stays where it is,
/// until the layout is solvable and not already solved.
pub(crate) fn shuffle<A>(grid: &mut Grid<A>, empty: GridPos, rng: &mut Rng) {
    let (mut holes, mut tiles): (Vec<Tile<A>>, Vec<Tile<A>>) =
        grid.take_tiles().into_iter().partition(Tile::is_empty);
    let Some(hole) = holes.pop() else {
        error!("Classic grid has no empty tile, leaving it unshuffled");
        *grid = Grid::from_row_major(tiles);
        return;
    };
    let hole_in_place = hole.solved() == empty;

    let mut attempts = 0_usize;
    loop {
        attempts += 1;
        rng.shuffle(&mut tiles);
        let ranks: Vec<usize> = tiles.iter().map(|tile| tile.solved().index()).collect();
        let solved = hole_in_place && ranks.is_sorted();
        if is_solvable(&ranks, empty) && !solved {
            break;
        }
    }
    debug!("Classic shuffle accepted after {attempts} permutation(s)");

    let mut laid_out = Vec::with_capacity(TOTAL_TILES);
    let mut tiles = tiles.into_iter();
    let mut hole = Some(hole);
    for pos in GridPos::all() {
        let next = if pos == empty { hole.take() } else { tiles.next() };
        if let Some(tile) = next {
            laid_out.push(tile);
        }
    }
    *grid = Grid::from_row_major(laid_out);
}
