//! Rotate mode: sixteen tiles, five overlapping 2x2 blocks that turn clockwise.

use std::ops::RangeInclusive;

use bevy::prelude::*;
use fastrand::Rng;

use crate::grid::Grid;
use crate::grid_pos::GridPos;

/// Top-left cell of each rotatable block. This is the one table both the
/// puzzle and any on-screen rotate buttons should read from.
pub const SUB_BOARD_ANCHORS: [GridPos; 5] = [
    GridPos::new(0, 0), // top-left
    GridPos::new(0, 2), // bottom-left
    GridPos::new(2, 0), // top-right
    GridPos::new(2, 2), // bottom-right
    GridPos::new(1, 1), // center
];
pub const SUB_BOARD_COUNT: usize = SUB_BOARD_ANCHORS.len();
pub const SHUFFLE_ROTATIONS: RangeInclusive<usize> = 50..=100;

/// The four cells of a block in clockwise order starting at the top-left.
pub fn sub_board_cells(index: usize) -> Option<[GridPos; 4]> {
    let anchor = SUB_BOARD_ANCHORS.get(index)?;
    let (x, y) = (anchor.x, anchor.y);
    Some([
        GridPos::new(x, y),
        GridPos::new(x + 1, y),
        GridPos::new(x + 1, y + 1),
        GridPos::new(x, y + 1),
    ])
}

/// First block (in table order) whose footprint contains `pos`.
pub fn sub_board_at(pos: GridPos) -> Option<usize> {
    SUB_BOARD_ANCHORS.iter().position(|anchor| {
        (anchor.x..anchor.x + 2).contains(&pos.x) && (anchor.y..anchor.y + 2).contains(&pos.y)
    })
}

/// Turns block `index` a quarter clockwise. `false` for an unknown block.
pub(crate) fn rotate<A>(grid: &mut Grid<A>, index: usize) -> bool {
    let Some(cells) = sub_board_cells(index) else {
        return false;
    };
    grid.rotate_cycle(&cells);
    true
}

/// Scrambles by replaying random rotations from the current layout, so the
/// result can always be undone with counter-rotations.
pub(crate) fn shuffle<A>(grid: &mut Grid<A>, rng: &mut Rng) {
    loop {
        let rotations = rng.usize(SHUFFLE_ROTATIONS);
        for _ in 0..rotations {
            rotate(grid, rng.usize(..SUB_BOARD_COUNT));
        }
        debug!("Rotate shuffle applied {rotations} rotation(s)");
        if !grid.is_solved() {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid_pos::TOTAL_TILES;
    use crate::tile::{Tile, TileId};

    fn solved_grid() -> Grid<()> {
        Grid::from_row_major(
            GridPos::all()
                .map(|pos| Tile::new(TileId(pos.index() as u8), (), pos))
                .collect(),
        )
    }

    fn id_at(grid: &Grid<()>, x: usize, y: usize) -> u8 {
        grid.get(GridPos::new(x, y)).map_or(u8::MAX, |tile| tile.id().0)
    }

    #[test]
    fn rotation_is_clockwise() {
        let mut grid = solved_grid();
        assert!(rotate(&mut grid, 0));

        // 0 1      4 0
        // 4 5  ->  5 1
        assert_eq!(id_at(&grid, 0, 0), 4);
        assert_eq!(id_at(&grid, 1, 0), 0);
        assert_eq!(id_at(&grid, 1, 1), 1);
        assert_eq!(id_at(&grid, 0, 1), 5);
        assert!(grid.cells_form_bijection());
    }

    #[test]
    fn center_block_rotates_middle_cells() {
        let mut grid = solved_grid();
        assert!(rotate(&mut grid, 4));
        assert_eq!(id_at(&grid, 1, 1), 9);
        assert_eq!(id_at(&grid, 2, 1), 5);
        assert_eq!(id_at(&grid, 2, 2), 6);
        assert_eq!(id_at(&grid, 1, 2), 10);
        assert_eq!(id_at(&grid, 0, 0), 0);
    }

    #[test]
    fn four_rotations_restore_every_block() {
        for index in 0..SUB_BOARD_COUNT {
            let mut grid = solved_grid();
            for _ in 0..4 {
                assert!(rotate(&mut grid, index));
            }
            assert!(grid.is_solved(), "block {index} is not a 4-cycle");
        }
    }

    #[test]
    fn unknown_block_is_rejected() {
        let mut grid = solved_grid();
        assert!(!rotate(&mut grid, SUB_BOARD_COUNT));
        assert!(!rotate(&mut grid, usize::MAX));
        assert!(grid.is_solved());
    }

    #[test]
    fn lookup_uses_first_matching_block() {
        assert_eq!(sub_board_at(GridPos::new(0, 0)), Some(0));
        assert_eq!(sub_board_at(GridPos::new(1, 1)), Some(0));
        assert_eq!(sub_board_at(GridPos::new(0, 3)), Some(1));
        assert_eq!(sub_board_at(GridPos::new(3, 0)), Some(2));
        assert_eq!(sub_board_at(GridPos::new(2, 2)), Some(3));
        assert_eq!(sub_board_at(GridPos::new(4, 4)), None);
    }

    #[test]
    fn blocks_cover_the_whole_board() {
        let covered = GridPos::all().filter(|&pos| sub_board_at(pos).is_some()).count();
        assert_eq!(covered, TOTAL_TILES);
    }

    #[test]
    fn shuffle_scrambles_without_losing_tiles() {
        let mut rng = Rng::with_seed(3);
        for _ in 0..20 {
            let mut grid = solved_grid();
            shuffle(&mut grid, &mut rng);
            assert!(grid.cells_form_bijection());
            assert!(!grid.is_solved());
        }
    }
}
