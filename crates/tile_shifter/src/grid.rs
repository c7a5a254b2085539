use std::fmt::{self, Display, Formatter};

use crate::grid_pos::{BOARD_SIZE, GridPos, TOTAL_TILES};
use crate::tile::{Tile, TileId};

/// The 4x4 board. Tiles are stored row-major and slot `i` always holds the
/// tile whose current cell is `GridPos::from_index(i)`.
#[derive(Debug, Clone)]
pub struct Grid<A> {
    cells: Vec<Tile<A>>,
}

impl<A> Grid<A> {
    /// Lays `tiles` out row-major and stamps each one with its new cell.
    pub(crate) fn from_row_major(tiles: Vec<Tile<A>>) -> Self {
        debug_assert_eq!(tiles.len(), TOTAL_TILES, "a grid holds one tile per cell");
        let mut grid = Self { cells: tiles };
        for (index, tile) in grid.cells.iter_mut().enumerate() {
            tile.set_current(GridPos::from_index(index));
        }
        grid
    }

    /// Empties the grid, handing back its tiles in row-major order.
    pub(crate) fn take_tiles(&mut self) -> Vec<Tile<A>> {
        std::mem::take(&mut self.cells)
    }

    pub fn get(&self, pos: GridPos) -> Option<&Tile<A>> {
        if pos.x >= BOARD_SIZE || pos.y >= BOARD_SIZE {
            return None;
        }
        self.cells.get(pos.index())
    }

    pub(crate) fn get_mut(&mut self, pos: GridPos) -> Option<&mut Tile<A>> {
        if pos.x >= BOARD_SIZE || pos.y >= BOARD_SIZE {
            return None;
        }
        self.cells.get_mut(pos.index())
    }

    pub fn find(&self, id: TileId) -> Option<&Tile<A>> {
        self.cells.iter().find(|tile| tile.id() == id)
    }

    pub fn tiles(&self) -> impl Iterator<Item = &Tile<A>> {
        self.cells.iter()
    }

    pub(crate) fn tiles_mut(&mut self) -> impl Iterator<Item = &mut Tile<A>> {
        self.cells.iter_mut()
    }

    pub(crate) fn swap(&mut self, a: GridPos, b: GridPos) {
        self.cells.swap(a.index(), b.index());
        self.stamp(&[a, b]);
    }

    /// Moves the tile at `cycle[i]` to `cycle[i + 1]`, the last one wrapping
    /// round to `cycle[0]`. Positions must be distinct and on the board.
    pub(crate) fn rotate_cycle(&mut self, cycle: &[GridPos]) {
        let Some((&first, rest)) = cycle.split_first() else {
            return;
        };
        for &pos in rest {
            self.cells.swap(first.index(), pos.index());
        }
        self.stamp(cycle);
    }

    fn stamp(&mut self, positions: &[GridPos]) {
        for &pos in positions {
            if let Some(tile) = self.cells.get_mut(pos.index()) {
                tile.set_current(pos);
            }
        }
    }

    /// The win condition: every tile, the empty one included, sits on its
    /// solved cell.
    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(Tile::is_in_place)
    }

    pub fn is_animating(&self) -> bool {
        self.cells.iter().any(Tile::is_animating)
    }

    pub fn step_animations(&mut self, delta_secs: f32) {
        for tile in &mut self.cells {
            tile.step_animation(delta_secs);
        }
    }

    /// Whether the tiles' current cells cover the board exactly once.
    pub fn cells_form_bijection(&self) -> bool {
        let mut seen = [false; TOTAL_TILES];
        for (index, tile) in self.cells.iter().enumerate() {
            let pos = tile.current();
            if pos.x >= BOARD_SIZE || pos.y >= BOARD_SIZE || pos.index() != index {
                return false;
            }
            match seen.get_mut(index) {
                Some(hit) if !*hit => *hit = true,
                _ => return false,
            }
        }
        self.cells.len() == TOTAL_TILES && seen.iter().all(|&hit| hit)
    }
}

impl<A> Display for Grid<A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(BOARD_SIZE) {
            for tile in row {
                if tile.is_empty() {
                    write!(f, "   ")?;
                } else {
                    write!(f, "{} ", tile.id())?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
