use bevy::prelude::*;
use fastrand::Rng;

use crate::classic::{self, EMPTY_START};
use crate::error::BoardError;
use crate::grid::Grid;
use crate::grid_pos::{GridPos, TOTAL_TILES};
use crate::layout::BoardLayout;
use crate::mode::GameMode;
use crate::rotate;
use crate::shift::{self, ShiftDirection};
use crate::tile::{Tile, TileId};

/// A single player action. Each mode accepts exactly one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Classic: slide the tile at this cell into the hole.
    Slide(GridPos),
    /// Rotate: turn this block clockwise.
    Rotate(usize),
    /// Shift: rotate this column (`Up`/`Down`) or row (`Left`/`Right`).
    Shift(ShiftDirection, usize),
}

impl Move {
    pub const fn mode(self) -> GameMode {
        match self {
            Self::Slide(_) => GameMode::Classic,
            Self::Rotate(_) => GameMode::Rotate,
            Self::Shift(..) => GameMode::Shift,
        }
    }
}

/// Puzzle state for one session: the grid, which rules apply to it, and the
/// generator its shuffles draw from.
#[derive(Resource, Debug)]
pub struct PuzzleBoard<A> {
    mode: GameMode,
    grid: Grid<A>,
    empty: Option<GridPos>,
    won: bool,
    rng: Rng,
}

impl<A> PuzzleBoard<A> {
    /// Builds a board from 16 cells given in row-major order, then shuffles it.
    /// In Classic mode the bottom-right cell becomes the hole and its artwork
    /// is dropped.
    pub fn initialize_board(
        mode: GameMode,
        cells: impl IntoIterator<Item = A>,
        rng: Rng,
    ) -> Result<Self, BoardError> {
        let mut board = Self::solved(mode, cells, rng)?;
        board.shuffle();
        info!("Initialized {mode} puzzle");
        Ok(board)
    }

    /// Same as [`Self::initialize_board`] with a generator seeded from entropy.
    pub fn new(mode: GameMode, cells: impl IntoIterator<Item = A>) -> Result<Self, BoardError> {
        Self::initialize_board(mode, cells, Rng::new())
    }

    /// Builds the board in its solved configuration, without shuffling.
    pub fn solved(
        mode: GameMode,
        cells: impl IntoIterator<Item = A>,
        rng: Rng,
    ) -> Result<Self, BoardError> {
        let cells: Vec<A> = cells.into_iter().collect();
        if cells.len() != TOTAL_TILES {
            return Err(BoardError::CellCount {
                expected: TOTAL_TILES,
                found: cells.len(),
            });
        }

        let mut next_id = 0;
        let tiles = cells
            .into_iter()
            .enumerate()
            .map(|(index, artwork)| {
                let pos = GridPos::from_index(index);
                if mode.has_empty_tile() && pos == EMPTY_START {
                    Tile::empty(pos)
                } else {
                    let id = TileId(next_id);
                    next_id += 1;
                    Tile::new(id, artwork, pos)
                }
            })
            .collect();

        let grid = Grid::from_row_major(tiles);
        let won = grid.is_solved();
        Ok(Self {
            mode,
            grid,
            empty: mode.has_empty_tile().then_some(EMPTY_START),
            won,
            rng,
        })
    }

    pub const fn mode(&self) -> GameMode {
        self.mode
    }

    pub const fn grid(&self) -> &Grid<A> {
        &self.grid
    }

    pub fn tiles(&self) -> impl Iterator<Item = &Tile<A>> {
        self.grid.tiles()
    }

    /// The tile at `(x, y)`, `None` off the board.
    pub fn get_tile(&self, x: i32, y: i32) -> Option<&Tile<A>> {
        GridPos::checked(x, y).and_then(|pos| self.grid.get(pos))
    }

    pub fn tile_at(&self, pos: GridPos) -> Option<&Tile<A>> {
        self.grid.get(pos)
    }

    /// Cell of the hole. Only Classic boards have one.
    pub const fn empty_cell(&self) -> Option<GridPos> {
        self.empty
    }

    pub const fn is_won(&self) -> bool {
        self.won
    }

    pub fn is_animating(&self) -> bool {
        self.grid.is_animating()
    }

    /// Whether the current layout can still be solved under this mode's rules.
    /// Rotations and shifts are reversible, so only Classic can fail.
    pub fn is_solvable(&self) -> bool {
        self.empty
            .is_none_or(|empty| classic::is_solvable(&classic::ranks(&self.grid), empty))
    }

    /// Applies `mv` if this mode allows it. Nothing changes when it returns `false`.
    pub fn attempt_move(&mut self, mv: Move) -> bool {
        let moved = mv.mode() == self.mode
            && match mv {
                Move::Slide(pos) => self.slide(pos),
                Move::Rotate(index) => rotate::rotate(&mut self.grid, index),
                Move::Shift(direction, line) => shift::shift(&mut self.grid, direction, line),
            };

        if moved {
            self.won = self.grid.is_solved();
            debug!("{} board applied {mv:?}, won = {}", self.mode, self.won);
        } else {
            trace!("{} board rejected {mv:?}", self.mode);
        }
        moved
    }

    fn slide(&mut self, pos: GridPos) -> bool {
        let Some(empty) = self.empty else {
            return false;
        };
        if self.grid.get(pos).is_none() || pos == empty || !classic::can_slide(pos, empty) {
            return false;
        }

        self.grid.swap(pos, empty);
        // The hole left behind starts over with no render state.
        if let Some(hole) = self.grid.get_mut(pos) {
            hole.clear_motion();
        }
        self.empty = Some(pos);
        true
    }

    /// Slides the tile at `(x, y)` into the hole. Classic only.
    pub fn move_tile(&mut self, x: i32, y: i32) -> bool {
        GridPos::checked(x, y).is_some_and(|pos| self.attempt_move(Move::Slide(pos)))
    }

    /// Turns block `index` (see [`rotate::SUB_BOARD_ANCHORS`]) clockwise. Rotate only.
    pub fn rotate_sub_board(&mut self, index: usize) -> bool {
        self.attempt_move(Move::Rotate(index))
    }

    /// The block whose footprint covers `(x, y)`, first match in anchor order.
    pub fn sub_board_at(&self, x: i32, y: i32) -> Option<usize> {
        GridPos::checked(x, y).and_then(rotate::sub_board_at)
    }

    // The shift entry points silently ignore an out-of-range line, unlike
    // `move_tile` and `rotate_sub_board` which report it.

    pub fn shift_column_up(&mut self, column: usize) {
        self.attempt_move(Move::Shift(ShiftDirection::Up, column));
    }

    pub fn shift_column_down(&mut self, column: usize) {
        self.attempt_move(Move::Shift(ShiftDirection::Down, column));
    }

    pub fn shift_row_left(&mut self, row: usize) {
        self.attempt_move(Move::Shift(ShiftDirection::Left, row));
    }

    pub fn shift_row_right(&mut self, row: usize) {
        self.attempt_move(Move::Shift(ShiftDirection::Right, row));
    }

    fn shuffle(&mut self) {
        match self.mode {
            GameMode::Classic => {
                let empty = self.empty.unwrap_or(EMPTY_START);
                classic::shuffle(&mut self.grid, empty, &mut self.rng);
                self.empty = Some(empty);
            }
            GameMode::Rotate => rotate::shuffle(&mut self.grid, &mut self.rng),
            GameMode::Shift => shift::shuffle(&mut self.grid, &mut self.rng),
        }
        self.won = self.grid.is_solved();
    }

    /// Reshuffles into a fresh configuration of the same mode.
    pub fn reset(&mut self) {
        self.shuffle();
        info!("Reset {} puzzle", self.mode);
    }

    /// Advances every tile's animation by one frame.
    pub fn update(&mut self, delta_secs: f32) {
        self.grid.step_animations(delta_secs);
    }

    /// Puts every tile straight onto its cell, e.g. after a resize.
    pub fn snap_to_layout(&mut self, layout: &BoardLayout) {
        for tile in self.grid.tiles_mut() {
            tile.snap_to(layout.cell_origin(tile.current()));
        }
    }

    /// Starts every tile gliding towards its cell.
    pub fn animate_to_layout(&mut self, layout: &BoardLayout) {
        for tile in self.grid.tiles_mut() {
            tile.animate_to(layout.cell_origin(tile.current()));
        }
    }
}
