use bevy::prelude::*;

use crate::grid_pos::{BOARD_SIZE, GridPos};
use crate::rotate::SUB_BOARD_ANCHORS;

pub const BOARD_PADDING: f32 = 50.0;
pub const BUTTON_ROW_HEIGHT: f32 = 80.0; // kept free for the back/reset buttons
pub const BOARD_DROP: f32 = 20.0;

/// Where the board sits in render space. Cell `(x, y)` covers the square
/// starting at `origin + (x, y) * tile_size`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardLayout {
    pub origin: Vec2,
    pub tile_size: f32,
}

impl BoardLayout {
    pub const fn new(origin: Vec2, tile_size: f32) -> Self {
        Self { origin, tile_size }
    }

    /// Largest square board that fits in `viewport` with `padding` on every
    /// side and room for the button row, centred and then lowered slightly.
    pub fn fit(viewport: Vec2, padding: f32) -> Self {
        let available_width = padding.mul_add(-2.0, viewport.x);
        let available_height = padding.mul_add(-2.0, viewport.y) - BUTTON_ROW_HEIGHT;
        let tile_size = (available_width.min(available_height) / BOARD_SIZE as f32).max(0.0);
        let board = tile_size * BOARD_SIZE as f32;

        Self {
            origin: Vec2::new(
                (viewport.x - board) / 2.0,
                (viewport.y - board) / 2.0 - BOARD_DROP,
            ),
            tile_size,
        }
    }

    pub fn board_size(&self) -> f32 {
        self.tile_size * BOARD_SIZE as f32
    }

    pub fn cell_origin(&self, pos: GridPos) -> Vec2 {
        self.origin + Vec2::new(pos.x as f32, pos.y as f32) * self.tile_size
    }

    pub fn cell_center(&self, pos: GridPos) -> Vec2 {
        self.cell_origin(pos) + Vec2::splat(self.tile_size / 2.0)
    }

    /// The cell under `point`, `None` outside the board.
    pub fn cell_at(&self, point: Vec2) -> Option<GridPos> {
        if self.tile_size <= 0.0 {
            return None;
        }
        let local = (point - self.origin) / self.tile_size;
        if !local.is_finite() {
            return None;
        }
        if local.x < 0.0 || local.y < 0.0 {
            return None;
        }
        GridPos::checked(local.x.floor() as i32, local.y.floor() as i32)
    }

    /// Centre of rotatable block `index`, where its rotate button goes.
    pub fn sub_board_center(&self, index: usize) -> Option<Vec2> {
        let anchor = SUB_BOARD_ANCHORS.get(index)?;
        Some(self.cell_origin(*anchor) + Vec2::splat(self.tile_size))
    }
}
