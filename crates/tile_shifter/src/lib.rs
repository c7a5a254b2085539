//! Puzzle state for a 4x4 picture puzzle played three ways: sliding tiles
//! into a hole, turning 2x2 blocks, or shifting whole rows and columns.
//!
//! The crate owns the grid, the per-mode move rules, shuffling and win
//! detection, plus the render-space interpolation each tile follows. Drawing,
//! input and image slicing live with the caller, which feeds the board 16
//! pieces of artwork and then calls [`PuzzleBoard::update`] once per frame
//! (or lets [`TileShifterPlugin`] do it).

pub mod board;
pub mod classic;
pub mod config;
pub mod error;
pub mod grid;
pub mod grid_pos;
pub mod layout;
pub mod mode;
pub mod plugin;
pub mod rotate;
pub mod shift;
pub mod tile;

pub use board::{Move, PuzzleBoard};
pub use config::PuzzleConfig;
pub use error::BoardError;
pub use grid::Grid;
pub use grid_pos::{BOARD_SIZE, GridPos, TOTAL_TILES};
pub use layout::BoardLayout;
pub use mode::GameMode;
pub use plugin::{PuzzleSolved, TileShifterPlugin};
pub use rotate::{SUB_BOARD_ANCHORS, SUB_BOARD_COUNT};
pub use shift::ShiftDirection;
pub use tile::{Motion, Tile, TileId};
