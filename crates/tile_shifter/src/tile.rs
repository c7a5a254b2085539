use std::fmt::{self, Display, Formatter};

use bevy::prelude::*;

use crate::grid_pos::GridPos;

pub const ANIMATION_SPEED: f32 = 8.0; // fraction of the remaining distance per second
pub const SNAP_THRESHOLD: f32 = 1.0; // per-axis distance under which a tile snaps to its target

/// Stable identity of a tile. Artwork tiles are numbered in row-major order of
/// their solved cell; the Classic placeholder uses [`TileId::EMPTY`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub u8);

impl TileId {
    pub const EMPTY: Self = Self(u8::MAX);

    pub const fn is_empty(self) -> bool {
        self.0 == Self::EMPTY.0
    }
}

impl Display for TileId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "--")
        } else {
            write!(f, "{:>02}", self.0)
        }
    }
}

/// Render-space interpolation of a tile: `idle` when the render position sits
/// on the target, `animating` otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Motion {
    render: Vec2,
    target: Vec2,
    animating: bool,
}

impl Motion {
    pub const fn at(position: Vec2) -> Self {
        Self {
            render: position,
            target: position,
            animating: false,
        }
    }

    pub const fn render(&self) -> Vec2 {
        self.render
    }

    pub const fn target(&self) -> Vec2 {
        self.target
    }

    pub const fn is_animating(&self) -> bool {
        self.animating
    }

    /// Jumps straight to `position` and stops any running animation.
    pub const fn snap_to(&mut self, position: Vec2) {
        *self = Self::at(position);
    }

    pub fn animate_to(&mut self, position: Vec2) {
        self.target = position;
        self.animating = position != self.render;
    }

    /// Advances one frame of exponential decay towards the target.
    /// Returns whether the motion is still running afterwards.
    pub fn step(&mut self, delta_secs: f32) -> bool {
        if !self.animating {
            return false;
        }

        let diff = self.target - self.render;
        if diff.x.abs() < SNAP_THRESHOLD && diff.y.abs() < SNAP_THRESHOLD {
            self.render = self.target;
            self.animating = false;
        } else {
            self.render += diff * ANIMATION_SPEED * delta_secs;
        }
        self.animating
    }
}

/// One piece of the puzzle. `A` is whatever the front end uses to draw it,
/// typically a texture region sliced out of the source image.
#[derive(Debug, Clone)]
pub struct Tile<A> {
    id: TileId,
    artwork: Option<A>,
    solved: GridPos,
    current: GridPos,
    motion: Motion,
}

impl<A> Tile<A> {
    pub const fn new(id: TileId, artwork: A, solved: GridPos) -> Self {
        Self {
            id,
            artwork: Some(artwork),
            solved,
            current: solved,
            motion: Motion::at(Vec2::ZERO),
        }
    }

    /// The Classic placeholder. It carries no artwork and is never drawn.
    pub const fn empty(solved: GridPos) -> Self {
        Self {
            id: TileId::EMPTY,
            artwork: None,
            solved,
            current: solved,
            motion: Motion::at(Vec2::ZERO),
        }
    }

    pub const fn id(&self) -> TileId {
        self.id
    }

    pub const fn artwork(&self) -> Option<&A> {
        self.artwork.as_ref()
    }

    pub const fn solved(&self) -> GridPos {
        self.solved
    }

    pub const fn current(&self) -> GridPos {
        self.current
    }

    pub const fn is_empty(&self) -> bool {
        self.id.is_empty()
    }

    pub fn is_in_place(&self) -> bool {
        self.current == self.solved
    }

    pub const fn motion(&self) -> &Motion {
        &self.motion
    }

    pub const fn render_position(&self) -> Vec2 {
        self.motion.render
    }

    pub const fn target_position(&self) -> Vec2 {
        self.motion.target
    }

    pub const fn is_animating(&self) -> bool {
        self.motion.animating
    }

    pub const fn snap_to(&mut self, position: Vec2) {
        self.motion.snap_to(position);
    }

    pub fn animate_to(&mut self, position: Vec2) {
        self.motion.animate_to(position);
    }

    pub fn step_animation(&mut self, delta_secs: f32) -> bool {
        self.motion.step(delta_secs)
    }

    pub(crate) const fn set_current(&mut self, pos: GridPos) {
        self.current = pos;
    }

    /// Drops any render state, as if the tile had just been created.
    pub(crate) fn clear_motion(&mut self) {
        self.motion = Motion::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f32 = 1.0 / 60.0;

    #[test]
    fn snap_stops_animation() {
        let mut motion = Motion::default();
        motion.animate_to(Vec2::new(50.0, 50.0));
        assert!(motion.is_animating());

        motion.snap_to(Vec2::new(10.0, 20.0));
        assert!(!motion.is_animating());
        assert_eq!(motion.render(), Vec2::new(10.0, 20.0));
        assert_eq!(motion.target(), Vec2::new(10.0, 20.0));
    }

    #[test]
    fn animate_to_current_position_stays_idle() {
        let mut motion = Motion::at(Vec2::new(3.0, 4.0));
        motion.animate_to(Vec2::new(3.0, 4.0));
        assert!(!motion.is_animating());
    }

    #[test]
    fn converges_exactly_onto_target() {
        let mut motion = Motion::at(Vec2::ZERO);
        let target = Vec2::new(100.0, 0.0);
        motion.animate_to(target);

        let mut steps = 0;
        while motion.step(FRAME) {
            steps += 1;
            assert!(steps < 200, "animation did not settle");
            assert!(motion.render().x <= target.x);
        }
        assert_eq!(motion.render(), target);
        assert!(!motion.is_animating());
    }

    #[test]
    fn step_moves_by_speed_fraction() {
        let mut motion = Motion::at(Vec2::ZERO);
        motion.animate_to(Vec2::new(0.0, -60.0));
        motion.step(0.1);
        // 60 * 8 * 0.1 = 48
        assert!((motion.render().y + 48.0).abs() < 1e-4);
        assert!(motion.is_animating());
    }

    #[test]
    fn idle_step_is_a_no_op() {
        let mut motion = Motion::at(Vec2::new(1.5, 2.5));
        assert!(!motion.step(FRAME));
        assert_eq!(motion.render(), Vec2::new(1.5, 2.5));
    }

    #[test]
    fn empty_tile_uses_sentinel() {
        let tile = Tile::<()>::empty(GridPos::new(3, 3));
        assert!(tile.is_empty());
        assert_eq!(tile.id(), TileId::EMPTY);
        assert!(tile.artwork().is_none());
        assert!(tile.is_in_place());

        let tile = Tile::new(TileId(4), "art", GridPos::new(0, 1));
        assert!(!tile.is_empty());
        assert_eq!(tile.artwork(), Some(&"art"));
    }
}
