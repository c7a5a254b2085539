use std::marker::PhantomData;

use bevy::prelude::*;

use crate::board::PuzzleBoard;
use crate::mode::GameMode;

/// Sent once each time the active board goes from unsolved to solved.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleSolved {
    pub mode: GameMode,
}

/// Drives a `PuzzleBoard<A>` resource from the frame clock: tile animations
/// advance every `Update`, and `PuzzleSolved` fires when the puzzle is won.
pub struct TileShifterPlugin<A> {
    _artwork: PhantomData<fn() -> A>,
}

impl<A> Default for TileShifterPlugin<A> {
    fn default() -> Self {
        Self {
            _artwork: PhantomData,
        }
    }
}

impl<A: Send + Sync + 'static> Plugin for TileShifterPlugin<A> {
    fn build(&self, app: &mut App) {
        app.add_event::<PuzzleSolved>()
            .add_systems(Update, (step_tiles::<A>, announce_solved::<A>).chain());
    }
}

fn step_tiles<A: Send + Sync + 'static>(
    board: Option<ResMut<PuzzleBoard<A>>>,
    time: Res<Time>,
) {
    if let Some(mut board) = board {
        board.update(time.delta_secs());
    }
}

fn announce_solved<A: Send + Sync + 'static>(
    board: Option<Res<PuzzleBoard<A>>>,
    mut was_won: Local<bool>,
    mut solved: EventWriter<PuzzleSolved>,
) {
    let Some(board) = board else {
        *was_won = false;
        return;
    };
    let won = board.is_won();
    if won && !*was_won {
        info!("{} puzzle solved", board.mode());
        solved.send(PuzzleSolved { mode: board.mode() });
    }
    *was_won = won;
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use fastrand::Rng;

    use super::*;
    use crate::grid_pos::TOTAL_TILES;
    use crate::layout::BoardLayout;

    #[derive(Resource, Default)]
    struct SolvedCount(usize);

    fn count_solved(mut events: EventReader<PuzzleSolved>, mut count: ResMut<SolvedCount>) {
        count.0 += events.read().count();
    }

    fn test_app(board: PuzzleBoard<u8>) -> App {
        let mut app = App::new();
        app.add_plugins(TileShifterPlugin::<u8>::default())
            .init_resource::<Time>()
            .init_resource::<SolvedCount>()
            .insert_resource(board)
            .add_systems(PostUpdate, count_solved);
        app
    }

    fn tick(app: &mut App) {
        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_millis(16));
        app.update();
    }

    fn board_mut(app: &mut App) -> Mut<'_, PuzzleBoard<u8>> {
        app.world_mut().resource_mut::<PuzzleBoard<u8>>()
    }

    fn solved_count(app: &App) -> usize {
        app.world().resource::<SolvedCount>().0
    }

    #[test]
    fn frames_drive_tile_animation() {
        let mut board =
            PuzzleBoard::solved(GameMode::Shift, 0..TOTAL_TILES as u8, Rng::with_seed(1)).unwrap();
        board.animate_to_layout(&BoardLayout::new(Vec2::new(300.0, 0.0), 64.0));
        let mut app = test_app(board);

        let mut frames = 0;
        while app.world().resource::<PuzzleBoard<u8>>().is_animating() {
            tick(&mut app);
            frames += 1;
            assert!(frames < 500, "tiles never settled");
        }
        assert!(frames > 1);
    }

    #[test]
    fn solving_is_announced_once() {
        let mut board =
            PuzzleBoard::solved(GameMode::Classic, 0..TOTAL_TILES as u8, Rng::with_seed(1))
                .unwrap();
        assert!(board.move_tile(3, 2));
        let mut app = test_app(board);

        tick(&mut app);
        assert_eq!(solved_count(&app), 0);

        assert!(board_mut(&mut app).move_tile(3, 3));
        tick(&mut app);
        tick(&mut app);
        assert_eq!(solved_count(&app), 1);

        assert!(board_mut(&mut app).move_tile(2, 3));
        tick(&mut app);
        assert!(board_mut(&mut app).move_tile(3, 3));
        tick(&mut app);
        assert_eq!(solved_count(&app), 2);
    }

    #[test]
    fn missing_board_is_ignored() {
        let mut app = App::new();
        app.add_plugins(TileShifterPlugin::<u8>::default())
            .init_resource::<Time>();
        tick(&mut app);
        assert!(!app.world().contains_resource::<PuzzleBoard<u8>>());
    }
}
