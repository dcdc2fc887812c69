//! Constructors for common test scenery.
//!
//! The default scene is an 800x720 screen with a 100 px floor, so the floor
//! line sits at y = 620.

use glam::DVec2;
use ledge::{
    Behaviour, Enemy, EnemyContext, FacingChange, FrameContext, FrameReport, PlatformSet,
    PlayerCommand, PlayerSnapshot, Rect, Size, World, PLAYER_HEIGHT, PLAYER_WIDTH,
};

/// Screen width used by the fixtures.
pub const SCREEN_WIDTH: i32 = 800;
/// Screen height used by the fixtures.
pub const SCREEN_HEIGHT: i32 = 720;
/// Floor height used by the fixtures.
pub const FLOOR_HEIGHT: i32 = 100;

/// The standard 800x720 frame with a 100 px floor.
///
/// # Panics
/// Never in practice: the constants form a valid context.
#[must_use]
pub fn frame() -> FrameContext {
    FrameContext::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT), FLOOR_HEIGHT)
        .unwrap_or_else(|err| panic!("fixture frame rejected: {err}"))
}

/// A player snapshot with its top-left corner at `(x, y)`.
#[must_use]
pub const fn player_at(x: i32, y: i32) -> PlayerSnapshot {
    PlayerSnapshot {
        bounding_box: Rect::new(x, y, PLAYER_WIDTH, PLAYER_HEIGHT),
    }
}

/// A world on the standard frame with the player resting on the floor at
/// x = 100.
#[must_use]
pub fn empty_world() -> World {
    World::new(
        frame(),
        DVec2::new(100.0, f64::from(frame().floor_line() - PLAYER_HEIGHT)),
    )
}

/// Updates `enemy` once against the standard frame.
pub fn update_enemy(
    enemy: &mut Enemy,
    player: PlayerSnapshot,
    platforms_touching: &PlatformSet,
) -> FacingChange {
    let frame = frame();
    enemy.update(&EnemyContext::new(&frame, player, platforms_touching))
}

/// Steps `world` `frames` times, issuing `commands` on every frame.
pub fn run_frames(
    world: &mut World,
    frames: usize,
    commands: &[PlayerCommand],
) -> Vec<FrameReport> {
    (0..frames).map(|_| world.step(commands)).collect()
}
