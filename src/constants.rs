//! Motion constants shared by the actors.
//!
//! Every rate is expressed in pixels per frame. Behaviour is frame-rate
//! dependent: there is no delta-time scaling anywhere in the crate.

/// Footprint of the player sprite.
pub const PLAYER_WIDTH: i32 = 50;
/// Height of the player sprite.
pub const PLAYER_HEIGHT: i32 = 70;
/// Footprint of the walking and flying enemy sprites.
pub const ENEMY_WIDTH: i32 = 70;
/// Height of the walking and flying enemy sprites.
pub const ENEMY_HEIGHT: i32 = 50;
/// Spikes are square.
pub const SPIKES_SIZE: i32 = 50;

/// Magnitude of the player's horizontal walk velocity.
pub const PLAYER_WALK_SPEED: f64 = 1.0;
/// Instantaneous upward offset applied by a jump.
pub const PLAYER_JUMP_OFFSET: f64 = 50.0;
/// Player descent while above the floor line.
pub const PLAYER_FALL_RATE: f64 = 3.0;

/// Magnitude of the patrolling walker's horizontal velocity.
pub const WALKER_SPEED: f64 = 3.0;
/// Walker descent while airborne and off every platform.
pub const WALKER_FALL_RATE: f64 = 5.0;

/// Constant pursuit speed of the homing flier.
pub const FLIER_SPEED: f64 = 1.0;

/// Screen width used when a level layout does not name one.
pub const DEFAULT_SCREEN_WIDTH: i32 = 1280;
/// Screen height used when a level layout does not name one.
pub const DEFAULT_SCREEN_HEIGHT: i32 = 720;
/// Floor thickness, measured up from the bottom of the screen.
pub const DEFAULT_FLOOR_HEIGHT: i32 = 100;
