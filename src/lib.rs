//! Ledge - simulation core of a 2D side-view platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, player, collisions, tick order)
//! - `tuning`: Data-driven physics constants
//! - `render`: Read-only geometry extract for an external renderer
//!
//! Coordinates are canvas-style: X grows to the right, Y grows downward.

pub mod render;
pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Simulation configuration constants
pub mod consts {
    /// Nominal frame time (60 Hz animation frame)
    pub const FRAME_DT: f32 = 1.0 / 60.0;

    /// Player box edge length
    pub const PLAYER_SIZE: f32 = 20.0;
    /// Player spawn point
    pub const PLAYER_SPAWN: (f32, f32) = (0.0, 24.0);
    pub const PLAYER_MAX_HEALTH: f32 = 92.0;

    /// Downward acceleration (units/s²)
    pub const GRAVITY: f32 = 900.0;
    /// Fall speed ceiling (units/s)
    pub const TERMINAL_VELOCITY: f32 = 700.0;
    /// Horizontal impulse per frame while a direction is held
    pub const MOVE_SPEED: f32 = 300.0;
    /// Horizontal decay coefficient, applied as `vel.x *= FRICTION * dt`
    pub const FRICTION: f32 = 0.9 / 500.0;
    /// Upward jump impulse (units/s), also the hold-to-rise rate
    pub const JUMP_IMPULSE: f32 = 500.0;
    /// Seconds during which holding jump keeps rising
    pub const JUMP_WINDOW: f32 = 0.66;

    /// Seconds between damage-over-time drains
    pub const DOT_TICK_RATE: f32 = 1.0;
    /// Invincibility after standard damage (seconds)
    pub const IFRAMES: f32 = 0.5;

    /// Default arena: cage floor centre and extent
    pub const CAGE_FLOOR: (f32, f32) = (0.0, 200.0);
    pub const CAGE_SIZE: (f32, f32) = (400.0, 400.0);
    /// Cage wall stroke width
    pub const CAGE_THICKNESS: f32 = 4.0;
    /// Half-height of the conveyor strip riding a platform's top surface
    pub const TRACTOR_SKIN: f32 = 1.0;

    /// HurtBox defaults: flat damage per overlapping frame
    pub const HURT_CONSTANT: f32 = 1.0;
    /// HurtBox defaults: pool growth per second of overlap
    pub const HURT_RATE: f32 = 50.0;
    /// HurtBox defaults: health drained per DOT tick
    pub const HURT_TICK_AMOUNT: f32 = 1.0;
}
