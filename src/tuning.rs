//! Physics tuning
//!
//! Every constant the player and environment read at runtime. Loaded from
//! JSON so levels can ship their own feel; missing fields fall back to
//! [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Data-driven physics constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player body ===
    pub player_size: f32,
    pub max_health: f32,

    // === Movement ===
    /// Downward acceleration (units/s²)
    pub gravity: f32,
    /// Fall speed ceiling; bounds per-frame displacement
    pub terminal_velocity: f32,
    /// Horizontal impulse added per frame while a direction is held
    pub speed: f32,
    /// Horizontal decay, applied as `vel.x *= friction * dt`
    pub friction: f32,
    /// Jump impulse and hold-to-rise rate
    pub jump_impulse: f32,
    /// Length of the hold-to-rise window (seconds)
    pub jump_timer: f32,

    // === Damage ===
    /// Seconds between damage-over-time drains
    pub tick_rate: f32,
    /// Invincibility after standard damage (seconds)
    pub iframes: f32,

    // === Environment ===
    pub cage_thickness: f32,
    pub tractor_skin: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_size: PLAYER_SIZE,
            max_health: PLAYER_MAX_HEALTH,

            gravity: GRAVITY,
            terminal_velocity: TERMINAL_VELOCITY,
            speed: MOVE_SPEED,
            friction: FRICTION,
            jump_impulse: JUMP_IMPULSE,
            jump_timer: JUMP_WINDOW,

            tick_rate: DOT_TICK_RATE,
            iframes: IFRAMES,

            cage_thickness: CAGE_THICKNESS,
            tractor_skin: TRACTOR_SKIN,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON; absent fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let tuning: Self = serde_json::from_str(json)?;
        log::info!(
            "Loaded tuning (gravity {}, terminal {}, jump {})",
            tuning.gravity,
            tuning.terminal_velocity,
            tuning.jump_impulse
        );
        Ok(tuning.sanitized())
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Replace negative or non-finite values with defaults
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        let fix = |value: f32, fallback: f32| {
            if value.is_finite() && value >= 0.0 {
                value
            } else {
                log::warn!("Tuning value {} out of range, using {}", value, fallback);
                fallback
            }
        };

        Self {
            player_size: fix(self.player_size, defaults.player_size),
            max_health: fix(self.max_health, defaults.max_health),
            gravity: fix(self.gravity, defaults.gravity),
            terminal_velocity: fix(self.terminal_velocity, defaults.terminal_velocity),
            speed: fix(self.speed, defaults.speed),
            friction: fix(self.friction, defaults.friction),
            jump_impulse: fix(self.jump_impulse, defaults.jump_impulse),
            jump_timer: fix(self.jump_timer, defaults.jump_timer),
            tick_rate: fix(self.tick_rate, defaults.tick_rate),
            iframes: fix(self.iframes, defaults.iframes),
            cage_thickness: fix(self.cage_thickness, defaults.cage_thickness),
            tractor_skin: fix(self.tractor_skin, defaults.tractor_skin),
        }
    }
}
