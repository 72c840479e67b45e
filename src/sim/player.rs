//! The player: health, damage-over-time, jumping, and collision resolution
//!
//! State machine is {airborne, grounded} × {idle, jumping}. Jump height is
//! variable: the initial impulse is fixed, and holding jump during the jump
//! window keeps nudging the player upward until released or the window ends.
//!
//! Other entities never touch player fields directly; they go through the
//! mutation API at the bottom of `impl Player` so the invariants here
//! (health ≥ 0, tick_dmg ≤ health, jumping ≥ 0) hold in one place.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::body::{Body, Bounds};
use super::collision::{Axis, penetrating, resolve_axis};
use super::entity::Entity;
use crate::tuning::Tuning;

/// How a damage source applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HurtKind {
    /// Single hit, gated by invincibility frames
    Standard,
    /// Applied on every call
    Constant,
    /// Adds to the damage-over-time pool
    Tick,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    body: Body,
    vel: Vec3,

    health: f32,
    max_health: f32,
    /// Pending damage-over-time pool, never above `health`
    tick_dmg: f32,
    /// Health removed per DOT drain
    tick_amt: f32,
    tick_rate: f32,
    cur_tick: f32,

    /// Remaining invincibility (seconds)
    invincibility: f32,
    iframes: f32,

    grounded: bool,
    /// Remaining hold-to-rise window (seconds)
    jumping: f32,
    jump_timer: f32,
    /// Set on release mid-arc; blocks further rise until landing
    jump_disabled: bool,

    gravity: f32,
    terminal_velocity: f32,
    friction: f32,
    speed: f32,
    jump_impulse: f32,
}

impl Player {
    pub fn new(pos: Vec3, tuning: &Tuning) -> Self {
        Self {
            body: Body::new(pos, Vec3::splat(tuning.player_size), "red"),
            vel: Vec3::ZERO,
            health: tuning.max_health,
            max_health: tuning.max_health,
            tick_dmg: 0.0,
            tick_amt: 0.0,
            tick_rate: tuning.tick_rate,
            cur_tick: tuning.tick_rate,
            invincibility: 0.0,
            iframes: tuning.iframes,
            grounded: false,
            jumping: 0.0,
            jump_timer: tuning.jump_timer,
            jump_disabled: false,
            gravity: tuning.gravity,
            terminal_velocity: tuning.terminal_velocity,
            friction: tuning.friction,
            speed: tuning.speed,
            jump_impulse: tuning.jump_impulse,
        }
    }

    /// Apply input: gravity, jump, then horizontal decay and impulse
    pub fn apply_input(
        &mut self,
        left: bool,
        right: bool,
        jump_pressed: bool,
        jump_held: bool,
        dt: f32,
    ) {
        self.vel.y = (self.vel.y + self.gravity * dt).min(self.terminal_velocity);

        self.jump(jump_pressed, jump_held, dt);

        // Impulse, not assignment: keeps air control and momentum
        self.vel.x *= self.friction * dt;
        if left {
            self.vel.x -= self.speed;
        }
        if right {
            self.vel.x += self.speed;
        }
    }

    pub fn jump(&mut self, press: bool, hold: bool, dt: f32) {
        if !hold && self.jumping > 0.0 {
            self.jump_disabled = true;
        }

        if hold && self.jumping > 0.0 && !self.jump_disabled {
            self.body.pos.y -= self.jump_impulse * dt;
        }

        if self.grounded && press {
            self.vel.y -= self.jump_impulse;
            self.jumping = self.jump_timer;
            self.jump_disabled = false;
            log::debug!("Jump from ({}, {})", self.body.pos.x, self.body.pos.y);
        }
    }

    /// Advance timers and DOT, then move and resolve X fully before Y
    pub fn tick(&mut self, entities: &[Entity], dt: f32) {
        self.invincibility = (self.invincibility - dt).max(0.0);

        if self.tick_dmg > 0.0 {
            self.cur_tick -= dt;
            if self.cur_tick <= 0.0 {
                self.cur_tick = self.tick_rate;
                self.health = (self.health - self.tick_amt).max(0.0);
                self.tick_dmg = (self.tick_dmg - self.tick_amt).max(0.0);
            }
        }

        // X pass. A sliver on Y is float drift from resting on a surface,
        // not a wall, so it never shoves the player sideways.
        self.body.pos.x += self.vel.x * dt;
        for solid in entities.iter().filter(|e| e.is_solid()) {
            let other = solid.bounds();
            let mine = self.bounds();
            if !penetrating(Axis::X, &mine, &other) {
                continue;
            }
            if let Some(contact) = resolve_axis(Axis::X, &mine, &other, self.vel.x) {
                self.resolve_axis(contact.axis, contact.delta);
            }
        }

        // Y pass
        self.body.pos.y += self.vel.y * dt;
        self.grounded = false;
        for solid in entities.iter().filter(|e| e.is_solid()) {
            let other = solid.bounds();
            let mine = self.bounds();
            if !mine.overlaps(&other) {
                continue;
            }
            if !penetrating(Axis::Y, &mine, &other) {
                // Only a sliver on X left: step out sideways, keep momentum
                if let Some(contact) = resolve_axis(Axis::X, &mine, &other, 0.0) {
                    self.body.pos.x += contact.delta;
                }
                continue;
            }
            if let Some(contact) = resolve_axis(Axis::Y, &mine, &other, self.vel.y) {
                self.resolve_axis(contact.axis, contact.delta);
                self.jumping = 0.0;
                if self.body.pos.y < solid.position().y {
                    self.land();
                }
            }
        }

        self.jumping = (self.jumping - dt).max(0.0);
    }

    pub fn hurt(&mut self, amount: f32, tick_amount: f32, kind: HurtKind) {
        match kind {
            HurtKind::Standard => {
                if self.invincibility <= 0.0 {
                    self.health = (self.health - amount).max(0.0);
                    self.invincibility = self.iframes;
                }
            }
            HurtKind::Constant => {
                self.health = (self.health - amount).max(0.0);
            }
            HurtKind::Tick => {
                self.tick_dmg = (self.tick_dmg + amount).min(self.health);
                self.tick_amt = tick_amount;
            }
        }
        self.tick_dmg = self.tick_dmg.min(self.health);
    }

    // === Queries ===

    /// Geometry and colour, read-only; move the player through the mutation API
    #[inline]
    pub fn body(&self) -> &Body {
        &self.body
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.body.bounds()
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.body.pos
    }

    #[inline]
    pub fn size(&self) -> Vec3 {
        self.body.size
    }

    #[inline]
    pub fn velocity(&self) -> Vec3 {
        self.vel
    }

    pub fn health(&self) -> f32 {
        self.health
    }

    pub fn max_health(&self) -> f32 {
        self.max_health
    }

    pub fn tick_dmg(&self) -> f32 {
        self.tick_dmg
    }

    pub fn tick_amt(&self) -> f32 {
        self.tick_amt
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    pub fn is_jumping(&self) -> bool {
        self.jumping > 0.0
    }

    pub fn jump_remaining(&self) -> f32 {
        self.jumping
    }

    pub fn is_jump_disabled(&self) -> bool {
        self.jump_disabled
    }

    pub fn is_invincible(&self) -> bool {
        self.invincibility > 0.0
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }

    pub fn is_moving(&self) -> bool {
        self.vel.x != 0.0 || self.vel.y != 0.0
    }

    /// Health that will remain once the pending pool drains, as a fraction
    pub fn health_fraction(&self) -> f32 {
        if self.max_health <= 0.0 {
            return 0.0;
        }
        ((self.health - self.tick_dmg) / self.max_health).clamp(0.0, 1.0)
    }

    /// Pending pool as a fraction of max health
    pub fn pending_fraction(&self) -> f32 {
        if self.max_health <= 0.0 {
            return 0.0;
        }
        (self.tick_dmg / self.max_health).clamp(0.0, 1.0)
    }

    pub fn overlaps(&self, other: &Bounds) -> bool {
        self.bounds().overlaps(other)
    }

    pub fn contains_point(&self, point: Vec2) -> bool {
        self.body.contains_point(point)
    }

    // === Mutation API for environment entities ===

    pub fn set_position(&mut self, pos: Vec3) {
        self.body.pos = pos;
    }

    pub fn set_velocity(&mut self, vel: Vec3) {
        self.vel = vel;
    }

    pub fn set_grounded(&mut self, grounded: bool) {
        self.grounded = grounded;
    }

    /// Carry the player sideways without touching `vel.x`
    pub fn apply_conveyance(&mut self, dx: f32) {
        self.body.pos.x += dx;
    }

    /// Shift along one axis and stop motion on it
    pub fn resolve_axis(&mut self, axis: Axis, delta: f32) {
        match axis {
            Axis::X => {
                self.body.pos.x += delta;
                self.vel.x = 0.0;
            }
            Axis::Y => {
                self.body.pos.y += delta;
                self.vel.y = 0.0;
            }
        }
    }

    /// Standing on something: grounded and free to jump again
    pub fn land(&mut self) {
        self.grounded = true;
        self.jump_disabled = false;
    }

    /// Head hit a ceiling: the rise window is over
    pub fn hit_ceiling(&mut self) {
        self.jumping = 0.0;
    }
}
