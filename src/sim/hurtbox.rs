//! Damage zones
//!
//! A hurt box hits the player twice per overlapping frame: a flat constant
//! amount, and a rate-scaled contribution to the damage-over-time pool. The
//! motion variant only fires while the player is moving.

use serde::{Deserialize, Serialize};

use super::body::Bounds;
use super::object::GenericObject;
use super::player::{HurtKind, Player};
use crate::consts::{HURT_CONSTANT, HURT_RATE, HURT_TICK_AMOUNT};

/// Damage numbers for a hurt box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HurtProfile {
    /// Flat damage per overlapping frame
    pub constant: f32,
    /// Pool growth per second of overlap
    pub rate: f32,
    /// Health drained per DOT tick
    pub tick_amount: f32,
}

impl Default for HurtProfile {
    fn default() -> Self {
        Self {
            constant: HURT_CONSTANT,
            rate: HURT_RATE,
            tick_amount: HURT_TICK_AMOUNT,
        }
    }
}

/// When a hurt box fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HurtTrigger {
    /// Any overlap
    #[default]
    Overlap,
    /// Overlap while the player has non-zero velocity
    Motion,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HurtBox {
    pub object: GenericObject,
    pub profile: HurtProfile,
    pub trigger: HurtTrigger,
}

impl HurtBox {
    pub fn new(mut object: GenericObject, profile: HurtProfile, trigger: HurtTrigger) -> Self {
        object.body.solid = false;
        Self {
            object,
            profile,
            trigger,
        }
    }

    pub fn tick(&mut self, dt: f32) {
        self.object.tick(dt);
    }

    /// Apply both damage channels. Returns false when gated by motion.
    pub fn affect(&self, player: &mut Player, dt: f32) -> bool {
        if self.trigger == HurtTrigger::Motion && !player.is_moving() {
            return false;
        }
        player.hurt(self.profile.constant, 0.0, HurtKind::Constant);
        player.hurt(
            self.profile.rate * dt,
            self.profile.tick_amount,
            HurtKind::Tick,
        );
        true
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.object.bounds()
    }
}
