//! Kinematic base object: a body that drifts with constant velocity

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::body::{Body, Bounds};

/// Body + velocity, integrated linearly each tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenericObject {
    pub body: Body,
    pub vel: Vec3,
}

impl GenericObject {
    pub fn new(body: Body, vel: Vec3) -> Self {
        Self { body, vel }
    }

    /// `pos += vel * dt` on X and Y. No collision response.
    pub fn tick(&mut self, dt: f32) {
        self.body.pos.x += self.vel.x * dt;
        self.body.pos.y += self.vel.y * dt;
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.body.bounds()
    }
}
