//! Conveyor zone
//!
//! Carries a grounded player sideways by displacement only. The player's own
//! `vel.x` is left alone so conveyance never fights friction or input.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::body::{Body, Bounds};
use super::object::GenericObject;
use super::player::Player;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tractor {
    pub object: GenericObject,
}

impl Tractor {
    pub fn new(mut object: GenericObject) -> Self {
        object.body.solid = false;
        Self { object }
    }

    pub fn tick(&mut self, dt: f32) {
        self.object.tick(dt);
    }

    /// Move a grounded player by `vel.x * dt`. Returns whether it did.
    pub fn affect(&self, player: &mut Player, dt: f32) -> bool {
        let dx = self.object.vel.x * dt;
        if !player.is_grounded() || dx == 0.0 {
            return false;
        }
        player.apply_conveyance(dx);
        true
    }

    /// Re-fit onto a platform's top surface: same horizontal extent and
    /// velocity, spanning `skin` above and below the surface line
    pub fn track_surface(&mut self, platform: &Body, vel: Vec3, skin: f32) {
        let top = platform.bounds().top;
        let body = &mut self.object.body;
        body.pos = Vec3::new(platform.pos.x, top, platform.pos.z);
        body.set_anchor(Vec3::new(platform.anchor.x, 0.5, platform.anchor.z));
        body.set_size(Vec3::new(platform.size.x, skin * 2.0, platform.size.z));
        self.object.vel = vel;
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.object.bounds()
    }

    #[inline]
    pub fn velocity(&self) -> Vec3 {
        self.object.vel
    }
}
