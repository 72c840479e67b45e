//! Kinematic platforms
//!
//! A platform is a solid moving box. It optionally returns along its path
//! once it has travelled far enough from where it started, and it carries a
//! [`Tractor`] on its top surface so a player standing on it rides along.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::body::Bounds;
use super::object::GenericObject;
use super::player::Player;
use super::tractor::Tractor;

/// What a platform does when it reaches the end of its travel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReturnMode {
    /// Keep going forever
    #[default]
    None,
    /// Jump back to the origin
    Teleport,
    /// Reverse velocity and head back
    Rebound,
}

/// Travel limits for a moving platform
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlatformTravel {
    #[serde(default)]
    pub mode: ReturnMode,
    /// Distance from the origin at which the return kicks in
    pub distance: f32,
    /// Start point; defaults to the spawn position
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<[f32; 3]>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub object: GenericObject,
    pub mode: ReturnMode,
    pub distance: f32,
    pub origin: Vec3,
    pub tractor: Tractor,
    tractor_skin: f32,
}

impl Platform {
    pub fn new(mut object: GenericObject, travel: Option<PlatformTravel>, tractor_skin: f32) -> Self {
        object.body.solid = true;
        let (mode, distance, origin) = match travel {
            Some(t) => (
                t.mode,
                t.distance.max(0.0),
                t.origin.map(Vec3::from_array).unwrap_or(object.body.pos),
            ),
            None => (ReturnMode::None, 0.0, object.body.pos),
        };

        let mut tractor = Tractor::new(GenericObject::new(object.body.clone(), object.vel));
        tractor.track_surface(&object.body, object.vel, tractor_skin);

        Self {
            object,
            mode,
            distance,
            origin,
            tractor,
            tractor_skin,
        }
    }

    /// Integrate, apply the return behaviour, then re-seat the tractor
    pub fn tick(&mut self, dt: f32) {
        self.object.tick(dt);

        let offset = self.object.body.pos - self.origin;
        let travelled = offset.truncate().length();
        match self.mode {
            ReturnMode::None => {}
            ReturnMode::Teleport => {
                if travelled > self.distance {
                    self.object.body.pos = self.origin;
                }
            }
            ReturnMode::Rebound => {
                // Only flip while heading outward so an overshoot can't flip twice
                let outward = self.object.vel.truncate().dot(offset.truncate()) > 0.0;
                if travelled > self.distance && outward {
                    self.object.vel = -self.object.vel;
                    log::debug!("Platform rebound at {:?}", self.object.body.pos);
                }
            }
        }

        self.tractor
            .track_surface(&self.object.body, self.object.vel, self.tractor_skin);
    }

    /// Conveyance through the top-surface tractor
    pub fn affect(&self, player: &mut Player, dt: f32) -> bool {
        self.tractor.affect(player, dt)
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.object.bounds()
    }

    /// The region where a player counts as riding the platform
    #[inline]
    pub fn surface_bounds(&self) -> Bounds {
        self.tractor.bounds()
    }

    pub fn travel(&self) -> Option<PlatformTravel> {
        match self.mode {
            ReturnMode::None if self.distance == 0.0 => None,
            mode => Some(PlatformTravel {
                mode,
                distance: self.distance,
                origin: Some(self.origin.to_array()),
            }),
        }
    }
}
