//! Closed set of environment entities
//!
//! Every non-player object in a level is one of these variants. Behaviour is
//! dispatched with a `match` per operation; a kind that has nothing to do for
//! an operation says so in its arm.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::body::{Body, Bounds};
use super::cage::Cage;
use super::hurtbox::{HurtBox, HurtTrigger};
use super::object::GenericObject;
use super::platform::Platform;
use super::player::Player;
use super::record::EntityTag;
use super::tractor::Tractor;

/// Draw layer, back to front around the player and cage
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Layer {
    /// Hazards, drawn behind the cage frame
    Back,
    /// Platforms and conveyors, drawn over the cage frame
    Fore,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Entity {
    Generic(GenericObject),
    Platform(Platform),
    Cage(Cage),
    HurtBox(HurtBox),
    Tractor(Tractor),
}

impl Entity {
    pub fn body(&self) -> &Body {
        match self {
            Entity::Generic(o) => &o.body,
            Entity::Platform(p) => &p.object.body,
            Entity::Cage(c) => &c.body,
            Entity::HurtBox(h) => &h.object.body,
            Entity::Tractor(t) => &t.object.body,
        }
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.body().bounds()
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.body().pos
    }

    #[inline]
    pub fn size(&self) -> Vec3 {
        self.body().size
    }

    pub fn color(&self) -> &str {
        &self.body().color
    }

    /// Participates in the player's push-out resolution
    pub fn is_solid(&self) -> bool {
        self.body().solid
    }

    pub fn velocity(&self) -> Vec3 {
        match self {
            Entity::Generic(o) => o.vel,
            Entity::Platform(p) => p.object.vel,
            Entity::Cage(_) => Vec3::ZERO,
            Entity::HurtBox(h) => h.object.vel,
            Entity::Tractor(t) => t.object.vel,
        }
    }

    pub fn tag(&self) -> EntityTag {
        match self {
            Entity::Generic(_) => EntityTag::Generic,
            Entity::Platform(_) => EntityTag::Platform,
            Entity::Cage(_) => EntityTag::Cage,
            Entity::HurtBox(h) => match h.trigger {
                HurtTrigger::Overlap => EntityTag::HurtBox,
                HurtTrigger::Motion => EntityTag::Motion,
            },
            Entity::Tractor(_) => EntityTag::Tractor,
        }
    }

    pub fn layer(&self) -> Layer {
        match self {
            Entity::Platform(_) | Entity::Tractor(_) => Layer::Fore,
            Entity::Generic(_) | Entity::Cage(_) | Entity::HurtBox(_) => Layer::Back,
        }
    }

    /// AABB overlap with another entity
    pub fn check_collision(&self, other: &Entity) -> bool {
        self.body().check_collision(other.body())
    }

    /// Point strictly inside the entity's box
    pub fn contains_point(&self, point: Vec2) -> bool {
        self.body().contains_point(point)
    }

    /// Region the player must overlap for [`Entity::affect`] to run
    pub fn interaction_bounds(&self) -> Bounds {
        match self {
            Entity::Platform(p) => p.surface_bounds(),
            _ => self.bounds(),
        }
    }

    /// Advance one frame. Cages never move.
    pub fn tick(&mut self, dt: f32) {
        match self {
            Entity::Generic(o) => o.tick(dt),
            Entity::Platform(p) => p.tick(dt),
            Entity::Cage(_) => {}
            Entity::HurtBox(h) => h.tick(dt),
            Entity::Tractor(t) => t.tick(dt),
        }
    }

    /// Apply this entity's effect to the player. Returns whether one applied.
    pub fn affect(&self, player: &mut Player, dt: f32) -> bool {
        match self {
            Entity::Generic(_) => false,
            Entity::Platform(p) => p.affect(player, dt),
            Entity::Cage(c) => c.affect(player),
            Entity::HurtBox(h) => h.affect(player, dt),
            Entity::Tractor(t) => t.affect(player, dt),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::hurtbox::HurtProfile;
    use crate::tuning::Tuning;

    fn object(x: f32, vel_x: f32) -> GenericObject {
        let body = Body::new(Vec3::new(x, 0.0, 0.0), Vec3::splat(20.0), "white");
        GenericObject::new(body, Vec3::new(vel_x, 0.0, 0.0))
    }

    #[test]
    fn test_solidity_by_kind() {
        assert!(Entity::Platform(Platform::new(object(0.0, 0.0), None, 1.0)).is_solid());
        assert!(!Entity::Tractor(Tractor::new(object(0.0, 0.0))).is_solid());
        let hb = HurtBox::new(object(0.0, 0.0), HurtProfile::default(), HurtTrigger::Overlap);
        assert!(!Entity::HurtBox(hb).is_solid());
    }

    #[test]
    fn test_tick_dispatch() {
        let mut entities = vec![
            Entity::Generic(object(0.0, 10.0)),
            Entity::Tractor(Tractor::new(object(0.0, 10.0))),
            Entity::Platform(Platform::new(object(0.0, 10.0), None, 1.0)),
            Entity::Cage(Cage::new(object(0.0, 0.0).body, 4.0)),
        ];
        for e in &mut entities {
            e.tick(0.5);
        }
        assert_eq!(entities[0].position().x, 5.0);
        assert_eq!(entities[1].position().x, 5.0);
        assert_eq!(entities[2].position().x, 5.0);
        assert_eq!(entities[3].position().x, 0.0);
    }

    #[test]
    fn test_generic_has_no_effect() {
        let e = Entity::Generic(object(0.0, 0.0));
        let mut player = Player::new(Vec3::ZERO, &Tuning::default());
        assert!(!e.affect(&mut player, 0.1));
        assert_eq!(player.health(), 92.0);
    }

    #[test]
    fn test_motion_tag_and_layer() {
        let hb = HurtBox::new(object(0.0, 0.0), HurtProfile::default(), HurtTrigger::Motion);
        let e = Entity::HurtBox(hb);
        assert_eq!(e.tag(), EntityTag::Motion);
        assert_eq!(e.layer(), Layer::Back);
        let p = Entity::Platform(Platform::new(object(0.0, 0.0), None, 1.0));
        assert_eq!(p.layer(), Layer::Fore);
    }

    #[test]
    fn test_collision_and_point_queries() {
        let a = Entity::Generic(object(0.0, 0.0));
        let b = Entity::Generic(object(15.0, 0.0));
        let c = Entity::Generic(object(40.0, 0.0));
        assert!(a.check_collision(&b));
        assert!(b.check_collision(&a));
        assert!(!a.check_collision(&c));
        assert!(a.contains_point(Vec2::new(9.0, 9.0)));
        assert!(!a.contains_point(Vec2::new(10.0, 0.0)));
    }
}
