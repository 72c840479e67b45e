//! Containment boundary
//!
//! The cage is drawn as a stroked rectangle; its walls are `thickness` wide
//! and centred on the rectangle's edges, so the usable interior is the
//! rectangle inset by half the thickness. After [`Cage::affect`] the player's
//! box always lies inside that interior.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::body::{Body, Bounds};
use super::collision::Axis;
use super::player::Player;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cage {
    pub body: Body,
    pub thickness: f32,
}

/// Which walls a clamp touched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CageClamp {
    pub left: bool,
    pub right: bool,
    pub ceiling: bool,
    pub floor: bool,
}

impl CageClamp {
    pub fn any(&self) -> bool {
        self.left || self.right || self.ceiling || self.floor
    }
}

impl Cage {
    pub fn new(mut body: Body, thickness: f32) -> Self {
        // Walls contain; they never push out
        body.solid = false;
        Self {
            body,
            thickness: thickness.max(0.0),
        }
    }

    /// Cage hanging from `pos` with its floor on `pos.y`, the layout levels use
    pub fn floored(pos: Vec3, size: Vec3, thickness: f32) -> Self {
        let body = Body::new(pos, size, "white").with_anchor(Vec3::new(0.5, 1.0, 0.0));
        Self::new(body, thickness)
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.body.bounds()
    }

    /// Usable interior: bounds inset by half the wall thickness
    pub fn inner_bounds(&self) -> Bounds {
        let outer = self.bounds();
        let half = (self.thickness * 0.5).min(outer.width() * 0.5).min(outer.height() * 0.5);
        outer.inset(half)
    }

    /// True when the player already fits inside the interior
    pub fn check_inside(&self, player: &Player) -> bool {
        self.inner_bounds().contains(&player.bounds())
    }

    /// Clamp the player into the interior. Returns whether anything moved.
    pub fn affect(&self, player: &mut Player) -> bool {
        self.clamp(player).any()
    }

    /// Clamp the player into the interior, reporting which walls were hit
    pub fn clamp(&self, player: &mut Player) -> CageClamp {
        let mut hit = CageClamp::default();
        if self.check_inside(player) {
            return hit;
        }

        let inner = self.inner_bounds();
        let b = player.bounds();
        let pos = player.position();

        // X: pos.x must lie in [inner.left + left_rad, inner.right - right_rad]
        let min_x = inner.left + b.left_rad;
        let max_x = inner.right - b.right_rad;
        if min_x > max_x {
            // Narrower than the player: centre it
            let target = (inner.left + inner.right) * 0.5 + (b.left_rad - b.right_rad) * 0.5;
            player.resolve_axis(Axis::X, target - pos.x);
            hit.left = true;
            hit.right = true;
        } else if pos.x < min_x {
            player.resolve_axis(Axis::X, min_x - pos.x);
            hit.left = true;
        } else if pos.x > max_x {
            player.resolve_axis(Axis::X, max_x - pos.x);
            hit.right = true;
        }

        // Y: pos.y must lie in [inner.top + top_rad, inner.bottom - bottom_rad]
        let min_y = inner.top + b.top_rad;
        let max_y = inner.bottom - b.bottom_rad;
        if min_y > max_y {
            let target = (inner.top + inner.bottom) * 0.5 + (b.top_rad - b.bottom_rad) * 0.5;
            player.resolve_axis(Axis::Y, target - pos.y);
            hit.ceiling = true;
            hit.floor = true;
        } else if pos.y > max_y {
            player.resolve_axis(Axis::Y, max_y - pos.y);
            hit.floor = true;
        } else if pos.y < min_y {
            player.resolve_axis(Axis::Y, min_y - pos.y);
            hit.ceiling = true;
        }

        if hit.floor {
            player.set_grounded(true);
        }
        if hit.ceiling {
            player.hit_ceiling();
        }

        if hit.any() {
            log::debug!("Cage clamp {:?}", hit);
        }
        hit
    }
}
