//! Axis-aligned box geometry shared by every entity
//!
//! A body is a reference point, a size, and an anchor. The anchor is a
//! per-axis fraction of the size: with `anchor.x = 0.5` the box is centred on
//! `pos.x`, with `anchor.y = 1.0` the box hangs entirely above `pos.y`.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Derived edges and radii of a body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
    /// Distance from `pos.x` to the right edge
    pub right_rad: f32,
    /// Distance from `pos.x` to the left edge
    pub left_rad: f32,
    /// Distance from `pos.y` to the top edge
    pub top_rad: f32,
    /// Distance from `pos.y` to the bottom edge
    pub bottom_rad: f32,
}

impl Bounds {
    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        Vec2::new(self.right, self.bottom)
    }

    /// Open-interval overlap test
    #[inline]
    pub fn overlaps(&self, other: &Bounds) -> bool {
        self.left < other.right
            && self.right > other.left
            && self.top < other.bottom
            && self.bottom > other.top
    }

    /// Strict point containment
    #[inline]
    pub fn contains_point(&self, point: Vec2) -> bool {
        self.left < point.x && self.right > point.x && self.top < point.y && self.bottom > point.y
    }

    /// Closed containment of another box (edges may touch)
    #[inline]
    pub fn contains(&self, other: &Bounds) -> bool {
        other.left >= self.left
            && other.right <= self.right
            && other.top >= self.top
            && other.bottom <= self.bottom
    }

    /// Shrink every edge toward the centre by `amount`
    pub fn inset(&self, amount: f32) -> Bounds {
        Bounds {
            left: self.left + amount,
            right: self.right - amount,
            top: self.top + amount,
            bottom: self.bottom - amount,
            right_rad: self.right_rad - amount,
            left_rad: self.left_rad - amount,
            top_rad: self.top_rad - amount,
            bottom_rad: self.bottom_rad - amount,
        }
    }
}

/// Geometry, colour and solidity of an entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec3,
    /// Per-axis pivot fraction in [0, 1]
    pub anchor: Vec3,
    /// Width / height / depth, never negative
    pub size: Vec3,
    /// Cosmetic CSS colour string
    pub color: String,
    /// Participates in push-out resolution
    pub solid: bool,
}

impl Body {
    /// Default pivot: centred on every axis
    pub const CENTER: Vec3 = Vec3::splat(0.5);

    /// Build a body, clamping size to ≥ 0 and anchor to [0, 1]
    pub fn new(pos: Vec3, size: Vec3, color: impl Into<String>) -> Self {
        Self {
            pos,
            anchor: Self::CENTER,
            size: size.max(Vec3::ZERO),
            color: color.into(),
            solid: true,
        }
    }

    pub fn with_anchor(mut self, anchor: Vec3) -> Self {
        self.set_anchor(anchor);
        self
    }

    pub fn with_solid(mut self, solid: bool) -> Self {
        self.solid = solid;
        self
    }

    pub fn set_anchor(&mut self, anchor: Vec3) {
        self.anchor = anchor.clamp(Vec3::ZERO, Vec3::ONE);
    }

    pub fn set_size(&mut self, size: Vec3) {
        self.size = size.max(Vec3::ZERO);
    }

    pub fn bounds(&self) -> Bounds {
        let right_rad = self.size.x * self.anchor.x;
        let top_rad = self.size.y * self.anchor.y;
        let left_rad = self.size.x - right_rad;
        let bottom_rad = self.size.y - top_rad;
        Bounds {
            left: self.pos.x - left_rad,
            right: self.pos.x + right_rad,
            top: self.pos.y - top_rad,
            bottom: self.pos.y + bottom_rad,
            right_rad,
            left_rad,
            top_rad,
            bottom_rad,
        }
    }

    /// AABB overlap (open intervals, symmetric)
    pub fn check_collision(&self, other: &Body) -> bool {
        self.bounds().overlaps(&other.bounds())
    }

    /// Point strictly inside the box
    pub fn contains_point(&self, point: Vec2) -> bool {
        self.bounds().contains_point(point)
    }
}
