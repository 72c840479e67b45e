//! Per-axis AABB contact resolution
//!
//! The player resolves against solids one axis at a time: move along X,
//! push out along X, then move along Y, push out along Y. Resolving both axes
//! at once picks the wrong face at corners.

use super::body::Bounds;

/// Overlaps thinner than this on the axis a pass is not resolving count as
/// touching. Absorbs float drift left over from a previous snap.
pub const CONTACT_SLOP: f32 = 1e-3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Push-out along one axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub axis: Axis,
    /// Signed displacement that puts the mover flush against the solid
    pub delta: f32,
    /// Overlap depth before the push
    pub penetration: f32,
}

/// Overlap depth on each axis, `(0, 0)` unless the boxes overlap
pub fn overlap_depth(a: &Bounds, b: &Bounds) -> (f32, f32) {
    if !a.overlaps(b) {
        return (0.0, 0.0);
    }
    let x = a.right.min(b.right) - a.left.max(b.left);
    let y = a.bottom.min(b.bottom) - a.top.max(b.top);
    (x, y)
}

/// True when a pass along `axis` should push `a` out of `b`: the boxes
/// overlap and the overlap on the other axis is deeper than [`CONTACT_SLOP`].
/// Along `axis` itself any overlap counts.
pub fn penetrating(axis: Axis, a: &Bounds, b: &Bounds) -> bool {
    let (x, y) = overlap_depth(a, b);
    match axis {
        Axis::X => x > 0.0 && y > CONTACT_SLOP,
        Axis::Y => y > 0.0 && x > CONTACT_SLOP,
    }
}

/// Push `mover` out of `solid` along `axis`.
///
/// `velocity` is the mover's velocity on that axis: moving toward +axis the
/// leading (right/bottom) edge snaps to the solid's near edge, moving toward
/// -axis the trailing edge snaps to the solid's far edge. At rest the side
/// with the smaller push wins.
pub fn resolve_axis(axis: Axis, mover: &Bounds, solid: &Bounds, velocity: f32) -> Option<Contact> {
    if !mover.overlaps(solid) {
        return None;
    }

    let (to_min, to_max) = match axis {
        // to_min: leading edge back to the solid's left/top face
        // to_max: trailing edge forward to the solid's right/bottom face
        Axis::X => (solid.left - mover.right, solid.right - mover.left),
        Axis::Y => (solid.top - mover.bottom, solid.bottom - mover.top),
    };

    let delta = if velocity > 0.0 {
        to_min
    } else if velocity < 0.0 {
        to_max
    } else if to_min.abs() <= to_max.abs() {
        to_min
    } else {
        to_max
    };

    Some(Contact {
        axis,
        delta,
        penetration: delta.abs(),
    })
}
