//! Wire vector for entity records
//!
//! Records carry vectors as `{x, y, z}` objects. Inside the simulation every
//! vector is a `glam::Vec3`; this type only exists at the record boundary.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A 3-component vector as it appears in level and editor JSON
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub z: f32,
}

impl Vector {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// True when every component is finite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Convert to `Vec3`, replacing non-finite components with zero
    pub fn to_vec3(self) -> Vec3 {
        let finite = |v: f32| if v.is_finite() { v } else { 0.0 };
        Vec3::new(finite(self.x), finite(self.y), finite(self.z))
    }
}

impl From<Vec3> for Vector {
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector> for Vec3 {
    fn from(v: Vector) -> Self {
        v.to_vec3()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_finite_components_zeroed() {
        let v = Vector::new(f32::NAN, 3.0, f32::INFINITY);
        assert!(!v.is_finite());
        assert_eq!(v.to_vec3(), Vec3::new(0.0, 3.0, 0.0));
    }

    #[test]
    fn test_missing_z_defaults() {
        let v: Vector = serde_json::from_str(r#"{ "x": 1.5, "y": -2 }"#).unwrap();
        assert_eq!(v, Vector::new(1.5, -2.0, 0.0));
    }
}
