//! Lighting used by the lit render routines.

use crate::math::Vec3;

/// A directional light that illuminates the scene uniformly from a direction.
///
/// Directions are expressed in view space, like the normals the rasterizer
/// hands to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    /// The normalized direction the light is pointing (not where it comes from).
    pub direction: Vec3,
    /// Floor applied to every lit pixel so faces turned away stay visible.
    pub ambient_intensity: f32,
}

impl DirectionalLight {
    /// The direction is normalized automatically.
    pub fn new(direction: Vec3) -> Self {
        DirectionalLight {
            direction: direction.normalize(),
            ambient_intensity: 0.15,
        }
    }

    /// Lambert term in [0, 1] for a unit `normal`.
    pub fn lambert(&self, normal: Vec3) -> f32 {
        (-self.direction).dot(normal).max(0.0)
    }

    /// Light intensity in [ambient, 1] for a unit `normal`.
    pub fn intensity(&self, normal: Vec3) -> f32 {
        let ambient = self.ambient_intensity;
        (ambient + (1.0 - ambient) * self.lambert(normal)).min(1.0)
    }
}

impl Default for DirectionalLight {
    /// Shines away from the viewer and slightly downward.
    fn default() -> Self {
        Self::new(Vec3::new(0.3, -0.5, 1.0))
    }
}
