//! 4x4 transformation matrix using column-vector convention.
//!
//! # Convention
//! - Vectors are **column vectors** on the right: `Mat4 * Vec`
//! - Translation is stored in the **last column**
//! - Transforms chain **right-to-left**: `A * B * v` applies B first, then A
//!
//! The demo builds model-view matrices the way a fixed-function pipeline does:
//! start from the view matrix and post-multiply translation and scale.
//!
//! ```ignore
//! let model_view = view * Mat4::translation(x, 0.0, z) * Mat4::scaling(2.0, 2.0, 2.0);
//! ```

use std::ops::Mul;

use super::vec3::Vec3;
use super::vec4::Vec4;

/// 4x4 matrix stored as `data[row][col]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    data: [[f32; 4]; 4],
}

impl Mat4 {
    pub const fn new(data: [[f32; 4]; 4]) -> Self {
        Mat4 { data }
    }

    pub const fn identity() -> Self {
        Mat4::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    pub const fn translation(x: f32, y: f32, z: f32) -> Self {
        Mat4::new([
            [1.0, 0.0, 0.0, x],
            [0.0, 1.0, 0.0, y],
            [0.0, 0.0, 1.0, z],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    pub const fn scaling(x: f32, y: f32, z: f32) -> Self {
        Mat4::new([
            [x, 0.0, 0.0, 0.0],
            [0.0, y, 0.0, 0.0],
            [0.0, 0.0, z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Left-handed perspective projection.
    ///
    /// View-space depth ends up in clip `w`, so `1 / w` is what the
    /// rasterizer interpolates and stores in its depth buffer.
    pub fn perspective_lh(fov_y: f32, aspect_ratio: f32, near: f32, far: f32) -> Self {
        let f = 1.0 / (fov_y / 2.0).tan();
        let depth_scale = far / (far - near);
        Mat4::new([
            [f / aspect_ratio, 0.0, 0.0, 0.0],
            [0.0, f, 0.0, 0.0],
            [0.0, 0.0, depth_scale, -near * depth_scale],
            [0.0, 0.0, 1.0, 0.0],
        ])
    }

    /// Left-handed view matrix looking from `eye` toward `target`.
    pub fn look_at_lh(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        let forward = (target - eye).normalize();
        let right = up.cross(forward).normalize();
        let up = forward.cross(right);

        Self::new([
            [right.x, right.y, right.z, -right.dot(eye)],
            [up.x, up.y, up.z, -up.dot(eye)],
            [forward.x, forward.y, forward.z, -forward.dot(eye)],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul<Mat4> for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Self::Output {
        let mut result = [[0.0f32; 4]; 4];
        for (row, out) in result.iter_mut().enumerate() {
            for (col, cell) in out.iter_mut().enumerate() {
                *cell = (0..4).map(|k| self.data[row][k] * rhs.data[k][col]).sum();
            }
        }
        Mat4::new(result)
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    fn mul(self, v: Vec4) -> Self::Output {
        let row = |r: usize| {
            self.data[r][0] * v.x
                + self.data[r][1] * v.y
                + self.data[r][2] * v.z
                + self.data[r][3] * v.w
        };
        Vec4::new(row(0), row(1), row(2), row(3))
    }
}
