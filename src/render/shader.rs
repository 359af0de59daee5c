//! Per-pixel shading for each [`RenderBinding`].
//!
//! The rasterizer handles coverage, barycentric weights and the depth test.
//! The shader turns the weights into a color: it interpolates UVs and light
//! intensity (perspective-correct) and combines diffuse color, texel and
//! lighting according to the routine the surface is bound to.

use crate::colors::{pack_color, unpack_color};
use crate::math::{Vec2, Vec4};
use crate::surface::RenderBinding;
use crate::texture::Texture;

/// Trait for per-pixel shading computations.
///
/// `lambda` holds the screen-space barycentric weights [λ₀, λ₁, λ₂] of the
/// pixel; they sum to 1 inside the triangle.
pub trait PixelShader {
    fn shade(&self, lambda: [f32; 3]) -> u32;
}

/// Per-vertex inputs of a projected triangle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ShadedVertex {
    pub uv: Vec2,
    pub intensity: f32,
    /// 1 / clip-space w.
    pub inv_w: f32,
}

/// Shader for one triangle of a surface.
pub struct SurfaceShader<'a> {
    binding: RenderBinding,
    diffuse: Vec4,
    texture: Option<&'a Texture>,
    vertices: [ShadedVertex; 3],
}

impl<'a> SurfaceShader<'a> {
    pub fn new(
        binding: RenderBinding,
        diffuse: Vec4,
        texture: Option<&'a Texture>,
        vertices: [ShadedVertex; 3],
    ) -> Self {
        Self {
            binding,
            diffuse,
            texture,
            vertices,
        }
    }

    /// Weights corrected for perspective: attributes are interpolated as
    /// `attr / w` and divided by the interpolated `1 / w`.
    #[inline]
    fn perspective_weights(&self, lambda: [f32; 3]) -> [f32; 3] {
        let [a, b, c] = self.vertices;
        let weighted = [lambda[0] * a.inv_w, lambda[1] * b.inv_w, lambda[2] * c.inv_w];
        let sum = weighted[0] + weighted[1] + weighted[2];
        if sum.abs() < f32::EPSILON {
            return lambda;
        }
        [weighted[0] / sum, weighted[1] / sum, weighted[2] / sum]
    }
}

impl PixelShader for SurfaceShader<'_> {
    #[inline]
    fn shade(&self, lambda: [f32; 3]) -> u32 {
        let weights = self.perspective_weights(lambda);
        let mut color = Vec4::ONE;

        if self.binding.uses_color() {
            color = color.modulate(self.diffuse);
        }

        if self.binding.uses_texture() {
            if let Some(texture) = self.texture {
                let uv = self
                    .vertices
                    .iter()
                    .zip(weights)
                    .fold(Vec2::ZERO, |acc, (v, w)| acc + v.uv * w);
                color = color.modulate(unpack_color(texture.sample(uv.x, uv.y)));
            }
        }

        if self.binding.uses_lighting() {
            let intensity: f32 = self
                .vertices
                .iter()
                .zip(weights)
                .map(|(v, w)| v.intensity * w)
                .sum();
            color = Vec4::new(
                color.x * intensity,
                color.y * intensity,
                color.z * intensity,
                color.w,
            );
        }

        pack_color(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THIRD: [f32; 3] = [1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0];

    fn vertices(intensity: f32) -> [ShadedVertex; 3] {
        let v = |u: f32, v: f32| ShadedVertex {
            uv: Vec2::new(u, v),
            intensity,
            inv_w: 1.0,
        };
        [v(0.0, 0.0), v(0.1, 0.0), v(0.0, 0.1)]
    }

    #[test]
    fn plain_is_white() {
        let shader = SurfaceShader::new(
            RenderBinding::Plain,
            Vec4::new(1.0, 0.0, 0.0, 1.0),
            None,
            vertices(0.5),
        );
        assert_eq!(shader.shade(THIRD), 0xFFFFFFFF);
    }

    #[test]
    fn colored_uses_diffuse() {
        let shader = SurfaceShader::new(
            RenderBinding::Colored,
            Vec4::new(0.0, 0.0, 1.0, 1.0),
            None,
            vertices(0.5),
        );
        assert_eq!(shader.shade(THIRD), 0xFF0000FF);
    }

    #[test]
    fn lit_scales_rgb_only() {
        let shader = SurfaceShader::new(
            RenderBinding::LitColored,
            Vec4::new(1.0, 1.0, 1.0, 1.0),
            None,
            vertices(0.6),
        );
        assert_eq!(shader.shade(THIRD), 0xFF999999);
    }

    #[test]
    fn textured_samples_texture() {
        let texture = Texture::checkerboard(16, 0xFF00FF00, 0xFF00FF00);
        let shader = SurfaceShader::new(
            RenderBinding::Textured,
            Vec4::ONE,
            Some(&texture),
            vertices(1.0),
        );
        assert_eq!(shader.shade(THIRD), 0xFF00FF00);
    }

    #[test]
    fn missing_texture_falls_back_to_color() {
        let shader = SurfaceShader::new(
            RenderBinding::TexturedColored,
            Vec4::new(1.0, 0.0, 0.0, 1.0),
            None,
            vertices(1.0),
        );
        assert_eq!(shader.shade(THIRD), 0xFFFF0000);
    }
}
