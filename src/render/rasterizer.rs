//! Edge-function rasterization of [`Surface`]s.
//!
//! For an edge from A to B, the edge function at P is
//!
//! ```text
//! E(P) = (P.x - A.x) * (B.y - A.y) - (P.y - A.y) * (B.x - A.x)
//! ```
//!
//! A pixel is covered when the three edge functions share the sign of the
//! triangle's signed area, which handles both windings. Divided by the area
//! they are the barycentric weights handed to the pixel shader.

use super::framebuffer::FrameBuffer;
use super::shader::{PixelShader, ShadedVertex, SurfaceShader};
use crate::colors;
use crate::light::DirectionalLight;
use crate::math::{Mat4, Vec3, Vec4};
use crate::surface::Surface;
use crate::texture::TextureStore;

/// A vertex with clip-space w at or below this rejects its whole triangle.
const NEAR_W: f32 = 1e-3;

pub struct Rasterizer {
    frame: FrameBuffer,
    light: DirectionalLight,
}

impl Rasterizer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            frame: FrameBuffer::new(width, height, colors::BACKGROUND),
            light: DirectionalLight::default(),
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.frame = FrameBuffer::new(width, height, colors::BACKGROUND);
    }

    pub fn width(&self) -> u32 {
        self.frame.width()
    }

    pub fn height(&self) -> u32 {
        self.frame.height()
    }

    pub fn set_light(&mut self, light: DirectionalLight) {
        self.light = light;
    }

    pub fn clear(&mut self, color: u32) {
        self.frame.clear(color);
    }

    pub fn clear_depth_buffer(&mut self) {
        self.frame.clear_depth();
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<u32> {
        self.frame.pixel(x, y)
    }

    /// The rendered frame as ARGB8888 bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.frame.as_bytes()
    }

    /// Transforms, shades and scan-converts every triangle of `surface`.
    ///
    /// The routine comes from the surface's current render binding. Normals
    /// must already be populated. Returns the number of triangles that
    /// reached scan conversion.
    pub fn draw_surface(
        &mut self,
        surface: &Surface,
        model_view: &Mat4,
        projection: &Mat4,
        textures: &TextureStore,
    ) -> usize {
        let binding = surface.render_binding();
        let texture = if binding.uses_texture() {
            textures.get(surface.texture_id())
        } else {
            None
        };
        let diffuse = surface.diffuse_color();
        let width = self.frame.width() as f32;
        let height = self.frame.height() as f32;
        let mut drawn = 0;

        'triangles: for triangle in surface.triangles() {
            let mut screen = [Vec3::ZERO; 3];
            let mut shaded = [ShadedVertex::default(); 3];

            for (i, vertex) in triangle.vertices.iter().enumerate() {
                let clip = *projection * (*model_view * Vec4::point(vertex.position));
                // No clipping: anything touching the near plane is dropped.
                if clip.w <= NEAR_W {
                    continue 'triangles;
                }
                let inv_w = 1.0 / clip.w;
                screen[i] = Vec3::new(
                    (clip.x * inv_w + 1.0) * 0.5 * width,
                    (1.0 - clip.y * inv_w) * 0.5 * height,
                    inv_w,
                );

                // Normals are transformed as directions; the demo only uses
                // uniform scales so no inverse-transpose is needed.
                let intensity = if binding.uses_lighting() {
                    let normal = (*model_view * Vec4::direction(vertex.normal))
                        .to_vec3()
                        .normalize();
                    if normal.is_finite() {
                        self.light.intensity(normal)
                    } else {
                        self.light.ambient_intensity
                    }
                } else {
                    1.0
                };

                shaded[i] = ShadedVertex {
                    uv: vertex.tex_coord,
                    intensity,
                    inv_w,
                };
            }

            let shader = SurfaceShader::new(binding, diffuse, texture, shaded);
            if fill_triangle(&mut self.frame, screen, &shader) {
                drawn += 1;
            }
        }

        drawn
    }
}

#[inline]
fn edge_function(a: Vec3, b: Vec3, p: Vec3) -> f32 {
    (p.x - a.x) * (b.y - a.y) - (p.y - a.y) * (b.x - a.x)
}

/// Fills a screen-space triangle (z holds 1/w) with depth testing.
///
/// Returns false for degenerate triangles, which are skipped.
fn fill_triangle<S: PixelShader>(buffer: &mut FrameBuffer, points: [Vec3; 3], shader: &S) -> bool {
    let [v0, v1, v2] = points;

    let area = edge_function(v0, v1, v2);
    if area.is_nan() || area.abs() < f32::EPSILON {
        return false;
    }
    let inv_area = 1.0 / area;

    let min_x = (v0.x.min(v1.x).min(v2.x).floor() as i32).max(0);
    let max_x = (v0.x.max(v1.x).max(v2.x).ceil() as i32).min(buffer.width() as i32 - 1);
    let min_y = (v0.y.min(v1.y).min(v2.y).floor() as i32).max(0);
    let max_y = (v0.y.max(v1.y).max(v2.y).ceil() as i32).min(buffer.height() as i32 - 1);

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let p = Vec3::new(x as f32 + 0.5, y as f32 + 0.5, 0.0);

            let w0 = edge_function(v1, v2, p);
            let w1 = edge_function(v2, v0, p);
            let w2 = edge_function(v0, v1, p);

            let inside = if area > 0.0 {
                w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0
            } else {
                w0 <= 0.0 && w1 <= 0.0 && w2 <= 0.0
            };
            if !inside {
                continue;
            }

            let lambda = [w0 * inv_area, w1 * inv_area, w2 * inv_area];
            let inv_depth = lambda[0] * v0.z + lambda[1] * v1.z + lambda[2] * v2.z;
            buffer.set_pixel_with_depth(x, y, inv_depth, shader.shade(lambda));
        }
    }

    true
}
