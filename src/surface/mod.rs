//! Triangle surfaces: storage, normals and render options.
//!
//! A [`Surface`] owns its triangles, a diffuse color, a texture id and a set
//! of [`SurfaceOptions`]. The draw routine matching the options is cached as
//! a [`RenderBinding`] and re-resolved by every option mutator before it
//! returns, so readers never observe a stale binding.
//!
//! ```ignore
//! let mut cube = Surface::from_vec(primitives::cube_triangles(), NormalSource::Computed);
//! cube.set_texture_id(id);
//! cube.enable_option(SurfaceOptions::USE_TEXTURE);
//! rasterizer.draw_surface(&cube, &model_view, &projection, &textures);
//! ```

mod options;
mod triangle;

pub use options::{RenderBinding, SurfaceOptions};
pub use triangle::{Triangle, Vertex};

use crate::math::Vec4;
use crate::texture::TextureId;

/// Diffuse color of a freshly built surface.
pub const DEFAULT_DIFFUSE_COLOR: Vec4 = Vec4::new(0.42, 0.10, 0.10, 1.0);

/// Whether the caller already filled in normals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalSource {
    /// Face and vertex normals come with the triangle data.
    Supplied,
    /// Compute face normals and copy them to the vertices (flat shading).
    Computed,
}

#[derive(Debug, Clone)]
pub struct Surface {
    triangles: Vec<Triangle>,
    diffuse_color: Vec4,
    texture_id: TextureId,
    options: SurfaceOptions,
    binding: RenderBinding,
    binding_revision: u64,
}

impl Surface {
    /// Builds a surface over a private copy of `triangles`.
    ///
    /// Later changes to the caller's slice do not reach the surface.
    pub fn from_copy(triangles: &[Triangle], normals: NormalSource) -> Self {
        Self::build(triangles.to_vec(), normals)
    }

    /// Builds a surface that takes over `triangles` without reallocating.
    pub fn from_vec(triangles: Vec<Triangle>, normals: NormalSource) -> Self {
        Self::build(triangles, normals)
    }

    fn build(triangles: Vec<Triangle>, normals: NormalSource) -> Self {
        let mut surface = Self {
            triangles,
            diffuse_color: DEFAULT_DIFFUSE_COLOR,
            texture_id: TextureId::NONE,
            options: SurfaceOptions::DEFAULT,
            binding: RenderBinding::Plain,
            binding_revision: 0,
        };
        surface.resolve_binding();

        if normals == NormalSource::Computed {
            surface.compute_face_normals();
            surface.assign_vertex_normals();
        }

        let degenerate = surface.degenerate_count();
        if degenerate > 0 {
            log::warn!(
                "surface has {} degenerate triangle(s) out of {}; their normals are undefined",
                degenerate,
                surface.triangle_count()
            );
        }
        log::debug!(
            "built surface: {} triangles, normals {:?}, binding {}",
            surface.triangle_count(),
            normals,
            surface.binding
        );

        surface
    }

    /// Hands the triangle storage back, consuming the surface.
    pub fn into_triangles(self) -> Vec<Triangle> {
        self.triangles
    }

    // ============ Geometry ============

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Mutable access to the triangles. Normals are not recomputed after
    /// edits; call [`compute_face_normals`](Self::compute_face_normals) and
    /// [`assign_vertex_normals`](Self::assign_vertex_normals) explicitly.
    pub fn triangles_mut(&mut self) -> &mut [Triangle] {
        &mut self.triangles
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Recomputes every triangle's face normal from its vertex positions.
    pub fn compute_face_normals(&mut self) {
        for triangle in &mut self.triangles {
            triangle.compute_normal();
        }
    }

    /// Copies each face normal to the triangle's three vertices.
    ///
    /// Flat shading: vertices shared between triangles are not averaged.
    pub fn assign_vertex_normals(&mut self) {
        for triangle in &mut self.triangles {
            let normal = triangle.normal;
            for vertex in &mut triangle.vertices {
                vertex.normal = normal;
            }
        }
    }

    pub fn degenerate_count(&self) -> usize {
        self.triangles.iter().filter(|t| t.is_degenerate()).count()
    }

    // ============ Color & Texture ============

    pub fn diffuse_color(&self) -> Vec4 {
        self.diffuse_color
    }

    /// Plain assignment. Does not re-resolve the render binding.
    pub fn set_diffuse_color(&mut self, color: Vec4) {
        self.diffuse_color = color;
    }

    pub fn texture_id(&self) -> TextureId {
        self.texture_id
    }

    /// Plain assignment, the id is not validated. Does not re-resolve the
    /// render binding.
    pub fn set_texture_id(&mut self, id: TextureId) {
        self.texture_id = id;
    }

    // ============ Options ============

    pub fn options(&self) -> SurfaceOptions {
        self.options
    }

    /// Sets every bit of `option` and re-resolves the binding, even if they
    /// were already set. A partly set mask gets its missing bits.
    pub fn enable_option(&mut self, option: SurfaceOptions) {
        self.options.insert(option);
        self.resolve_binding();
    }

    /// Clears every bit of `option` and re-resolves the binding, even if
    /// they were already clear. Bits outside `option` are never touched.
    pub fn disable_option(&mut self, option: SurfaceOptions) {
        self.options.remove(option);
        self.resolve_binding();
    }

    pub fn set_option(&mut self, option: SurfaceOptions, enabled: bool) {
        if enabled {
            self.enable_option(option);
        } else {
            self.disable_option(option);
        }
    }

    /// The routine matching the current options.
    pub fn render_binding(&self) -> RenderBinding {
        self.binding
    }

    /// Number of times the binding has been resolved, construction included.
    pub fn binding_revision(&self) -> u64 {
        self.binding_revision
    }

    fn resolve_binding(&mut self) {
        self.binding = RenderBinding::resolve(self.options);
        self.binding_revision += 1;
        log::trace!(
            "options {:#x} -> {} (revision {})",
            self.options.bits(),
            self.binding,
            self.binding_revision
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Vec2, Vec3};

    fn vertex(x: f32, y: f32, z: f32) -> Vertex {
        Vertex::new(Vec3::new(x, y, z), Vec2::new(x, y))
    }

    /// Unit square in the XY plane, counter-clockwise seen from +Z.
    fn unit_square() -> Vec<Triangle> {
        let (a, b, c, d) = (
            vertex(0.0, 0.0, 0.0),
            vertex(1.0, 0.0, 0.0),
            vertex(1.0, 1.0, 0.0),
            vertex(0.0, 1.0, 0.0),
        );
        vec![Triangle::new(a, b, c), Triangle::new(a, c, d)]
    }

    /// Two triangles sharing the edge (0,0,0)-(1,0,0) but at an angle.
    fn folded_pair() -> Vec<Triangle> {
        let (a, b) = (vertex(0.0, 0.0, 0.0), vertex(1.0, 0.0, 0.0));
        vec![
            Triangle::new(a, b, vertex(0.0, 1.0, 0.0)),
            Triangle::new(b, a, vertex(0.0, 0.0, 1.0)),
        ]
    }

    #[test]
    fn new_surface_has_defaults() {
        let surface = Surface::from_vec(unit_square(), NormalSource::Computed);
        assert_eq!(surface.triangle_count(), 2);
        assert_eq!(surface.diffuse_color(), DEFAULT_DIFFUSE_COLOR);
        assert_eq!(surface.texture_id(), TextureId::NONE);
        assert_eq!(surface.options(), SurfaceOptions::DEFAULT);
        assert_eq!(surface.render_binding(), RenderBinding::Colored);
        assert_eq!(surface.binding_revision(), 1);
    }

    #[test]
    fn empty_surface_is_allowed() {
        let surface = Surface::from_vec(Vec::new(), NormalSource::Computed);
        assert_eq!(surface.triangle_count(), 0);
        assert_eq!(surface.degenerate_count(), 0);
    }

    #[test]
    fn unit_square_gets_positive_z_normals() {
        let surface = Surface::from_vec(unit_square(), NormalSource::Computed);
        for t in surface.triangles() {
            assert_eq!(t.normal, Vec3::Z);
            for v in &t.vertices {
                assert_eq!(v.normal, Vec3::Z);
            }
        }
    }

    #[test]
    fn vertex_normals_are_not_averaged() {
        let surface = Surface::from_vec(folded_pair(), NormalSource::Computed);
        let [first, second] = [surface.triangles()[0], surface.triangles()[1]];
        assert_ne!(first.normal, second.normal);
        for t in [first, second] {
            assert_eq!(t.vertices[0].normal, t.normal);
            assert_eq!(t.vertices[1].normal, t.normal);
            assert_eq!(t.vertices[2].normal, t.normal);
        }
    }

    #[test]
    fn supplied_normals_are_left_alone() {
        let mut triangles = unit_square();
        for t in &mut triangles {
            t.normal = Vec3::Y;
            for v in &mut t.vertices {
                v.normal = Vec3::X;
            }
        }
        let surface = Surface::from_vec(triangles, NormalSource::Supplied);
        for t in surface.triangles() {
            assert_eq!(t.normal, Vec3::Y);
            assert!(t.vertices.iter().all(|v| v.normal == Vec3::X));
        }
    }

    #[test]
    fn editing_vertices_does_not_recompute_normals() {
        let mut surface = Surface::from_vec(unit_square(), NormalSource::Computed);
        surface.triangles_mut()[0].vertices[2].position = Vec3::new(1.0, 0.0, 1.0);
        assert_eq!(surface.triangles()[0].normal, Vec3::Z);

        surface.compute_face_normals();
        assert_ne!(surface.triangles()[0].normal, Vec3::Z);
        // Vertex normals still hold the previous assignment.
        assert_eq!(surface.triangles()[0].vertices[0].normal, Vec3::Z);
    }

    #[test]
    fn copy_is_independent_of_source() {
        let mut source = unit_square();
        let surface = Surface::from_copy(&source, NormalSource::Computed);
        let snapshot = surface.triangles().to_vec();

        source[0].vertices[0].position = Vec3::new(9.0, 9.0, 9.0);
        source[1].normal = Vec3::X;

        assert_eq!(surface.triangles(), snapshot.as_slice());
        assert_ne!(surface.triangles().as_ptr(), source.as_ptr());
    }

    #[test]
    fn from_vec_reuses_the_callers_buffer() {
        let triangles = unit_square();
        let ptr = triangles.as_ptr();
        let capacity = triangles.capacity();

        let surface = Surface::from_vec(triangles, NormalSource::Computed);
        assert_eq!(surface.triangles().as_ptr(), ptr);

        let released = surface.into_triangles();
        assert_eq!(released.as_ptr(), ptr);
        assert_eq!(released.capacity(), capacity);
    }

    #[test]
    fn enable_then_disable_restores_state() {
        let mut surface = Surface::from_vec(unit_square(), NormalSource::Computed);
        let options = surface.options();
        let binding = surface.render_binding();

        surface.enable_option(SurfaceOptions::USE_LIGHTING);
        assert_eq!(surface.render_binding(), RenderBinding::LitColored);
        surface.disable_option(SurfaceOptions::USE_LIGHTING);

        assert_eq!(surface.options(), options);
        assert_eq!(surface.render_binding(), binding);
    }

    #[test]
    fn enabling_twice_still_re_resolves() {
        let mut surface = Surface::from_vec(unit_square(), NormalSource::Computed);
        surface.enable_option(SurfaceOptions::USE_TEXTURE);
        let options = surface.options();
        let revision = surface.binding_revision();

        surface.enable_option(SurfaceOptions::USE_TEXTURE);
        assert_eq!(surface.options(), options);
        assert_eq!(surface.binding_revision(), revision + 1);
    }

    #[test]
    fn disabling_a_clear_bit_still_re_resolves() {
        let mut surface = Surface::from_vec(unit_square(), NormalSource::Computed);
        let revision = surface.binding_revision();
        surface.disable_option(SurfaceOptions::USE_LIGHTING);
        assert_eq!(surface.options(), SurfaceOptions::DEFAULT);
        assert_eq!(surface.binding_revision(), revision + 1);
    }

    #[test]
    fn color_and_texture_setters_do_not_re_resolve() {
        let mut surface = Surface::from_vec(unit_square(), NormalSource::Computed);
        let revision = surface.binding_revision();

        surface.set_texture_id(TextureId(7));
        surface.set_diffuse_color(Vec4::new(0.0, 0.0, 1.0, 1.0));

        assert_eq!(surface.texture_id(), TextureId(7));
        assert_eq!(surface.diffuse_color(), Vec4::new(0.0, 0.0, 1.0, 1.0));
        assert_eq!(surface.binding_revision(), revision);
        assert_eq!(surface.render_binding(), RenderBinding::Colored);
    }

    #[test]
    fn texture_binding_end_to_end() {
        let mut surface = Surface::from_copy(&unit_square(), NormalSource::Computed);
        surface.set_texture_id(TextureId(7));
        surface.enable_option(SurfaceOptions::USE_TEXTURE);

        assert_eq!(surface.render_binding(), RenderBinding::TexturedColored);
        assert!(surface.render_binding().uses_texture());
        assert_eq!(surface.texture_id(), TextureId(7));
    }

    #[test]
    fn all_options_off_binds_the_fallback() {
        let mut surface = Surface::from_vec(unit_square(), NormalSource::Computed);
        surface.disable_option(SurfaceOptions::all());
        assert!(surface.options().is_empty());
        assert_eq!(surface.render_binding(), RenderBinding::Plain);
    }

    #[test]
    fn unknown_option_bits_are_kept_but_ignored() {
        let mut surface = Surface::from_vec(unit_square(), NormalSource::Computed);
        surface.enable_option(SurfaceOptions::from_bits_retain(0x100));
        assert_eq!(surface.options().bits(), 0x102);
        assert_eq!(surface.render_binding(), RenderBinding::Colored);
    }

    #[test]
    fn partly_set_masks_are_completed_or_cleared() {
        let both = SurfaceOptions::USE_COLOR | SurfaceOptions::USE_TEXTURE;
        let mut surface = Surface::from_vec(unit_square(), NormalSource::Computed);

        surface.enable_option(both);
        assert_eq!(surface.options(), both);
        assert_eq!(surface.render_binding(), RenderBinding::TexturedColored);

        surface.disable_option(SurfaceOptions::USE_TEXTURE | SurfaceOptions::USE_LIGHTING);
        assert_eq!(surface.options(), SurfaceOptions::USE_COLOR);
        assert_eq!(surface.render_binding(), RenderBinding::Colored);
    }

    #[test]
    fn set_option_toggles() {
        let mut surface = Surface::from_vec(unit_square(), NormalSource::Computed);
        surface.set_option(SurfaceOptions::USE_COLOR, false);
        assert_eq!(surface.render_binding(), RenderBinding::Plain);
        surface.set_option(SurfaceOptions::USE_COLOR, true);
        assert_eq!(surface.render_binding(), RenderBinding::Colored);
    }

    #[test]
    fn degenerate_triangles_stay_silent() {
        let line = Triangle::new(
            vertex(0.0, 0.0, 0.0),
            vertex(1.0, 0.0, 0.0),
            vertex(2.0, 0.0, 0.0),
        );
        let mut triangles = unit_square();
        triangles.push(line);

        let surface = Surface::from_vec(triangles, NormalSource::Computed);
        assert_eq!(surface.triangle_count(), 3);
        assert_eq!(surface.degenerate_count(), 1);
        assert!(!surface.triangles()[2].normal.is_finite());
        assert_eq!(surface.triangles()[0].normal, Vec3::Z);
    }

    #[test]
    fn small_surfaces_have_no_degenerate_triangles() {
        let triangles = unit_square()
            .into_iter()
            .map(|mut t| {
                for v in &mut t.vertices {
                    v.position = v.position * 5e-4;
                }
                t
            })
            .collect::<Vec<_>>();

        let surface = Surface::from_vec(triangles, NormalSource::Computed);
        assert_eq!(surface.degenerate_count(), 0);
        assert!(surface.triangles().iter().all(|t| t.normal.is_finite()));
    }
}
