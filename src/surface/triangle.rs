use crate::math::{Vec2, Vec3};

/// A mesh vertex. `normal` is only written by the data supplier or by
/// [`Surface::assign_vertex_normals`](super::Surface::assign_vertex_normals).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vertex {
    pub position: Vec3,
    pub normal: Vec3,
    pub tex_coord: Vec2,
}

impl Vertex {
    pub const fn new(position: Vec3, tex_coord: Vec2) -> Self {
        Self {
            position,
            normal: Vec3::ZERO,
            tex_coord,
        }
    }

    pub const fn with_normal(position: Vec3, normal: Vec3, tex_coord: Vec2) -> Self {
        Self {
            position,
            normal,
            tex_coord,
        }
    }
}

/// Three ordered vertices plus a face normal.
///
/// Vertex order is significant: `v0 -> v1 -> v2` fixes the winding and
/// therefore which side the face normal points to.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Triangle {
    pub vertices: [Vertex; 3],
    pub normal: Vec3,
}

impl Triangle {
    /// Builds a triangle whose face normal has not been computed yet.
    pub const fn new(a: Vertex, b: Vertex, c: Vertex) -> Self {
        Self {
            vertices: [a, b, c],
            normal: Vec3::ZERO,
        }
    }

    fn edge_cross(&self) -> Vec3 {
        let [a, b, c] = &self.vertices;
        let u = b.position - a.position;
        let v = c.position - a.position;
        u.cross(v)
    }

    /// Writes `normalize(cross(p1 - p0, p2 - p0))` into `self.normal`.
    ///
    /// Collinear or coincident vertices produce a non-finite normal; nothing
    /// is reported.
    pub fn compute_normal(&mut self) {
        self.normal = self.edge_cross().normalize();
    }

    /// True when the vertices span too little area for a face normal to
    /// exist, i.e. [`compute_normal`](Self::compute_normal) would not
    /// produce a finite vector. Independent of the mesh's scale.
    pub fn is_degenerate(&self) -> bool {
        !self.edge_cross().normalize().is_finite()
    }
}
