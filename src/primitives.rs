//! Procedural geometry for the demo: a cube and a UV sphere.

use std::f32::consts::{FRAC_PI_2, PI};

use crate::math::{Vec2, Vec3};
use crate::surface::{NormalSource, Surface, Triangle, Vertex};

/// Outward axis, then two tangents with `u x v == axis`.
const CUBE_FACES: [(Vec3, Vec3, Vec3); 6] = [
    (Vec3::new(1.0, 0.0, 0.0), Vec3::Y, Vec3::Z),
    (Vec3::new(-1.0, 0.0, 0.0), Vec3::Z, Vec3::Y),
    (Vec3::new(0.0, 1.0, 0.0), Vec3::Z, Vec3::X),
    (Vec3::new(0.0, -1.0, 0.0), Vec3::X, Vec3::Z),
    (Vec3::new(0.0, 0.0, 1.0), Vec3::X, Vec3::Y),
    (Vec3::new(0.0, 0.0, -1.0), Vec3::Y, Vec3::X),
];

/// The 12 triangles of the `[-1, 1]^3` cube, counter-clockwise seen from
/// outside. Normals are left for the caller to compute.
pub fn cube_triangles() -> Vec<Triangle> {
    let mut triangles = Vec::with_capacity(12);
    for (axis, u, v) in CUBE_FACES {
        let corner = |su: f32, sv: f32, tex: Vec2| Vertex::new(axis + u * su + v * sv, tex);
        let a = corner(-1.0, -1.0, Vec2::new(0.0, 0.0));
        let b = corner(1.0, -1.0, Vec2::new(1.0, 0.0));
        let c = corner(1.0, 1.0, Vec2::new(1.0, 1.0));
        let d = corner(-1.0, 1.0, Vec2::new(0.0, 1.0));
        triangles.push(Triangle::new(a, b, c));
        triangles.push(Triangle::new(a, c, d));
    }
    triangles
}

/// Flat-shaded cube surface.
pub fn cube() -> Surface {
    Surface::from_vec(cube_triangles(), NormalSource::Computed)
}

/// Triangles emitted by [`sphere`] for an already clamped tessellation.
fn sphere_triangle_count(longitudes: u32, latitudes: u32) -> usize {
    2 * longitudes as usize * latitudes.saturating_sub(1) as usize
}

/// Unit UV sphere with smooth vertex normals.
///
/// `longitudes` slices around Y, `latitudes` stacks from pole to pole. The
/// pole rows emit one triangle per slice so no degenerate triangle is made.
pub fn sphere(longitudes: u32, latitudes: u32) -> Surface {
    let longitudes = longitudes.max(3);
    let latitudes = latitudes.max(2);

    let vertex = |i: u32, j: u32| {
        let phi = -FRAC_PI_2 + PI * i as f32 / latitudes as f32;
        let theta = 2.0 * PI * j as f32 / longitudes as f32;
        let position = Vec3::new(phi.cos() * theta.cos(), phi.sin(), phi.cos() * theta.sin());
        let tex = Vec2::new(j as f32 / longitudes as f32, i as f32 / latitudes as f32);
        Vertex::with_normal(position, position, tex)
    };

    let mut triangles = Vec::with_capacity(sphere_triangle_count(longitudes, latitudes));
    for i in 0..latitudes {
        for j in 0..longitudes {
            let (p00, p01) = (vertex(i, j), vertex(i, j + 1));
            let (p10, p11) = (vertex(i + 1, j), vertex(i + 1, j + 1));
            if i + 1 < latitudes {
                triangles.push(Triangle::new(p00, p10, p11));
            }
            if i > 0 {
                triangles.push(Triangle::new(p00, p11, p01));
            }
        }
    }
    for triangle in &mut triangles {
        triangle.compute_normal();
    }

    Surface::from_vec(triangles, NormalSource::Supplied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn centroid(t: &Triangle) -> Vec3 {
        let [a, b, c] = t.vertices;
        (a.position + b.position + c.position) / 3.0
    }

    #[test]
    fn cube_normals_point_outward() {
        let cube = cube();
        assert_eq!(cube.triangle_count(), 12);
        for t in cube.triangles() {
            assert_relative_eq!(t.normal.magnitude(), 1.0, epsilon = 1e-6);
            assert!(t.normal.dot(centroid(t)) > 0.0);
            assert!(t.vertices.iter().all(|v| v.normal == t.normal));
        }
    }

    #[test]
    fn cube_vertices_stay_on_the_unit_cube() {
        for t in cube_triangles() {
            for v in t.vertices {
                let p = v.position;
                assert!(p.x.abs() == 1.0 && p.y.abs() == 1.0 && p.z.abs() == 1.0);
            }
        }
    }

    #[test]
    fn sphere_has_no_degenerate_triangles() {
        let sphere = sphere(10, 10);
        assert_eq!(sphere.triangle_count(), 2 * 10 * 9);
        assert_eq!(sphere.degenerate_count(), 0);
    }

    #[test]
    fn sphere_triangle_count_matches_output() {
        for (lon, lat) in [(3, 2), (8, 6), (10, 10)] {
            assert_eq!(sphere(lon, lat).triangle_count(), sphere_triangle_count(lon, lat));
        }
        // Exceeds u32 without overflowing.
        assert_eq!(sphere_triangle_count(70_000, 70_000), 2 * 70_000 * 69_999);
    }

    #[test]
    fn sphere_keeps_smooth_vertex_normals() {
        let sphere = sphere(8, 6);
        for t in sphere.triangles() {
            assert!(t.normal.dot(centroid(t)) > 0.0);
            for v in t.vertices {
                assert_relative_eq!(v.normal.magnitude(), 1.0, epsilon = 1e-5);
                assert_eq!(v.normal, v.position);
            }
        }
    }
}
