//! Indexed triangle mesh.

use nalgebra::{Point3, Vector3};

/// A triangle soup with shared vertices: positions plus `[v0, v1, v2]` faces.
///
/// This is the form render back-ends and mesh writers consume. It carries no
/// adjacency; faces index directly into `positions`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriangleMesh {
    positions: Vec<Point3<f64>>,
    faces: Vec<[usize; 3]>,
}

impl TriangleMesh {
    /// Create an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mesh from raw parts.
    ///
    /// Face indices are not checked here; [`build_from_grids`](super::build_from_grids)
    /// only produces indices inside the vertex range.
    pub(crate) fn from_parts(positions: Vec<Point3<f64>>, faces: Vec<[usize; 3]>) -> Self {
        Self { positions, faces }
    }

    /// Number of vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles.
    #[inline]
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Vertex positions.
    pub fn positions(&self) -> &[Point3<f64>] {
        &self.positions
    }

    /// Triangle vertex indices.
    pub fn faces(&self) -> &[[usize; 3]] {
        &self.faces
    }

    /// The three corner positions of face `f`.
    pub fn face_positions(&self, f: usize) -> [Point3<f64>; 3] {
        let [a, b, c] = self.faces[f];
        [self.positions[a], self.positions[b], self.positions[c]]
    }

    /// Unnormalized face normal `(p1 - p0) × (p2 - p0)`.
    pub fn face_cross(&self, f: usize) -> Vector3<f64> {
        let [p0, p1, p2] = self.face_positions(f);
        (p1 - p0).cross(&(p2 - p0))
    }

    /// Unit face normal, or zero for a degenerate triangle.
    pub fn face_normal(&self, f: usize) -> Vector3<f64> {
        self.face_cross(f)
            .try_normalize(f64::EPSILON)
            .unwrap_or_else(Vector3::zeros)
    }

    /// Area of face `f`.
    pub fn face_area(&self, f: usize) -> f64 {
        0.5 * self.face_cross(f).norm()
    }

    /// Sum of all triangle areas.
    pub fn surface_area(&self) -> f64 {
        (0..self.num_faces()).map(|f| self.face_area(f)).sum()
    }

    /// Axis-aligned bounding box, or `None` for an empty mesh.
    pub fn bounding_box(&self) -> Option<(Point3<f64>, Point3<f64>)> {
        let first = *self.positions.first()?;
        let mut min = first;
        let mut max = first;

        for p in &self.positions {
            for i in 0..3 {
                min[i] = min[i].min(p[i]);
                max[i] = max[i].max(p[i]);
            }
        }

        Some((min, max))
    }
}
