//! Mesh construction utilities.
//!
//! This module builds [`TriangleMesh`]es from the coordinate grids of a sampled
//! parametric surface.

use nalgebra::Point3;

use super::triangle::TriangleMesh;
use crate::error::{MobiusError, Result};
use crate::surface::Grid;

/// Triangulate the coordinate grids of a sampled surface.
///
/// Grid point `(j, i)` becomes vertex `j * cols + i`. Every grid cell is split
/// along its `(j, i)`–`(j + 1, i + 1)` diagonal into `[v00, v10, v11]` and
/// `[v00, v11, v01]`, where `v10` is the next column and `v01` the next row.
///
/// Nothing is welded: points that coincide in space (such as the ends of a
/// closed parameter direction) stay distinct vertices, so a Möbius strip comes
/// out as an open, consistently wound ribbon.
///
/// # Errors
///
/// Returns [`MobiusError::GridShape`] if the grids differ in shape or have
/// fewer than two rows or columns.
pub fn build_from_grids(x: &Grid, y: &Grid, z: &Grid) -> Result<TriangleMesh> {
    let (rows, cols) = x.shape();
    for shape in [y.shape(), z.shape()] {
        if shape != (rows, cols) {
            return Err(MobiusError::GridShape {
                expected: (rows, cols),
                found: shape,
            });
        }
    }
    if rows < 2 || cols < 2 {
        return Err(MobiusError::GridShape {
            expected: (rows.max(2), cols.max(2)),
            found: (rows, cols),
        });
    }

    let positions: Vec<Point3<f64>> = x
        .iter()
        .zip(y.iter())
        .zip(z.iter())
        .map(|((&px, &py), &pz)| Point3::new(px, py, pz))
        .collect();

    let mut faces = Vec::with_capacity((rows - 1) * (cols - 1) * 2);
    for j in 0..rows - 1 {
        for i in 0..cols - 1 {
            let v00 = j * cols + i;
            let v10 = v00 + 1;
            let v01 = v00 + cols;
            let v11 = v01 + 1;

            faces.push([v00, v10, v11]);
            faces.push([v00, v11, v01]);
        }
    }

    Ok(TriangleMesh::from_parts(positions, faces))
}
