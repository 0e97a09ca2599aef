//! STL (stereolithography) format output.
//!
//! Meshes are written as binary STL with one normal per triangle.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{MobiusError, Result};
use crate::mesh::TriangleMesh;

/// Save a mesh to a binary STL file.
///
/// Degenerate triangles are written with a zero normal.
///
/// # Example
///
/// ```no_run
/// use mobius::io::stl;
/// use mobius::mesh::TriangleMesh;
///
/// let mesh = TriangleMesh::new();
/// stl::save(&mesh, "output.stl").unwrap();
/// ```
pub fn save<P: AsRef<Path>>(mesh: &TriangleMesh, path: P) -> Result<()> {
    let path = path.as_ref();
    if mesh.num_faces() == 0 {
        return Err(MobiusError::SaveError {
            path: path.to_path_buf(),
            message: "mesh has no faces".to_string(),
        });
    }

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    let triangles: Vec<stl_io::Triangle> = (0..mesh.num_faces())
        .map(|f| {
            let [p0, p1, p2] = mesh.face_positions(f);
            let n = mesh.face_normal(f);

            stl_io::Triangle {
                normal: stl_io::Normal::new([n.x as f32, n.y as f32, n.z as f32]),
                vertices: [
                    stl_io::Vertex::new([p0.x as f32, p0.y as f32, p0.z as f32]),
                    stl_io::Vertex::new([p1.x as f32, p1.y as f32, p1.z as f32]),
                    stl_io::Vertex::new([p2.x as f32, p2.y as f32, p2.z as f32]),
                ],
            }
        })
        .collect();

    stl_io::write_stl(&mut writer, triangles.iter()).map_err(|e| MobiusError::SaveError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    writer.flush()?;
    Ok(())
}
