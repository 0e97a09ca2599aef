//! PLY (Stanford polygon) format output.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{MobiusError, Result};
use crate::mesh::TriangleMesh;
use crate::render::RenderStyle;

/// Save a mesh to a PLY file (ASCII format).
///
/// # Example
///
/// ```no_run
/// use mobius::io::ply;
/// use mobius::mesh::TriangleMesh;
///
/// let mesh = TriangleMesh::new();
/// ply::save(&mesh, "output.ply").unwrap();
/// ```
pub fn save<P: AsRef<Path>>(mesh: &TriangleMesh, path: P) -> Result<()> {
    write(mesh, path.as_ref(), None)
}

/// Save a mesh to an ASCII PLY file with per-vertex colours from `style`.
pub fn save_with_style<P: AsRef<Path>>(mesh: &TriangleMesh, path: P, style: &RenderStyle) -> Result<()> {
    write(mesh, path.as_ref(), Some(style))
}

fn write(mesh: &TriangleMesh, path: &Path, style: Option<&RenderStyle>) -> Result<()> {
    if mesh.num_faces() == 0 {
        return Err(MobiusError::SaveError {
            path: path.to_path_buf(),
            message: "mesh has no faces".to_string(),
        });
    }

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "ply")?;
    writeln!(writer, "format ascii 1.0")?;
    writeln!(writer, "comment Generated by mobius")?;
    if let Some(style) = style {
        writeln!(writer, "comment title {}", style.title)?;
        writeln!(writer, "comment opacity {}", style.opacity)?;
        let [r, g, b] = style.edge_color;
        writeln!(writer, "comment edge_color {} {} {}", r, g, b)?;
    }
    writeln!(writer, "element vertex {}", mesh.num_vertices())?;
    writeln!(writer, "property float x")?;
    writeln!(writer, "property float y")?;
    writeln!(writer, "property float z")?;
    if style.is_some() {
        writeln!(writer, "property uchar red")?;
        writeln!(writer, "property uchar green")?;
        writeln!(writer, "property uchar blue")?;
    }
    writeln!(writer, "element face {}", mesh.num_faces())?;
    writeln!(writer, "property list uchar int vertex_indices")?;
    writeln!(writer, "end_header")?;

    for p in mesh.positions() {
        match style {
            Some(style) => {
                let [r, g, b] = style.face_color;
                writeln!(writer, "{} {} {} {} {} {}", p.x, p.y, p.z, r, g, b)?;
            }
            None => writeln!(writer, "{} {} {}", p.x, p.y, p.z)?,
        }
    }

    for f in mesh.faces() {
        writeln!(writer, "3 {} {} {}", f[0], f[1], f[2])?;
    }

    writer.flush()?;
    Ok(())
}
