//! Wavefront OBJ format output.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{MobiusError, Result};
use crate::mesh::TriangleMesh;
use crate::render::RenderStyle;

/// Save a mesh to an OBJ file, optionally styled.
///
/// With a style, the title becomes a comment and an `o` statement, and the
/// face and edge colours are recorded as comments.
pub fn save<P: AsRef<Path>>(mesh: &TriangleMesh, path: P, style: Option<&RenderStyle>) -> Result<()> {
    let path = path.as_ref();
    if mesh.num_faces() == 0 {
        return Err(MobiusError::SaveError {
            path: path.to_path_buf(),
            message: "mesh has no faces".to_string(),
        });
    }

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "# Generated by mobius")?;
    writeln!(writer, "# {} vertices, {} faces", mesh.num_vertices(), mesh.num_faces())?;
    if let Some(style) = style {
        let [fr, fg, fb] = style.face_color;
        let [er, eg, eb] = style.edge_color;
        writeln!(writer, "# {}", style.title)?;
        writeln!(writer, "# face_color {} {} {}", fr, fg, fb)?;
        writeln!(writer, "# edge_color {} {} {}", er, eg, eb)?;
        // Object names cannot contain whitespace
        writeln!(
            writer,
            "o {}",
            style.title.split_whitespace().collect::<Vec<_>>().join("_")
        )?;
    }

    for p in mesh.positions() {
        writeln!(writer, "v {} {} {}", p.x, p.y, p.z)?;
    }

    // OBJ indices are 1-based
    for f in mesh.faces() {
        writeln!(writer, "f {} {} {}", f[0] + 1, f[1] + 1, f[2] + 1)?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::build_from_grids;
    use crate::surface::Grid;

    #[test]
    fn test_one_based_faces() {
        let x = Grid::from_fn(2, 2, |_, i| i as f64);
        let y = Grid::from_fn(2, 2, |j, _| j as f64);
        let z = Grid::from_fn(2, 2, |_, _| 0.0);
        let mesh = build_from_grids(&x, &y, &z).unwrap();

        let file = tempfile::NamedTempFile::with_suffix(".obj").unwrap();
        let style = RenderStyle::default().with_edge_color([10, 20, 30]);
        save(&mesh, file.path(), Some(&style)).unwrap();

        let text = std::fs::read_to_string(file.path()).unwrap();
        assert!(text.contains("o Möbius_Strip"));
        assert!(text.contains("# face_color 135 206 235"));
        assert!(text.contains("# edge_color 10 20 30"));
        assert_eq!(text.lines().filter(|l| l.starts_with("v ")).count(), 4);

        let faces: Vec<&str> = text.lines().filter(|l| l.starts_with("f ")).collect();
        assert_eq!(faces, vec!["f 1 2 4", "f 1 4 3"]);
    }
}
