//! Mesh file output.
//!
//! This module writes triangulated surfaces for external viewers. Nothing is
//! ever read back.
//!
//! # Supported Formats
//!
//! | Format | Extension | Colours | Notes |
//! |--------|-----------|---------|-------|
//! | PLY | `.ply` | per vertex | ASCII Stanford polygon format |
//! | STL | `.stl` | no | Binary, per-face normals |
//! | Wavefront OBJ | `.obj` | no | 1-based face indices |
//!
//! # Usage
//!
//! ```no_run
//! use mobius::io::save;
//! use mobius::mesh::build_from_grids;
//! use mobius::surface::MobiusStrip;
//!
//! let strip = MobiusStrip::with_defaults();
//! let mesh = build_from_grids(strip.x(), strip.y(), strip.z()).unwrap();
//!
//! // Format chosen from the extension
//! save(&mesh, "strip.ply").unwrap();
//! ```

pub mod obj;
pub mod ply;
pub mod stl;

use std::path::Path;

use log::debug;

use crate::error::{MobiusError, Result};
use crate::mesh::TriangleMesh;
use crate::render::RenderStyle;

/// Supported mesh file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// PLY (Stanford polygon) format.
    Ply,
    /// STL (stereolithography) format.
    Stl,
    /// Wavefront OBJ format.
    Obj,
}

impl Format {
    /// Detect format from file extension.
    pub fn from_extension(ext: &str) -> Option<Format> {
        match ext.to_lowercase().as_str() {
            "ply" => Some(Format::Ply),
            "stl" => Some(Format::Stl),
            "obj" => Some(Format::Obj),
            _ => None,
        }
    }

    /// Detect format from file path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Format> {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Format::from_extension)
    }
}

fn detect(path: &Path) -> Result<Format> {
    Format::from_path(path).ok_or_else(|| MobiusError::UnsupportedFormat {
        extension: path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("(none)")
            .to_string(),
    })
}

/// Save a mesh to a file with automatic format detection.
///
/// The format is determined by the file extension.
pub fn save<P: AsRef<Path>>(mesh: &TriangleMesh, path: P) -> Result<()> {
    let path = path.as_ref();
    match detect(path)? {
        Format::Ply => ply::save(mesh, path)?,
        Format::Stl => stl::save(mesh, path)?,
        Format::Obj => obj::save(mesh, path, None)?,
    }
    debug!("wrote {} faces to {}", mesh.num_faces(), path.display());
    Ok(())
}

/// Save a mesh with presentation attributes.
///
/// PLY output carries the face colour per vertex and the title, opacity and
/// edge colour as header comments; OBJ output carries the title and both
/// colours as comments; STL has nowhere to put any of them.
pub fn save_styled<P: AsRef<Path>>(mesh: &TriangleMesh, path: P, style: &RenderStyle) -> Result<()> {
    let path = path.as_ref();
    match detect(path)? {
        Format::Ply => ply::save_with_style(mesh, path, style)?,
        Format::Stl => stl::save(mesh, path)?,
        Format::Obj => obj::save(mesh, path, Some(style))?,
    }
    debug!(
        "wrote {} faces to {} ({})",
        mesh.num_faces(),
        path.display(),
        style.title
    );
    Ok(())
}
