//! Rendering hand-off.
//!
//! A [`SurfaceRenderer`] accepts the three coordinate grids of a sampled
//! surface and produces a visual from them. The numerical core never depends
//! on a particular back-end:
//!
//! - [`NullRenderer`] discards the grids (headless use, tests).
//! - [`FileRenderer`] triangulates the grids and writes a PLY, STL or OBJ file
//!   for an external viewer.
//!
//! # Example
//!
//! ```no_run
//! use mobius::render::FileRenderer;
//! use mobius::surface::MobiusStrip;
//!
//! let strip = MobiusStrip::new(1.0, 0.4, 30).unwrap();
//! let mut renderer = FileRenderer::new("mobius.ply");
//! strip.render(&mut renderer).unwrap();
//! ```

use std::path::{Path, PathBuf};

use log::debug;

use crate::error::Result;
use crate::io;
use crate::mesh::build_from_grids;
use crate::surface::Grid;

/// Presentation attributes for a rendered surface.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderStyle {
    /// Title shown with the surface.
    pub title: String,

    /// Surface colour as 8-bit RGB.
    pub face_color: [u8; 3],

    /// Colour of the grid lines as 8-bit RGB.
    pub edge_color: [u8; 3],

    /// Surface opacity in `[0, 1]`.
    pub opacity: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            title: "Möbius Strip".to_string(),
            face_color: [135, 206, 235],
            edge_color: [128, 128, 128],
            opacity: 0.9,
        }
    }
}

impl RenderStyle {
    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the surface colour.
    pub fn with_face_color(mut self, rgb: [u8; 3]) -> Self {
        self.face_color = rgb;
        self
    }

    /// Set the grid line colour.
    pub fn with_edge_color(mut self, rgb: [u8; 3]) -> Self {
        self.edge_color = rgb;
        self
    }

    /// Set the opacity, clamped to `[0, 1]`.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }
}

/// Something that can display a surface given as three coordinate grids.
pub trait SurfaceRenderer {
    /// Render the surface whose points are `(x[j][i], y[j][i], z[j][i])`.
    fn render(&mut self, x: &Grid, y: &Grid, z: &Grid, style: &RenderStyle) -> Result<()>;
}

/// Renderer for headless contexts: accepts the grids and draws nothing.
#[derive(Debug, Default, Clone)]
pub struct NullRenderer {
    frames: usize,
    last_shape: Option<(usize, usize)>,
}

impl NullRenderer {
    /// Number of surfaces handed to this renderer.
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Grid shape of the most recent surface.
    pub fn last_shape(&self) -> Option<(usize, usize)> {
        self.last_shape
    }
}

impl SurfaceRenderer for NullRenderer {
    fn render(&mut self, x: &Grid, _y: &Grid, _z: &Grid, _style: &RenderStyle) -> Result<()> {
        self.frames += 1;
        self.last_shape = Some(x.shape());
        Ok(())
    }
}

/// Renderer that writes the triangulated surface to a mesh file.
///
/// The format follows the file extension (see [`crate::io::Format`]).
#[derive(Debug, Clone)]
pub struct FileRenderer {
    path: PathBuf,
}

impl FileRenderer {
    /// Create a renderer writing to `path`.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Output path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SurfaceRenderer for FileRenderer {
    fn render(&mut self, x: &Grid, y: &Grid, z: &Grid, style: &RenderStyle) -> Result<()> {
        let mesh = build_from_grids(x, y, z)?;
        debug!(
            "rendering {} triangles to {}",
            mesh.num_faces(),
            self.path.display()
        );
        io::save_styled(&mesh, &self.path, style)
    }
}
