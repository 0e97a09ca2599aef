//! # Mobius
//!
//! A discretized Möbius strip: parameter grid, surface mapping, and two
//! measurements derived from the sampled surface.
//!
//! ## Features
//!
//! - **Explicit grids**: row-major [`surface::Grid`] with elementwise helpers
//! - **Analytic quadrature**: area from `|∂r/∂u × ∂r/∂v|`, no finite differences
//! - **Edge length**: polyline length of the first grid row
//! - **Parallel evaluation**: rayon, with results identical to sequential runs
//! - **Render hand-off**: headless, or PLY / STL / OBJ files for external viewers
//!
//! ## Quick Start
//!
//! ```
//! use mobius::prelude::*;
//!
//! let strip = MobiusStrip::new(1.0, 0.4, 30).unwrap();
//!
//! let area = strip.compute_surface_area();
//! let length = strip.compute_edge_length();
//! println!("area = {:.4}, edge length = {:.4}", area, length);
//!
//! // Headless rendering
//! strip.render(&mut NullRenderer::default()).unwrap();
//! ```
//!
//! ## Accuracy
//!
//! Both measurements are discrete approximations whose quality depends only on
//! the resolution `n`. The area is a left Riemann sum and is biased high on
//! coarse grids; the edge length is an inscribed polyline and is biased low.
//!
//! ```
//! use mobius::prelude::*;
//!
//! let coarse = MobiusStrip::new(1.0, 0.4, 30).unwrap().compute_surface_area();
//! let fine = MobiusStrip::new(1.0, 0.4, 300).unwrap().compute_surface_area();
//! assert!(fine < coarse);
//! ```
//!
//! The edge length covers only the `v = -w/2` row of the grid. The strip has a
//! single boundary curve, and the `v = +w/2` row (its other half, joined across
//! the twist) is not measured.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod error;
pub mod io;
pub mod mesh;
pub mod render;
pub mod surface;

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types and functions:
///
/// ```
/// use mobius::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{MobiusError, Result};
    pub use crate::mesh::{build_from_grids, TriangleMesh};
    pub use crate::render::{FileRenderer, NullRenderer, RenderStyle, SurfaceRenderer};
    pub use crate::surface::{
        linspace, meshgrid, Grid, MobiusParametrization, MobiusParams, MobiusStrip,
        ParametricSurface,
    };
}

// Re-export nalgebra types for convenience
pub use nalgebra;

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_triangulated_area_agrees_with_quadrature() {
        // Both estimates approach the same surface area from different sides.
        let strip = MobiusStrip::new(1.0, 0.4, 200).unwrap();
        let mesh = build_from_grids(strip.x(), strip.y(), strip.z()).unwrap();

        let quadrature = strip.compute_surface_area();
        let triangulated = mesh.surface_area();

        assert!(triangulated < quadrature);
        assert!(
            (quadrature - triangulated).abs() / quadrature < 0.02,
            "quadrature {} vs triangulated {}",
            quadrature,
            triangulated
        );
    }

    #[test]
    fn test_mesh_of_strip_is_an_open_ribbon() {
        let strip = MobiusStrip::new(1.0, 0.4, 12).unwrap();
        let mesh = build_from_grids(strip.x(), strip.y(), strip.z()).unwrap();

        assert_eq!(mesh.num_vertices(), 144);
        assert_eq!(mesh.num_faces(), 11 * 11 * 2);
        let (min, max) = mesh.bounding_box().unwrap();
        assert!(max.x <= 1.2 + 1e-12 && min.x >= -1.2 - 1e-12);
        assert!(max.z <= 0.2 + 1e-12 && min.z >= -0.2 - 1e-12);
    }
}
