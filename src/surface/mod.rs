//! Sampled parametric surfaces.
//!
//! # Overview
//!
//! The primary type is [`MobiusStrip`]: a Möbius strip sampled on an `n × n`
//! parameter grid, with its coordinate grids computed eagerly and its area and
//! edge length measured on demand.
//!
//! Supporting pieces:
//! - [`Grid`], [`linspace`] and [`meshgrid`] - dense 2D sample grids
//! - [`ParametricSurface`] - a surface `r(u, v)` with analytic partials
//! - [`MobiusParametrization`] - the Möbius embedding
//!
//! # Example
//!
//! ```
//! use mobius::surface::{MobiusParams, MobiusStrip};
//!
//! let params = MobiusParams::default()
//!     .with_radius(2.0)
//!     .with_width(0.5)
//!     .with_resolution(100);
//! let strip = MobiusStrip::from_params(&params).unwrap();
//!
//! assert_eq!(strip.x().shape(), (100, 100));
//! assert!(strip.compute_surface_area() > 0.0);
//! ```

mod grid;
mod mobius;
mod parametric;

pub use grid::{linspace, meshgrid, Grid};
pub use mobius::{MobiusParams, MobiusStrip};
pub use parametric::{MobiusParametrization, ParametricSurface};
