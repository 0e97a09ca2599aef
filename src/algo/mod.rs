//! Measurement algorithms on sampled surfaces.
//!
//! - [`quadrature`]: surface area by left Riemann sum of the area element
//! - [`arc_length`]: polyline length of sampled curves

pub mod arc_length;
pub mod quadrature;
