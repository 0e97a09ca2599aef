//! Triangle meshes built from sampled surfaces.
//!
//! Render back-ends and mesh writers work on a [`TriangleMesh`]: vertex
//! positions plus triangle index triples. [`build_from_grids`] turns the
//! coordinate grids of a sampled surface into one.
//!
//! ```
//! use mobius::mesh::build_from_grids;
//! use mobius::surface::MobiusStrip;
//!
//! let strip = MobiusStrip::new(1.0, 0.4, 30).unwrap();
//! let mesh = build_from_grids(strip.x(), strip.y(), strip.z()).unwrap();
//!
//! assert_eq!(mesh.num_vertices(), 30 * 30);
//! assert_eq!(mesh.num_faces(), 29 * 29 * 2);
//! ```

mod builder;
mod triangle;

pub use builder::build_from_grids;
pub use triangle::TriangleMesh;
