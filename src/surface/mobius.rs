//! The discretized Möbius strip model.

use std::f64::consts::PI;

use log::{debug, trace};
use nalgebra::Point3;

use crate::algo::{arc_length, quadrature};
use crate::error::{MobiusError, Result};
use crate::render::{RenderStyle, SurfaceRenderer};

use super::grid::{linspace, meshgrid, Grid};
use super::parametric::{MobiusParametrization, ParametricSurface};

/// Options for building a [`MobiusStrip`].
#[derive(Debug, Clone, PartialEq)]
pub struct MobiusParams {
    /// Radius `R` of the centre circle.
    pub radius: f64,

    /// Width `w` of the strip; `v` runs over `[-w/2, w/2]`.
    pub width: f64,

    /// Samples `n` per parameter axis (at least 2).
    pub resolution: usize,

    /// Whether to evaluate grids in parallel (default: true).
    pub parallel: bool,
}

impl Default for MobiusParams {
    fn default() -> Self {
        Self {
            radius: 1.0,
            width: 0.2,
            resolution: 50,
            parallel: true,
        }
    }
}

impl MobiusParams {
    /// Create options with the specified radius.
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Create options with the specified width.
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// Create options with the specified per-axis resolution.
    pub fn with_resolution(mut self, resolution: usize) -> Self {
        self.resolution = resolution;
        self
    }

    /// Set whether to use parallel execution.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Create options for single-threaded execution.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Check the parameters, returning the first invalid one.
    pub fn validate(&self) -> Result<()> {
        if self.resolution < 2 {
            return Err(MobiusError::invalid_param(
                "n",
                self.resolution,
                "resolution must be at least 2",
            ));
        }
        if !self.radius.is_finite() {
            return Err(MobiusError::invalid_param("R", self.radius, "radius must be finite"));
        }
        if !self.width.is_finite() {
            return Err(MobiusError::invalid_param("w", self.width, "width must be finite"));
        }
        Ok(())
    }
}

/// A Möbius strip sampled on an `n × n` parameter grid.
///
/// The parameter samples, the `(U, V)` meshgrid and the mapped coordinate
/// grids `X, Y, Z` are all computed once at construction and never change.
/// Row `j` of every grid corresponds to `v[j]`, column `i` to `u[i]`.
///
/// # Example
///
/// ```
/// use mobius::surface::MobiusStrip;
///
/// let strip = MobiusStrip::new(1.0, 0.4, 30).unwrap();
/// let area = strip.compute_surface_area();
/// let length = strip.compute_edge_length();
///
/// assert!((area - 2.6944).abs() < 1e-3);
/// assert!((length - 6.3027).abs() < 1e-3);
/// ```
#[derive(Debug, Clone)]
pub struct MobiusStrip {
    params: MobiusParams,
    surface: MobiusParametrization,
    u: Vec<f64>,
    v: Vec<f64>,
    uu: Grid,
    vv: Grid,
    x: Grid,
    y: Grid,
    z: Grid,
}

impl MobiusStrip {
    /// Build a strip with radius `radius`, width `width` and `resolution`
    /// samples per axis.
    ///
    /// # Errors
    ///
    /// Returns [`MobiusError::InvalidParameter`] if `resolution < 2` or if
    /// `radius` or `width` is not finite.
    pub fn new(radius: f64, width: f64, resolution: usize) -> Result<Self> {
        Self::from_params(
            &MobiusParams::default()
                .with_radius(radius)
                .with_width(width)
                .with_resolution(resolution),
        )
    }

    /// Build a strip from options.
    pub fn from_params(params: &MobiusParams) -> Result<Self> {
        params.validate()?;
        Ok(Self::build(params.clone()))
    }

    /// The default strip: `R = 1`, `w = 0.2`, `n = 50`.
    pub fn with_defaults() -> Self {
        Self::build(MobiusParams::default())
    }

    fn build(params: MobiusParams) -> Self {
        let n = params.resolution;
        let half = params.width / 2.0;

        let u = linspace(0.0, 2.0 * PI, n);
        let v = linspace(-half, half, n);
        let (uu, vv) = meshgrid(&u, &v);

        let surface = MobiusParametrization::new(params.radius);
        let point = |j: usize, i: usize| surface.position(u[i], v[j]);
        let points = if params.parallel {
            Grid::from_fn_par(n, n, point)
        } else {
            Grid::from_fn(n, n, point)
        };

        let x = points.map(|p| p.x);
        let y = points.map(|p| p.y);
        let z = points.map(|p| p.z);

        debug!(
            "built Möbius strip R={} w={} on a {}x{} grid",
            params.radius, params.width, n, n
        );

        Self {
            params,
            surface,
            u,
            v,
            uu,
            vv,
            x,
            y,
            z,
        }
    }

    /// The options this strip was built from.
    pub fn params(&self) -> &MobiusParams {
        &self.params
    }

    /// Radius `R` of the centre circle.
    pub fn radius(&self) -> f64 {
        self.params.radius
    }

    /// Strip width `w`.
    pub fn width(&self) -> f64 {
        self.params.width
    }

    /// Samples per axis `n`.
    pub fn resolution(&self) -> usize {
        self.params.resolution
    }

    /// The parametrization the grid was mapped through.
    pub fn parametrization(&self) -> &MobiusParametrization {
        &self.surface
    }

    /// Samples of `u` over `[0, 2π]`.
    pub fn u(&self) -> &[f64] {
        &self.u
    }

    /// Samples of `v` over `[-w/2, w/2]`.
    pub fn v(&self) -> &[f64] {
        &self.v
    }

    /// Meshgrid `U` (`U[j][i] = u[i]`).
    pub fn u_grid(&self) -> &Grid {
        &self.uu
    }

    /// Meshgrid `V` (`V[j][i] = v[j]`).
    pub fn v_grid(&self) -> &Grid {
        &self.vv
    }

    /// X coordinates of the surface grid.
    pub fn x(&self) -> &Grid {
        &self.x
    }

    /// Y coordinates of the surface grid.
    pub fn y(&self) -> &Grid {
        &self.y
    }

    /// Z coordinates of the surface grid.
    pub fn z(&self) -> &Grid {
        &self.z
    }

    /// Surface point at grid row `row` (v index) and column `col` (u index).
    pub fn point(&self, row: usize, col: usize) -> Option<Point3<f64>> {
        Some(Point3::new(
            *self.x.get(row, col)?,
            *self.y.get(row, col)?,
            *self.z.get(row, col)?,
        ))
    }

    /// Parameter spacing `(du, dv)`; `dv` is taken as `|w| / (n - 1)`.
    pub fn spacing(&self) -> (f64, f64) {
        let steps = (self.params.resolution - 1) as f64;
        (2.0 * PI / steps, self.params.width.abs() / steps)
    }

    /// Approximate surface area.
    ///
    /// Evaluates `|∂r/∂u × ∂r/∂v|` analytically at every grid point and
    /// scales the sum by `du · dv` (a left Riemann sum). The estimate is
    /// biased high on coarse grids and converges as `n` grows. Flipping the
    /// sign of `w` does not change the result.
    pub fn compute_surface_area(&self) -> f64 {
        let (du, dv) = self.spacing();
        let area = quadrature::riemann_area(
            &self.surface,
            &self.uu,
            &self.vv,
            du,
            dv,
            self.params.parallel,
        );
        trace!("surface area {} (n={})", area, self.params.resolution);
        area
    }

    /// Approximate length of the `v = v[0]` boundary curve.
    ///
    /// Sums the distances between consecutive points of grid row 0. Only that
    /// one row is measured: the other half of the strip's single boundary
    /// (row `n - 1`, joined to row 0 across the half-twist) is not included.
    pub fn compute_edge_length(&self) -> f64 {
        let length = arc_length::polyline_length(self.edge_points());
        trace!("edge length {} (n={})", length, self.params.resolution);
        length
    }

    /// Points of grid row 0, in order of increasing `u`.
    pub fn edge_points(&self) -> impl Iterator<Item = Point3<f64>> + '_ {
        arc_length::row_points(self.x.row(0), self.y.row(0), self.z.row(0))
    }

    /// Hand the coordinate grids to `renderer` with the default style.
    pub fn render<R>(&self, renderer: &mut R) -> Result<()>
    where
        R: SurfaceRenderer + ?Sized,
    {
        self.render_styled(renderer, &RenderStyle::default())
    }

    /// Hand the coordinate grids to `renderer` with an explicit style.
    pub fn render_styled<R>(&self, renderer: &mut R, style: &RenderStyle) -> Result<()>
    where
        R: SurfaceRenderer + ?Sized,
    {
        renderer.render(&self.x, &self.y, &self.z, style)
    }
}
