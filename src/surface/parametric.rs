//! Parametric surfaces `r(u, v)` with analytic first derivatives.

use nalgebra::{Point3, Vector3};

/// A smooth map from parameter space `(u, v)` to 3D points.
///
/// Implementors supply closed-form partial derivatives; the quadrature in
/// [`crate::algo::quadrature`] never differentiates numerically.
pub trait ParametricSurface {
    /// Surface point `r(u, v)`.
    fn position(&self, u: f64, v: f64) -> Point3<f64>;

    /// Partial derivative `∂r/∂u`.
    fn partial_u(&self, u: f64, v: f64) -> Vector3<f64>;

    /// Partial derivative `∂r/∂v`.
    fn partial_v(&self, u: f64, v: f64) -> Vector3<f64>;

    /// Local area scaling factor `|∂r/∂u × ∂r/∂v|`.
    #[inline]
    fn area_element(&self, u: f64, v: f64) -> f64 {
        self.partial_u(u, v).cross(&self.partial_v(u, v)).norm()
    }
}

/// The standard Möbius strip embedding.
///
/// A centre circle of radius `radius` is swept by a segment that turns by
/// half a revolution (`u / 2`) over one trip around the circle:
///
/// ```text
/// x(u, v) = (R + v cos(u/2)) cos u
/// y(u, v) = (R + v cos(u/2)) sin u
/// z(u, v) = v sin(u/2)
/// ```
///
/// # Example
///
/// ```
/// use mobius::surface::{MobiusParametrization, ParametricSurface};
///
/// let strip = MobiusParametrization::new(1.0);
/// let p = strip.position(0.0, 0.1);
/// assert!((p.x - 1.1).abs() < 1e-12);
/// assert!(p.z.abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MobiusParametrization {
    /// Radius of the centre circle.
    pub radius: f64,
}

impl MobiusParametrization {
    /// Create the parametrization for a centre circle of the given radius.
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl ParametricSurface for MobiusParametrization {
    #[inline]
    fn position(&self, u: f64, v: f64) -> Point3<f64> {
        let (sin_h, cos_h) = (u / 2.0).sin_cos();
        let (sin_u, cos_u) = u.sin_cos();
        let rho = self.radius + v * cos_h;
        Point3::new(rho * cos_u, rho * sin_u, v * sin_h)
    }

    #[inline]
    fn partial_u(&self, u: f64, v: f64) -> Vector3<f64> {
        let (sin_h, cos_h) = (u / 2.0).sin_cos();
        let (sin_u, cos_u) = u.sin_cos();
        let rho = self.radius + v * cos_h;
        let twist = v * sin_h / 2.0;
        Vector3::new(
            -rho * sin_u - twist * cos_u,
            rho * cos_u - twist * sin_u,
            v * cos_h / 2.0,
        )
    }

    #[inline]
    fn partial_v(&self, u: f64, _v: f64) -> Vector3<f64> {
        let (sin_h, cos_h) = (u / 2.0).sin_cos();
        let (sin_u, cos_u) = u.sin_cos();
        Vector3::new(cos_h * cos_u, cos_h * sin_u, sin_h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn central_difference<F: Fn(f64) -> Point3<f64>>(f: F, t: f64) -> Vector3<f64> {
        let h = 1e-6;
        (f(t + h) - f(t - h)) / (2.0 * h)
    }

    #[test]
    fn test_partials_match_finite_differences() {
        let strip = MobiusParametrization::new(1.3);

        for &(u, v) in &[(0.0, 0.1), (0.7, -0.15), (PI, 0.2), (5.1, 0.05)] {
            let du_fd = central_difference(|t| strip.position(t, v), u);
            let dv_fd = central_difference(|t| strip.position(u, t), v);

            assert!(
                (strip.partial_u(u, v) - du_fd).norm() < 1e-6,
                "r_u mismatch at ({}, {})",
                u,
                v
            );
            assert!(
                (strip.partial_v(u, v) - dv_fd).norm() < 1e-6,
                "r_v mismatch at ({}, {})",
                u,
                v
            );
        }
    }

    #[test]
    fn test_centre_circle() {
        let strip = MobiusParametrization::new(2.0);
        for k in 0..8 {
            let u = k as f64 * PI / 4.0;
            let p = strip.position(u, 0.0);
            assert!((p.coords.norm() - 2.0).abs() < 1e-12);
            assert!(p.z.abs() < 1e-12);
            // On the centre line the area element is exactly the radius.
            assert!((strip.area_element(u, 0.0) - 2.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_half_twist_identifies_seam() {
        // (0, v) and (2π, -v) are the same physical point.
        let strip = MobiusParametrization::new(1.0);
        let a = strip.position(0.0, 0.2);
        let b = strip.position(2.0 * PI, -0.2);
        assert!((a - b).norm() < 1e-12);
    }

    #[test]
    fn test_transverse_direction_is_unit() {
        let strip = MobiusParametrization::new(1.0);
        for k in 0..10 {
            let u = k as f64 * 0.6;
            assert!((strip.partial_v(u, 0.3).norm() - 1.0).abs() < 1e-12);
        }
    }
}
