//! Discrete arc length of sampled curves.

use nalgebra::Point3;

/// Length of the polyline through `points`, in order.
///
/// Sums the Euclidean distance between consecutive points. Returns `0.0` for
/// fewer than two points.
///
/// # Example
///
/// ```
/// use mobius::algo::arc_length::polyline_length;
/// use nalgebra::Point3;
///
/// let pts = [
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(3.0, 4.0, 0.0),
///     Point3::new(3.0, 4.0, 12.0),
/// ];
/// assert_eq!(polyline_length(pts), 17.0);
/// ```
pub fn polyline_length<I>(points: I) -> f64
where
    I: IntoIterator<Item = Point3<f64>>,
{
    let mut iter = points.into_iter();
    let Some(mut prev) = iter.next() else {
        return 0.0;
    };

    let mut length = 0.0;
    for p in iter {
        length += (p - prev).norm();
        prev = p;
    }
    length
}

/// Polyline through the columns of one row of three coordinate rows.
///
/// `xs`, `ys` and `zs` are matching slices (a single grid row each); the
/// shortest one bounds the number of points.
pub fn row_points<'a>(
    xs: &'a [f64],
    ys: &'a [f64],
    zs: &'a [f64],
) -> impl Iterator<Item = Point3<f64>> + 'a {
    xs.iter()
        .zip(ys)
        .zip(zs)
        .map(|((&x, &y), &z)| Point3::new(x, y, z))
}
