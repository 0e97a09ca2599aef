//! Dense row-major 2D grids.
//!
//! [`Grid`] is the explicit stand-in for 2D numeric arrays: every elementwise
//! operation the surface code needs is a method here, so mapping a parameter
//! grid through a parametrization is a plain `zip_with` rather than array
//! broadcasting.

use rayon::prelude::*;

/// A dense `rows × cols` grid stored in row-major order.
///
/// Row index `j` and column index `i` address element `data[j * cols + i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T = f64> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T> Grid<T> {
    /// Build a grid by evaluating `f(row, col)` at every position.
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut data = Vec::with_capacity(rows * cols);
        for j in 0..rows {
            for i in 0..cols {
                data.push(f(j, i));
            }
        }
        Self { rows, cols, data }
    }

    /// Build a grid by evaluating `f(row, col)` in parallel.
    ///
    /// Produces exactly the same grid as [`Grid::from_fn`].
    pub fn from_fn_par<F>(rows: usize, cols: usize, f: F) -> Self
    where
        T: Send,
        F: Fn(usize, usize) -> T + Sync + Send,
    {
        let data: Vec<T> = (0..rows * cols)
            .into_par_iter()
            .map(|k| f(k / cols, k % cols))
            .collect();
        Self { rows, cols, data }
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the grid has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Element at `(row, col)`, or `None` when out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.data.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// One row as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.rows()`.
    #[inline]
    pub fn row(&self, row: usize) -> &[T] {
        assert!(row < self.rows, "row {} out of bounds ({} rows)", row, self.rows);
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Iterate over rows as slices.
    pub fn row_iter(&self) -> impl Iterator<Item = &[T]> + '_ {
        // chunks() rejects a zero chunk size
        self.data.chunks(self.cols.max(1)).take(self.rows)
    }

    /// The underlying row-major storage.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterate over all elements in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Apply `f` to every element.
    pub fn map<U, F>(&self, f: F) -> Grid<U>
    where
        F: FnMut(&T) -> U,
    {
        Grid {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(f).collect(),
        }
    }

    /// Combine two grids of identical shape elementwise.
    ///
    /// # Panics
    ///
    /// Panics if the shapes differ.
    pub fn zip_with<U, V, F>(&self, other: &Grid<U>, mut f: F) -> Grid<V>
    where
        F: FnMut(&T, &U) -> V,
    {
        assert_eq!(self.shape(), other.shape(), "grid shapes differ");
        Grid {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| f(a, b))
                .collect(),
        }
    }
}

impl Grid<f64> {
    /// Sum of all elements, accumulated row by row.
    pub fn sum(&self) -> f64 {
        self.row_sums().iter().sum()
    }

    /// Sum of each row, in row order.
    pub fn row_sums(&self) -> Vec<f64> {
        self.row_iter().map(|row| row.iter().sum()).collect()
    }
}

impl<'a, T> IntoIterator for &'a Grid<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// `n` evenly spaced samples over `[start, end]`, both endpoints included.
///
/// Sample `k` is `start + (end - start) * k / (n - 1)`, so the last sample is
/// exactly `end`. `n == 1` yields `[start]` and `n == 0` yields an empty vector.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let span = end - start;
            let steps = (n - 1) as f64;
            (0..n)
                .map(|k| {
                    if k == n - 1 {
                        end
                    } else {
                        start + span * k as f64 / steps
                    }
                })
                .collect()
        }
    }
}

/// Expand two 1D sequences into matching 2D grids.
///
/// Returns `(U, V)` of shape `v.len() × u.len()` with `U[j][i] = u[i]` and
/// `V[j][i] = v[j]`: the row index walks `v`, the column index walks `u`.
pub fn meshgrid(u: &[f64], v: &[f64]) -> (Grid, Grid) {
    let uu = Grid::from_fn(v.len(), u.len(), |_, i| u[i]);
    let vv = Grid::from_fn(v.len(), u.len(), |j, _| v[j]);
    (uu, vv)
}
