//! Affine cube mappings.
//!
//! An [`AffineGeometry<MYDIM, CDIM>`] maps the unit cube `[0, 1]^MYDIM` into
//! `R^CDIM` as `x -> origin + sum_k x_k * axes[k]`. Corner `i` is the image
//! of the reference corner whose `k`-th coordinate is bit `k` of `i`
//! (lexicographic cube numbering), so the corners of a segment are
//! `[v0, v1]` and those of a quadrilateral `[v0, v1, v2, v3]` with `v3`
//! opposite `v0`.

use super::{Geometry, GeometryType, dot, sub};
use crate::grid_error::GridError;

const EPS: f64 = 1e-12;

/// Affine image of the unit cube.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AffineGeometry<const MYDIM: usize, const CDIM: usize> {
    origin: [f64; CDIM],
    axes: [[f64; CDIM]; MYDIM],
}

impl<const MYDIM: usize, const CDIM: usize> AffineGeometry<MYDIM, CDIM> {
    /// Build directly from the image of the reference origin and the images of
    /// the reference unit vectors. No validation is performed.
    #[inline]
    pub const fn from_axes(origin: [f64; CDIM], axes: [[f64; CDIM]; MYDIM]) -> Self {
        Self { origin, axes }
    }

    /// Build from `2^MYDIM` corners in lexicographic cube order.
    ///
    /// Fails if the corner count is wrong, the corners are not the image of an
    /// affine map, or the mapping is degenerate.
    pub fn try_from_corners(corners: &[[f64; CDIM]]) -> Result<Self, GridError> {
        if MYDIM > CDIM {
            return Err(GridError::InvalidGeometry(format!(
                "cannot embed a {MYDIM}-dimensional cube into {CDIM} dimensions"
            )));
        }
        let expected = 1usize << MYDIM;
        if corners.len() != expected {
            return Err(GridError::InvalidGeometry(format!(
                "corner count mismatch: expected {expected}, got {}",
                corners.len()
            )));
        }
        let origin = corners[0];
        let axes: [[f64; CDIM]; MYDIM] = std::array::from_fn(|k| sub(corners[1 << k], origin));
        let geometry = Self { origin, axes };

        let scale = 1.0
            + axes
                .iter()
                .map(|a| dot(*a, *a).sqrt())
                .fold(0.0, f64::max);
        for (i, &corner) in corners.iter().enumerate() {
            let d = sub(geometry.corner_position(i), corner);
            if dot(d, d).sqrt() > 1e-9 * scale {
                return Err(GridError::InvalidGeometry(format!(
                    "corner {i} does not lie on an affine cube image"
                )));
            }
        }

        let axis_scale: f64 = axes.iter().map(|a| dot(*a, *a)).product();
        if determinant(geometry.gram()) <= EPS * axis_scale {
            return Err(GridError::InvalidGeometry("degenerate jacobian".into()));
        }
        Ok(geometry)
    }

    /// Image of the reference origin.
    #[inline]
    pub fn origin(&self) -> [f64; CDIM] {
        self.origin
    }

    /// Images of the reference unit vectors (the Jacobian columns).
    #[inline]
    pub fn axes(&self) -> &[[f64; CDIM]; MYDIM] {
        &self.axes
    }

    fn corner_position(&self, i: usize) -> [f64; CDIM] {
        let local: [f64; MYDIM] = std::array::from_fn(|k| ((i >> k) & 1) as f64);
        self.position(&local)
    }

    fn position(&self, local: &[f64; MYDIM]) -> [f64; CDIM] {
        let mut x = self.origin;
        for (axis, &t) in self.axes.iter().zip(local.iter()) {
            for (xc, ac) in x.iter_mut().zip(axis.iter()) {
                *xc += t * ac;
            }
        }
        x
    }

    fn gram(&self) -> [[f64; MYDIM]; MYDIM] {
        std::array::from_fn(|a| std::array::from_fn(|b| dot(self.axes[a], self.axes[b])))
    }
}

impl<const MYDIM: usize, const CDIM: usize> Geometry for AffineGeometry<MYDIM, CDIM> {
    type Local = [f64; MYDIM];
    type Global = [f64; CDIM];

    fn geometry_type(&self) -> GeometryType {
        GeometryType::cube(MYDIM)
    }

    fn affine(&self) -> bool {
        true
    }

    fn corners(&self) -> usize {
        1 << MYDIM
    }

    fn corner(&self, i: usize) -> [f64; CDIM] {
        self.corner_position(i)
    }

    fn global(&self, local: &[f64; MYDIM]) -> [f64; CDIM] {
        self.position(local)
    }

    fn local(&self, global: &[f64; CDIM]) -> [f64; MYDIM] {
        let d = sub(*global, self.origin);
        let rhs: [f64; MYDIM] = std::array::from_fn(|a| dot(self.axes[a], d));
        solve(self.gram(), rhs).unwrap_or([f64::NAN; MYDIM])
    }

    fn integration_element(&self, _local: &[f64; MYDIM]) -> f64 {
        determinant(self.gram()).max(0.0).sqrt()
    }

    fn volume(&self) -> f64 {
        self.integration_element(&[0.5; MYDIM])
    }

    fn center(&self) -> [f64; CDIM] {
        self.position(&[0.5; MYDIM])
    }
}

/// Determinant by Gaussian elimination with partial pivoting.
fn determinant<const N: usize>(mut m: [[f64; N]; N]) -> f64 {
    let mut det = 1.0;
    for col in 0..N {
        let pivot = (col..N)
            .max_by(|&a, &b| m[a][col].abs().total_cmp(&m[b][col].abs()))
            .unwrap_or(col);
        if m[pivot][col] == 0.0 {
            return 0.0;
        }
        if pivot != col {
            m.swap(pivot, col);
            det = -det;
        }
        det *= m[col][col];
        for row in col + 1..N {
            let f = m[row][col] / m[col][col];
            for k in col..N {
                m[row][k] -= f * m[col][k];
            }
        }
    }
    det
}

/// Solve `m x = rhs`; `None` if `m` is singular.
fn solve<const N: usize>(mut m: [[f64; N]; N], mut rhs: [f64; N]) -> Option<[f64; N]> {
    for col in 0..N {
        let pivot = (col..N).max_by(|&a, &b| m[a][col].abs().total_cmp(&m[b][col].abs()))?;
        if m[pivot][col].abs() <= EPS {
            return None;
        }
        m.swap(pivot, col);
        rhs.swap(pivot, col);
        for row in col + 1..N {
            let f = m[row][col] / m[col][col];
            for k in col..N {
                m[row][k] -= f * m[col][k];
            }
            rhs[row] -= f * rhs[col];
        }
    }
    let mut x = [0.0; N];
    for row in (0..N).rev() {
        let tail: f64 = (row + 1..N).map(|k| m[row][k] * x[k]).sum();
        x[row] = (rhs[row] - tail) / m[row][row];
    }
    Some(x)
}
