//! Geometry interface consumed and exposed by the identity grid.
//!
//! Host grids hand out their own geometry objects; the identity grid wraps
//! them in [`IdentityGeometry`] so consumers only ever see the adapter's
//! geometry type. [`AffineGeometry`] is the concrete mapping used by the
//! bundled structured host.

pub mod affine;
pub mod geometry_type;
pub mod identity;

pub use affine::AffineGeometry;
pub use geometry_type::GeometryType;
pub use identity::IdentityGeometry;

use num_traits::{Float, NumCast, ToPrimitive};

/// Query interface of a geometry mapping from a reference element into some
/// coordinate space (element-local or world).
pub trait Geometry {
    /// Coordinates on the reference element.
    type Local;
    /// Coordinates in the space the reference element is mapped into.
    type Global;

    /// Reference element type.
    fn geometry_type(&self) -> GeometryType;
    /// Whether the mapping is affine (constant Jacobian).
    fn affine(&self) -> bool;
    /// Number of corners.
    fn corners(&self) -> usize;
    /// Position of corner `i`.
    fn corner(&self, i: usize) -> Self::Global;
    /// Map a reference coordinate to the target space.
    fn global(&self, local: &Self::Local) -> Self::Global;
    /// Map a target-space coordinate back to the reference element.
    fn local(&self, global: &Self::Global) -> Self::Local;
    /// `sqrt(det(J^T J))` at `local`.
    fn integration_element(&self, local: &Self::Local) -> f64;
    /// Measure of the mapped element (length, area, volume).
    fn volume(&self) -> f64;
    /// Image of the reference element's barycenter.
    fn center(&self) -> Self::Global;
}

/// Minimal vector arithmetic needed to post-process outer normals.
pub trait FieldVector: Clone {
    /// Euclidean norm.
    fn two_norm(&self) -> f64;
    /// Copy of `self` with every component multiplied by `factor`.
    fn scaled(&self, factor: f64) -> Self;
}

impl<T: Float, const N: usize> FieldVector for [T; N] {
    fn two_norm(&self) -> f64 {
        let sum = self.iter().fold(T::zero(), |acc, &x| acc + x * x);
        ToPrimitive::to_f64(&sum.sqrt()).unwrap_or(f64::NAN)
    }

    fn scaled(&self, factor: f64) -> Self {
        let factor: T = <T as NumCast>::from(factor).unwrap_or_else(T::nan);
        (*self).map(|x| x * factor)
    }
}

#[inline]
pub(crate) fn sub<const N: usize>(a: [f64; N], b: [f64; N]) -> [f64; N] {
    std::array::from_fn(|k| a[k] - b[k])
}

#[inline]
pub(crate) fn dot<const N: usize>(a: [f64; N], b: [f64; N]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_vector_norm_and_scale() {
        let v = [3.0f64, 4.0];
        assert!((v.two_norm() - 5.0).abs() < 1e-12);
        assert_eq!(v.scaled(0.5), [1.5, 2.0]);

        let w = [3.0f32, 4.0];
        assert!((w.two_norm() - 5.0).abs() < 1e-6);
        assert_eq!(w.scaled(2.0), [6.0f32, 8.0]);
    }

    #[test]
    fn helpers() {
        assert_eq!(sub([1.0, 2.0], [0.5, 0.5]), [0.5, 1.5]);
        assert_eq!(dot([1.0, 2.0, 3.0], [1.0, 1.0, 1.0]), 6.0);
    }
}
