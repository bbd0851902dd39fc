//! `QuadElement`: element handle of the structured quadrilateral host.
//!
//! An element is addressed by its refinement level and its integer position
//! `(i, j)` in the level's tensor-product layout. The handle is plain data:
//! it does not borrow the grid, so cursors can carry it by value.

use std::fmt;

/// Handle of one quadrilateral of a [`StructuredQuadGrid`](super::structured::StructuredQuadGrid).
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub struct QuadElement {
    level: usize,
    i: usize,
    j: usize,
}

impl QuadElement {
    /// Builds a handle without checking it against any grid; use
    /// [`StructuredQuadGrid::element`](super::structured::StructuredQuadGrid::element)
    /// for a validated one.
    #[inline]
    pub const fn new(level: usize, i: usize, j: usize) -> Self {
        Self { level, i, j }
    }

    /// Refinement level.
    #[inline]
    pub const fn level(self) -> usize {
        self.level
    }

    /// Column index (x direction).
    #[inline]
    pub const fn i(self) -> usize {
        self.i
    }

    /// Row index (y direction).
    #[inline]
    pub const fn j(self) -> usize {
        self.j
    }

    /// Index within the level, row-major.
    #[inline]
    pub const fn linear_index(self, nx: usize) -> usize {
        self.j * nx + self.i
    }
}

impl fmt::Debug for QuadElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("QuadElement")
            .field(&self.level)
            .field(&self.i)
            .field(&self.j)
            .finish()
    }
}

/// Prints as `level:(i,j)`.
impl fmt::Display for QuadElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:({},{})", self.level, self.i, self.j)
    }
}
