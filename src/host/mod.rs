//! Host grid interface.
//!
//! The identity grid does not store a mesh of its own. Everything it knows
//! comes from a *host* grid through the two traits in this module:
//!
//! - [`HostGrid`]: element enumeration, refinement levels and the begin/end
//!   intersection cursors of an element, once for the leaf policy and once
//!   for the level policy.
//! - [`HostIntersection`]: a cursor positioned on one intersection of one
//!   element, with the full topological/geometric query surface.
//!
//! [`structured::StructuredQuadGrid`] is a ready-made host; any other mesh
//! can be plugged in by implementing these traits. A shared reference to a
//! host is itself a host, so an identity grid can either own or borrow its
//! host.

pub mod element;
pub mod quad_cursor;
pub mod structured;

pub use element::QuadElement;
pub use quad_cursor::{LeafQuadIntersection, LevelQuadIntersection, QuadIntersectionCursor};
pub use structured::{BoundaryIds, StructuredGridOptions, StructuredQuadGrid};

#[cfg(test)]
mod tests;

use std::fmt::Debug;

use crate::geometry::{FieldVector, Geometry};

/// Native intersection cursor of a host grid.
///
/// Two cursors compare equal iff they denote the same position of the same
/// traversal; a traversal is exhausted when its cursor equals the matching
/// end cursor.
pub trait HostIntersection: Clone + PartialEq {
    /// Host element handle.
    type Element;
    /// Intersection geometry in an element's reference coordinates.
    type LocalGeometry: Geometry;
    /// Intersection geometry in world coordinates.
    type Geometry: Geometry<Local = Self::LocalCoordinate>;
    /// Coordinates on the intersection's reference element.
    type LocalCoordinate;
    /// World-space vector type of normals.
    type WorldVector: FieldVector;

    /// Step to the next intersection of the same element.
    fn increment(&mut self);

    /// The element the traversal started from.
    fn inside(&self) -> Self::Element;
    /// The neighbor across the intersection.
    fn outside(&self) -> Self::Element;

    /// Whether the intersection lies on the domain boundary.
    fn boundary(&self) -> bool;
    /// Whether a neighbor exists across the intersection.
    fn neighbor(&self) -> bool;
    /// Boundary identifier of the intersection.
    fn boundary_id(&self) -> i32;

    /// Intersection geometry in the inside element's reference coordinates.
    fn intersection_self_local(&self) -> Self::LocalGeometry;
    /// Intersection geometry in the outside element's reference coordinates.
    fn intersection_neighbor_local(&self) -> Self::LocalGeometry;
    /// Intersection geometry in world coordinates.
    fn intersection_global(&self) -> Self::Geometry;

    /// Local index of the intersection's face within the inside element.
    fn number_in_self(&self) -> usize;
    /// Local index of the intersection's face within the outside element.
    fn number_in_neighbor(&self) -> usize;

    /// An outward normal at `local` (length not necessarily 1).
    fn outer_normal(&self, local: &Self::LocalCoordinate) -> Self::WorldVector;
}

/// A host mesh providing elements and intersection cursors.
pub trait HostGrid {
    /// Host element handle.
    type Element: Clone + PartialEq + Debug;
    /// Cursor over the intersections of a leaf element.
    type LeafIntersection: HostIntersection<Element = Self::Element>;
    /// Cursor over the intersections of an element within its level.
    type LevelIntersection: HostIntersection<Element = Self::Element>;

    /// Topological dimension of the elements.
    fn dimension(&self) -> usize;
    /// Dimension of the world the grid is embedded in.
    fn dimension_world(&self) -> usize;
    /// Finest refinement level.
    fn max_level(&self) -> usize;
    /// Refinement level of `element`.
    fn level_of(&self, element: &Self::Element) -> usize;

    /// All elements of the leaf grid.
    fn leaf_elements<'a>(&'a self) -> Box<dyn Iterator<Item = Self::Element> + 'a>;
    /// All elements of refinement level `level` (empty above `max_level`).
    fn level_elements<'a>(&'a self, level: usize)
    -> Box<dyn Iterator<Item = Self::Element> + 'a>;

    /// First leaf intersection of `element`.
    fn ileaf_begin(&self, element: &Self::Element) -> Self::LeafIntersection;
    /// One past the last leaf intersection of `element`.
    fn ileaf_end(&self, element: &Self::Element) -> Self::LeafIntersection;
    /// First level intersection of `element`.
    fn ilevel_begin(&self, element: &Self::Element) -> Self::LevelIntersection;
    /// One past the last level intersection of `element`.
    fn ilevel_end(&self, element: &Self::Element) -> Self::LevelIntersection;
}

impl<H: HostGrid + ?Sized> HostGrid for &H {
    type Element = H::Element;
    type LeafIntersection = H::LeafIntersection;
    type LevelIntersection = H::LevelIntersection;

    #[inline]
    fn dimension(&self) -> usize {
        (**self).dimension()
    }
    #[inline]
    fn dimension_world(&self) -> usize {
        (**self).dimension_world()
    }
    #[inline]
    fn max_level(&self) -> usize {
        (**self).max_level()
    }
    #[inline]
    fn level_of(&self, element: &Self::Element) -> usize {
        (**self).level_of(element)
    }
    fn leaf_elements<'a>(&'a self) -> Box<dyn Iterator<Item = Self::Element> + 'a> {
        (**self).leaf_elements()
    }
    fn level_elements<'a>(
        &'a self,
        level: usize,
    ) -> Box<dyn Iterator<Item = Self::Element> + 'a> {
        (**self).level_elements(level)
    }
    #[inline]
    fn ileaf_begin(&self, element: &Self::Element) -> Self::LeafIntersection {
        (**self).ileaf_begin(element)
    }
    #[inline]
    fn ileaf_end(&self, element: &Self::Element) -> Self::LeafIntersection {
        (**self).ileaf_end(element)
    }
    #[inline]
    fn ilevel_begin(&self, element: &Self::Element) -> Self::LevelIntersection {
        (**self).ilevel_begin(element)
    }
    #[inline]
    fn ilevel_end(&self, element: &Self::Element) -> Self::LevelIntersection {
        (**self).ilevel_end(element)
    }
}
