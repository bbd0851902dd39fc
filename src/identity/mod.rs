//! The identity grid and its intersection iterators.
//!
//! - [`IdentityGrid`]: parent grid, owns or borrows the host
//! - [`EntityPointer`]: identity-grid handle of a host element
//! - [`IntersectionIterator`]: generic intersection adapter, used through
//!   [`LeafIntersectionIterator`] and [`LevelIntersectionIterator`]
//! - [`LazyGeometryCache`]: the per-intersection geometry memo

pub mod entity_pointer;
pub mod geometry_cache;
pub mod grid;
pub mod intersection_iterator;

pub use entity_pointer::EntityPointer;
pub use geometry_cache::{GeometryKind, InvalidateCache, LazyGeometryCache};
pub use grid::IdentityGrid;
pub use intersection_iterator::{
    GlobalGeometry, IntersectionIterator, LeafIntersectionIterator, LevelIntersectionIterator,
    LocalGeometry, for_each_intersection,
};

#[cfg(test)]
mod tests;
