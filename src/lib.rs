#![cfg_attr(docsrs, feature(doc_cfg))]
//! # identity-grid
//!
//! identity-grid wraps an existing ("host") mesh as an identity grid and
//! lets generic mesh code walk the element-to-element interfaces
//! (intersections) of that grid through the identity grid's own handle types.
//!
//! ## Features
//! - One generic intersection iterator, instantiated for leaf traversal
//!   (finest active elements) and level traversal (one refinement level)
//! - Lazily built, per-intersection cached geometries (self-local,
//!   neighbor-local, global) that are released whenever the iterator advances
//! - Host-agnostic: any mesh implementing [`host::HostGrid`] and
//!   [`host::HostIntersection`] can be wrapped; a structured quadrilateral
//!   host ships with the crate
//!
//! ## Usage
//!
//! ```rust
//! use identity_grid::prelude::*;
//!
//! let host = StructuredQuadGrid::try_new(&StructuredGridOptions {
//!     cells: [2, 2],
//!     ..Default::default()
//! })?;
//! let grid = IdentityGrid::new(&host);
//!
//! let mut boundary = 0;
//! for element in grid.leaf_elements() {
//!     let end = grid.leaf_intersection_end(&element);
//!     for_each_intersection(grid.leaf_intersection_begin(&element), &end, |it| {
//!         if it.boundary() {
//!             boundary += 1;
//!         }
//!     });
//! }
//! assert_eq!(boundary, 8);
//! # Ok::<(), identity_grid::grid_error::GridError>(())
//! ```
//!
//! ## Logging
//! The crate logs through the `log` facade (`debug` for grid construction,
//! `trace` for cursor steps and geometry cache fills) and never installs a
//! logger itself.

pub mod debug_invariants;
pub mod geometry;
pub mod grid_error;
pub mod host;
pub mod identity;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::geometry::{
        AffineGeometry, FieldVector, Geometry, GeometryType, IdentityGeometry,
    };
    pub use crate::grid_error::GridError;
    pub use crate::host::{
        BoundaryIds, HostGrid, HostIntersection, QuadElement, StructuredGridOptions,
        StructuredQuadGrid,
    };
    pub use crate::identity::{
        EntityPointer, GeometryKind, IdentityGrid, IntersectionIterator, InvalidateCache,
        LazyGeometryCache, LeafIntersectionIterator, LevelIntersectionIterator,
        for_each_intersection,
    };
}
