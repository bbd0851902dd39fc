//! Leaf and level intersection iterators of the identity grid.
//!
//! [`IntersectionIterator`] wraps a host intersection cursor and re-exposes
//! its query surface through identity-grid types. Topological queries are
//! forwarded as-is. The three intersection geometries are converted into
//! [`IdentityGeometry`] on first request and cached until the cursor
//! advances.
//!
//! Leaf and level iteration share this one implementation:
//! [`LeafIntersectionIterator`] and [`LevelIntersectionIterator`] only pick
//! the host's cursor type.
//!
//! The adapter is a cursor, not a [`std::iter::Iterator`]: drive it with
//! [`advance`](IntersectionIterator::advance) until it
//! [`equals`](IntersectionIterator::equals) the end position, or use
//! [`for_each_intersection`].

use std::fmt;

use super::entity_pointer::EntityPointer;
use super::geometry_cache::{InvalidateCache, LazyGeometryCache};
use super::grid::IdentityGrid;
use crate::geometry::{FieldVector, Geometry, IdentityGeometry};
use crate::host::{HostGrid, HostIntersection};

/// Local intersection geometry handed out by an iterator over cursor `C`.
pub type LocalGeometry<C> = IdentityGeometry<<C as HostIntersection>::LocalGeometry>;
/// Global intersection geometry handed out by an iterator over cursor `C`.
pub type GlobalGeometry<C> = IdentityGeometry<<C as HostIntersection>::Geometry>;

/// Intersection iterator over the leaf grid.
pub type LeafIntersectionIterator<'g, H> =
    IntersectionIterator<'g, H, <H as HostGrid>::LeafIntersection>;
/// Intersection iterator within one refinement level.
pub type LevelIntersectionIterator<'g, H> =
    IntersectionIterator<'g, H, <H as HostGrid>::LevelIntersection>;

/// Identity-grid intersection iterator over host cursor `C`.
pub struct IntersectionIterator<'g, H, C>
where
    H: HostGrid,
    C: HostIntersection<Element = H::Element>,
{
    grid: &'g IdentityGrid<H>,
    host: C,
    cache: LazyGeometryCache<LocalGeometry<C>, GlobalGeometry<C>>,
    outer_normal: Option<C::WorldVector>,
}

/// Clears the geometry cache when dropped, so advancing releases the slots
/// even if the host cursor panics while stepping.
struct ReleaseOnDrop<'a, L, G>(&'a mut LazyGeometryCache<L, G>);

impl<L, G> Drop for ReleaseOnDrop<'_, L, G> {
    fn drop(&mut self) {
        self.0.invalidate_cache();
    }
}

impl<'g, H, C> IntersectionIterator<'g, H, C>
where
    H: HostGrid,
    C: HostIntersection<Element = H::Element>,
{
    /// Wrap `host` positioned on an intersection of `grid`. All geometry
    /// slots start empty.
    pub fn new(grid: &'g IdentityGrid<H>, host: C) -> Self {
        Self {
            grid,
            host,
            cache: LazyGeometryCache::new(),
            outer_normal: None,
        }
    }

    /// The grid this iterator belongs to.
    #[inline]
    pub fn grid(&self) -> &'g IdentityGrid<H> {
        self.grid
    }

    /// The wrapped host cursor.
    #[inline]
    pub fn host(&self) -> &C {
        &self.host
    }

    /// Same position as `other`. Cached geometry is not compared.
    #[inline]
    pub fn equals(&self, other: &Self) -> bool {
        self.host == other.host
    }

    /// Step to the next intersection and drop every cached geometry.
    pub fn advance(&mut self) {
        let _release = ReleaseOnDrop(&mut self.cache);
        self.host.increment();
        log::trace!("intersection iterator advanced");
    }

    /// The element the traversal started from.
    #[inline]
    pub fn inside(&self) -> EntityPointer<'g, H> {
        EntityPointer::wrap(self.grid, self.host.inside())
    }

    /// The neighbor across the intersection. Behavior on boundary
    /// intersections is whatever the host cursor does.
    #[inline]
    pub fn outside(&self) -> EntityPointer<'g, H> {
        EntityPointer::wrap(self.grid, self.host.outside())
    }

    #[inline]
    pub fn boundary(&self) -> bool {
        self.host.boundary()
    }

    #[inline]
    pub fn neighbor(&self) -> bool {
        self.host.neighbor()
    }

    #[inline]
    pub fn boundary_id(&self) -> i32 {
        self.host.boundary_id()
    }

    /// Intersection in the inside element's reference coordinates.
    pub fn intersection_self_local(&self) -> &LocalGeometry<C> {
        self.cache
            .self_local_or_build(|| IdentityGeometry::new(self.host.intersection_self_local()))
    }

    /// Intersection in the outside element's reference coordinates.
    pub fn intersection_neighbor_local(&self) -> &LocalGeometry<C> {
        self.cache.neighbor_local_or_build(|| {
            IdentityGeometry::new(self.host.intersection_neighbor_local())
        })
    }

    /// Intersection in world coordinates.
    pub fn intersection_global(&self) -> &GlobalGeometry<C> {
        self.cache
            .global_or_build(|| IdentityGeometry::new(self.host.intersection_global()))
    }

    /// Local face index of the intersection in the inside element.
    #[inline]
    pub fn number_in_self(&self) -> usize {
        self.host.number_in_self()
    }

    /// Local face index of the intersection in the outside element; only
    /// meaningful when [`neighbor`](Self::neighbor) is true.
    #[inline]
    pub fn number_in_neighbor(&self) -> usize {
        self.host.number_in_neighbor()
    }

    /// The host's outer normal at `local`, stored in this iterator's scratch
    /// slot. Each call overwrites the slot.
    pub fn outer_normal(&mut self, local: &C::LocalCoordinate) -> &C::WorldVector {
        self.outer_normal.insert(self.host.outer_normal(local))
    }

    /// Content of the scratch slot written by the last
    /// [`outer_normal`](Self::outer_normal) call, if any.
    #[inline]
    pub fn last_outer_normal(&self) -> Option<&C::WorldVector> {
        self.outer_normal.as_ref()
    }

    /// Outer normal of unit length.
    pub fn unit_outer_normal(&self, local: &C::LocalCoordinate) -> C::WorldVector {
        let normal = self.host.outer_normal(local);
        let norm = normal.two_norm();
        normal.scaled(norm.recip())
    }

    /// Unit outer normal scaled by the integration element of the global
    /// intersection geometry at `local`.
    pub fn integration_outer_normal(&self, local: &C::LocalCoordinate) -> C::WorldVector {
        let scale = self.intersection_global().integration_element(local);
        self.unit_outer_normal(local).scaled(scale)
    }

    /// Number of geometry slots currently populated.
    #[inline]
    pub fn cached_geometry_count(&self) -> usize {
        self.cache.live_slots()
    }
}

impl<H, C> PartialEq for IntersectionIterator<'_, H, C>
where
    H: HostGrid,
    C: HostIntersection<Element = H::Element>,
{
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

/// Clones the position; the clone starts with an empty geometry cache and an
/// empty outer-normal slot.
impl<H, C> Clone for IntersectionIterator<'_, H, C>
where
    H: HostGrid,
    C: HostIntersection<Element = H::Element>,
{
    fn clone(&self) -> Self {
        Self {
            grid: self.grid,
            host: self.host.clone(),
            cache: LazyGeometryCache::new(),
            outer_normal: None,
        }
    }
}

impl<H, C> InvalidateCache for IntersectionIterator<'_, H, C>
where
    H: HostGrid,
    C: HostIntersection<Element = H::Element>,
{
    fn invalidate_cache(&mut self) {
        self.cache.clear();
    }
}

impl<H, C> fmt::Debug for IntersectionIterator<'_, H, C>
where
    H: HostGrid,
    C: HostIntersection<Element = H::Element> + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntersectionIterator")
            .field("host", &self.host)
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

/// Run `f` on every position from `begin` up to (excluding) `end`.
pub fn for_each_intersection<'g, H, C, F>(
    mut begin: IntersectionIterator<'g, H, C>,
    end: &IntersectionIterator<'g, H, C>,
    mut f: F,
) where
    H: HostGrid,
    C: HostIntersection<Element = H::Element>,
    F: FnMut(&mut IntersectionIterator<'g, H, C>),
{
    while !begin.equals(end) {
        f(&mut begin);
        begin.advance();
    }
}
