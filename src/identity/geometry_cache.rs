//! Lazily built intersection geometries.
//!
//! [`LazyGeometryCache`] holds the three derived geometries of one
//! intersection (self-local, neighbor-local, global) in independent
//! write-once slots. Reads go through `&self` and fill a slot on first use;
//! invalidation needs `&mut self`, so no reference handed out by a read can
//! outlive the next [`clear`](LazyGeometryCache::clear).

use std::fmt;

use once_cell::unsync::OnceCell;

/// Anything that caches derived geometry should implement this.
pub trait InvalidateCache {
    /// Invalidate *all* internal caches so future queries recompute correctly.
    fn invalidate_cache(&mut self);
}

impl<T: InvalidateCache + ?Sized> InvalidateCache for Box<T> {
    #[inline]
    fn invalidate_cache(&mut self) {
        (**self).invalidate_cache();
    }
}

/// Slot selector of a [`LazyGeometryCache`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    /// Intersection in the inside element's reference coordinates.
    SelfLocal,
    /// Intersection in the outside element's reference coordinates.
    NeighborLocal,
    /// Intersection in world coordinates.
    Global,
}

impl GeometryKind {
    pub const ALL: [GeometryKind; 3] = [
        GeometryKind::SelfLocal,
        GeometryKind::NeighborLocal,
        GeometryKind::Global,
    ];
}

/// Three independently lazy geometry slots; `L` is the local geometry type,
/// `G` the global one.
pub struct LazyGeometryCache<L, G> {
    self_local: OnceCell<L>,
    neighbor_local: OnceCell<L>,
    global: OnceCell<G>,
}

impl<L, G> Default for LazyGeometryCache<L, G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L, G> LazyGeometryCache<L, G> {
    /// All slots empty.
    pub fn new() -> Self {
        Self {
            self_local: OnceCell::new(),
            neighbor_local: OnceCell::new(),
            global: OnceCell::new(),
        }
    }

    /// Cached self-local geometry, built by `build` if the slot is empty.
    #[inline]
    pub fn self_local_or_build(&self, build: impl FnOnce() -> L) -> &L {
        fill(&self.self_local, GeometryKind::SelfLocal, build)
    }

    /// Cached neighbor-local geometry, built by `build` if the slot is empty.
    #[inline]
    pub fn neighbor_local_or_build(&self, build: impl FnOnce() -> L) -> &L {
        fill(&self.neighbor_local, GeometryKind::NeighborLocal, build)
    }

    /// Cached global geometry, built by `build` if the slot is empty.
    #[inline]
    pub fn global_or_build(&self, build: impl FnOnce() -> G) -> &G {
        fill(&self.global, GeometryKind::Global, build)
    }

    /// Fallible [`self_local_or_build`](Self::self_local_or_build); the slot
    /// stays empty if `build` fails.
    #[inline]
    pub fn try_self_local_or_build<E>(
        &self,
        build: impl FnOnce() -> Result<L, E>,
    ) -> Result<&L, E> {
        try_fill(&self.self_local, GeometryKind::SelfLocal, build)
    }

    /// Fallible [`neighbor_local_or_build`](Self::neighbor_local_or_build).
    #[inline]
    pub fn try_neighbor_local_or_build<E>(
        &self,
        build: impl FnOnce() -> Result<L, E>,
    ) -> Result<&L, E> {
        try_fill(&self.neighbor_local, GeometryKind::NeighborLocal, build)
    }

    /// Fallible [`global_or_build`](Self::global_or_build).
    #[inline]
    pub fn try_global_or_build<E>(&self, build: impl FnOnce() -> Result<G, E>) -> Result<&G, E> {
        try_fill(&self.global, GeometryKind::Global, build)
    }

    /// Whether the slot `kind` currently holds a geometry.
    pub fn is_cached(&self, kind: GeometryKind) -> bool {
        match kind {
            GeometryKind::SelfLocal => self.self_local.get().is_some(),
            GeometryKind::NeighborLocal => self.neighbor_local.get().is_some(),
            GeometryKind::Global => self.global.get().is_some(),
        }
    }

    /// Number of populated slots.
    pub fn live_slots(&self) -> usize {
        GeometryKind::ALL
            .iter()
            .filter(|&&kind| self.is_cached(kind))
            .count()
    }

    /// Drop every cached geometry. Clearing empty slots is a no-op.
    pub fn clear(&mut self) {
        self.self_local.take();
        self.neighbor_local.take();
        self.global.take();
    }
}

fn fill<T>(slot: &OnceCell<T>, kind: GeometryKind, build: impl FnOnce() -> T) -> &T {
    slot.get_or_init(|| {
        log::trace!("geometry cache: building {kind:?}");
        build()
    })
}

fn try_fill<T, E>(
    slot: &OnceCell<T>,
    kind: GeometryKind,
    build: impl FnOnce() -> Result<T, E>,
) -> Result<&T, E> {
    slot.get_or_try_init(|| {
        log::trace!("geometry cache: building {kind:?}");
        build()
    })
}

impl<L, G> InvalidateCache for LazyGeometryCache<L, G> {
    #[inline]
    fn invalidate_cache(&mut self) {
        self.clear();
    }
}

impl<L, G> fmt::Debug for LazyGeometryCache<L, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyGeometryCache")
            .field("self_local", &self.is_cached(GeometryKind::SelfLocal))
            .field("neighbor_local", &self.is_cached(GeometryKind::NeighborLocal))
            .field("global", &self.is_cached(GeometryKind::Global))
            .finish()
    }
}
