//! Entity pointers of the identity grid.

use std::fmt;

use super::grid::IdentityGrid;
use crate::host::HostGrid;

/// The identity grid's handle to a codimension-0 entity: a host element plus
/// the grid it belongs to.
pub struct EntityPointer<'g, H: HostGrid> {
    grid: &'g IdentityGrid<H>,
    host: H::Element,
}

impl<'g, H: HostGrid> EntityPointer<'g, H> {
    /// Wrap a host element handle. Nothing is cached or validated.
    #[inline]
    pub fn wrap(grid: &'g IdentityGrid<H>, host: H::Element) -> Self {
        Self { grid, host }
    }

    /// The grid this entity belongs to.
    #[inline]
    pub fn grid(&self) -> &'g IdentityGrid<H> {
        self.grid
    }

    /// The wrapped host element.
    #[inline]
    pub fn host_element(&self) -> &H::Element {
        &self.host
    }

    #[inline]
    pub fn into_host_element(self) -> H::Element {
        self.host
    }

    /// Refinement level, as reported by the host.
    #[inline]
    pub fn level(&self) -> usize {
        self.grid.host().level_of(&self.host)
    }
}

impl<H: HostGrid> Clone for EntityPointer<'_, H> {
    fn clone(&self) -> Self {
        Self {
            grid: self.grid,
            host: self.host.clone(),
        }
    }
}

/// Equal iff the host elements are equal.
impl<H: HostGrid> PartialEq for EntityPointer<'_, H> {
    fn eq(&self, other: &Self) -> bool {
        self.host == other.host
    }
}

impl<H: HostGrid> fmt::Debug for EntityPointer<'_, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EntityPointer").field(&self.host).finish()
    }
}
