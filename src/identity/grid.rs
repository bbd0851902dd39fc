//! The identity grid: a grid that is its host.

use super::entity_pointer::EntityPointer;
use super::intersection_iterator::{
    IntersectionIterator, LeafIntersectionIterator, LevelIntersectionIterator,
};
use crate::grid_error::GridError;
use crate::host::HostGrid;

/// Identity transformation of a host grid.
///
/// Every element, level and intersection of the identity grid is the
/// corresponding host object; the identity grid only re-exposes them through
/// its own handle types. `H` may be an owned host or `&Host`.
#[derive(Clone, Debug)]
pub struct IdentityGrid<H> {
    host: H,
}

impl<H: HostGrid> IdentityGrid<H> {
    pub fn new(host: H) -> Self {
        log::debug!(
            "IdentityGrid: wrapping {}D host in {}D world, max level {}",
            host.dimension(),
            host.dimension_world(),
            host.max_level()
        );
        Self { host }
    }

    /// The wrapped host grid.
    #[inline]
    pub fn host(&self) -> &H {
        &self.host
    }

    #[inline]
    pub fn into_host(self) -> H {
        self.host
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.host.dimension()
    }

    #[inline]
    pub fn dimension_world(&self) -> usize {
        self.host.dimension_world()
    }

    #[inline]
    pub fn max_level(&self) -> usize {
        self.host.max_level()
    }

    /// Entity pointer over a host element.
    #[inline]
    pub fn entity_pointer(&self, element: H::Element) -> EntityPointer<'_, H> {
        EntityPointer::wrap(self, element)
    }

    /// All leaf entities.
    pub fn leaf_elements(&self) -> impl Iterator<Item = EntityPointer<'_, H>> + '_ {
        self.host
            .leaf_elements()
            .map(move |e| EntityPointer::wrap(self, e))
    }

    /// All entities of `level`.
    pub fn level_elements(
        &self,
        level: usize,
    ) -> Result<impl Iterator<Item = EntityPointer<'_, H>> + '_, GridError> {
        let max_level = self.host.max_level();
        if level > max_level {
            return Err(GridError::LevelOutOfRange { level, max_level });
        }
        Ok(self
            .host
            .level_elements(level)
            .map(move |e| EntityPointer::wrap(self, e)))
    }

    /// First leaf intersection of `element`.
    pub fn leaf_intersection_begin(
        &self,
        element: &EntityPointer<'_, H>,
    ) -> LeafIntersectionIterator<'_, H> {
        IntersectionIterator::new(self, self.host.ileaf_begin(element.host_element()))
    }

    /// End position of the leaf intersections of `element`.
    pub fn leaf_intersection_end(
        &self,
        element: &EntityPointer<'_, H>,
    ) -> LeafIntersectionIterator<'_, H> {
        IntersectionIterator::new(self, self.host.ileaf_end(element.host_element()))
    }

    /// First level intersection of `element`.
    pub fn level_intersection_begin(
        &self,
        element: &EntityPointer<'_, H>,
    ) -> LevelIntersectionIterator<'_, H> {
        IntersectionIterator::new(self, self.host.ilevel_begin(element.host_element()))
    }

    /// End position of the level intersections of `element`.
    pub fn level_intersection_end(
        &self,
        element: &EntityPointer<'_, H>,
    ) -> LevelIntersectionIterator<'_, H> {
        IntersectionIterator::new(self, self.host.ilevel_end(element.host_element()))
    }
}
