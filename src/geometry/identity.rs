//! Geometry handle handed out by the identity grid.

use super::{Geometry, GeometryType};

/// The identity grid's geometry type: owns a host geometry and answers every
/// query by forwarding to it unchanged.
#[derive(Clone, Debug, PartialEq)]
pub struct IdentityGeometry<G> {
    host: G,
}

impl<G> IdentityGeometry<G> {
    /// Take ownership of a host geometry.
    #[inline]
    pub fn new(host: G) -> Self {
        Self { host }
    }

    /// The wrapped host geometry.
    #[inline]
    pub fn host(&self) -> &G {
        &self.host
    }

    #[inline]
    pub fn into_host(self) -> G {
        self.host
    }
}

impl<G: Geometry> Geometry for IdentityGeometry<G> {
    type Local = G::Local;
    type Global = G::Global;

    #[inline]
    fn geometry_type(&self) -> GeometryType {
        self.host.geometry_type()
    }
    #[inline]
    fn affine(&self) -> bool {
        self.host.affine()
    }
    #[inline]
    fn corners(&self) -> usize {
        self.host.corners()
    }
    #[inline]
    fn corner(&self, i: usize) -> G::Global {
        self.host.corner(i)
    }
    #[inline]
    fn global(&self, local: &G::Local) -> G::Global {
        self.host.global(local)
    }
    #[inline]
    fn local(&self, global: &G::Global) -> G::Local {
        self.host.local(global)
    }
    #[inline]
    fn integration_element(&self, local: &G::Local) -> f64 {
        self.host.integration_element(local)
    }
    #[inline]
    fn volume(&self) -> f64 {
        self.host.volume()
    }
    #[inline]
    fn center(&self) -> G::Global {
        self.host.center()
    }
}
