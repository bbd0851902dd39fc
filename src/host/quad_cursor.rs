//! Intersection cursors of the structured quadrilateral host.
//!
//! Reference face numbering of the unit square:
//! - face 0: `x = 0` (x-min), outward normal `(-1, 0)`
//! - face 1: `x = 1` (x-max), outward normal `(1, 0)`
//! - face 2: `y = 0` (y-min), outward normal `(0, -1)`
//! - face 3: `y = 1` (y-max), outward normal `(0, 1)`
//!
//! A cursor visits faces `0..4` in order; face index 4 is the end position.
//! Leaf and level cursors share one implementation and differ only in the
//! policy marker, which keeps them distinct types.

use std::marker::PhantomData;

use super::element::QuadElement;
use super::structured::QuadLayout;
use super::HostIntersection;
use crate::geometry::AffineGeometry;

/// Number of intersections of a quadrilateral.
pub const QUAD_FACES: usize = 4;

/// `(origin, axis)` of each reference face as a segment in the unit square.
const REFERENCE_FACES: [([f64; 2], [f64; 2]); QUAD_FACES] = [
    ([0.0, 0.0], [0.0, 1.0]),
    ([1.0, 0.0], [0.0, 1.0]),
    ([0.0, 0.0], [1.0, 0.0]),
    ([0.0, 1.0], [1.0, 0.0]),
];

const UNIT_NORMALS: [[f64; 2]; QUAD_FACES] = [[-1.0, 0.0], [1.0, 0.0], [0.0, -1.0], [0.0, 1.0]];

/// Leaf iteration policy marker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Leaf;

/// Level iteration policy marker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Level;

/// Cursor over the four intersections of one quadrilateral.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadIntersectionCursor<P> {
    layout: QuadLayout,
    element: QuadElement,
    face: usize,
    policy: PhantomData<P>,
}

pub type LeafQuadIntersection = QuadIntersectionCursor<Leaf>;
pub type LevelQuadIntersection = QuadIntersectionCursor<Level>;

impl<P> QuadIntersectionCursor<P> {
    pub(crate) fn new(layout: QuadLayout, element: QuadElement, face: usize) -> Self {
        Self {
            layout,
            element,
            face,
            policy: PhantomData,
        }
    }

    /// Current reference face index (`QUAD_FACES` at the end position).
    #[inline]
    pub fn face(&self) -> usize {
        self.face
    }

    /// Whether the cursor has run past the last face.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.face >= QUAD_FACES
    }

    /// # Panics
    ///
    /// Panics when the cursor is at or past its end position.
    fn side(&self) -> usize {
        assert!(
            !self.is_end(),
            "intersection cursor of element {} queried past its end",
            self.element
        );
        self.face
    }

    fn neighbor_element(&self) -> Option<QuadElement> {
        self.layout.neighbor(self.element, self.side())
    }

    fn face_length(&self, face: usize) -> f64 {
        let h = self.layout.spacing(self.element.level());
        if face < 2 { h[1] } else { h[0] }
    }
}

impl<P: Copy + PartialEq> HostIntersection for QuadIntersectionCursor<P> {
    type Element = QuadElement;
    type LocalGeometry = AffineGeometry<1, 2>;
    type Geometry = AffineGeometry<1, 2>;
    type LocalCoordinate = [f64; 1];
    type WorldVector = [f64; 2];

    fn increment(&mut self) {
        self.face += 1;
    }

    fn inside(&self) -> QuadElement {
        self.element
    }

    /// # Panics
    ///
    /// Panics on a boundary intersection, where no outside element exists.
    fn outside(&self) -> QuadElement {
        match self.neighbor_element() {
            Some(e) => e,
            None => panic!(
                "outside() requested on boundary face {} of element {}",
                self.face, self.element
            ),
        }
    }

    fn boundary(&self) -> bool {
        self.neighbor_element().is_none()
    }

    fn neighbor(&self) -> bool {
        self.neighbor_element().is_some()
    }

    fn boundary_id(&self) -> i32 {
        if self.boundary() {
            self.layout.boundary_id(self.face)
        } else {
            0
        }
    }

    fn intersection_self_local(&self) -> AffineGeometry<1, 2> {
        let (origin, axis) = REFERENCE_FACES[self.side()];
        AffineGeometry::from_axes(origin, [axis])
    }

    fn intersection_neighbor_local(&self) -> AffineGeometry<1, 2> {
        let (origin, axis) = REFERENCE_FACES[self.number_in_neighbor()];
        AffineGeometry::from_axes(origin, [axis])
    }

    fn intersection_global(&self) -> AffineGeometry<1, 2> {
        let (origin, axis) = REFERENCE_FACES[self.side()];
        let h = self.layout.spacing(self.element.level());
        let x0 = self.layout.lower_left(self.element);
        AffineGeometry::from_axes(
            [x0[0] + origin[0] * h[0], x0[1] + origin[1] * h[1]],
            [[axis[0] * h[0], axis[1] * h[1]]],
        )
    }

    fn number_in_self(&self) -> usize {
        self.side()
    }

    fn number_in_neighbor(&self) -> usize {
        self.side() ^ 1
    }

    /// Unit outward normal scaled by the face length; constant along the face.
    fn outer_normal(&self, _local: &[f64; 1]) -> [f64; 2] {
        let face = self.side();
        let len = self.face_length(face);
        let [nx, ny] = UNIT_NORMALS[face];
        [nx * len, ny * len]
    }
}
