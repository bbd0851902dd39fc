//! Structured quadrilateral host grid.
//!
//! A tensor-product mesh of `cells[0] x cells[1]` coarse quadrilaterals on the
//! axis-aligned box `[origin, origin + extent]`, globally refined `levels`
//! times. Level `l` holds `cells * 2^l` elements per axis and the leaf grid is
//! the finest level. Domain sides carry configurable boundary ids.

use serde::{Deserialize, Serialize};

use super::element::QuadElement;
use super::quad_cursor::{LeafQuadIntersection, LevelQuadIntersection, QUAD_FACES};
use super::HostGrid;
use crate::debug_invariants::DebugInvariants;
use crate::geometry::AffineGeometry;
use crate::grid_error::GridError;

/// Boundary ids of the four domain sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundaryIds {
    pub x_min: i32,
    pub x_max: i32,
    pub y_min: i32,
    pub y_max: i32,
}

impl Default for BoundaryIds {
    fn default() -> Self {
        Self {
            x_min: 1,
            x_max: 2,
            y_min: 3,
            y_max: 4,
        }
    }
}

impl BoundaryIds {
    /// Ids indexed by reference face number (x-min, x-max, y-min, y-max).
    #[inline]
    pub fn by_face(self) -> [i32; QUAD_FACES] {
        [self.x_min, self.x_max, self.y_min, self.y_max]
    }
}

/// Configuration of a [`StructuredQuadGrid`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StructuredGridOptions {
    /// Lower-left corner of the domain.
    pub origin: [f64; 2],
    /// Side lengths of the domain.
    pub extent: [f64; 2],
    /// Coarse (level 0) element counts per axis.
    pub cells: [usize; 2],
    /// Number of global refinements applied on construction.
    pub levels: usize,
    pub boundary_ids: BoundaryIds,
}

impl Default for StructuredGridOptions {
    fn default() -> Self {
        Self {
            origin: [0.0, 0.0],
            extent: [1.0, 1.0],
            cells: [1, 1],
            levels: 0,
            boundary_ids: BoundaryIds::default(),
        }
    }
}

/// Plain-data description of the mesh, copied into every cursor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadLayout {
    origin: [f64; 2],
    extent: [f64; 2],
    cells: [usize; 2],
    max_level: usize,
    boundary_ids: [i32; QUAD_FACES],
}

impl QuadLayout {
    #[inline]
    pub fn max_level(&self) -> usize {
        self.max_level
    }

    /// Boundary id of reference face `face`.
    #[inline]
    pub fn boundary_id(&self, face: usize) -> i32 {
        self.boundary_ids[face]
    }

    /// Element counts per axis on `level` (`level <= max_level`).
    #[inline]
    pub fn counts(&self, level: usize) -> [usize; 2] {
        [self.cells[0] << level, self.cells[1] << level]
    }

    /// Element side lengths on `level`.
    #[inline]
    pub fn spacing(&self, level: usize) -> [f64; 2] {
        let [nx, ny] = self.counts(level);
        [self.extent[0] / nx as f64, self.extent[1] / ny as f64]
    }

    /// Lower-left corner of `element`.
    #[inline]
    pub fn lower_left(&self, element: QuadElement) -> [f64; 2] {
        let h = self.spacing(element.level());
        [
            self.origin[0] + element.i() as f64 * h[0],
            self.origin[1] + element.j() as f64 * h[1],
        ]
    }

    /// Whether `element` addresses an element of this layout.
    pub fn contains(&self, element: QuadElement) -> bool {
        if element.level() > self.max_level {
            return false;
        }
        let [nx, ny] = self.counts(element.level());
        element.i() < nx && element.j() < ny
    }

    /// Same-level neighbor of `element` across reference face `face`.
    pub fn neighbor(&self, element: QuadElement, face: usize) -> Option<QuadElement> {
        let [nx, ny] = self.counts(element.level());
        let (i, j) = (element.i(), element.j());
        let (ni, nj) = match face {
            0 => (i.checked_sub(1)?, j),
            1 => (i + 1, j),
            2 => (i, j.checked_sub(1)?),
            3 => (i, j + 1),
            _ => return None,
        };
        (ni < nx && nj < ny).then(|| QuadElement::new(element.level(), ni, nj))
    }
}

/// `cells * 2^level`, or `None` on overflow.
fn level_count(cells: usize, level: usize) -> Option<usize> {
    let shift = u32::try_from(level).ok()?;
    1usize.checked_shl(shift).and_then(|f| cells.checked_mul(f))
}

fn validate_layout(layout: &QuadLayout) -> Result<(), GridError> {
    for axis in 0..2 {
        if layout.cells[axis] == 0 {
            return Err(GridError::InvalidLayout(format!(
                "axis {axis} has zero cells"
            )));
        }
        if level_count(layout.cells[axis], layout.max_level).is_none() {
            return Err(GridError::InvalidLayout(format!(
                "axis {axis}: {} cells refined {} times overflows",
                layout.cells[axis], layout.max_level
            )));
        }
        if !layout.origin[axis].is_finite() {
            return Err(GridError::InvalidLayout(format!(
                "axis {axis}: origin {} is not finite",
                layout.origin[axis]
            )));
        }
        if !(layout.extent[axis].is_finite() && layout.extent[axis] > 0.0) {
            return Err(GridError::InvalidLayout(format!(
                "axis {axis}: extent {} must be positive and finite",
                layout.extent[axis]
            )));
        }
    }
    for (face, &id) in layout.boundary_ids.iter().enumerate() {
        if id == 0 {
            return Err(GridError::InvalidLayout(format!(
                "boundary id of face {face} is 0, which is reserved for interior intersections"
            )));
        }
        if layout.boundary_ids[..face].contains(&id) {
            return Err(GridError::InvalidLayout(format!(
                "boundary id {id} is used by more than one face"
            )));
        }
    }
    Ok(())
}

/// Uniformly refined structured quadrilateral mesh in 2D.
#[derive(Clone, Debug, PartialEq)]
pub struct StructuredQuadGrid {
    layout: QuadLayout,
}

impl StructuredQuadGrid {
    /// Build and validate a grid from `options`.
    pub fn try_new(options: &StructuredGridOptions) -> Result<Self, GridError> {
        let layout = QuadLayout {
            origin: options.origin,
            extent: options.extent,
            cells: options.cells,
            max_level: options.levels,
            boundary_ids: options.boundary_ids.by_face(),
        };
        validate_layout(&layout)?;
        log::debug!(
            "StructuredQuadGrid: {}x{} coarse cells, {} levels, extent {:?}",
            layout.cells[0],
            layout.cells[1],
            layout.max_level + 1,
            layout.extent
        );
        Ok(Self { layout })
    }

    #[inline]
    pub fn layout(&self) -> &QuadLayout {
        &self.layout
    }

    /// Element counts per axis on `level`.
    pub fn counts(&self, level: usize) -> Result<[usize; 2], GridError> {
        self.check_level(level)?;
        Ok(self.layout.counts(level))
    }

    /// Validated handle of element `(i, j)` on `level`.
    pub fn element(&self, level: usize, i: usize, j: usize) -> Result<QuadElement, GridError> {
        let [nx, ny] = self.counts(level)?;
        if i >= nx || j >= ny {
            return Err(GridError::ElementOutOfRange {
                level,
                i,
                j,
                nx,
                ny,
            });
        }
        Ok(QuadElement::new(level, i, j))
    }

    /// World geometry of `element`.
    pub fn element_geometry(&self, element: QuadElement) -> AffineGeometry<2, 2> {
        let h = self.layout.spacing(element.level());
        AffineGeometry::from_axes(self.layout.lower_left(element), [[h[0], 0.0], [0.0, h[1]]])
    }

    /// Add `refinements` levels of uniform refinement.
    pub fn global_refine(&mut self, refinements: usize) -> Result<(), GridError> {
        let max_level = self
            .layout
            .max_level
            .checked_add(refinements)
            .ok_or_else(|| GridError::InvalidLayout("refinement level overflows".into()))?;
        let mut refined = self.layout;
        refined.max_level = max_level;
        validate_layout(&refined)?;
        self.layout = refined;
        self.debug_assert_invariants();
        log::debug!("StructuredQuadGrid: refined to max level {max_level}");
        Ok(())
    }

    fn check_level(&self, level: usize) -> Result<(), GridError> {
        if level > self.layout.max_level {
            return Err(GridError::LevelOutOfRange {
                level,
                max_level: self.layout.max_level,
            });
        }
        Ok(())
    }
}

impl DebugInvariants for StructuredQuadGrid {
    fn validate_invariants(&self) -> Result<(), GridError> {
        validate_layout(&self.layout)
    }
}

impl HostGrid for StructuredQuadGrid {
    type Element = QuadElement;
    type LeafIntersection = LeafQuadIntersection;
    type LevelIntersection = LevelQuadIntersection;

    fn dimension(&self) -> usize {
        2
    }

    fn dimension_world(&self) -> usize {
        2
    }

    fn max_level(&self) -> usize {
        self.layout.max_level
    }

    fn level_of(&self, element: &QuadElement) -> usize {
        element.level()
    }

    fn leaf_elements<'a>(&'a self) -> Box<dyn Iterator<Item = QuadElement> + 'a> {
        self.level_elements(self.layout.max_level)
    }

    fn level_elements<'a>(&'a self, level: usize) -> Box<dyn Iterator<Item = QuadElement> + 'a> {
        if level > self.layout.max_level {
            return Box::new(std::iter::empty());
        }
        let [nx, ny] = self.layout.counts(level);
        Box::new(itertools::iproduct!(0..ny, 0..nx).map(move |(j, i)| QuadElement::new(level, i, j)))
    }

    /// Leaf traversal of a non-leaf element is empty.
    fn ileaf_begin(&self, element: &QuadElement) -> LeafQuadIntersection {
        let face = if element.level() == self.layout.max_level {
            0
        } else {
            QUAD_FACES
        };
        LeafQuadIntersection::new(self.layout, *element, face)
    }

    fn ileaf_end(&self, element: &QuadElement) -> LeafQuadIntersection {
        LeafQuadIntersection::new(self.layout, *element, QUAD_FACES)
    }

    fn ilevel_begin(&self, element: &QuadElement) -> LevelQuadIntersection {
        LevelQuadIntersection::new(self.layout, *element, 0)
    }

    fn ilevel_end(&self, element: &QuadElement) -> LevelQuadIntersection {
        LevelQuadIntersection::new(self.layout, *element, QUAD_FACES)
    }
}
