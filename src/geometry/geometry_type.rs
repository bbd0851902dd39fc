//! Reference element types for geometries.

/// Reference element of a geometry mapping.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum GeometryType {
    /// 0D point.
    Vertex,
    /// 1D segment `[0, 1]`.
    Segment,
    /// 2D unit square.
    Quadrilateral,
    /// 3D unit cube.
    Hexahedron,
    /// Unit cube of dimension `d > 3`.
    Cube(u8),
}

impl Default for GeometryType {
    fn default() -> Self {
        GeometryType::Vertex
    }
}

impl GeometryType {
    /// The unit cube of dimension `dim`.
    pub fn cube(dim: usize) -> Self {
        match dim {
            0 => GeometryType::Vertex,
            1 => GeometryType::Segment,
            2 => GeometryType::Quadrilateral,
            3 => GeometryType::Hexahedron,
            d => GeometryType::Cube(u8::try_from(d).unwrap_or(u8::MAX)),
        }
    }

    /// Topological dimension of the reference element.
    pub fn dimension(self) -> usize {
        match self {
            GeometryType::Vertex => 0,
            GeometryType::Segment => 1,
            GeometryType::Quadrilateral => 2,
            GeometryType::Hexahedron => 3,
            GeometryType::Cube(d) => usize::from(d),
        }
    }

    /// Number of corners of the reference element, `None` if `2^dim` does
    /// not fit in a `usize`.
    pub fn corners(self) -> Option<usize> {
        u32::try_from(self.dimension())
            .ok()
            .and_then(|d| 1usize.checked_shl(d))
    }

    /// Number of codimension-1 faces (intersections) of the reference element.
    pub fn faces(self) -> usize {
        2 * self.dimension()
    }
}
