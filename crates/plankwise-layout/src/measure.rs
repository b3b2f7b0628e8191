//! Room measurement
//!
//! Derives the bounding box and the horizontal boundary edges of a room
//! outline. Vertical edges never limit a column's height, so they are dropped.

use plankwise_core::{BoundaryEdge, Bounds, Vertex};

/// Horizontal edges and bounding box of a room outline.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomGeometry {
    pub edges: Vec<BoundaryEdge>,
    pub bounds: Bounds,
}

impl RoomGeometry {
    fn empty() -> Self {
        Self {
            edges: Vec::new(),
            bounds: Bounds::inverted(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty() || self.bounds.is_empty()
    }
}

/// Measure an implicitly closed outline.
///
/// Fewer than three vertices is not a polygon; the result is empty with
/// inverted bounds.
pub fn measure(vertices: &[Vertex]) -> RoomGeometry {
    if vertices.len() < 3 {
        return RoomGeometry::empty();
    }

    let mut bounds = Bounds::inverted();
    for v in vertices {
        bounds.include(v.x, v.y);
    }

    let edges = vertices
        .iter()
        .zip(vertices.iter().cycle().skip(1))
        .filter(|(a, b)| a.y == b.y)
        .map(|(a, b)| BoundaryEdge::new(a.x, b.x, a.y))
        .collect();

    RoomGeometry { edges, bounds }
}
