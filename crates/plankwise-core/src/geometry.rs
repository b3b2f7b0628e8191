//! Room outline primitives.
//!
//! Coordinates follow screen conventions: x grows to the right and y grows
//! downward, so a column's `top` is numerically smaller than its `bottom`.

use crate::error::GeometryError;
use serde::{Deserialize, Deserializer, Serialize};

/// One corner of the room outline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
    /// Free-form label shown next to the corner. Room files call it `id`
    /// and may give it as a number.
    #[serde(
        default,
        rename = "id",
        alias = "label",
        deserialize_with = "label_from_text_or_number"
    )]
    pub label: String,
}

fn label_from_text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Label {
        Text(String),
        Integer(i64),
        Float(f64),
    }

    Ok(match Label::deserialize(deserializer)? {
        Label::Text(text) => text,
        Label::Integer(n) => n.to_string(),
        Label::Float(n) => n.to_string(),
    })
}

impl Vertex {
    pub fn new(x: f64, y: f64, label: impl Into<String>) -> Self {
        Self {
            x,
            y,
            label: label.into(),
        }
    }
}

/// A horizontal segment of the outline. Always `left <= right`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundaryEdge {
    pub left: f64,
    pub right: f64,
    pub y: f64,
}

impl BoundaryEdge {
    pub fn new(x1: f64, x2: f64, y: f64) -> Self {
        Self {
            left: x1.min(x2),
            right: x1.max(x2),
            y,
        }
    }

    pub fn length(&self) -> f64 {
        self.right - self.left
    }
}

/// Axis-aligned bounding box of the room.
///
/// An empty outline yields inverted bounds (`left > right`), see [`Bounds::is_empty`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Bounds {
    /// Inverted box that any point will widen.
    pub fn inverted() -> Self {
        Self {
            left: f64::INFINITY,
            right: f64::NEG_INFINITY,
            top: f64::INFINITY,
            bottom: f64::NEG_INFINITY,
        }
    }

    pub fn include(&mut self, x: f64, y: f64) {
        self.left = self.left.min(x);
        self.right = self.right.max(x);
        self.top = self.top.min(y);
        self.bottom = self.bottom.max(y);
    }

    pub fn is_empty(&self) -> bool {
        self.left > self.right || self.top > self.bottom
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// Rejects outlines that cannot be planked: non-finite coordinates and
/// edges that are neither horizontal nor vertical.
///
/// Outlines with fewer than three vertices pass; they produce an empty layout.
pub fn validate_outline(vertices: &[Vertex]) -> Result<(), GeometryError> {
    for (index, v) in vertices.iter().enumerate() {
        if !v.x.is_finite() || !v.y.is_finite() {
            return Err(GeometryError::NonFiniteCoordinate {
                index,
                label: v.label.clone(),
            });
        }
    }

    if vertices.len() < 3 {
        return Ok(());
    }

    for (a, b) in vertices.iter().zip(vertices.iter().cycle().skip(1)) {
        if a.x != b.x && a.y != b.y {
            return Err(GeometryError::DiagonalEdge {
                from: a.label.clone(),
                to: b.label.clone(),
            });
        }
    }

    Ok(())
}
