//! Column construction and clipping.

use plankwise_core::{BoundaryEdge, Column, GeometryError};

/// Whether `edge` constrains a column spanning `left..right`.
///
/// The edge may cross the column's left side, cross its right side, span the
/// whole column, or lie inside it. Edges that merely touch a side do not count.
fn overlaps(edge: &BoundaryEdge, left: f64, right: f64) -> bool {
    let crosses_left = edge.left <= left && edge.right > left;
    let crosses_right = edge.left < right && edge.right >= right;
    let spans = edge.left <= left && edge.right >= right;
    let inside = edge.left >= left && edge.right <= right;
    crosses_left || crosses_right || spans || inside
}

/// Narrow `column` to the topmost and bottommost edges it overlaps.
pub fn clip(column: &mut Column, edges: &[BoundaryEdge]) {
    let right = column.right();
    for edge in edges.iter().filter(|e| overlaps(e, column.left, right)) {
        column.top = column.top.min(edge.y);
        column.bottom = column.bottom.max(edge.y);
    }
}

/// Fail when the column's top lies below its bottom.
pub fn ensure_inside(column: &Column) -> Result<(), GeometryError> {
    if column.top > column.bottom || !column.top.is_finite() || !column.bottom.is_finite() {
        return Err(GeometryError::InvertedColumn {
            left: column.left,
            top: column.top,
            bottom: column.bottom,
        });
    }
    Ok(())
}

/// Build the column whose left side is at `left`, clipped to the room edges.
///
/// A column that no edge constrains lies outside the room and is an error.
pub fn build_column(
    left: f64,
    width: f64,
    edges: &[BoundaryEdge],
) -> Result<Column, GeometryError> {
    let mut column = Column::new(left, width);
    clip(&mut column, edges);
    ensure_inside(&column)?;
    Ok(column)
}
