//! Error handling for Plankwise
//!
//! Provides error types for every layer of the planner:
//! - Geometry errors (room outline and column clipping)
//! - Parameter errors (plank dimensions and start offsets)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Geometry error type
///
/// Represents problems with the room outline or with a column derived from it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A vertex coordinate is NaN or infinite
    #[error("Vertex {index} ('{label}') has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// Position of the vertex in the outline.
        index: usize,
        /// The vertex label.
        label: String,
    },

    /// Two consecutive vertices are neither horizontally nor vertically aligned
    #[error("Edge from '{from}' to '{to}' is not axis-aligned")]
    DiagonalEdge {
        /// Label of the first vertex of the edge.
        from: String,
        /// Label of the second vertex of the edge.
        to: String,
    },

    /// A column ended up with its top below its bottom
    #[error("Column at x={left} is not inside the room (top {top}, bottom {bottom})")]
    InvertedColumn {
        /// Left edge of the column.
        left: f64,
        /// Clipped top of the column.
        top: f64,
        /// Clipped bottom of the column.
        bottom: f64,
    },

    /// A laid or pooled plank has a length no plank can have
    #[error("Plank #{id} has invalid length {length}")]
    InvalidPlankLength {
        /// User-facing plank number.
        id: u32,
        /// The rejected length.
        length: f64,
    },
}

/// Parameter error type
///
/// Represents invalid layout parameters.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// A parameter value is outside its valid range
    #[error("Parameter '{name}' out of range: {value} ({constraint})")]
    OutOfRange {
        /// The exported parameter name.
        name: String,
        /// The rejected value.
        value: f64,
        /// Human readable description of the valid range.
        constraint: String,
    },

    /// A parameter value is not a finite number
    #[error("Parameter '{name}' must be a finite number")]
    NotFinite {
        /// The exported parameter name.
        name: String,
    },

    /// Two parameters contradict each other
    #[error("Incompatible parameters: {0}")]
    Incompatible(String),
}

/// Main error type for Plankwise
///
/// A unified error type that can represent any error from the library crates.
#[derive(Error, Debug)]
pub enum Error {
    /// Geometry error
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Parameter error
    #[error(transparent)]
    Parameter(#[from] ParameterError),

    /// No plank with the given internal identity exists in the room
    #[error("Plank with uid {uid} not found")]
    PlankNotFound {
        /// The internal identity that was looked up.
        uid: u64,
    },
}

impl Error {
    /// Check if this is a geometry error
    pub fn is_geometry_error(&self) -> bool {
        matches!(self, Error::Geometry(_))
    }

    /// Check if this is a parameter error
    pub fn is_parameter_error(&self) -> bool {
        matches!(self, Error::Parameter(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
