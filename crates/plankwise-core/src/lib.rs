//! # Plankwise Core
//!
//! Core types and errors shared by the Plankwise crates: the room outline
//! primitives, planks and columns, plank identity allocation, and the
//! layout parameters.

pub mod error;
pub mod geometry;
pub mod params;
pub mod plank;

pub use error::{Error, GeometryError, ParameterError, Result};
pub use geometry::{validate_outline, BoundaryEdge, Bounds, Vertex};
pub use params::LayoutParameters;
pub use plank::{Column, CutEnd, Plank, PlankIds};
