//! # Plankwise Layout
//!
//! Plans how interlocking floor planks are cut and laid across a rectilinear
//! room. The room is split into plank-wide columns, each column is clipped to
//! the room outline and filled greedily, and offcuts are carried forward so
//! later columns can start with them.
//!
//! ## Pipeline
//!
//! - **Measure**: horizontal boundary edges and bounding box of the outline
//! - **Column**: one column per plank width, clipped to the edges it overlaps
//! - **Inventory**: pool of banked offcuts and the user's own stock
//! - **Engine**: fills the columns and counts planks, cuts and waste
//! - **Shuffle**: swaps same-height columns to avoid staircase joints
//! - **Schedule**: the length of each cut piece, per plank
//!
//! [`Room`] ties these together and [`RoomDocument`] saves and restores it.

pub mod column;
pub mod document;
pub mod engine;
pub mod inventory;
pub mod measure;
pub mod room;
pub mod schedule;
pub mod shuffle;

pub use column::build_column;
pub use document::{DocumentMetadata, RoomDocument};
pub use engine::{LayoutEngine, LayoutResult, LENGTH_EPSILON};
pub use inventory::PartialPool;
pub use measure::{measure, RoomGeometry};
pub use room::Room;
pub use schedule::{CutEntry, CuttingSchedule};
pub use shuffle::{renumber, shuffle_columns};
