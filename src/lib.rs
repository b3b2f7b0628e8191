//! # Plankwise
//!
//! Plans how interlocking floor planks are cut and laid in a rectilinear room.
//!
//! ## Architecture
//!
//! Plankwise is organized as a workspace with multiple crates:
//!
//! 1. **plankwise-core** - Outline primitives, planks, columns, parameters, errors
//! 2. **plankwise-layout** - Column building, partial inventory, layout and shuffle engines, room files
//! 3. **plankwise-settings** - Planner configuration file
//! 4. **plankwise** - Command line binary that ties the crates together
//!
//! ## Features
//!
//! - **Greedy column fill**: whole planks first, one cut per column, offcuts reused
//! - **Partial inventory**: cut-off ends are banked and start later columns
//! - **Stock planks**: leftovers from an earlier job can be added and are kept across layouts
//! - **Shuffle**: columns of equal height trade places so joints do not line up
//! - **Cutting schedule**: the length of every piece to saw, grouped by plank number

pub mod planner;

pub use plankwise_core::{
    validate_outline, BoundaryEdge, Bounds, Column, CutEnd, Error, GeometryError,
    LayoutParameters, ParameterError, Plank, PlankIds, Result, Vertex,
};

pub use plankwise_layout::{
    build_column, measure, renumber, shuffle_columns, CutEntry, CuttingSchedule,
    DocumentMetadata, LayoutEngine, LayoutResult, PartialPool, Room, RoomDocument, RoomGeometry,
    LENGTH_EPSILON,
};

pub use plankwise_settings::{PlannerConfig, SettingsError, SettingsResult, MAX_PRECISION};

pub use planner::{plan, PlanOptions};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Log lines go to stderr so that JSON written to stdout stays clean.
/// `RUST_LOG` overrides the default level.
pub fn init_logging(verbose: bool) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let default_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
