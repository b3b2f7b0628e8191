pub mod init_config;
pub mod plan;
pub mod schedule;

use anyhow::{Context, Result};
use plankwise::{PlannerConfig, RoomDocument};
use std::path::Path;

/// Load the planner config and a room file whose missing parameters come
/// from that config.
pub fn load_room(room: &Path, config: Option<&Path>) -> Result<(PlannerConfig, RoomDocument)> {
    let config = PlannerConfig::load_or_default(config).context("Failed to load planner config")?;
    let document = RoomDocument::load_with_defaults(room, &config.parameters)?;
    Ok((config, document))
}
