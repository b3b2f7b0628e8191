//! End-to-end planning of a room file: lay out, shuffle, report.

use anyhow::Result;
use plankwise_layout::{Room, RoomDocument};
use plankwise_settings::PlannerConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

/// What to do with a room after it is loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlanOptions {
    pub shuffle: bool,
    pub seed: Option<u64>,
    /// Lay out again even when the file already carries columns
    pub relayout: bool,
}

impl PlanOptions {
    pub fn from_config(config: &PlannerConfig) -> Self {
        Self {
            shuffle: config.shuffle,
            seed: config.seed,
            relayout: false,
        }
    }
}

/// Turn a room document into a laid out room.
///
/// A document that already holds columns keeps them unless `relayout` is set.
pub fn plan(document: RoomDocument, options: &PlanOptions) -> Result<Room> {
    let name = document.metadata.name.clone();
    let mut room = document.into_room()?;

    if options.relayout || !room.is_laid_out() {
        room.recompute()?;
    }

    if options.shuffle && room.is_laid_out() {
        match options.seed {
            Some(seed) => room.shuffle_with(&mut StdRng::seed_from_u64(seed)),
            None => room.shuffle(),
        }
    }

    if let Some(summary) = room.summary() {
        info!(
            "Planned room '{}': {} columns, {} planks, {} cuts, waste {:.1}",
            name,
            room.columns().len(),
            summary.planks_needed,
            summary.cuts,
            summary.waste
        );
    }

    Ok(room)
}
