use anyhow::{bail, Result};
use plankwise::{plan, PlanOptions, MAX_PRECISION};
use std::path::Path;

pub fn run(room: &Path, config: Option<&Path>, precision: Option<usize>) -> Result<()> {
    let (config, document) = super::load_room(room, config)?;

    let precision = precision.unwrap_or(config.precision);
    if precision > MAX_PRECISION {
        bail!("Precision must be at most {}", MAX_PRECISION);
    }

    // A saved layout keeps its order; a blank room is laid out unshuffled.
    let room = plan(document, &PlanOptions::default())?;

    print!("{}", room.cutting_schedule().to_text(precision));
    Ok(())
}
