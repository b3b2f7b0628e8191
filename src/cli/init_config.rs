use anyhow::{bail, Context, Result};
use plankwise::PlannerConfig;
use std::path::PathBuf;
use tracing::info;

pub fn run(path: Option<PathBuf>, force: bool) -> Result<()> {
    let path = match path {
        Some(path) => path,
        None => PlannerConfig::default_path().context("No config directory on this platform")?,
    };

    if path.exists() && !force {
        bail!("{} already exists, pass --force to replace it", path.display());
    }

    PlannerConfig::default()
        .save_to_file(&path)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;

    info!("Wrote default config to {}", path.display());
    println!("{}", path.display());
    Ok(())
}
