//! Plankwise Settings Crate
//!
//! Handles the planner configuration file: default layout parameters and
//! output preferences.

pub mod config;
pub mod error;

pub use config::{PlannerConfig, MAX_PRECISION};
pub use error::{SettingsError, SettingsResult};
