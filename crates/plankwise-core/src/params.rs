//! Layout parameters.
//!
//! Field names on the wire are the exported parameter names (`PLANK_WIDTH`,
//! `PLANK_LENGTH`, ...). Every field is optional and falls back to its default.

use crate::error::ParameterError;
use serde::{Deserialize, Serialize};

/// Plank and start-offset parameters for one layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutParameters {
    /// Width of one plank, and therefore of every column
    #[serde(rename = "PLANK_WIDTH")]
    pub plank_width: f64,
    /// Length of a whole plank as bought
    #[serde(rename = "PLANK_LENGTH")]
    pub plank_length: f64,
    /// Material lost to the saw blade per cut
    #[serde(rename = "CUT_THICKNESS")]
    pub cut_thickness: f64,
    /// Shortest plank or offcut worth laying or keeping
    #[serde(rename = "MIN_PLANK_LENGTH")]
    pub min_plank_length: f64,
    /// Horizontal offset of the first column from the room's left edge
    #[serde(rename = "START_LEFT")]
    pub start_left: f64,
    /// Vertical offset applied to the first column only
    #[serde(rename = "START_TOP")]
    pub start_top: f64,
}

impl Default for LayoutParameters {
    fn default() -> Self {
        Self {
            plank_width: 12.5,
            plank_length: 91.5,
            cut_thickness: 0.3,
            min_plank_length: 15.0,
            start_left: 0.0,
            start_top: 0.0,
        }
    }
}

impl LayoutParameters {
    pub fn new(plank_width: f64, plank_length: f64) -> Self {
        Self {
            plank_width,
            plank_length,
            ..Self::default()
        }
    }

    pub fn with_cut_thickness(mut self, cut_thickness: f64) -> Self {
        self.cut_thickness = cut_thickness;
        self
    }

    pub fn with_min_plank_length(mut self, min_plank_length: f64) -> Self {
        self.min_plank_length = min_plank_length;
        self
    }

    pub fn with_start(mut self, start_left: f64, start_top: f64) -> Self {
        self.start_left = start_left;
        self.start_top = start_top;
        self
    }

    /// Validate parameter ranges
    pub fn validate(&self) -> Result<(), ParameterError> {
        let named = [
            ("PLANK_WIDTH", self.plank_width),
            ("PLANK_LENGTH", self.plank_length),
            ("CUT_THICKNESS", self.cut_thickness),
            ("MIN_PLANK_LENGTH", self.min_plank_length),
            ("START_LEFT", self.start_left),
            ("START_TOP", self.start_top),
        ];
        if let Some((name, _)) = named.iter().find(|(_, value)| !value.is_finite()) {
            return Err(ParameterError::NotFinite {
                name: name.to_string(),
            });
        }

        for (name, value) in [
            ("PLANK_WIDTH", self.plank_width),
            ("PLANK_LENGTH", self.plank_length),
        ] {
            if value <= 0.0 {
                return Err(ParameterError::OutOfRange {
                    name: name.to_string(),
                    value,
                    constraint: "must be > 0".to_string(),
                });
            }
        }

        for (name, value) in [
            ("CUT_THICKNESS", self.cut_thickness),
            ("MIN_PLANK_LENGTH", self.min_plank_length),
        ] {
            if value < 0.0 {
                return Err(ParameterError::OutOfRange {
                    name: name.to_string(),
                    value,
                    constraint: "must be >= 0".to_string(),
                });
            }
        }

        if self.min_plank_length >= self.plank_length {
            return Err(ParameterError::Incompatible(format!(
                "MIN_PLANK_LENGTH ({}) must be shorter than PLANK_LENGTH ({})",
                self.min_plank_length, self.plank_length
            )));
        }

        if self.cut_thickness >= self.plank_length {
            return Err(ParameterError::Incompatible(format!(
                "CUT_THICKNESS ({}) must be smaller than PLANK_LENGTH ({})",
                self.cut_thickness, self.plank_length
            )));
        }

        Ok(())
    }
}
