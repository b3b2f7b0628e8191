//! Serialization and deserialization for room files.
//!
//! A room file holds the outline, the parameters and, once computed, the
//! laid columns and the partial pool, so a layout can be reloaded without
//! being recomputed.

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use plankwise_core::{Column, LayoutParameters, Vertex};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

use crate::engine::LayoutResult;
use crate::inventory::PartialPool;
use crate::room::Room;

/// Room file format version
const FILE_FORMAT_VERSION: &str = "1.0";

fn default_version() -> String {
    FILE_FORMAT_VERSION.to_string()
}

/// Room file metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentMetadata {
    #[serde(default)]
    pub name: String,
    #[serde(default = "Utc::now")]
    pub created: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub modified: DateTime<Utc>,
}

impl Default for DocumentMetadata {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            name: String::new(),
            created: now,
            modified: now,
        }
    }
}

/// Complete room file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomDocument {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub metadata: DocumentMetadata,
    pub vertices: Vec<Vertex>,
    #[serde(flatten)]
    pub parameters: LayoutParameters,
    #[serde(default)]
    pub columns: Vec<Column>,
    #[serde(default)]
    pub partials: PartialPool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<LayoutResult>,
}

impl RoomDocument {
    /// Create a document for an outline that has not been laid out yet
    pub fn new(name: impl Into<String>, vertices: Vec<Vertex>, parameters: LayoutParameters) -> Self {
        Self {
            version: default_version(),
            metadata: DocumentMetadata {
                name: name.into(),
                ..DocumentMetadata::default()
            },
            vertices,
            parameters,
            columns: Vec::new(),
            partials: PartialPool::new(),
            summary: None,
        }
    }

    /// Snapshot a room, laid out or not
    pub fn from_room(name: impl Into<String>, room: &Room) -> Self {
        Self {
            version: default_version(),
            metadata: DocumentMetadata {
                name: name.into(),
                ..DocumentMetadata::default()
            },
            vertices: room.vertices().to_vec(),
            parameters: *room.params(),
            columns: room.columns().to_vec(),
            partials: room.partials().clone(),
            summary: room.summary(),
        }
    }

    /// Whether the document carries a computed layout
    pub fn has_layout(&self) -> bool {
        !self.columns.is_empty()
    }

    /// Rebuild the room. Columns and partials are restored as they are.
    pub fn into_room(self) -> Result<Room> {
        Room::from_parts(self.vertices, self.parameters, self.columns, self.partials)
            .context("Room file describes an invalid room")
    }

    /// Parse a room document from JSON text
    pub fn from_json(content: &str) -> Result<Self> {
        Self::from_json_with_defaults(content, &LayoutParameters::default())
    }

    /// Parse a room document, taking every parameter the text leaves out
    /// from `defaults`
    pub fn from_json_with_defaults(content: &str, defaults: &LayoutParameters) -> Result<Self> {
        let mut value: Value = serde_json::from_str(content).context("Failed to parse room file")?;
        let Value::Object(fields) = &mut value else {
            bail!("Room file must contain a JSON object");
        };
        if let Value::Object(defaults) =
            serde_json::to_value(defaults).context("Failed to serialize default parameters")?
        {
            for (name, default) in defaults {
                fields.entry(name).or_insert(default);
            }
        }

        serde_json::from_value(value).context("Failed to parse room file")
    }

    /// Serialize the document as pretty JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize room")
    }

    /// Save the document to a file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = self.to_json()?;

        std::fs::write(path.as_ref(), json).context("Failed to write room file")?;

        Ok(())
    }

    /// Load a document from a file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::load_with_defaults(path, &LayoutParameters::default())
    }

    /// Load a document from a file, filling missing parameters from `defaults`
    pub fn load_with_defaults(path: impl AsRef<Path>, defaults: &LayoutParameters) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read room file {}", path.as_ref().display()))?;

        let mut document = Self::from_json_with_defaults(&content, defaults)?;
        document.metadata.modified = Utc::now();

        Ok(document)
    }
}
