//! Cutting schedule
//!
//! Lists, per plank id, the lengths of the two pieces a saw cut produces: the
//! piece whose cut end is at its bottom (it ends a column) and the piece whose
//! cut end is at its top (it starts a column, or waits in the pool).

use crate::inventory::PartialPool;
use plankwise_core::{Column, CutEnd};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Write as _;

/// Cut pieces sharing one plank id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CutEntry {
    pub id: u32,
    /// Length of the piece that ends a column
    pub bottom_piece: Option<f64>,
    /// Length of the piece that starts a column or is banked
    pub top_piece: Option<f64>,
    /// The top piece is still in the pool rather than on the floor
    pub top_piece_banked: bool,
}

impl CutEntry {
    fn new(id: u32) -> Self {
        Self {
            id,
            bottom_piece: None,
            top_piece: None,
            top_piece_banked: false,
        }
    }
}

/// Cut pieces ordered by plank id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CuttingSchedule {
    pub entries: Vec<CutEntry>,
}

impl CuttingSchedule {
    pub fn build(columns: &[Column], pool: &PartialPool) -> Self {
        let mut entries: BTreeMap<u32, CutEntry> = BTreeMap::new();

        let placed = columns.iter().flat_map(|c| c.planks.iter()).map(|p| (p, false));
        let banked = pool.iter().map(|p| (p, true));
        for (plank, in_pool) in placed.chain(banked).filter(|(p, _)| p.is_cut()) {
            let entry = entries.entry(plank.id).or_insert_with(|| CutEntry::new(plank.id));
            match plank.cut_end {
                CutEnd::Bottom => entry.bottom_piece = Some(plank.length),
                CutEnd::Top => {
                    entry.top_piece = Some(plank.length);
                    entry.top_piece_banked = in_pool;
                }
                CutEnd::None => {}
            }
        }

        Self {
            entries: entries.into_values().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&CutEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Plain-text table, one line per plank id.
    pub fn to_text(&self, precision: usize) -> String {
        let piece = |length: Option<f64>| match length {
            Some(length) => format!("{:.*}", precision, length),
            None => "-".to_string(),
        };

        let mut out = String::new();
        let _ = writeln!(out, "{:>5}  {:>10}  {:>10}", "plank", "bottom cut", "top cut");
        for entry in &self.entries {
            let _ = writeln!(
                out,
                "{:>5}  {:>10}  {:>10}{}",
                format!("#{}", entry.id),
                piece(entry.bottom_piece),
                piece(entry.top_piece),
                if entry.top_piece_banked { "  (spare)" } else { "" }
            );
        }
        out
    }
}
