//! Plank inventory
//!
//! Keeps the leftover ("partial") planks that later columns may reuse, and the
//! user's own pre-cut stock, which is the only state that survives a relayout.

use plankwise_core::{Column, CutEnd, Plank, PlankIds};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Pool of partial planks available for reuse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartialPool {
    planks: Vec<Plank>,
}

impl PartialPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_planks(planks: Vec<Plank>) -> Self {
        Self { planks }
    }

    pub fn len(&self) -> usize {
        self.planks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.planks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Plank> {
        self.planks.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Plank> {
        self.planks.iter_mut()
    }

    pub fn add_partial(&mut self, plank: Plank) {
        self.planks.push(plank);
    }

    /// Index of the longest plank with `cut_end` that is longer than
    /// `min_length` and no longer than `max_length`. Ties go to the first found.
    fn position_of_longest(&self, cut_end: CutEnd, min_length: f64, max_length: f64) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (index, plank) in self.planks.iter().enumerate() {
            if plank.cut_end != cut_end || plank.length <= min_length || plank.length > max_length {
                continue;
            }
            if best.is_none_or(|(_, length)| plank.length > length) {
                best = Some((index, plank.length));
            }
        }
        best.map(|(index, _)| index)
    }

    /// Longest matching partial, without removing it.
    pub fn find_partial(&self, cut_end: CutEnd, min_length: f64) -> Option<&Plank> {
        self.position_of_longest(cut_end, min_length, f64::INFINITY)
            .map(|index| &self.planks[index])
    }

    /// Remove and return the longest partial with `cut_end` longer than `min_length`.
    pub fn select_partial(&mut self, cut_end: CutEnd, min_length: f64) -> Option<Plank> {
        self.select_partial_within(cut_end, min_length, f64::INFINITY)
    }

    /// Like [`PartialPool::select_partial`], skipping partials longer than `max_length`.
    pub fn select_partial_within(
        &mut self,
        cut_end: CutEnd,
        min_length: f64,
        max_length: f64,
    ) -> Option<Plank> {
        self.position_of_longest(cut_end, min_length, max_length)
            .map(|index| self.planks.remove(index))
    }

    /// Gather the permanent planks from the pool and from `columns` into a
    /// fresh pool, renumbering them from `ids`. Everything else is dropped and
    /// `columns` is left empty.
    pub fn collect_permanent(&mut self, columns: &mut Vec<Column>, ids: &mut PlankIds) {
        let placed = columns.drain(..).flat_map(|column| column.planks);
        let kept: Vec<Plank> = std::mem::take(&mut self.planks)
            .into_iter()
            .chain(placed)
            .filter(|plank| plank.permanent)
            .map(|mut plank| {
                plank.id = ids.next_id();
                plank.uid = ids.next_uid();
                plank.place(0.0, 0.0);
                plank
            })
            .collect();

        debug!("Carrying {} permanent planks into the next layout", kept.len());
        self.planks = kept;
    }

    /// Remove the plank with internal identity `uid` from the pool or from
    /// whichever column holds it.
    pub fn remove_by_uid(&mut self, columns: &mut [Column], uid: u64) -> Option<Plank> {
        if let Some(index) = self.planks.iter().position(|p| p.uid == uid) {
            return Some(self.planks.remove(index));
        }

        columns.iter_mut().find_map(|column| {
            column
                .planks
                .iter()
                .position(|p| p.uid == uid)
                .map(|index| column.planks.remove(index))
        })
    }
}
