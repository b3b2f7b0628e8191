//! Layout engine
//!
//! Marches fixed-width columns across the room from left to right and fills
//! each one greedily: an optional banked partial first, then whole planks,
//! then one freshly cut plank for whatever height remains. The offcut of that
//! cut is banked for later columns when it is long enough to be worth keeping.
//!
//! Cut ends always land on a wall. A banked offcut carries its cut at the top
//! and so may only start a column; the trailing piece carries its cut at the
//! bottom and always ends one.

use crate::column::{build_column, ensure_inside};
use crate::inventory::PartialPool;
use crate::measure::measure;
use plankwise_core::{Column, CutEnd, LayoutParameters, Plank, PlankIds, Result, Vertex};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Lengths closer than this are treated as equal when filling a column.
pub const LENGTH_EPSILON: f64 = 1e-9;

/// Aggregate counters of one layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutResult {
    /// Whole planks bought: full planks laid plus planks cut for a column end
    pub planks_needed: usize,
    /// Saw cuts made
    pub cuts: usize,
    /// Bought length that does not end up on the floor
    pub waste: f64,
    /// Sum of all column heights
    pub covered_length: f64,
}

impl LayoutResult {
    fn finish(planks_needed: usize, cuts: usize, columns: &[Column], plank_length: f64) -> Self {
        let covered_length: f64 = columns.iter().map(Column::height).sum();
        Self {
            planks_needed,
            cuts,
            waste: planks_needed as f64 * plank_length - covered_length,
            covered_length,
        }
    }

    /// Recount the counters from laid columns.
    ///
    /// Every bought plank gets a fresh id that both of its pieces keep, so the
    /// distinct ids of non-permanent planks are the planks bought, and every
    /// cut leaves exactly one bottom-cut piece in a column.
    pub fn tally(columns: &[Column], plank_length: f64) -> Self {
        let placed = || columns.iter().flat_map(|c| c.planks.iter()).filter(|p| !p.permanent);
        let mut ids: Vec<u32> = placed().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        let cuts = placed().filter(|p| p.cut_end == CutEnd::Bottom).count();
        Self::finish(ids.len(), cuts, columns, plank_length)
    }
}

/// What happened when filling one column.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Fill {
    /// The column is laid.
    Laid { bought: usize, cut: bool },
    /// The column started with a partial and would have ended on an offcut
    /// shorter than the minimum. The partial went back to the pool.
    Retry,
}

/// Greedy column filler.
///
/// Owns the plank id allocator; ids restart at 1 for every layout.
#[derive(Debug)]
pub struct LayoutEngine {
    params: LayoutParameters,
    ids: PlankIds,
}

impl LayoutEngine {
    pub fn new(params: LayoutParameters) -> Self {
        Self {
            params,
            ids: PlankIds::new(),
        }
    }

    pub fn params(&self) -> &LayoutParameters {
        &self.params
    }

    /// Allocator state after the last layout.
    pub fn into_ids(self) -> PlankIds {
        self.ids
    }

    /// Lay out the room described by `vertices`.
    ///
    /// `columns` is rebuilt from scratch. Permanent planks found in `pool` or
    /// `columns` are kept and reused; every other plank is discarded first.
    pub fn recompute(
        &mut self,
        vertices: &[Vertex],
        columns: &mut Vec<Column>,
        pool: &mut PartialPool,
    ) -> Result<LayoutResult> {
        self.params.validate()?;
        self.ids.reset();
        pool.collect_permanent(columns, &mut self.ids);

        let geometry = measure(vertices);
        if geometry.is_empty() || geometry.bounds.width() < self.params.plank_width {
            debug!("Room too small to hold a column, nothing to lay");
            return Ok(LayoutResult::finish(0, 0, columns, self.params.plank_length));
        }

        let mut planks_needed = 0;
        let mut cuts = 0;
        let mut x = geometry.bounds.left + self.params.start_left;
        let mut allow_partial = true;

        while x < geometry.bounds.right {
            let mut column = build_column(x, self.params.plank_width, &geometry.edges)?;
            if columns.is_empty() {
                column.top += self.params.start_top;
                ensure_inside(&column)?;
            }

            match self.fill_column(&mut column, pool, allow_partial) {
                Fill::Retry => {
                    debug!("Column at x={} retried without a starting partial", x);
                    allow_partial = false;
                    continue;
                }
                Fill::Laid { bought, cut } => {
                    planks_needed += bought;
                    cuts += usize::from(cut);
                }
            }

            columns.push(column);
            x += self.params.plank_width;
            allow_partial = true;
        }

        let result = LayoutResult::finish(planks_needed, cuts, columns, self.params.plank_length);
        info!(
            "Laid {} columns: {} planks, {} cuts, waste {:.2}, {} partials left",
            columns.len(),
            result.planks_needed,
            result.cuts,
            result.waste,
            pool.len()
        );
        Ok(result)
    }

    fn fill_column(&mut self, column: &mut Column, pool: &mut PartialPool, allow_partial: bool) -> Fill {
        let plank_length = self.params.plank_length;
        let mut cursor = column.top;

        let start = if allow_partial {
            pool.select_partial_within(CutEnd::Top, 0.0, column.height() + LENGTH_EPSILON)
        } else {
            None
        };
        if let Some(partial) = &start {
            cursor += partial.length;
        }

        let first_whole = cursor;
        let mut whole = 0;
        while column.bottom - cursor >= plank_length - LENGTH_EPSILON {
            cursor += plank_length;
            whole += 1;
        }
        let remainder = match column.bottom - cursor {
            r if r.abs() < LENGTH_EPSILON => 0.0,
            r => r,
        };

        if remainder > 0.0 && remainder < self.params.min_plank_length {
            if let Some(partial) = start {
                debug!(
                    "Partial #{} ({:.2}) would leave a {:.2} end piece",
                    partial.id, partial.length, remainder
                );
                pool.add_partial(partial);
                return Fill::Retry;
            }
        }

        if let Some(mut partial) = start {
            partial.place(column.left, column.top);
            column.planks.push(partial);
        }

        for i in 0..whole {
            let mut plank = self.ids.plank(column.width, plank_length);
            plank.place(column.left, first_whole + i as f64 * plank_length);
            column.planks.push(plank);
        }

        if remainder <= 0.0 {
            return Fill::Laid { bought: whole, cut: false };
        }

        self.probe_bottom_partial(pool, remainder);
        column.planks.push(self.cut_plank(column, cursor, remainder, pool));
        Fill::Laid {
            bought: whole + 1,
            cut: true,
        }
    }

    /// Cut a new plank to `length` for the end of `column` and bank the offcut
    /// when it is longer than the minimum plank length.
    fn cut_plank(&mut self, column: &Column, top: f64, length: f64, pool: &mut PartialPool) -> Plank {
        let mut end_piece = self
            .ids
            .plank(column.width, length)
            .with_cut_end(CutEnd::Bottom);
        end_piece.place(column.left, top);

        let offcut = self.params.plank_length - length - self.params.cut_thickness;
        if offcut > self.params.min_plank_length {
            let partial = self
                .ids
                .piece_of(end_piece.id, column.width, offcut)
                .with_cut_end(CutEnd::Top);
            pool.add_partial(partial);
        } else {
            debug!("Offcut {:.2} of plank #{} is waste", offcut.max(0.0), end_piece.id);
        }

        end_piece
    }

    /// A banked bottom-cut piece could end this column without a new cut.
    /// Only reported; the column is still cut from a new plank.
    fn probe_bottom_partial(&self, pool: &PartialPool, remainder: f64) {
        if let Some(candidate) = pool.find_partial(CutEnd::Bottom, 0.0) {
            if candidate.length >= remainder {
                debug!(
                    "Bottom-cut partial #{} ({:.2}) could end a {:.2} gap",
                    candidate.id, candidate.length, remainder
                );
            }
        }
    }
}
