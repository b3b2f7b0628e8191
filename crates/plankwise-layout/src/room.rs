//! Room state
//!
//! A room owns its outline, its parameters, the laid columns and the pool of
//! partial planks. It is the unit that gets laid out, shuffled, and saved.

use crate::column::ensure_inside;
use crate::engine::{LayoutEngine, LayoutResult};
use crate::inventory::PartialPool;
use crate::measure::{measure, RoomGeometry};
use crate::schedule::CuttingSchedule;
use crate::shuffle::{renumber, shuffle_columns};
use plankwise_core::{
    validate_outline, Column, CutEnd, Error, GeometryError, LayoutParameters, ParameterError,
    Plank, PlankIds, Result, Vertex,
};
use rand::Rng;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct Room {
    vertices: Vec<Vertex>,
    params: LayoutParameters,
    columns: Vec<Column>,
    partials: PartialPool,
    ids: PlankIds,
    summary: Option<LayoutResult>,
}

impl Room {
    /// Create an empty room after validating the outline and parameters.
    pub fn new(vertices: Vec<Vertex>, params: LayoutParameters) -> Result<Self> {
        Self::from_parts(vertices, params, Vec::new(), PartialPool::new())
    }

    /// Restore a room with an existing layout. The counters are recounted
    /// from the columns; nothing is laid out again.
    ///
    /// Inverted columns and planks without a positive length are rejected.
    pub fn from_parts(
        vertices: Vec<Vertex>,
        params: LayoutParameters,
        columns: Vec<Column>,
        partials: PartialPool,
    ) -> Result<Self> {
        validate_outline(&vertices)?;
        params.validate()?;
        for column in &columns {
            ensure_inside(column)?;
        }
        let restored = columns.iter().flat_map(|c| c.planks.iter()).chain(partials.iter());
        for plank in restored {
            if !plank.length.is_finite() || plank.length <= 0.0 {
                return Err(GeometryError::InvalidPlankLength {
                    id: plank.id,
                    length: plank.length,
                }
                .into());
            }
        }

        let ids = PlankIds::resume_after(
            columns
                .iter()
                .flat_map(|c| c.planks.iter())
                .chain(partials.iter()),
        );
        let summary = (!columns.is_empty()).then(|| LayoutResult::tally(&columns, params.plank_length));

        Ok(Self {
            vertices,
            params,
            columns,
            partials,
            ids,
            summary,
        })
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn params(&self) -> &LayoutParameters {
        &self.params
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn partials(&self) -> &PartialPool {
        &self.partials
    }

    /// Counters of the current layout, if there is one.
    pub fn summary(&self) -> Option<LayoutResult> {
        self.summary
    }

    pub fn is_laid_out(&self) -> bool {
        self.summary.is_some()
    }

    pub fn geometry(&self) -> RoomGeometry {
        measure(&self.vertices)
    }

    /// Every plank in the room, laid or pooled.
    pub fn planks(&self) -> impl Iterator<Item = &Plank> {
        self.columns
            .iter()
            .flat_map(|c| c.planks.iter())
            .chain(self.partials.iter())
    }

    /// Replace the parameters. The current layout is kept until the next
    /// [`Room::recompute`].
    pub fn set_params(&mut self, params: LayoutParameters) -> Result<()> {
        params.validate()?;
        self.params = params;
        Ok(())
    }

    /// Lay the room out from scratch, keeping only permanent stock.
    pub fn recompute(&mut self) -> Result<LayoutResult> {
        let mut engine = LayoutEngine::new(self.params);
        let outcome = engine.recompute(&self.vertices, &mut self.columns, &mut self.partials);
        self.ids = engine.into_ids();

        match outcome {
            Ok(result) => {
                self.summary = Some(result);
                Ok(result)
            }
            Err(e) => {
                self.columns.clear();
                self.summary = None;
                Err(e)
            }
        }
    }

    /// Shuffle same-height columns with `rng`, then renumber every plank in
    /// reading order.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let pin_first = self.params.start_top != 0.0;
        shuffle_columns(&mut self.columns, pin_first, rng);
        let next = renumber(&mut self.columns, &mut self.partials);
        self.ids = PlankIds::resume_after(self.planks());
        debug!("Renumbered planks, next id {}", next);
    }

    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::rng());
    }

    /// Add a pre-cut plank the user already owns. It is kept across
    /// relayouts and used by the next [`Room::recompute`]. Returns its uid.
    ///
    /// The length must be positive and no longer than `PLANK_LENGTH`.
    pub fn add_stock(&mut self, length: f64, cut_end: CutEnd) -> Result<u64> {
        if !length.is_finite() || length <= 0.0 || length > self.params.plank_length {
            return Err(ParameterError::OutOfRange {
                name: "stock length".to_string(),
                value: length,
                constraint: format!("must be > 0 and <= {}", self.params.plank_length),
            }
            .into());
        }

        let plank = self
            .ids
            .plank(self.params.plank_width, length)
            .with_cut_end(cut_end)
            .permanent();
        let uid = plank.uid;
        info!("Added {:.2} stock plank #{} ({} cut)", length, plank.id, cut_end);
        self.partials.add_partial(plank);
        Ok(uid)
    }

    /// Take the plank with internal identity `uid` out of the room.
    ///
    /// Meant for retracting stock added with [`Room::add_stock`]; removing a
    /// laid plank leaves a gap until the next [`Room::recompute`].
    pub fn remove_plank(&mut self, uid: u64) -> Result<Plank> {
        self.partials
            .remove_by_uid(&mut self.columns, uid)
            .ok_or(Error::PlankNotFound { uid })
    }

    pub fn cutting_schedule(&self) -> CuttingSchedule {
        CuttingSchedule::build(&self.columns, &self.partials)
    }
}
