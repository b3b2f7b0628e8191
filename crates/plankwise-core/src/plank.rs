//! Planks, columns, and plank identity.

use serde::{Deserialize, Serialize};

/// Which end of a plank segment is a fresh saw cut rather than a factory joint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CutEnd {
    /// Both ends are factory joints
    #[default]
    None,
    /// The upper end was cut; the piece must start a column
    Top,
    /// The lower end was cut; the piece must end a column
    Bottom,
}

impl std::fmt::Display for CutEnd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Top => write!(f, "top"),
            Self::Bottom => write!(f, "bottom"),
        }
    }
}

/// One physical board segment, whole or cut.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plank {
    /// Number shown to the user. Both pieces of one cut share it.
    pub id: u32,
    /// Internal identity, unique per piece.
    pub uid: u64,
    #[serde(default)]
    pub cut_end: CutEnd,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub length: f64,
    /// User supplied stock that survives a relayout.
    #[serde(default)]
    pub permanent: bool,
}

impl Plank {
    /// Create an unplaced plank at the origin.
    pub fn new(id: u32, uid: u64, width: f64, length: f64) -> Self {
        Self {
            id,
            uid,
            cut_end: CutEnd::None,
            left: 0.0,
            top: 0.0,
            width,
            length,
            permanent: false,
        }
    }

    pub fn with_cut_end(mut self, cut_end: CutEnd) -> Self {
        self.cut_end = cut_end;
        self
    }

    pub fn permanent(mut self) -> Self {
        self.permanent = true;
        self
    }

    /// Move the plank to a new position.
    pub fn place(&mut self, left: f64, top: f64) {
        self.left = left;
        self.top = top;
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.length
    }

    pub fn is_cut(&self) -> bool {
        self.cut_end != CutEnd::None
    }
}

/// A fixed-width vertical strip of the room and the planks laid in it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub left: f64,
    pub width: f64,
    pub top: f64,
    pub bottom: f64,
    #[serde(default)]
    pub planks: Vec<Plank>,
}

impl Column {
    /// Unclipped column; `top`/`bottom` start at the infinity sentinels.
    pub fn new(left: f64, width: f64) -> Self {
        Self {
            left,
            width,
            top: f64::INFINITY,
            bottom: f64::NEG_INFINITY,
            planks: Vec::new(),
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Sum of the lengths of the planks currently laid in the column.
    pub fn filled_length(&self) -> f64 {
        self.planks.iter().map(|p| p.length).sum()
    }

    /// Move the column horizontally, carrying its planks along.
    pub fn move_to(&mut self, left: f64) {
        self.left = left;
        for plank in &mut self.planks {
            plank.left = left;
        }
    }
}

/// Allocator for user-facing plank ids and internal plank identities.
///
/// Owned by whoever lays out a room and reset at the start of every layout,
/// so the same input always yields the same numbering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlankIds {
    next_id: u32,
    next_uid: u64,
}

impl Default for PlankIds {
    fn default() -> Self {
        Self {
            next_id: 1,
            next_uid: 1,
        }
    }
}

impl PlankIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocator that continues after the highest id and uid among `planks`.
    pub fn resume_after<'a>(planks: impl IntoIterator<Item = &'a Plank>) -> Self {
        let mut ids = Self::default();
        for plank in planks {
            ids.next_id = ids.next_id.max(plank.id + 1);
            ids.next_uid = ids.next_uid.max(plank.uid + 1);
        }
        ids
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn next_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn next_uid(&mut self) -> u64 {
        let uid = self.next_uid;
        self.next_uid += 1;
        uid
    }

    /// Next id that [`PlankIds::next_id`] would return.
    pub fn peek_id(&self) -> u32 {
        self.next_id
    }

    /// Fresh plank with a new id and uid.
    pub fn plank(&mut self, width: f64, length: f64) -> Plank {
        let id = self.next_id();
        self.piece_of(id, width, length)
    }

    /// Fresh piece sharing `id` with another piece of the same board.
    pub fn piece_of(&mut self, id: u32, width: f64, length: f64) -> Plank {
        Plank::new(id, self.next_uid(), width, length)
    }
}
