//! Column shuffling
//!
//! Columns of equal height laid strictly left to right make their end joints
//! climb in a visible staircase. Swapping the positions of same-height columns
//! breaks the pattern without changing which planks are bought or cut.

use crate::inventory::PartialPool;
use plankwise_core::Column;
use rand::Rng;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// Group column indices by exact height. Index 0 is left out when `pin_first`.
fn bins_by_height(columns: &[Column], pin_first: bool) -> BTreeMap<u64, Vec<usize>> {
    let mut bins: BTreeMap<u64, Vec<usize>> = BTreeMap::new();
    let skip = usize::from(pin_first);
    for (index, column) in columns.iter().enumerate().skip(skip) {
        bins.entry(column.height().to_bits()).or_default().push(index);
    }
    bins
}

fn swap_positions(columns: &mut [Column], a: usize, b: usize) {
    let left_a = columns[a].left;
    let left_b = columns[b].left;
    columns[a].move_to(left_b);
    columns[b].move_to(left_a);
}

/// Randomly permute the positions of same-height columns and re-sort them
/// left to right.
///
/// Each bin of `n > 1` columns gets `2n` transpositions, every member in turn
/// swapping with a random other member. With `pin_first` the first column
/// keeps its place.
pub fn shuffle_columns<R: Rng + ?Sized>(columns: &mut Vec<Column>, pin_first: bool, rng: &mut R) {
    for (height_bits, bin) in bins_by_height(columns, pin_first) {
        let n = bin.len();
        if n < 2 {
            continue;
        }
        debug!(
            "Shuffling {} columns of height {:.2}",
            n,
            f64::from_bits(height_bits)
        );
        for k in 0..2 * n {
            let i = k % n;
            let mut j = rng.random_range(0..n - 1);
            if j >= i {
                j += 1;
            }
            swap_positions(columns, bin[i], bin[j]);
        }
    }

    columns.sort_by(|a, b| a.left.total_cmp(&b.left));
}

/// Renumber planks in reading order: columns left to right, planks top to
/// bottom. Pieces that shared an id keep sharing one, including banked
/// partials. Returns the next free id.
pub fn renumber(columns: &mut [Column], pool: &mut PartialPool) -> u32 {
    let mut mapping: HashMap<u32, u32> = HashMap::new();
    let mut next = 1;
    let mut assign = |old: u32| {
        *mapping.entry(old).or_insert_with(|| {
            let id = next;
            next += 1;
            id
        })
    };

    for column in columns.iter_mut() {
        column.planks.sort_by(|a, b| a.top.total_cmp(&b.top));
        for plank in &mut column.planks {
            plank.id = assign(plank.id);
        }
    }
    for plank in pool.iter_mut() {
        plank.id = assign(plank.id);
    }

    next
}
