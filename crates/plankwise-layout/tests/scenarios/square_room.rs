use plankwise_core::{CutEnd, LayoutParameters, Vertex};
use plankwise_layout::{LayoutResult, Room};

fn square_100() -> Vec<Vertex> {
    vec![
        Vertex::new(0.0, 0.0, "A"),
        Vertex::new(100.0, 0.0, "B"),
        Vertex::new(100.0, 100.0, "C"),
        Vertex::new(0.0, 100.0, "D"),
    ]
}

fn params(min_plank_length: f64) -> LayoutParameters {
    LayoutParameters::new(10.0, 60.0)
        .with_cut_thickness(0.0)
        .with_min_plank_length(min_plank_length)
}

#[test]
fn test_offcut_equal_to_minimum_is_wasted() {
    let mut room = Room::new(square_100(), params(20.0)).unwrap();
    let result = room.recompute().unwrap();

    assert_eq!(room.columns().len(), 10);
    for column in room.columns() {
        assert_eq!(column.height(), 100.0);
        let pieces: Vec<(f64, CutEnd)> = column.planks.iter().map(|p| (p.length, p.cut_end)).collect();
        assert_eq!(pieces, vec![(60.0, CutEnd::None), (40.0, CutEnd::Bottom)]);
    }

    // 60 - 40 - 0 = 20 is not longer than 20, so nothing is banked.
    assert!(room.partials().is_empty());
    assert_eq!(result.planks_needed, 20);
    assert_eq!(result.cuts, 10);
    assert_eq!(result.covered_length, 1000.0);
    assert_eq!(result.waste, 200.0);
}

#[test]
fn test_banked_offcuts_chain_through_columns() {
    let mut room = Room::new(square_100(), params(15.0)).unwrap();
    let result = room.recompute().unwrap();

    let starts: Vec<(f64, CutEnd)> = room
        .columns()
        .iter()
        .map(|c| (c.planks[0].length, c.planks[0].cut_end))
        .collect();
    assert_eq!(
        starts,
        vec![
            (60.0, CutEnd::None),
            (20.0, CutEnd::Top),
            (40.0, CutEnd::Top),
            (60.0, CutEnd::None),
            (20.0, CutEnd::Top),
            (40.0, CutEnd::Top),
            (60.0, CutEnd::None),
            (20.0, CutEnd::Top),
            (40.0, CutEnd::Top),
            (60.0, CutEnd::None),
        ]
    );

    assert_eq!(result.planks_needed, 17);
    assert_eq!(result.cuts, 7);
    assert_eq!(result.waste, 20.0);

    let left: Vec<f64> = room.partials().iter().map(|p| p.length).collect();
    assert_eq!(left, vec![20.0]);
    let last_end = room.columns()[9].planks.last().unwrap();
    assert_eq!(room.partials().iter().next().unwrap().id, last_end.id);
}

#[test]
fn test_height_multiple_of_plank_length() {
    let outline = vec![
        Vertex::new(0.0, 0.0, "A"),
        Vertex::new(30.0, 0.0, "B"),
        Vertex::new(30.0, 120.0, "C"),
        Vertex::new(0.0, 120.0, "D"),
    ];
    let mut room = Room::new(outline, params(15.0)).unwrap();
    let result = room.recompute().unwrap();

    assert_eq!(result.cuts, 0);
    assert_eq!(result.waste, 0.0);
    assert_eq!(result.planks_needed, 6);
    assert!(room.cutting_schedule().is_empty());
}

#[test]
fn test_schedule_pairs_each_cut() {
    let mut room = Room::new(square_100(), params(15.0).with_cut_thickness(0.5)).unwrap();
    room.recompute().unwrap();
    let schedule = room.cutting_schedule();

    assert_eq!(schedule.len(), room.summary().unwrap().cuts);
    for entry in &schedule.entries {
        let bottom = entry.bottom_piece.unwrap();
        if let Some(top) = entry.top_piece {
            assert!((bottom + top + 0.5 - 60.0).abs() < 1e-9);
        }
    }
}

#[test]
fn test_counters_match_recount() {
    let mut room = Room::new(square_100(), LayoutParameters::new(12.5, 91.5)).unwrap();
    let result = room.recompute().unwrap();
    let recount = LayoutResult::tally(room.columns(), 91.5);
    assert_eq!(recount.planks_needed, result.planks_needed);
    assert_eq!(recount.cuts, result.cuts);
}
