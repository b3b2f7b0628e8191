use plankwise_core::{CutEnd, LayoutParameters, Vertex};
use plankwise_layout::Room;

/// 100 wide, 90 deep, with the top-right 40x40 corner missing.
fn l_shape() -> Vec<Vertex> {
    vec![
        Vertex::new(0.0, 0.0, "A"),
        Vertex::new(60.0, 0.0, "B"),
        Vertex::new(60.0, 40.0, "C"),
        Vertex::new(100.0, 40.0, "D"),
        Vertex::new(100.0, 90.0, "E"),
        Vertex::new(0.0, 90.0, "F"),
    ]
}

fn params() -> LayoutParameters {
    LayoutParameters::new(10.0, 60.0)
        .with_cut_thickness(0.0)
        .with_min_plank_length(15.0)
}

#[test]
fn test_columns_follow_the_step() {
    let mut room = Room::new(l_shape(), params()).unwrap();
    room.recompute().unwrap();

    let extents: Vec<(f64, f64, f64)> = room
        .columns()
        .iter()
        .map(|c| (c.left, c.top, c.bottom))
        .collect();
    assert_eq!(extents.len(), 10);
    for (i, &(left, top, bottom)) in extents.iter().enumerate() {
        assert_eq!(left, i as f64 * 10.0);
        assert_eq!(top, if i < 6 { 0.0 } else { 40.0 });
        assert_eq!(bottom, 90.0);
    }
}

#[test]
fn test_counts() {
    let mut room = Room::new(l_shape(), params()).unwrap();
    let result = room.recompute().unwrap();

    // Six 90-deep columns alternate 60+30 (banking 30) and 30+60.
    // Four 50-deep columns each cut 50 and waste the 10 offcut.
    assert_eq!(result.planks_needed, 13);
    assert_eq!(result.cuts, 7);
    assert_eq!(result.covered_length, 740.0);
    assert_eq!(result.waste, 40.0);
    assert!(room.partials().is_empty());

    let shallow = &room.columns()[7];
    assert_eq!(shallow.planks.len(), 1);
    assert_eq!(shallow.planks[0].cut_end, CutEnd::Bottom);
    assert_eq!(shallow.planks[0].top, 40.0);
}

#[test]
fn test_shuffle_keeps_deep_and_shallow_groups_apart() {
    let mut room = Room::new(l_shape(), params()).unwrap();
    room.recompute().unwrap();
    room.shuffle();

    for column in room.columns() {
        let expected = if column.left < 60.0 { 90.0 } else { 50.0 };
        assert_eq!(column.height(), expected);
        assert!(column.planks.iter().all(|p| p.left == column.left));
    }
}

#[test]
fn test_start_left_offset_shifts_columns() {
    let mut room = Room::new(l_shape(), params().with_start(5.0, 0.0)).unwrap();
    room.recompute().unwrap();

    let lefts: Vec<f64> = room.columns().iter().map(|c| c.left).collect();
    assert_eq!(lefts.first(), Some(&5.0));
    assert_eq!(lefts.last(), Some(&95.0));
    // The column at 55 straddles the step and takes the higher wall.
    assert_eq!(room.columns()[5].top, 0.0);
    assert_eq!(room.columns()[6].top, 40.0);
}
