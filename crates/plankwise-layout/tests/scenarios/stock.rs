use plankwise_core::{CutEnd, Error, LayoutParameters, Vertex};
use plankwise_layout::Room;

fn corridor(length: f64) -> Vec<Vertex> {
    vec![
        Vertex::new(0.0, 0.0, "A"),
        Vertex::new(10.0, 0.0, "B"),
        Vertex::new(10.0, length, "C"),
        Vertex::new(0.0, length, "D"),
    ]
}

fn params() -> LayoutParameters {
    LayoutParameters::new(10.0, 60.0)
        .with_cut_thickness(0.0)
        .with_min_plank_length(15.0)
}

#[test]
fn test_stock_that_fits_saves_a_plank() {
    let mut room = Room::new(corridor(100.0), params()).unwrap();
    room.add_stock(40.0, CutEnd::Top).unwrap();
    let result = room.recompute().unwrap();

    assert_eq!(result.planks_needed, 1);
    assert_eq!(result.cuts, 0);
    let first = &room.columns()[0].planks[0];
    assert!(first.permanent);
    assert_eq!((first.top, first.length), (0.0, 40.0));
}

#[test]
fn test_stock_leaving_short_end_is_put_back() {
    let mut room = Room::new(corridor(100.0), params()).unwrap();
    let uid = room.add_stock(30.0, CutEnd::Top).unwrap();
    let result = room.recompute().unwrap();

    assert_eq!(result.planks_needed, 2);
    assert_eq!(result.cuts, 1);
    assert!(room.columns()[0].planks.iter().all(|p| !p.permanent));
    let stock: Vec<f64> = room.partials().iter().filter(|p| p.permanent).map(|p| p.length).collect();
    assert_eq!(stock, vec![30.0]);

    // Relayout renumbers the stock; it is still retractable.
    let stock_uid = room.partials().iter().find(|p| p.permanent).unwrap().uid;
    assert_eq!(stock_uid, uid);
    room.remove_plank(stock_uid).unwrap();
    assert!(room.partials().iter().all(|p| !p.permanent));
}

#[test]
fn test_stock_longer_than_column_is_skipped() {
    let mut room = Room::new(corridor(50.0), params()).unwrap();
    room.add_stock(55.0, CutEnd::Top).unwrap();
    let result = room.recompute().unwrap();

    assert_eq!(room.columns()[0].planks.len(), 1);
    assert_eq!(room.columns()[0].planks[0].length, 50.0);
    assert_eq!(result.planks_needed, 1);
    assert_eq!(room.partials().iter().filter(|p| p.permanent).count(), 1);
}

#[test]
fn test_removing_unknown_uid_fails() {
    let mut room = Room::new(corridor(100.0), params()).unwrap();
    room.recompute().unwrap();
    assert!(matches!(
        room.remove_plank(999),
        Err(Error::PlankNotFound { uid: 999 })
    ));
}
