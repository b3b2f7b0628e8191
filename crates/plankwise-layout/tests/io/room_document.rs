use plankwise_core::{Column, CutEnd, LayoutParameters, Plank, Vertex};
use plankwise_layout::{Room, RoomDocument};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::TempDir;

fn l_shape() -> Vec<Vertex> {
    vec![
        Vertex::new(0.0, 0.0, "A"),
        Vertex::new(250.0, 0.0, "B"),
        Vertex::new(250.0, 120.0, "C"),
        Vertex::new(400.0, 120.0, "D"),
        Vertex::new(400.0, 380.0, "E"),
        Vertex::new(0.0, 380.0, "F"),
    ]
}

fn laid_out_room() -> Room {
    let params = LayoutParameters::default().with_start(-3.0, 7.5);
    let mut room = Room::new(l_shape(), params).unwrap();
    room.add_stock(42.0, CutEnd::Top).unwrap();
    room.recompute().unwrap();
    room.shuffle_with(&mut StdRng::seed_from_u64(11));
    room
}

#[test]
fn test_save_and_load_restores_layout() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("room.json");

    let room = laid_out_room();
    let document = RoomDocument::from_room("Hallway", &room);
    document.save_to_file(&file_path).expect("save failed");

    let loaded = RoomDocument::load_from_file(&file_path).expect("load failed");
    assert_eq!(loaded.metadata.name, "Hallway");
    assert!(loaded.has_layout());
    assert_eq!(loaded.summary, room.summary());

    let restored = loaded.into_room().unwrap();
    assert_eq!(restored.columns(), room.columns());
    assert_eq!(restored.partials(), room.partials());
    assert_eq!(restored.params(), room.params());
    assert_eq!(restored.vertices(), room.vertices());

    let summary = restored.summary().unwrap();
    let original = room.summary().unwrap();
    assert_eq!(summary.planks_needed, original.planks_needed);
    assert_eq!(summary.cuts, original.cuts);
    assert!((summary.waste - original.waste).abs() < 1e-9);
}

#[test]
fn test_reload_then_relayout_matches_original() {
    let room = laid_out_room();
    let json = RoomDocument::from_room("again", &room).to_json().unwrap();

    let mut restored = RoomDocument::from_json(&json).unwrap().into_room().unwrap();
    let mut fresh = Room::new(l_shape(), *room.params()).unwrap();
    fresh.add_stock(42.0, CutEnd::Top).unwrap();

    assert_eq!(restored.recompute().unwrap(), fresh.recompute().unwrap());
    assert_eq!(restored.columns(), fresh.columns());
}

#[test]
fn test_document_without_columns_needs_layout() {
    let document = RoomDocument::new("blank", l_shape(), LayoutParameters::default());
    let json = document.to_json().unwrap();
    let room = RoomDocument::from_json(&json).unwrap().into_room().unwrap();
    assert!(!room.is_laid_out());
    assert!(room.columns().is_empty());
}

#[test]
fn test_diagonal_outline_is_rejected_on_load() {
    let json = r#"{
        "vertices": [
            {"x": 0, "y": 0, "id": "A"},
            {"x": 100, "y": 0, "id": "B"},
            {"x": 80, "y": 100, "id": "C"},
            {"x": 0, "y": 100, "id": "D"}
        ]
    }"#;
    let err = RoomDocument::from_json(json).unwrap().into_room().unwrap_err();
    assert!(err.to_string().contains("invalid room"));
    assert!(format!("{:#}", err).contains("not axis-aligned"));
}

#[test]
fn test_load_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let err = RoomDocument::load_from_file(temp_dir.path().join("nope.json")).unwrap_err();
    assert!(err.to_string().contains("Failed to read room file"));
}

#[test]
fn test_inverted_saved_column_is_rejected_on_load() {
    let mut column = Column::new(0.0, 12.5);
    column.top = 100.0;
    column.bottom = 0.0;
    column
        .planks
        .push(Plank::new(1, 1, 12.5, -100.0).with_cut_end(CutEnd::Bottom));

    let mut document = RoomDocument::new("broken", l_shape(), LayoutParameters::default());
    document.columns.push(column);
    let json = document.to_json().unwrap();

    let err = RoomDocument::from_json(&json).unwrap().into_room().unwrap_err();
    assert!(err.to_string().contains("invalid room"));
    assert!(format!("{:#}", err).contains("not inside the room"));
}

#[test]
fn test_negative_saved_plank_is_rejected_on_load() {
    let mut column = Column::new(0.0, 12.5);
    column.top = 0.0;
    column.bottom = 380.0;
    column
        .planks
        .push(Plank::new(4, 9, 12.5, -20.0).with_cut_end(CutEnd::Bottom));

    let mut document = RoomDocument::new("broken", l_shape(), LayoutParameters::default());
    document.columns.push(column);
    let json = document.to_json().unwrap();

    let err = RoomDocument::from_json(&json).unwrap().into_room().unwrap_err();
    assert!(format!("{:#}", err).contains("Plank #4 has invalid length -20"));
}

#[test]
fn test_vertices_are_written_with_id_key() {
    let json = RoomDocument::new("keys", l_shape(), LayoutParameters::default())
        .to_json()
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["vertices"][0]["id"], "A");
    assert!(value["vertices"][0].get("label").is_none());
}
