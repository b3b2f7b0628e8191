use super::strategies::histogram_room;
use plankwise_core::validate_outline;
use plankwise_layout::measure;
use proptest::prelude::*;

proptest! {
    #[test]
    fn edges_are_ordered_and_bounds_contain_vertices(vertices in histogram_room()) {
        prop_assert!(validate_outline(&vertices).is_ok());

        let geometry = measure(&vertices);
        prop_assert!(!geometry.edges.is_empty());
        for edge in &geometry.edges {
            prop_assert!(edge.left <= edge.right);
        }
        for v in &vertices {
            prop_assert!(geometry.bounds.contains(v.x, v.y));
        }
    }

    #[test]
    fn every_horizontal_pair_becomes_an_edge(vertices in histogram_room()) {
        let n = vertices.len();
        let horizontal = (0..n)
            .filter(|&i| vertices[i].y == vertices[(i + 1) % n].y)
            .count();
        prop_assert_eq!(measure(&vertices).edges.len(), horizontal);
    }
}
