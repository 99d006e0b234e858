//! Property tests for archanon-memory graph invariants.

use proptest::prelude::*;

use archanon_memory::GraphStore;

const LABELS: [&str; 3] = ["is_a", "has_property", "causes"];

fn edge_strategy(n: usize) -> impl Strategy<Value = Vec<(usize, usize, usize)>> {
    prop::collection::vec((0..n, 0..n, 0..LABELS.len()), 0..n * 3)
}

fn build(edges: &[(usize, usize, usize)]) -> GraphStore {
    let mut store = GraphStore::new();
    for &(s, t, l) in edges {
        store.add_relationship(&format!("n{s}"), &format!("n{t}"), LABELS[l]);
    }
    store
}

proptest! {
    #[test]
    fn every_edge_endpoint_is_a_node(edges in edge_strategy(12)) {
        let store = build(&edges);
        for &(s, t, _) in &edges {
            let (src, dst) = (format!("n{s}"), format!("n{t}"));
            prop_assert!(store.contains_node(&src));
            prop_assert!(store.get_attributes(&dst).is_some());
        }
        prop_assert!(store.check_consistency().is_ok());
    }

    #[test]
    fn edge_count_equals_distinct_triples(edges in edge_strategy(10)) {
        let store = build(&edges);
        let distinct: std::collections::HashSet<_> = edges.iter().copied().collect();
        prop_assert_eq!(store.edge_count(), distinct.len());
    }

    #[test]
    fn replaying_edges_changes_nothing(edges in edge_strategy(10)) {
        let mut store = build(&edges);
        let before = store.stats();
        for &(s, t, l) in &edges {
            let (src, dst) = (format!("n{s}"), format!("n{t}"));
            let inserted = store.add_relationship(&src, &dst, LABELS[l]);
            prop_assert!(!inserted, "{} -{}-> {} was inserted twice", src, LABELS[l], dst);
        }
        prop_assert_eq!(store.stats(), before);
    }

    #[test]
    fn found_paths_are_walkable_and_start_and_end_correctly(
        edges in edge_strategy(10),
        from in 0_usize..10,
        to in 0_usize..10,
    ) {
        let store = build(&edges);
        let (src, dst) = (format!("n{from}"), format!("n{to}"));
        if let Some(path) = store.find_path(&src, &dst) {
            prop_assert_eq!(path.first(), Some(&src));
            prop_assert_eq!(path.last(), Some(&dst));
            for pair in path.windows(2) {
                let linked = LABELS
                    .iter()
                    .any(|l| store.query_relationships(&pair[0], l).contains(&pair[1]));
                prop_assert!(linked, "{} -> {} is not an edge", pair[0], pair[1]);
            }
        }
    }
}
