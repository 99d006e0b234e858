//! Property tests for archanon-causal: termination and agreement with paths.

use proptest::prelude::*;

use archanon_causal::{Deduction, DeductionEngine};
use archanon_memory::GraphStore;

/// Random is_a graphs, cycles allowed.
fn hierarchy_strategy(n: usize) -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0..n, 0..n), 0..n * 3)
}

fn build(edges: &[(usize, usize)]) -> GraphStore {
    let mut store = GraphStore::new();
    for &(s, t) in edges {
        store.add_relationship(&format!("n{s}"), &format!("n{t}"), "is_a");
    }
    store
}

proptest! {
    #[test]
    fn inheritance_agrees_with_is_a_reachability(
        edges in hierarchy_strategy(12),
        from in 0_usize..12,
        to in 0_usize..12,
    ) {
        let store = build(&edges);
        let engine = DeductionEngine::new(&store);
        let (src, dst) = (format!("n{from}"), format!("n{to}"));

        let reachable = src == dst
            || store
                .find_path(&src, &dst)
                .is_some_and(|path| path.len() > 1);
        prop_assert_eq!(engine.deduce_property(&src, &dst), reachable);
    }

    #[test]
    fn inheritance_chains_are_walkable(
        edges in hierarchy_strategy(12),
        from in 0_usize..12,
        to in 0_usize..12,
    ) {
        let store = build(&edges);
        let engine = DeductionEngine::new(&store);
        let (src, dst) = (format!("n{from}"), format!("n{to}"));

        if let Deduction::Inherited { via } = engine.explain_property(&src, &dst) {
            prop_assert_eq!(via.first(), Some(&src));
            prop_assert_eq!(via.last(), Some(&dst));
            for pair in via.windows(2) {
                prop_assert!(store.query_relationships(&pair[0], "is_a").contains(&pair[1]));
            }
            // BFS yields a shortest chain.
            let shortest = store.find_path(&src, &dst).map(|p| p.len());
            prop_assert_eq!(Some(via.len()), shortest);
        }
    }
}
