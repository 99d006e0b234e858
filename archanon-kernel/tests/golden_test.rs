//! Golden scenarios replayed through the kernel facade.

use archanon_core::Value;
use archanon_kernel::{Coordinator, Triplet};
use test_fixtures::load_golden_deduction;

#[test]
fn golden_scenarios_through_the_kernel() {
    for (file, scenario) in load_golden_deduction() {
        let mut kernel = Coordinator::new();
        let report = kernel.learn(
            scenario
                .facts
                .iter()
                .map(|f| Triplet::new(&f.subject, &f.relation, &f.object)),
        );
        assert_eq!(report.facts_learned, scenario.facts.len(), "{file}");

        for q in &scenario.queries {
            assert_eq!(
                kernel.query(&q.source, &q.property),
                q.expected,
                "{file}: {} has {}?",
                q.source,
                q.property
            );
        }

        let events = kernel.events();
        assert_eq!(events.len(), scenario.facts.len() + scenario.queries.len(), "{file}");
        for (event, q) in events[scenario.facts.len()..].iter().zip(&scenario.queries) {
            assert_eq!(event.result, Value::from(q.expected), "{file}");
        }

        kernel.reset();
        for q in scenario.queries.iter().filter(|q| q.source != q.property) {
            assert!(!kernel.query(&q.source, &q.property), "{file}: survived reset");
        }
    }
}
