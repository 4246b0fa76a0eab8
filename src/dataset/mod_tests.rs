use super::*;

fn record(category: &str, nodes: u32, instance: &str) -> Record {
    Record {
        nodes,
        edges: u64::from(nodes) * 2,
        category: category.to_string(),
        instance: instance.to_string(),
        edmonds_karp_ms: 1.0,
        dinic_ms: 0.5,
    }
}

#[test]
fn empty_dataset_has_no_categories() {
    let dataset = Dataset::default();
    assert!(dataset.is_empty());
    assert!(dataset.categories().is_empty());
}

#[test]
fn categories_follow_canonical_order() {
    let dataset = Dataset::new(
        Vec::new(),
        vec![
            record("Custom", 100, "1"),
            record("Dicht", 100, "1"),
            record("Dünn", 100, "1"),
            record("Dicht", 200, "1"),
        ],
    );
    assert_eq!(dataset.categories(), vec!["Dünn", "Dicht", "Custom"]);
}

#[test]
fn category_subset_matches_exact_label() {
    let dataset = Dataset::new(
        Vec::new(),
        vec![
            record("Dicht", 100, "1"),
            record("dicht", 100, "2"),
            record("Dicht", 200, "1"),
        ],
    );
    let subset = dataset.category("Dicht");
    assert_eq!(subset.len(), 2);
    assert!(subset.iter().all(|r| r.category == "Dicht"));
    assert!(dataset.category("Unit-Cap").is_empty());
}
