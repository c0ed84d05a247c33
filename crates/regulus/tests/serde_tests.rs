//! Tests for serde support of records and results.
#![cfg(feature = "serde")]

use std::sync::Arc;

use regulus::prelude::*;

/// Partition records read from host JSON; missing children default to none.
#[test]
fn test_msc_record_from_json() {
    let json = r#"{
        "name": "f",
        "pts_idx": [0, 1, 2],
        "partitions": [
            { "id": 0, "lvl": 1.0, "minmax_idx": [0, 2], "span": [0, 3], "children": [1] },
            { "id": 1, "lvl": 0.0, "minmax_idx": [0, 1], "span": [0, 2] }
        ]
    }"#;

    let msc: MscRecord = serde_json::from_str(json).unwrap();
    assert_eq!(msc.partitions.len(), 2);
    assert!(msc.partitions[1].children.is_empty());

    let dataset = Arc::new(
        Dataset::new(
            vec!["x".into(), "f".into()],
            vec![vec![0.0, 0.0], vec![1.0, 1.0], vec![2.0, 4.0]],
            1,
        )
        .unwrap(),
    );
    let tree = Regulus::new().build().unwrap().load(dataset, &msc).unwrap().unwrap();
    assert_eq!(tree.flatten(), msc);
}

#[test]
fn test_attribute_kind_lowercase() {
    assert_eq!(serde_json::to_string(&AttributeKind::Measure).unwrap(), "\"measure\"");
    let kind: AttributeKind = serde_json::from_str("\"dim\"").unwrap();
    assert_eq!(kind, AttributeKind::Dim);
}

#[test]
fn test_histogram_serializes() {
    let h = PersistenceHistogram {
        curve: vec![(0.5, 3), (1.0, 2)],
        x_domain: (f64::EPSILON, 1.0),
        y_domain: (0, 3),
    };
    let back: PersistenceHistogram = serde_json::from_str(&serde_json::to_string(&h).unwrap()).unwrap();
    assert_eq!(back, h);
}
