use tricount::algebra::SparseMatrix;
use tricount::{compare_methods, Adjacency, Method, TriangleCountError, TriangleCounter};

fn directed_cycle() -> Adjacency {
    let mut a = SparseMatrix::new(3, 3).unwrap();
    a.set_element(1u32, 0, 1).unwrap();
    a.set_element(1u32, 1, 2).unwrap();
    a.set_element(1u32, 2, 0).unwrap();
    a.wait().unwrap();
    a
}

#[test]
fn test_failure_is_isolated() {
    // Naive cannot normalize a directed cycle; the other methods still run
    let report = compare_methods(&directed_cycle(), &Method::COMPARISON_ORDER, &TriangleCounter::default());

    assert_eq!(report.outcomes.len(), 7);
    let failed: Vec<Method> = report.failures().map(|o| o.method).collect();
    assert!(failed.contains(&Method::Naive));
    assert!(!report.all_succeeded());
    assert!(report
        .outcomes
        .iter()
        .any(|o| o.method == Method::Burkhardt && o.is_ok()));
}

#[test]
fn test_structural_errors_reported_per_method() {
    let rect = SparseMatrix::<u32>::new(3, 4).unwrap();
    let report = compare_methods(&rect, &[Method::Cohen, Method::Sandia], &TriangleCounter::default());

    assert_eq!(report.failures().count(), 2);
    assert_eq!(report.consensus(), None);
    for outcome in &report.outcomes {
        assert!(matches!(
            outcome.result,
            Err(TriangleCountError::AlgebraOperationFailure(_))
                | Err(TriangleCountError::StructuralSelectionFailure(_))
        ));
    }
}

#[test]
fn test_report_json() {
    let mut a = SparseMatrix::new(3, 3).unwrap();
    for (u, v) in [(0, 1), (1, 2), (0, 2)] {
        a.set_element(1u32, u, v).unwrap();
        a.set_element(1u32, v, u).unwrap();
    }
    a.wait().unwrap();

    let report = compare_methods(&a, &[Method::SandiaDot, Method::Naive], &TriangleCounter::default());
    let json = serde_json::to_value(&report).unwrap();
    let outcomes = json["outcomes"].as_array().unwrap();
    assert_eq!(outcomes.len(), 2);
    assert_eq!(outcomes[0]["method"], "SandiaDot");
    assert_eq!(outcomes[1]["triangles"], 1);
}
