use super::resolve_timepoints;
use crate::input::ObsTable;
use crate::pipeline::PipelineError;

fn table_with_timepoints(values: &[&str]) -> ObsTable {
    ObsTable {
        columns: vec![
            "cell_id".to_string(),
            "timepoint".to_string(),
            "clone_id".to_string(),
            "cell_type".to_string(),
        ],
        rows: values
            .iter()
            .enumerate()
            .map(|(i, tp)| {
                vec![
                    format!("cell{i}"),
                    tp.to_string(),
                    "c1".to_string(),
                    "T cell".to_string(),
                ]
            })
            .collect(),
    }
}

#[test]
fn test_two_values_resolve_ascending() {
    let table = table_with_timepoints(&["B", "A", "B", "A"]);
    let pair = resolve_timepoints(&table, "timepoint", None).unwrap();
    assert_eq!(pair, ("A".to_string(), "B".to_string()));
}

#[test]
fn test_resolution_ignores_row_order() {
    let forward = table_with_timepoints(&["A", "A", "B"]);
    let backward = table_with_timepoints(&["B", "B", "A"]);
    assert_eq!(
        resolve_timepoints(&forward, "timepoint", None).unwrap(),
        resolve_timepoints(&backward, "timepoint", None).unwrap()
    );
}

#[test]
fn test_single_value_is_ambiguous() {
    let table = table_with_timepoints(&["A", "A"]);
    let err = resolve_timepoints(&table, "timepoint", None).unwrap_err();
    match err {
        PipelineError::AmbiguousTimepoints { column, found } => {
            assert_eq!(column, "timepoint");
            assert_eq!(found, ["A"]);
        }
        other => panic!("expected AmbiguousTimepoints, got {other:?}"),
    }
}

#[test]
fn test_three_values_are_ambiguous() {
    let table = table_with_timepoints(&["A", "B", "C"]);
    let err = resolve_timepoints(&table, "timepoint", None).unwrap_err();
    match err {
        PipelineError::AmbiguousTimepoints { found, .. } => {
            assert_eq!(found, ["A", "B", "C"]);
        }
        other => panic!("expected AmbiguousTimepoints, got {other:?}"),
    }
}

#[test]
fn test_explicit_order_returned_verbatim() {
    // Values absent from the data are accepted without validation.
    let table = table_with_timepoints(&["A", "B"]);
    let pair = resolve_timepoints(
        &table,
        "timepoint",
        Some(("week8".to_string(), "week0".to_string())),
    )
    .unwrap();
    assert_eq!(pair, ("week8".to_string(), "week0".to_string()));
}

#[test]
fn test_unknown_column_is_an_error() {
    let table = table_with_timepoints(&["A", "B"]);
    let err = resolve_timepoints(&table, "sample_day", None).unwrap_err();
    assert!(matches!(err, PipelineError::MissingColumn(_)));
}
