use std::collections::{HashMap, HashSet};

use crate::input::ObsTable;
use crate::pipeline::PipelineError;

/// The threshold is checked once, before any data is touched.
pub fn validate_threshold(threshold: u32) -> Result<(), PipelineError> {
    if threshold < 1 {
        return Err(PipelineError::InvalidThreshold(threshold));
    }
    Ok(())
}

/// Keeps only the cells of clones that persist across both timepoints.
///
/// Rows are first restricted to the two resolved timepoints. A clone is
/// persistent when its cell count is at least `threshold` in the pre rows
/// and, independently, in the post rows (ties at exactly the threshold are
/// kept). The returned table holds the restricted rows of persistent clones
/// in their original order.
pub fn filter_persistent(
    table: &ObsTable,
    timepoint_field: &str,
    clone_field: &str,
    order: &(String, String),
    threshold: u32,
) -> Result<ObsTable, PipelineError> {
    let tp_col = table
        .column_index(timepoint_field)
        .ok_or_else(|| PipelineError::MissingColumn(timepoint_field.to_string()))?;
    let clone_col = table
        .column_index(clone_field)
        .ok_or_else(|| PipelineError::MissingColumn(clone_field.to_string()))?;

    let (pre, post) = order;

    let mut pre_counts: HashMap<&str, u32> = HashMap::new();
    let mut post_counts: HashMap<&str, u32> = HashMap::new();
    for row in &table.rows {
        let tp = row.get(tp_col).map(String::as_str).unwrap_or_default();
        let clone_id = row.get(clone_col).map(String::as_str).unwrap_or_default();
        if tp == pre {
            *pre_counts.entry(clone_id).or_insert(0) += 1;
        }
        if tp == post {
            *post_counts.entry(clone_id).or_insert(0) += 1;
        }
    }

    let persistent: HashSet<&str> = pre_counts
        .iter()
        .filter(|&(clone_id, &count)| {
            count >= threshold && post_counts.get(*clone_id).is_some_and(|&c| c >= threshold)
        })
        .map(|(&clone_id, _)| clone_id)
        .collect();

    let rows: Vec<Vec<String>> = table
        .rows
        .iter()
        .filter(|row| {
            let tp = row.get(tp_col).map(String::as_str).unwrap_or_default();
            let clone_id = row.get(clone_col).map(String::as_str).unwrap_or_default();
            (tp == pre || tp == post) && persistent.contains(clone_id)
        })
        .cloned()
        .collect();

    tracing::info!(
        clones = persistent.len(),
        rows_in = table.rows.len(),
        rows_out = rows.len(),
        "filtered persistent clones"
    );

    Ok(ObsTable {
        columns: table.columns.clone(),
        rows,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/filter.rs"]
mod tests;
