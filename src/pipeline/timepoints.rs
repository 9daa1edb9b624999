use std::collections::BTreeSet;

use crate::input::ObsTable;
use crate::pipeline::PipelineError;

/// Resolves the ordered `(pre, post)` timepoint pair to compare.
///
/// An explicit pair is returned verbatim, without checking that either value
/// occurs in the data. Otherwise the pair is inferred from the table: there
/// must be exactly two distinct values in the timepoint column, returned in
/// ascending order.
pub fn resolve_timepoints(
    table: &ObsTable,
    timepoint_field: &str,
    explicit: Option<(String, String)>,
) -> Result<(String, String), PipelineError> {
    if let Some(pair) = explicit {
        return Ok(pair);
    }

    let col = table
        .column_index(timepoint_field)
        .ok_or_else(|| PipelineError::MissingColumn(timepoint_field.to_string()))?;

    let mut distinct = BTreeSet::new();
    for row in &table.rows {
        if let Some(value) = row.get(col) {
            distinct.insert(value.clone());
        }
    }

    if distinct.len() != 2 {
        return Err(PipelineError::AmbiguousTimepoints {
            column: timepoint_field.to_string(),
            found: distinct.into_iter().collect(),
        });
    }

    let mut values = distinct.into_iter();
    let pre = values.next().unwrap_or_default();
    let post = values.next().unwrap_or_default();
    tracing::info!(%pre, %post, "inferred timepoint order");
    Ok((pre, post))
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/timepoints.rs"]
mod tests;
