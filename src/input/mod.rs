use std::path::{Path, PathBuf};

pub mod table;

use table::read_table;

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("obs table {path} has no header row")]
    Empty { path: PathBuf },
    #[error("Missing field in obs: {0}")]
    MissingField(String),
}

/// In-memory observation table: one row per cell, insertion order preserved.
///
/// After [`load_obs`] the layout is fixed to four columns: `cell_id` plus the
/// three requested annotation fields.
#[derive(Debug, Clone)]
pub struct ObsTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ObsTable {
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }
}

/// Loads the annotated observation table and projects it down to the cell id
/// plus the three named annotation fields.
///
/// The first header column is taken as the cell identifier and renamed to
/// `cell_id`. The three fields must be present among the remaining columns;
/// any other columns are dropped. No further validation is performed here,
/// malformed file contents surface as whatever the reader reports.
pub fn load_obs(
    path: &Path,
    timepoint_field: &str,
    clone_field: &str,
    subtype_field: &str,
) -> Result<ObsTable, InputError> {
    let raw = read_table(path)?;
    if raw.columns.is_empty() {
        return Err(InputError::Empty {
            path: path.to_path_buf(),
        });
    }

    // Annotation columns are everything past the id column.
    let annotation = &raw.columns[1..];
    for field in [clone_field, timepoint_field, subtype_field] {
        if !annotation.iter().any(|c| c == field) {
            return Err(InputError::MissingField(field.to_string()));
        }
    }

    tracing::info!(
        path = %path.display(),
        rows = raw.rows.len(),
        columns = raw.columns.len(),
        "loaded obs table"
    );

    let mut selected = Vec::with_capacity(3);
    for field in [timepoint_field, clone_field, subtype_field] {
        for (idx, name) in raw.columns.iter().enumerate().skip(1) {
            if name == field {
                selected.push(idx);
                break;
            }
        }
    }

    let columns = vec![
        "cell_id".to_string(),
        timepoint_field.to_string(),
        clone_field.to_string(),
        subtype_field.to_string(),
    ];

    let mut rows = Vec::with_capacity(raw.rows.len());
    for raw_row in &raw.rows {
        let mut row = Vec::with_capacity(4);
        row.push(raw_row.first().cloned().unwrap_or_default());
        for &idx in &selected {
            row.push(raw_row.get(idx).cloned().unwrap_or_default());
        }
        rows.push(row);
    }

    Ok(ObsTable { columns, rows })
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
