use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::{Map, Value};

use crate::input::ObsTable;

pub mod template;

use template::substitute;

pub const DASHBOARD_TITLE: &str = "Sankey";

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to read template {path}: {source}")]
    Template {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize sankey config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration object embedded into the dashboard page. Key names are part
/// of the contract with the browser-side sankey app.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SankeyConfig {
    pub data: Vec<Map<String, Value>>,
    pub width: u32,
    pub height: u32,
    pub subset_param: String,
    pub clone_param: String,
    pub timepoint_param: String,
    pub timepoint_order: [String; 2],
}

/// The literal string "nan" is what a stringified missing annotation looks
/// like in the source table; the app expects "None" instead.
fn normalize_value(value: &str) -> &str {
    if value == "nan" { "None" } else { value }
}

/// Converts each retained row to a column-name-to-value record, normalizing
/// every field through [`normalize_value`]. Column order is preserved.
pub fn build_records(table: &ObsTable) -> Vec<Map<String, Value>> {
    table
        .rows
        .iter()
        .map(|row| {
            let mut record = Map::new();
            for (col, value) in table.columns.iter().zip(row) {
                record.insert(
                    col.clone(),
                    Value::String(normalize_value(value).to_string()),
                );
            }
            record
        })
        .collect()
}

pub fn output_file_name(dashboard_id: &str) -> String {
    format!("sankey_{dashboard_id}.html")
}

/// Renders the template with the embedded JSON payload and writes the
/// dashboard file. Creates or truncates exactly one file.
pub fn write_dashboard(
    config: &SankeyConfig,
    template_path: &Path,
    out_dir: &Path,
    dashboard_id: &str,
) -> Result<PathBuf, RenderError> {
    let payload = serde_json::to_string_pretty(config)?;

    let template = fs::read_to_string(template_path).map_err(|source| RenderError::Template {
        path: template_path.to_path_buf(),
        source,
    })?;

    let html = substitute(
        &template,
        &[
            ("data", payload.as_str()),
            ("dashboard", DASHBOARD_TITLE),
            ("dashboard_id", dashboard_id),
        ],
    );

    let out_path = out_dir.join(output_file_name(dashboard_id));
    fs::write(&out_path, html).map_err(|source| RenderError::Write {
        path: out_path.clone(),
        source,
    })?;

    tracing::info!(path = %out_path.display(), cells = config.data.len(), "wrote sankey dashboard");

    Ok(out_path)
}

#[cfg(test)]
#[path = "../../tests/src_inline/render/tests.rs"]
mod tests;
