pub mod filter;
pub mod timepoints;

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Input threshold of at least 1 (got {0})")]
    InvalidThreshold(u32),
    #[error(
        "{column} column does not have 2 unique values (found {}: {}), filter data or use order argument",
        .found.len(),
        .found.join(", ")
    )]
    AmbiguousTimepoints { column: String, found: Vec<String> },
    #[error("column not present in table: {0}")]
    MissingColumn(String),
}
