use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::input::{InputError, ObsTable};

pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn Read>, InputError> {
    let file = File::open(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(MultiGzDecoder::new(BufReader::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Delimiter is picked from the file extension (ignoring a trailing `.gz`):
/// `.tsv`, `.tab` and `.txt` are tab-separated, everything else is a CSV.
pub fn delimiter_for(path: &Path) -> u8 {
    let mut name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    if let Some(stripped) = name.strip_suffix(".gz") {
        name = stripped.to_string();
    }
    if name.ends_with(".tsv") || name.ends_with(".tab") || name.ends_with(".txt") {
        b'\t'
    } else {
        b','
    }
}

/// Reads a delimited table as strings, header first, row order preserved.
pub fn read_table(path: &Path) -> Result<ObsTable, InputError> {
    let reader = open_maybe_gz(path)?;
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(delimiter_for(path))
        .has_headers(true)
        .from_reader(reader);

    let columns: Vec<String> = rdr
        .headers()
        .map_err(|source| InputError::Csv {
            path: path.to_path_buf(),
            source,
        })?
        .iter()
        .map(|s| s.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record.map_err(|source| InputError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        rows.push(record.iter().map(|s| s.trim().to_string()).collect());
    }

    Ok(ObsTable { columns, rows })
}
