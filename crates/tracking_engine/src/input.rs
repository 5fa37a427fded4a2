use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracking_core::{split_into_batches, Batch};

#[derive(Debug, Error)]
#[error("cannot read input file {path:?}: {source}")]
pub struct FileReadError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Read the tracking code file and split it into batches.
pub fn load_batches(path: &Path) -> Result<Vec<Batch>, FileReadError> {
    let content = fs::read_to_string(path).map_err(|source| FileReadError {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(split_into_batches(&content))
}
