//! Error type for artifact generation

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while writing an output artifact
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("failed to create directory '{}': {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
