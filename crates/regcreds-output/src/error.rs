use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while generating or reading credential output files.
#[derive(Error, Debug)]
pub enum RegcredsError {
    /// YAML encoding or decoding failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_yaml::Error),

    /// The current working directory could not be resolved.
    #[error("failed to resolve current working directory: {0}")]
    DirectoryResolution(#[source] std::io::Error),

    /// The output file could not be created.
    #[error("failed to create output file {path}: {source}")]
    FileCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the serialized document to the output file failed.
    #[error("failed to write output file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading an existing credential output file failed.
    #[error("failed to read credential output file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, RegcredsError>;
