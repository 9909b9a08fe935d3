//! File I/O adapters: input loaders (FASTA catalogs, JSON alias maps, YAML
//! target specifications) and the generated job file writers.
//!
//! The rest of the library never touches the filesystem; everything passes
//! through this narrow interface.

pub mod alias;
pub mod fasta;
pub mod spec;
pub mod writer;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IoError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("FASTA parsing error for '{path}': {source}")]
    Fasta {
        path: String,
        source: std::io::Error,
    },
    #[error("Sequence '{id}' in '{path}' is not valid UTF-8")]
    NonUtf8Sequence { id: String, path: String },
    #[error("JSON parsing error for '{path}': {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
    #[error("YAML parsing error for '{path}': {source}")]
    Yaml {
        path: String,
        source: serde_yaml::Error,
    },
    #[error("JSON serialization error for '{path}': {source}")]
    Serialize {
        path: String,
        source: serde_json::Error,
    },
    #[error("Number of jobs per file must be within 1 and 100, got {0}")]
    JobsPerFile(usize),
}
