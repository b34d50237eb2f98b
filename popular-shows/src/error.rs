use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that stop a generation run.
#[derive(Error, Debug)]
pub enum GenerateError {
    /// No input pages were configured
    #[error("no input files configured")]
    NoInputs,

    #[error("failed to read input file {path}: {source}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A title cell had no title link anywhere after it in the page
    #[error("title link not found for cell {cell} in {path}")]
    TitleLinkNotFound { path: PathBuf, cell: usize },

    #[error("invalid title cell selector {selector:?}: {message}")]
    InvalidSelector { selector: String, message: String },

    #[error("invalid title link pattern {pattern:?}: {source}")]
    InvalidLinkPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("failed to write output file {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read config file {path}: {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, GenerateError>;
