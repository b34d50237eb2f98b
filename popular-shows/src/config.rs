use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{GenerateError, Result};

pub const DEFAULT_INPUTS: [&str; 2] = ["/tmp/part1.html", "/tmp/part2.html"];
pub const DEFAULT_OUTPUT: &str = "../sources/shows.go";
pub const DEFAULT_PACKAGE: &str = "sources";
pub const DEFAULT_VARIABLE: &str = "shows";
pub const DEFAULT_CELL_SELECTOR: &str = "td.title";
pub const DEFAULT_LINK_PATTERN: &str = "title";

/// Everything a generation run needs. Each input file should hold the
/// `<div id="main">` part of
/// http://www.imdb.com/search/title?start=0&title_type=tv_series
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub inputs: Vec<PathBuf>,
    pub output: PathBuf,
    /// Go package the generated file belongs to
    pub package: String,
    /// Name of the generated array variable
    pub variable: String,
    pub cell_selector: String,
    /// Regex searched for in the href of the link that follows a cell
    pub link_pattern: String,
    /// Fail on a cell without a title link instead of skipping it
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            inputs: DEFAULT_INPUTS.iter().map(PathBuf::from).collect(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            package: DEFAULT_PACKAGE.to_string(),
            variable: DEFAULT_VARIABLE.to_string(),
            cell_selector: DEFAULT_CELL_SELECTOR.to_string(),
            link_pattern: DEFAULT_LINK_PATTERN.to_string(),
            strict: true,
        }
    }
}

impl Config {
    /// Load a JSON config file. Missing fields fall back to the defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Config> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| GenerateError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&json).map_err(|source| GenerateError::ParseConfig {
            path: path.to_path_buf(),
            source,
        })
    }
}
