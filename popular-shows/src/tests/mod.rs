use std::path::PathBuf;

use crate::config::Config;

pub mod fixtures;

/// Config reading the given fixtures and writing to `output`
pub fn fixture_config(fixture_names: &[&str], output: PathBuf) -> Config {
    Config {
        inputs: fixture_names
            .iter()
            .map(|name| fixtures::html_fixture_path(name))
            .collect(),
        output,
        ..Config::default()
    }
}
