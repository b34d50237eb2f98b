use std::fs;
use std::path::{Path, PathBuf};

/// Path of a saved search page fixture
pub fn html_fixture_path(fixture_name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("src/tests/fixtures")
        .join(format!("{}.html", fixture_name))
}

/// Load test HTML fixture by name
pub fn load_html_fixture(fixture_name: &str) -> String {
    fs::read_to_string(html_fixture_path(fixture_name))
        .unwrap_or_else(|_| panic!("Failed to load test fixture: {}", fixture_name))
}
