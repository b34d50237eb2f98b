pub mod codegen;
pub mod config;
pub mod error;
pub mod extract;
pub mod generate;

#[cfg(test)]
pub mod tests;

pub use crate::codegen::{go_string_literal, render_go_source};
pub use crate::config::Config;
pub use crate::error::GenerateError;
pub use crate::extract::{extract_titles, scan_page, PageTitles, TitleRules};
pub use crate::generate::{collect_titles, generate, render, write_output};
