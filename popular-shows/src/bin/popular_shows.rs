use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use popular_shows::{generate, render, Config};

/// Generate the Go list of popular shows from saved IMDb TV series search pages
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Saved search result pages, read in order (default /tmp/part1.html /tmp/part2.html)
    inputs: Vec<PathBuf>,

    /// Generated Go file (default ../sources/shows.go)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON config file; command line options take precedence over it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Go package of the generated file
    #[arg(long)]
    package: Option<String>,

    /// Name of the generated array variable
    #[arg(long)]
    variable: Option<String>,

    /// CSS selector for the cell that marks a show entry
    #[arg(long)]
    cell_selector: Option<String>,

    /// Regex matched against the href of the link holding the show name
    #[arg(long)]
    link_pattern: Option<String>,

    /// Skip entries without a title link instead of failing
    #[arg(long, conflicts_with = "strict")]
    lenient: bool,

    /// Fail on entries without a title link, even if the config file is lenient
    #[arg(long)]
    strict: bool,

    /// Print the generated source instead of writing the output file
    #[arg(long)]
    stdout: bool,

    /// Log every extracted title
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_json_file(path)?,
            None => Config::default(),
        };

        if !self.inputs.is_empty() {
            config.inputs = self.inputs;
        }
        if let Some(output) = self.output {
            config.output = output;
        }
        if let Some(package) = self.package {
            config.package = package;
        }
        if let Some(variable) = self.variable {
            config.variable = variable;
        }
        if let Some(cell_selector) = self.cell_selector {
            config.cell_selector = cell_selector;
        }
        if let Some(link_pattern) = self.link_pattern {
            config.link_pattern = link_pattern;
        }
        if self.lenient {
            config.strict = false;
        }
        if self.strict {
            config.strict = true;
        }

        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let to_stdout = cli.stdout;
    let config = cli.into_config()?;

    if to_stdout {
        let source = render(&config)?;
        let mut out = std::io::stdout().lock();
        out.write_all(source.as_bytes())
            .context("Failed to write generated source to stdout")?;
        return Ok(());
    }

    generate(&config).with_context(|| {
        format!("Failed to generate {}", config.output.display())
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::{Path, PathBuf};

    use super::*;

    fn write_config(dir: &Path, json: &str) -> PathBuf {
        let path = dir.join("shows.json");
        fs::write(&path, json).unwrap();
        path
    }

    fn config_from_args(args: &[&str]) -> Config {
        Cli::try_parse_from(args).unwrap().into_config().unwrap()
    }

    #[test]
    fn test_no_arguments_gives_defaults() {
        assert_eq!(config_from_args(&["popular_shows"]), Config::default());
    }

    #[test]
    fn test_positional_inputs_replace_config_inputs() {
        let dir = tempfile::tempdir().unwrap();
        let json = write_config(dir.path(), r#"{ "inputs": ["a.html", "b.html"] }"#);

        let config = config_from_args(&[
            "popular_shows",
            "--config",
            json.to_str().unwrap(),
            "x.html",
        ]);

        assert_eq!(config.inputs, vec![PathBuf::from("x.html")]);
    }

    #[test]
    fn test_config_inputs_kept_without_positional_inputs() {
        let dir = tempfile::tempdir().unwrap();
        let json = write_config(dir.path(), r#"{ "inputs": ["a.html", "b.html"] }"#);

        let config = config_from_args(&["popular_shows", "--config", json.to_str().unwrap()]);

        assert_eq!(
            config.inputs,
            vec![PathBuf::from("a.html"), PathBuf::from("b.html")]
        );
    }

    #[test]
    fn test_flags_win_over_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let json = write_config(
            dir.path(),
            r#"{ "output": "from_json.go", "package": "json_pkg", "variable": "listed" }"#,
        );

        let config = config_from_args(&[
            "popular_shows",
            "-c",
            json.to_str().unwrap(),
            "--output",
            "from_cli.go",
            "--package",
            "cli_pkg",
        ]);

        assert_eq!(config.output, PathBuf::from("from_cli.go"));
        assert_eq!(config.package, "cli_pkg");
        // not given on the command line, so the file's value stays
        assert_eq!(config.variable, "listed");
        assert_eq!(config.cell_selector, "td.title");
    }

    #[test]
    fn test_lenient_turns_strict_off() {
        let config = config_from_args(&["popular_shows", "--lenient"]);
        assert!(!config.strict);
    }

    #[test]
    fn test_strict_overrides_lenient_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let json = write_config(dir.path(), r#"{ "strict": false }"#);
        let path = json.to_str().unwrap();

        assert!(!config_from_args(&["popular_shows", "--config", path]).strict);
        assert!(config_from_args(&["popular_shows", "--config", path, "--strict"]).strict);
    }

    #[test]
    fn test_strict_and_lenient_conflict() {
        let result = Cli::try_parse_from(["popular_shows", "--strict", "--lenient"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_bad_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let json = write_config(dir.path(), "not json");

        let cli = Cli::try_parse_from(["popular_shows", "--config", json.to_str().unwrap()]).unwrap();
        assert!(cli.into_config().is_err());
    }
}
