use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::Builder;

use crate::codegen::render_go_source;
use crate::config::Config;
use crate::error::{GenerateError, Result};
use crate::extract::{extract_titles, TitleRules};

/// Read every input page in order and collect their titles.
pub fn collect_titles(config: &Config, rules: &TitleRules) -> Result<Vec<String>> {
    if config.inputs.is_empty() {
        return Err(GenerateError::NoInputs);
    }

    let mut shows = Vec::new();
    for path in &config.inputs {
        let html = fs::read_to_string(path).map_err(|source| GenerateError::ReadInput {
            path: path.clone(),
            source,
        })?;
        let titles = extract_titles(&html, path, rules)?;
        log::info!("{}: found {} shows", path.display(), titles.len());
        for title in &titles {
            log::debug!("  {}", title);
        }
        shows.extend(titles);
    }

    Ok(shows)
}

/// Collect titles and render the generated source without touching the output.
pub fn render(config: &Config) -> Result<String> {
    let rules = TitleRules::from_config(config)?;
    let shows = collect_titles(config, &rules)?;
    Ok(render_go_source(&config.package, &config.variable, &shows))
}

/// Replace `path` with `contents`. The data goes to a temporary file in the
/// same directory first, so readers never see a half written file. A
/// symlinked destination keeps its link and gets the new contents at its
/// target, and an existing file keeps its permissions.
pub fn write_output(path: &Path, contents: &str) -> Result<()> {
    let write_err = |source: io::Error| GenerateError::WriteOutput {
        path: path.to_path_buf(),
        source,
    };

    let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let existing = fs::metadata(&target).ok().map(|metadata| metadata.permissions());

    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staged = staging_file().tempfile_in(dir).map_err(write_err)?;
    if let Some(permissions) = existing {
        staged.as_file().set_permissions(permissions).map_err(write_err)?;
    }
    staged.write_all(contents.as_bytes()).map_err(write_err)?;
    staged.flush().map_err(write_err)?;
    staged.persist(&target).map_err(|e| write_err(e.error))?;
    Ok(())
}

/// New output files get the same mode a plain create would give them:
/// 0o666 with the umask applied by the kernel.
#[cfg(unix)]
fn staging_file() -> Builder<'static, 'static> {
    use std::os::unix::fs::PermissionsExt;

    let mut builder = Builder::new();
    builder.permissions(fs::Permissions::from_mode(0o666));
    builder
}

#[cfg(not(unix))]
fn staging_file() -> Builder<'static, 'static> {
    Builder::new()
}

/// Run the whole pass: every input is read and extracted before the output
/// is opened, so a failing input leaves an existing output file as it was.
/// Returns the number of shows written.
pub fn generate(config: &Config) -> Result<usize> {
    let rules = TitleRules::from_config(config)?;
    let shows = collect_titles(config, &rules)?;
    let source = render_go_source(&config.package, &config.variable, &shows);

    write_output(&config.output, &source)?;
    log::info!("wrote {} shows to {}", shows.len(), config.output.display());

    Ok(shows.len())
}
