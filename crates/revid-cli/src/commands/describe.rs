//! Describe and generate command implementations

use std::path::{Path, PathBuf};

use colored::Colorize;
use revid_git::{RevisionDescriptor, RevisionSettings, write_source};

use crate::error::{CliError, Result};

/// Load the option file and query git in the repository it points at.
/// The repository directory must exist as given.
fn resolve(config: &Path) -> Result<(RevisionSettings, RevisionDescriptor)> {
    let settings = RevisionSettings::load(config)?;
    let directory = settings.repository_directory(config);
    if !directory.is_dir() {
        return Err(CliError::user(format!(
            "Repository directory {} does not exist",
            directory.display()
        )));
    }

    tracing::debug!(directory = %directory.display(), "Resolving descriptor");
    let descriptor = RevisionDescriptor::resolve(&settings, &directory);
    Ok((settings, descriptor))
}

/// Run the describe command.
pub fn run_describe(config: &Path, json: bool) -> Result<()> {
    let (_, descriptor) = resolve(config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&descriptor)?);
    } else {
        println!("{descriptor}");
    }
    Ok(())
}

/// Run the generate command.
///
/// Writes next to the option file unless `out_dir` is given.
pub fn run_generate(config: &Path, out_dir: Option<&Path>) -> Result<()> {
    let (settings, descriptor) = resolve(config)?;

    let out_dir: PathBuf = match out_dir {
        Some(dir) => dir.to_path_buf(),
        None => config
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")),
    };

    let written = write_source(&settings, &descriptor.descriptor, &out_dir)?;
    println!(
        "{} Wrote {} ({})",
        "OK".green().bold(),
        written.display(),
        descriptor.descriptor.cyan()
    );
    Ok(())
}
