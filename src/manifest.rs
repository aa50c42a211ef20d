//! Build and publish the season manifest.
//!
//! The manifest is a pretty-printed JSON array of [`PeriodDescriptor`]s, one
//! per well-formed `<year>_<ordinal>_<season>.json` file in the source
//! directory. Filenames that fail to parse are returned as diagnostics rather
//! than aborting the batch.
use crate::period::{
    parse_descriptor, sort_periods, ParseError, PeriodDescriptor, SOURCE_EXTENSION,
};
use crate::staging::write_atomic;
use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_SOURCE_DIR: &str = "data/reddit";
pub const DEFAULT_OUTPUT_PATH: &str = "astro/public/data/reddit/seasons.json";

/// Locations the builder reads from and writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestConfig {
    pub source_dir: PathBuf,
    pub output_path: PathBuf,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

impl ManifestConfig {
    /// File name of the output, used in console messages.
    pub fn output_name(&self) -> String {
        self.output_path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| self.output_path.display().to_string())
    }
}

/// A source file that could not be turned into a descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub file_name: String,
    pub error: ParseError,
}

/// A source entry that passed the extension filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceEntry {
    Named(String),
    NonUtf8(String),
}

#[derive(Debug, Clone, Default)]
pub struct Manifest {
    pub periods: Vec<PeriodDescriptor>,
    pub diagnostics: Vec<Diagnostic>,
}

/// List `.json` files directly under `source_dir`, sorted by name.
///
/// Subdirectories and other extensions are skipped.
pub fn list_source_files(source_dir: &Path) -> Result<Vec<SourceEntry>> {
    let mut names = Vec::new();
    let mut non_utf8 = Vec::new();
    let entries = fs::read_dir(source_dir)
        .with_context(|| format!("read source dir {}", source_dir.display()))?;
    for entry in entries {
        let entry = entry.with_context(|| format!("read source dir {}", source_dir.display()))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let raw_name = entry.file_name();
        match raw_name.to_str() {
            Some(name) if name.ends_with(SOURCE_EXTENSION) => names.push(name.to_string()),
            Some(_) => {}
            None => {
                let lossy = raw_name.to_string_lossy().to_string();
                if lossy.ends_with(SOURCE_EXTENSION) {
                    non_utf8.push(lossy);
                }
            }
        }
    }
    names.sort();
    non_utf8.sort();
    let mut listed: Vec<SourceEntry> = names.into_iter().map(SourceEntry::Named).collect();
    listed.extend(non_utf8.into_iter().map(SourceEntry::NonUtf8));
    Ok(listed)
}

/// Parse and order every listed source file.
pub fn build_manifest(config: &ManifestConfig) -> Result<Manifest> {
    let entries = list_source_files(&config.source_dir)?;
    tracing::debug!(
        source_dir = %config.source_dir.display(),
        count = entries.len(),
        "listed source files"
    );
    let mut manifest = Manifest::default();
    for entry in entries {
        let parsed = match &entry {
            SourceEntry::Named(name) => parse_descriptor(name).map_err(|err| (name, err)),
            SourceEntry::NonUtf8(name) => Err((name, ParseError::NonUtf8Name)),
        };
        match parsed {
            Ok(period) => manifest.periods.push(period),
            Err((name, error)) => {
                tracing::warn!(file = %name, %error, "skipping source file");
                manifest.diagnostics.push(Diagnostic {
                    file_name: name.clone(),
                    error,
                });
            }
        }
    }
    sort_periods(&mut manifest.periods);
    Ok(manifest)
}

/// Serialized manifest exactly as written to disk (2-space indent, no trailing newline).
pub fn render_manifest(manifest: &Manifest) -> Result<Vec<u8>> {
    serde_json::to_vec_pretty(&manifest.periods).context("serialize manifest JSON")
}

/// Replace the output file with the rendered manifest.
pub fn write_manifest(config: &ManifestConfig, manifest: &Manifest) -> Result<()> {
    let bytes = render_manifest(manifest)?;
    write_atomic(&config.output_path, &bytes)?;
    tracing::info!(
        path = %config.output_path.display(),
        entries = manifest.periods.len(),
        "wrote manifest"
    );
    Ok(())
}

/// Whether the output file already holds the rendered manifest.
pub fn is_up_to_date(config: &ManifestConfig, manifest: &Manifest) -> Result<bool> {
    let expected = render_manifest(manifest)?;
    match fs::read(&config.output_path) {
        Ok(current) => Ok(current == expected),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(err).with_context(|| format!("read {}", config.output_path.display())),
    }
}

/// Fail when any source file was skipped.
pub fn ensure_no_diagnostics(manifest: &Manifest) -> Result<()> {
    if manifest.diagnostics.is_empty() {
        return Ok(());
    }
    let details: Vec<String> = manifest
        .diagnostics
        .iter()
        .map(|diag| format!("{}: {}", diag.file_name, diag.error))
        .collect();
    Err(anyhow!(
        "{} source file(s) do not match <year>_<ordinal>_<season>.json: {}",
        manifest.diagnostics.len(),
        details.join("; ")
    ))
}

#[cfg(test)]
#[path = "manifest_tests.rs"]
mod tests;
