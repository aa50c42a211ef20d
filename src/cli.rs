//! CLI argument parsing for the manifest generator.
//!
//! Every flag has a default, so running with no arguments regenerates the
//! manifest at its usual location.
use crate::manifest::{ManifestConfig, DEFAULT_OUTPUT_PATH, DEFAULT_SOURCE_DIR};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "season-manifest",
    version,
    about = "Generate the season index from per-period data files",
    after_help = "Examples:\n  season-manifest\n  season-manifest --src-dir data/reddit --out astro/public/data/reddit/seasons.json\n  season-manifest --check\n  season-manifest --dry-run --strict"
)]
pub struct RootArgs {
    /// Directory holding <year>_<ordinal>_<season>.json files
    #[arg(long, value_name = "DIR", default_value = DEFAULT_SOURCE_DIR)]
    pub src_dir: PathBuf,

    /// Output path for the manifest JSON
    #[arg(long, value_name = "PATH", default_value = DEFAULT_OUTPUT_PATH)]
    pub out: PathBuf,

    /// Print the manifest to stdout instead of writing it
    #[arg(long, conflicts_with = "check")]
    pub dry_run: bool,

    /// Verify the output file is current without writing it
    #[arg(long)]
    pub check: bool,

    /// Fail when any source filename does not parse
    #[arg(long)]
    pub strict: bool,

    /// Emit debug logging to stderr
    #[arg(long)]
    pub verbose: bool,
}

impl RootArgs {
    pub fn manifest_config(&self) -> ManifestConfig {
        ManifestConfig {
            source_dir: self.src_dir.clone(),
            output_path: self.out.clone(),
        }
    }
}
