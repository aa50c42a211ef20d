//! Shared test infrastructure for integration tests.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Scratch project with a source directory and an output location.
pub struct Workspace {
    pub temp: TempDir,
}

impl Workspace {
    pub fn create() -> Self {
        let temp = TempDir::new().expect("create temp workspace");
        std::fs::create_dir_all(temp.path().join("data/reddit")).expect("create source dir");
        Self { temp }
    }

    pub fn root(&self) -> &Path {
        self.temp.path()
    }

    pub fn source_dir(&self) -> PathBuf {
        self.root().join("data/reddit")
    }

    /// Default output path, relative to the workspace root.
    pub fn output_path(&self) -> PathBuf {
        self.root().join("astro/public/data/reddit/seasons.json")
    }

    pub fn add_source(&self, name: &str) {
        std::fs::write(self.source_dir().join(name), b"{\"anime\": {}}")
            .expect("write source file");
    }

    /// Run the binary with the workspace root as its working directory.
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_season-manifest"))
            .args(args)
            .current_dir(self.root())
            .env_remove("RUST_LOG")
            .output()
            .expect("spawn season-manifest")
    }

    pub fn read_output(&self) -> String {
        std::fs::read_to_string(self.output_path()).expect("read manifest output")
    }
}
