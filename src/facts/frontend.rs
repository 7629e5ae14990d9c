// Mon Feb 2 2026 - Alex

use crate::error::LayoutError;
use crate::facts::model::TranslationUnitFacts;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// The external compiler front end, seen only through its output: a fully
/// resolved facts document for one translation unit.
pub trait FrontEnd {
    fn resolve(
        &self,
        sources: &[PathBuf],
        args: &[String],
    ) -> Result<TranslationUnitFacts, LayoutError>;
}

/// Runs an external resolver process and reads the facts JSON from its stdout.
///
/// The source paths are passed as positional arguments; compilation context
/// follows a `--` separator, clang-tooling style.
pub struct ProcessFrontEnd {
    command: PathBuf,
}

impl ProcessFrontEnd {
    pub fn new<P: Into<PathBuf>>(command: P) -> Self {
        Self {
            command: command.into(),
        }
    }

    pub fn command(&self) -> &Path {
        &self.command
    }
}

impl FrontEnd for ProcessFrontEnd {
    fn resolve(
        &self,
        sources: &[PathBuf],
        args: &[String],
    ) -> Result<TranslationUnitFacts, LayoutError> {
        let mut cmd = Command::new(&self.command);
        cmd.args(sources);
        if !args.is_empty() {
            cmd.arg("--");
            cmd.args(args);
        }

        log::debug!(
            "Running front end: {} ({} sources, {} args)",
            self.command.display(),
            sources.len(),
            args.len()
        );

        let output = cmd.output().map_err(|e| {
            LayoutError::FrontEnd(format!(
                "failed to launch {}: {}",
                self.command.display(),
                e
            ))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(LayoutError::FrontEnd(format!(
                "{} exited with {}: {}",
                self.command.display(),
                output.status,
                stderr.trim()
            )));
        }

        serde_json::from_slice(&output.stdout).map_err(|e| {
            LayoutError::FrontEnd(format!(
                "malformed facts from {}: {}",
                self.command.display(),
                e
            ))
        })
    }
}

/// Reads a pre-resolved facts dump from disk. Used by tooling pipelines that
/// run the front end separately, and by tests.
pub struct FactsFileFrontEnd {
    path: PathBuf,
}

impl FactsFileFrontEnd {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

impl FrontEnd for FactsFileFrontEnd {
    fn resolve(
        &self,
        _sources: &[PathBuf],
        _args: &[String],
    ) -> Result<TranslationUnitFacts, LayoutError> {
        let data = fs::read(&self.path).map_err(|e| {
            LayoutError::FrontEnd(format!("cannot read facts file {}: {}", self.path.display(), e))
        })?;

        serde_json::from_slice(&data).map_err(|e| {
            LayoutError::FrontEnd(format!("malformed facts in {}: {}", self.path.display(), e))
        })
    }
}
