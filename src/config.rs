// Mon Feb 2 2026 - Alex

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One invocation's worth of settings, assembled by the CLI and passed
/// explicitly through the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub sources: Vec<PathBuf>,
    pub output_file: PathBuf,
    /// 1-based target position.
    pub location_row: u32,
    pub location_col: u32,
    /// External resolver command; `None` falls back to the environment or a
    /// pre-resolved facts dump.
    pub frontend_command: Option<PathBuf>,
    /// Compilation context forwarded to the front end verbatim.
    pub frontend_args: Vec<String>,
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sources: Vec::new(),
            output_file: PathBuf::from("output.slbin"),
            location_row: 1,
            location_col: 1,
            frontend_command: None,
            frontend_args: Vec::new(),
            verbose: false,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sources(mut self, sources: Vec<PathBuf>) -> Self {
        self.sources = sources;
        self
    }

    pub fn with_output_file(mut self, output: PathBuf) -> Self {
        self.output_file = output;
        self
    }

    pub fn with_location(mut self, row: u32, col: u32) -> Self {
        self.location_row = row;
        self.location_col = col;
        self
    }

    pub fn with_frontend_command(mut self, command: PathBuf) -> Self {
        self.frontend_command = Some(command);
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.sources.is_empty() {
            return Err("At least one source file must be given".to_string());
        }
        if self.location_row == 0 || self.location_col == 0 {
            return Err("Target locations are 1-based; row and column must be nonzero".to_string());
        }
        Ok(())
    }
}
