// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Output locations for the generated artifacts.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for config loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error while reading.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Deserialization failure.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Where the two artifacts live. Missing keys keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenConfig {
    /// Directory holding both artifacts.
    pub out_dir: PathBuf,
    /// File name of the definition text.
    pub schema_file: String,
    /// File name of the introspection document.
    pub introspection_file: String,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("schema"),
            schema_file: "schema.graphql".to_owned(),
            introspection_file: "schema.json".to_owned(),
        }
    }
}

/// Per-invocation overrides; `None` keeps the configured value.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// `--out-dir`
    pub out_dir: Option<PathBuf>,
    /// `--schema-file`
    pub schema_file: Option<String>,
    /// `--introspection-file`
    pub introspection_file: Option<String>,
}

impl GenConfig {
    /// Reads a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let bytes = fs::read(path)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Applies command-line overrides.
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(out_dir) = overrides.out_dir {
            self.out_dir = out_dir;
        }
        if let Some(schema_file) = overrides.schema_file {
            self.schema_file = schema_file;
        }
        if let Some(introspection_file) = overrides.introspection_file {
            self.introspection_file = introspection_file;
        }
        self
    }

    /// Full path of the definition text.
    pub fn schema_path(&self) -> PathBuf {
        self.out_dir.join(&self.schema_file)
    }

    /// Full path of the introspection document.
    pub fn introspection_path(&self) -> PathBuf {
        self.out_dir.join(&self.introspection_file)
    }
}
