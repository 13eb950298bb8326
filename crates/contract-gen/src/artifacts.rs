// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Rendering, writing and drift-checking the two artifacts.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use contract_schema::RootSchema;
use tracing::{debug, info};

use crate::config::GenConfig;

/// Both artifacts rendered in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    /// `schema.graphql` contents.
    pub definition_text: String,
    /// `schema.json` contents.
    pub introspection_json: String,
}

/// One artifact whose on-disk bytes differ from the regenerated bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drift {
    /// Artifact path.
    pub path: PathBuf,
    /// BLAKE3 of the regenerated bytes.
    pub expected: String,
    /// BLAKE3 of the committed bytes; `None` if the file is missing.
    pub found: Option<String>,
}

fn fingerprint(bytes: &[u8]) -> String {
    blake3::hash(bytes).to_hex().to_string()
}

impl Artifacts {
    /// Renders both projections of a closed schema.
    pub fn render(schema: &RootSchema) -> Result<Self> {
        let introspection_json = schema
            .introspection_document()
            .to_json_string()
            .context("serialize introspection document")?;
        Ok(Self {
            definition_text: schema.definition_text(),
            introspection_json,
        })
    }

    fn pairs<'a>(&'a self, config: &GenConfig) -> [(PathBuf, &'a str); 2] {
        [
            (config.schema_path(), self.definition_text.as_str()),
            (config.introspection_path(), self.introspection_json.as_str()),
        ]
    }

    /// Writes both files, creating the output directory.
    pub fn write(&self, config: &GenConfig) -> Result<()> {
        fs::create_dir_all(&config.out_dir)
            .with_context(|| format!("create {}", config.out_dir.display()))?;
        for (path, contents) in self.pairs(config) {
            fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
            info!(path = %path.display(), bytes = contents.len(), "artifact written");
        }
        Ok(())
    }

    /// Compares both files against the rendered bytes.
    pub fn check(&self, config: &GenConfig) -> Result<Vec<Drift>> {
        let mut drift = Vec::new();
        for (path, contents) in self.pairs(config) {
            let found = read_if_present(&path)?;
            if found.as_deref() == Some(contents.as_bytes()) {
                debug!(path = %path.display(), "artifact up to date");
                continue;
            }
            drift.push(Drift {
                expected: fingerprint(contents.as_bytes()),
                found: found.as_deref().map(fingerprint),
                path,
            });
        }
        Ok(drift)
    }
}

fn read_if_present(path: &Path) -> Result<Option<Vec<u8>>> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err).with_context(|| format!("read {}", path.display())),
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    fn rendered() -> Artifacts {
        let composer = contract_edge::build_contract().unwrap();
        Artifacts::render(composer.schema().unwrap()).unwrap()
    }

    fn config_in(dir: &Path) -> GenConfig {
        GenConfig {
            out_dir: dir.join("schema"),
            ..GenConfig::default()
        }
    }

    #[test]
    fn written_artifacts_pass_the_check() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let artifacts = rendered();
        artifacts.write(&config).unwrap();
        assert!(artifacts.check(&config).unwrap().is_empty());
        assert_eq!(
            fs::read_to_string(config.schema_path()).unwrap(),
            artifacts.definition_text
        );
    }

    #[test]
    fn missing_artifacts_are_drift() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let drift = rendered().check(&config).unwrap();
        assert_eq!(drift.len(), 2);
        assert!(drift.iter().all(|d| d.found.is_none()));
    }

    #[test]
    fn edited_artifact_reports_both_fingerprints() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let artifacts = rendered();
        artifacts.write(&config).unwrap();
        let edited = format!("{}\n", artifacts.definition_text);
        fs::write(config.schema_path(), &edited).unwrap();

        let drift = artifacts.check(&config).unwrap();
        assert_eq!(drift.len(), 1);
        assert_eq!(drift[0].path, config.schema_path());
        assert_eq!(drift[0].expected, fingerprint(artifacts.definition_text.as_bytes()));
        assert_eq!(drift[0].found, Some(fingerprint(edited.as_bytes())));
    }
}
