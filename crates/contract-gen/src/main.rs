// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! contract-gen: writes or checks the edge-cluster schema artifacts.
//!
//! ```text
//! contract-gen                 # write schema/schema.graphql + schema/schema.json
//! contract-gen --check         # exit 1 if either committed file drifted
//! contract-gen --stdout        # print the definition text only
//! ```
//!
//! Logs go to stderr so `--stdout` output can be piped.

mod artifacts;
mod config;

use std::io::Write as _;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use crate::artifacts::Artifacts;
use crate::config::{GenConfig, Overrides};

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate the edge-cluster schema artifacts")]
struct Args {
    /// Optional JSON config (out_dir, schema_file, introspection_file)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Directory for both artifacts (default: schema)
    #[arg(long)]
    out_dir: Option<PathBuf>,
    /// File name of the definition text (default: schema.graphql)
    #[arg(long)]
    schema_file: Option<String>,
    /// File name of the introspection document (default: schema.json)
    #[arg(long)]
    introspection_file: Option<String>,
    /// Compare against the files on disk instead of writing them
    #[arg(long, conflicts_with = "stdout")]
    check: bool,
    /// Print the definition text to stdout and write nothing
    #[arg(long)]
    stdout: bool,
}

fn resolve_config(args: &Args) -> Result<GenConfig> {
    let base = match &args.config {
        Some(path) => GenConfig::load(path)
            .with_context(|| format!("load config {}", path.display()))?,
        None => GenConfig::default(),
    };
    Ok(base.with_overrides(Overrides {
        out_dir: args.out_dir.clone(),
        schema_file: args.schema_file.clone(),
        introspection_file: args.introspection_file.clone(),
    }))
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let config = resolve_config(&args)?;
    debug!(?config, "resolved config");

    let composer = contract_edge::build_contract().context("compose edge contract")?;
    let schema = composer.schema()?;
    let artifacts = Artifacts::render(schema)?;

    if args.stdout {
        std::io::stdout()
            .lock()
            .write_all(artifacts.definition_text.as_bytes())
            .context("write definition text to stdout")?;
        return Ok(());
    }

    if args.check {
        let drift = artifacts.check(&config)?;
        if drift.is_empty() {
            info!(fingerprint = %schema.fingerprint(), "artifacts up to date");
            return Ok(());
        }
        for d in &drift {
            error!(
                path = %d.path.display(),
                expected = %d.expected,
                found = d.found.as_deref().unwrap_or("<missing>"),
                "artifact drifted"
            );
        }
        bail!("{} artifact(s) out of date; rerun contract-gen", drift.len());
    }

    artifacts.write(&config)?;
    info!(fingerprint = %schema.fingerprint(), types = schema.types().len(), "contract generated");
    Ok(())
}
