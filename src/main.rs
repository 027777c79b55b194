//! snapsheet-replay - drive a sheet controller from a recorded gesture script.
//!
//! ```text
//! snapsheet-replay <script.json> [config.json]
//! ```
//!
//! Prints one JSON line per committed transition, then a final snapshot.
//! Set `RUST_LOG=snapsheet=debug` to see the controller's own tracing.

use anyhow::{bail, Context, Result};
use snapsheet::replay::{self, Script};
use snapsheet::SheetConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("snapsheet=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let Some(script_path) = args.next().map(PathBuf::from) else {
        bail!("usage: snapsheet-replay <script.json> [config.json]");
    };

    let config = match args.next() {
        Some(path) => SheetConfig::load(&path).with_context(|| format!("loading config {path}"))?,
        None => SheetConfig::default(),
    };

    let raw = std::fs::read_to_string(&script_path)
        .with_context(|| format!("reading script {}", script_path.display()))?;
    let script = Script::from_json_str(&raw).context("parsing script")?;

    let output = replay::run(script, config).context("replaying script")?;
    for line in &output.transitions {
        println!("{}", serde_json::to_string(line)?);
    }
    println!("{}", serde_json::to_string(&output.snapshot)?);
    Ok(())
}
