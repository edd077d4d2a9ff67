//! memseed-init: make sure `<install-root>/dist/data/memory.json` exists.
//!
//! Takes no arguments in normal use. Prints exactly one status line on stdout;
//! logs and diagnostics go to stderr.

use anyhow::Context;
use clap::Parser;
use memseed_core::{ensure_store, paths, MemseedConfig};
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_CONFIG: &str = "memseed.toml";

#[derive(Parser, Debug)]
#[command(
    name = "memseed-init",
    version,
    about = "Create an empty memory.json store if none exists"
)]
struct Args {
    /// Optional TOML config file; missing is fine
    #[arg(short, long, env = "MEMSEED_CONFIG", default_value = DEFAULT_CONFIG)]
    config: String,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // A malformed config file aborts the run before the store is touched.
    let config = MemseedConfig::load(&args.config)
        .with_context(|| format!("Failed to load config from {}", args.config))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.service.log_level));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let root = paths::install_root().context("Failed to locate install root")?;
    let target = config.store.resolve(&root);
    tracing::debug!(
        root = %root.display(),
        target = %target.display(),
        "Resolved memory store path"
    );

    let outcome = ensure_store(&target)
        .with_context(|| format!("Failed to initialize {}", target.display()))?;
    println!("{}", outcome);

    Ok(())
}
