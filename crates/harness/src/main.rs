//! Timings harness - demo caller for the timings registry
//!
//! Shells out to the bundled Python script through two invocation styles,
//! timing script discovery and each run through one shared registry, then
//! prints the formatted results as JSON.
//!
//! An alternate script path can be passed as the first argument; it still
//! has to pass the filename validator.

mod runner;
mod script;

use std::path::PathBuf;

use anyhow::Result;
use timings::{Timings, UnitStyle};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const FIND_SCRIPT: &str = "find script";
const DIRECT_EXECUTE: &str = "direct execute";
const STREAMED_SPAWN: &str = "streamed spawn";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting timings harness");

    let mut timings = Timings::new([FIND_SCRIPT, DIRECT_EXECUTE, STREAMED_SPAWN])?;

    timings.start(&[FIND_SCRIPT]);
    let script_path = match std::env::args_os().nth(1) {
        Some(path) => PathBuf::from(path),
        None => script::find_script()?,
    };
    script::validate_script_path(&script_path)?;
    timings.end(&[FIND_SCRIPT]);

    tracing::info!(script = %script_path.display(), "Demo script located");

    timings.start(&[DIRECT_EXECUTE]);
    runner::run_direct(&script_path).await?;
    timings.end(&[DIRECT_EXECUTE]);

    timings.start(&[STREAMED_SPAWN]);
    runner::run_streamed(&script_path).await?;
    timings.end(&[STREAMED_SPAWN]);

    let results = timings.get_results(UnitStyle::Full);
    println!("{}", serde_json::to_string_pretty(&results)?);

    Ok(())
}
