//! Script invocation styles
//!
//! Two ways of running the same script: a direct execute that captures all
//! output and prints it once the process exits, and an event-streamed spawn
//! that forwards output line by line as it arrives.

use std::path::Path;
use std::process::Stdio;

use anyhow::{bail, Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;

const INTERPRETER: &str = "python";

/// Run the script to completion and print its captured stdout.
pub async fn run_direct(script: &Path) -> Result<()> {
    tracing::info!("Running script (direct execute)...");

    let output = Command::new(INTERPRETER)
        .arg(script)
        .output()
        .await
        .context("failed to execute script")?;

    if !output.status.success() {
        bail!(
            "script failed with {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    println!("{}", String::from_utf8_lossy(&output.stdout));
    tracing::info!("Direct execute done");
    Ok(())
}

/// Spawn the script and forward its output line by line.
pub async fn run_streamed(script: &Path) -> Result<()> {
    tracing::info!("Running script (streamed events)...");

    let mut child = Command::new(INTERPRETER)
        .arg(script)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .context("failed to spawn script")?;

    tracing::info!(pid = ?child.id(), "Script spawned");

    let stdout = child.stdout.take().context("child stdout was not captured")?;
    let stderr = child.stderr.take().context("child stderr was not captured")?;

    let stdout_task = tokio::spawn(async move {
        let mut lines = BufReader::new(stdout).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            println!("{line}");
        }
    });
    let stderr_task = tokio::spawn(async move {
        let mut lines = BufReader::new(stderr).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            eprintln!("script stderr: \"{line}\"");
        }
    });

    let status = child.wait().await.context("failed to wait for script")?;

    // Drain the forwarding tasks before reporting the exit status so output
    // ordering stays stable.
    let _ = stdout_task.await;
    let _ = stderr_task.await;

    tracing::info!(code = ?status.code(), "Script finished");

    if !status.success() {
        bail!("script exited with {status}");
    }
    Ok(())
}
