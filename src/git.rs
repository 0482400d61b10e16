//! Optional git initialization for generated projects

use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

/// Run `git init --quiet` on the generated project directory
pub fn init_repository(project_dir: &Path) -> Result<()> {
    let output = Command::new("git")
        .arg("init")
        .arg("--quiet")
        .arg(project_dir)
        .output()
        .context("Failed to launch git")?;

    if !output.status.success() {
        anyhow::bail!(
            "git init failed: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    Ok(())
}
