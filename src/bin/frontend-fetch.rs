//! Fetch every configured frontend template bundle into the dashboard tree.
//!
//! The binary is expected to live in a direct subdirectory of the repo
//! root (its `script/` equivalent); the root is resolved once at startup
//! as the parent of the executable's directory and passed explicitly
//! everywhere it is needed. No flags, no environment variables.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use frontend_fetch::{download_dist, load_templates, merge_archive, FetchError};

fn main() -> Result<()> {
    let root = repo_root()?;
    let templates_file = root.join("service/singleton/frontend-templates.yaml");

    let templates = match load_templates(&templates_file) {
        Ok(templates) => templates,
        Err(err @ (FetchError::ConfigNotFound { .. } | FetchError::ConfigParse { .. })) => {
            eprintln!("Error: {err}");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    for template in &templates {
        println!(
            "Downloading from repository: {}, version: {}",
            template.repository, template.version
        );
        let archive = download_dist(&template.repository, &template.version)?;

        let target_dir = root.join("cmd/dashboard").join(&template.path);
        merge_archive(&archive, &target_dir)
            .with_context(|| format!("merging bundle into '{}'", target_dir.display()))?;
    }

    Ok(())
}

/// Resolve the repo root: parent of the directory holding the executable.
fn repo_root() -> Result<PathBuf> {
    let exe = env::current_exe().context("resolving executable path")?;
    let tool_dir = exe
        .parent()
        .with_context(|| format!("executable '{}' has no parent directory", exe.display()))?;
    let root = tool_dir
        .parent()
        .unwrap_or_else(|| Path::new("/"))
        .to_path_buf();
    Ok(root)
}
