use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Delete the docs directory if it exists and recreate it empty, so every
/// run rewrites the full tree and stale pages cannot survive.
pub fn reset_docs_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        fs::remove_dir_all(dir).with_context(|| format!("failed to remove {}", dir.display()))?;
    }
    fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))
}

/// Write one transformed page as `{file_stem}.md` and report it.
pub fn write_page(dir: &Path, file_stem: &str, content: &str) -> Result<PathBuf> {
    let path = dir.join(format!("{file_stem}.md"));
    fs::write(&path, content).with_context(|| format!("failed to write {}", path.display()))?;
    println!("Downloaded to {}", path.display());
    Ok(path)
}
