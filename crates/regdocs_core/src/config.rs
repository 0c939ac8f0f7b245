use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_RAW_WIKI_URL: &str =
    "https://raw.githubusercontent.com/wiki/cardano-foundation/cardano-token-registry/";
pub const DEFAULT_WIKI_URL: &str =
    "https://github.com/cardano-foundation/cardano-token-registry/wiki";
pub const DEFAULT_REPO_URL: &str =
    "https://github.com/cardano-foundation/cardano-token-registry/blob/master/";
pub const DEFAULT_OVERVIEW_URL: &str =
    "https://raw.githubusercontent.com/cardano-foundation/cardano-token-registry/master/README.md";
pub const DEFAULT_DOCS_DIR: &str = "docs/token-registry";

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct RegistryConfig {
    #[serde(default)]
    pub registry: RegistrySection,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct RegistrySection {
    pub raw_wiki_url: Option<String>,
    pub wiki_url: Option<String>,
    pub repo_url: Option<String>,
    pub overview_url: Option<String>,
    pub docs_dir: Option<PathBuf>,
    pub custom_edit_url: Option<String>,
}

impl RegistryConfig {
    /// Raw wiki content base (trailing slash): env > config > default.
    pub fn raw_wiki_url(&self) -> String {
        resolve(
            "REGDOCS_RAW_WIKI_URL",
            self.registry.raw_wiki_url.as_deref(),
            DEFAULT_RAW_WIKI_URL,
        )
    }

    /// Human-facing wiki base used by provenance footers.
    pub fn wiki_url(&self) -> String {
        resolve(
            "REGDOCS_WIKI_URL",
            self.registry.wiki_url.as_deref(),
            DEFAULT_WIKI_URL,
        )
    }

    /// Repository blob base (trailing slash) used to absolutize relative links.
    pub fn repo_url(&self) -> String {
        resolve(
            "REGDOCS_REPO_URL",
            self.registry.repo_url.as_deref(),
            DEFAULT_REPO_URL,
        )
    }

    /// Raw README URL for the overview page.
    pub fn overview_url(&self) -> String {
        resolve(
            "REGDOCS_OVERVIEW_URL",
            self.registry.overview_url.as_deref(),
            DEFAULT_OVERVIEW_URL,
        )
    }

    /// Output directory for the generated docs tree.
    pub fn docs_dir(&self) -> PathBuf {
        if let Some(value) = env_value("REGDOCS_DOCS_DIR") {
            return PathBuf::from(value);
        }
        self.registry
            .docs_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DOCS_DIR))
    }

    /// Optional `custom_edit_url:` front-matter value. `None` omits the line.
    pub fn custom_edit_url(&self) -> Option<String> {
        env_value("REGDOCS_CUSTOM_EDIT_URL").or_else(|| self.registry.custom_edit_url.clone())
    }
}

fn env_value(key: &str) -> Option<String> {
    if let Ok(value) = env::var(key) {
        let trimmed = value.trim().to_string();
        if !trimmed.is_empty() {
            return Some(trimmed);
        }
    }
    None
}

fn resolve(key: &str, configured: Option<&str>, default: &str) -> String {
    if let Some(value) = env_value(key) {
        return value;
    }
    configured.unwrap_or(default).to_string()
}

/// Load and parse a RegistryConfig from a TOML file. Returns default if file doesn't exist.
pub fn load_config(config_path: &Path) -> Result<RegistryConfig> {
    if !config_path.exists() {
        return Ok(RegistryConfig::default());
    }
    let content = fs::read_to_string(config_path)
        .with_context(|| format!("failed to read {}", config_path.display()))?;
    let parsed: RegistryConfig = toml::from_str(&content)
        .with_context(|| format!("failed to parse {}", config_path.display()))?;
    Ok(parsed)
}
