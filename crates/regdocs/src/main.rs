use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use regdocs_core::config::load_config;
use regdocs_core::pipeline;

const DEFAULT_CONFIG_PATH: &str = "regdocs.toml";

#[derive(Debug, Parser)]
#[command(
    name = "regdocs",
    version,
    about = "Mirror the Cardano Token Registry wiki into a Docusaurus docs tree"
)]
struct Cli {
    #[arg(long, value_name = "PATH", help = "Config file (TOML)")]
    config: Option<PathBuf>,
    #[arg(long, value_name = "PATH", help = "Override the output docs directory")]
    out_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config_path = cli
        .config
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    let mut config = load_config(&config_path)?;
    if let Some(out_dir) = cli.out_dir {
        config.registry.docs_dir = Some(out_dir);
    }

    pipeline::run(&config)
}
