//! Command-line arguments and config resolution.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use carousel_core::CarouselConfig;

#[derive(Parser, Debug)]
#[command(
    name = "carousel",
    about = "Carousel: horizontally scrollable items with page dots"
)]
pub struct Cli {
    /// Endpoint answering a JSON array of {id, name}. Overrides the config file.
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Path to a TOML config file. Defaults to <config_dir>/carousel/config.toml.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log file. Defaults to <cache_dir>/carousel/carousel.log.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Load the config file and apply command-line overrides.
    pub fn resolve_config(&self) -> Result<CarouselConfig> {
        let path = self
            .config
            .clone()
            .unwrap_or_else(CarouselConfig::default_path);
        let mut config = CarouselConfig::load(&path)?;
        if let Some(endpoint) = &self.endpoint {
            config.endpoint = endpoint.clone();
        }
        config
            .validate()
            .with_context(|| format!("after applying --endpoint to {}", path.display()))?;
        Ok(config)
    }
}
