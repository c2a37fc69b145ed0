pub mod interactive;
pub mod render;

use anyhow::Result;
use tracing::info;

use crate::config::Config;
use crate::view::{FileView, SkillsView, StdoutView};

/// Load config and apply CLI overrides.
pub fn load_config(
    config_path: Option<String>,
    source_override: Option<String>,
    output_override: Option<String>,
) -> Result<Config> {
    let mut config = Config::load_with_path(config_path)?;

    if let Some(source) = source_override {
        info!("CLI override: source = {}", source);
        config.source.location = source;
    }
    if let Some(output) = output_override {
        info!("CLI override: output = {}", output);
        config.display.output = output;
    }

    Ok(config)
}

pub fn view_for(config: &Config) -> Box<dyn SkillsView> {
    match config.output_path() {
        Some(path) => Box::new(FileView::new(path, config.display.container_class.as_str())),
        None => Box::new(StdoutView::stdout(config.display.container_class.as_str())),
    }
}
