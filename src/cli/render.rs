use anyhow::Result;
use tracing::info;

use super::{load_config, view_for};
use crate::config::Config;
use crate::controller::{ControllerState, UiController};
use crate::source;
use crate::view::{MemoryView, SkillsView};

/// Load, render, then replay each `--sort` value as a button click.
pub async fn run(
    source_override: Option<String>,
    output_override: Option<String>,
    config_path: Option<String>,
    sorts: Vec<String>,
) -> Result<()> {
    let config = load_config(config_path, source_override, output_override)?;
    let mut target = view_for(&config);
    render_final(&config, &sorts, &mut target).await
}

/// Replay the clicks against an in-memory display and hand only the final
/// fragment to `target`. Nothing reaches `target` if nothing was rendered.
pub async fn render_final<V: SkillsView>(
    config: &Config,
    sorts: &[String],
    target: &mut V,
) -> Result<()> {
    let source = source::source_for(&config.source)?;

    let mut controller = UiController::new(MemoryView::new());
    controller.initialize(source.as_ref()).await?;

    if controller.state() == ControllerState::Error {
        info!("Skills could not be loaded, applying sorts to an empty list");
    }

    for attr in sorts {
        controller.handle_click(Some(attr.as_str()))?;
    }

    if let Some(fragment) = controller.view().last_fragment() {
        target.replace_children(fragment)?;
        info!("Rendered {} skills", controller.store().len());
    }
    Ok(())
}
