use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::info;

use super::{load_config, view_for};
use crate::controller::UiController;
use crate::source;
use crate::store::SkillsStore;
use crate::view::SkillsView;

pub async fn run(
    source_override: Option<String>,
    output_override: Option<String>,
    config_path: Option<String>,
) -> Result<()> {
    let config = load_config(config_path, source_override, output_override)?;
    let source = source::source_for(&config.source)?;

    let mut controller = UiController::new(view_for(&config));
    controller.initialize(source.as_ref()).await?;
    eprint!("{}", format_table(controller.store()));

    info!("Enter a sort attribute per line (name, level); 'quit' to stop");
    let stdin = BufReader::new(tokio::io::stdin());
    let clicks = process_clicks(&mut controller, stdin).await?;
    info!("Handled {} clicks", clicks);
    Ok(())
}

/// Treat each input line as the data attribute of a clicked button.
/// An empty line is a click on a button without the attribute.
pub async fn process_clicks<V, R>(controller: &mut UiController<V>, reader: R) -> Result<usize>
where
    V: SkillsView,
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    let mut clicks = 0;

    while let Some(line) = lines.next_line().await? {
        let attr = line.trim();
        if attr == "quit" {
            break;
        }
        let attr = if attr.is_empty() { None } else { Some(attr) };
        controller.handle_click(attr)?;
        clicks += 1;
        eprint!("{}", format_table(controller.store()));
    }

    Ok(clicks)
}

/// Plain-text view of the current order.
pub fn format_table(store: &SkillsStore) -> String {
    let rows = store.generate_skills_list().rows();
    let width = rows.iter().map(|(name, _, _)| name.chars().count()).max();
    let Some(width) = width else {
        return "(no skills)\n".to_string();
    };

    let mut out = String::new();
    for (name, _, level) in rows {
        out.push_str(&format!("{:<width$}  {:>5}\n", name, level, width = width));
    }
    out
}
