use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use paramtree::model::ParameterNode;
use paramtree::ui::context::UiContext;
use paramtree::ui::json::emit_event;
use paramtree::ui::json::events::{DataEvent, StartEvent};
use paramtree::TreeGlyphs;

const COMMAND: &str = "show";

#[derive(Serialize)]
struct ShowData<'a> {
    tree: &'a ParameterNode,
    categories: Vec<&'a str>,
}

pub fn cmd_show(file: &Path, ui: &UiContext) -> Result<()> {
    let model = paramtree::load_model(file)
        .with_context(|| format!("failed to load {}", file.display()))?;

    if ui.json {
        emit_event(&StartEvent::new(COMMAND))?;
        emit_event(&DataEvent::new(
            COMMAND,
            ShowData {
                tree: model.root(),
                categories: model.category_names().collect(),
            },
        ))?;
        return Ok(());
    }

    println!("{}", model.render(&TreeGlyphs::for_unicode(ui.unicode)));
    Ok(())
}
