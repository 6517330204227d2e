use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use paramtree::selection::{CheckableTree, ChoiceGroup, SelectionTreeBuilder};
use paramtree::ui::context::UiContext;
use paramtree::ui::json::emit_event;
use paramtree::ui::json::events::{DataEvent, StartEvent};

const COMMAND: &str = "groups";

#[derive(Debug, Serialize, PartialEq, Eq)]
struct GroupRow<'a> {
    category: &'a str,
    name: &'a str,
    members: Vec<&'a str>,
}

#[derive(Serialize)]
struct GroupsData<'a> {
    groups: Vec<GroupRow<'a>>,
}

fn group_row<'a>(tree: &'a CheckableTree, group: &'a ChoiceGroup) -> GroupRow<'a> {
    GroupRow {
        category: group.category(),
        name: group.name(),
        members: group
            .members()
            .iter()
            .filter_map(|&m| tree.label(m))
            .collect(),
    }
}

pub fn cmd_groups(file: &Path, ui: &UiContext) -> Result<()> {
    let model = paramtree::load_model(file)
        .with_context(|| format!("failed to load {}", file.display()))?;
    let (tree, groups) = SelectionTreeBuilder::build(&model);
    let rows: Vec<GroupRow<'_>> = groups.iter().map(|g| group_row(&tree, g)).collect();

    if ui.json {
        emit_event(&StartEvent::new(COMMAND))?;
        emit_event(&DataEvent::new(COMMAND, GroupsData { groups: rows }))?;
        return Ok(());
    }

    for row in &rows {
        println!("{} / {}: {}", row.category, row.name, row.members.join(", "));
    }
    Ok(())
}
