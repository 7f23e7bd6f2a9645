use crate::item::{EmbeddableType, Widget, Workspace};

/// Find the workspace a widget belongs to. Ids compare case-insensitively.
pub fn find_workspace<'a>(widget: &Widget, workspaces: &'a [Workspace]) -> Option<&'a Workspace> {
    let workspace_id = widget.workspace_id.as_deref()?;
    workspaces
        .iter()
        .find(|ws| ws.id.eq_ignore_ascii_case(workspace_id))
}

/// One-line description shown under a widget's name.
pub fn describe(widget: &Widget, workspaces: &[Workspace]) -> String {
    match widget.embeddable_type {
        EmbeddableType::Widget => {
            let platform = widget
                .platform
                .map(|p| p.to_string())
                .unwrap_or_default();
            match find_workspace(widget, workspaces) {
                Some(ws) => format!("{} | workspace {}", platform, ws.name),
                None => platform,
            }
        }
        EmbeddableType::WidgetCollection => describe_collection(widget),
        EmbeddableType::Unknown => "Unrecognized widget type".to_string(),
    }
}

fn describe_collection(collection: &Widget) -> String {
    if collection.widgets.is_empty() {
        return "Empty Collection".to_string();
    }
    let names: Vec<String> = collection
        .widgets
        .iter()
        .map(|member| format!(" {}", member.name.as_deref().unwrap_or("name not found")))
        .collect();
    format!("Collection of:{}", names.join(","))
}
