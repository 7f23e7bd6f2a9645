pub mod adapt;
pub mod page;
pub mod replay;

use picker_domain::{describe, Entry, Widget, Workspace};
use serde::Serialize;

/// An entry as printed by the CLI, with its rendered description.
#[derive(Serialize)]
pub struct EntryView<'a> {
    pub id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<&'a str>,
}

pub fn entry_views<'a>(
    entries: &'a [Entry<Widget>],
    workspaces: &[Workspace],
) -> Vec<EntryView<'a>> {
    entries
        .iter()
        .map(|entry| EntryView {
            id: &entry.id,
            name: entry.content.name.as_deref(),
            description: describe(&entry.content, workspaces),
            labels: entry.content.labels(),
        })
        .collect()
}
