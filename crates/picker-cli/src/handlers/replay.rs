use crate::context::{CliContext, JsonFileSource};
use crate::output;
use picker_core::ItemSource;
use picker_domain::{Entry, Picker, PickerEvent, Widget};
use serde_json::json;
use std::path::Path;

pub async fn handle(ctx: &CliContext, events_path: &Path) -> anyhow::Result<()> {
    let events: Vec<PickerEvent> = JsonFileSource::new(events_path).load().await?;

    let mut reports: Vec<Vec<Entry<Widget>>> = Vec::new();
    let observer = |selected: &[Entry<Widget>]| reports.push(selected.to_vec());
    let mut picker = Picker::new(ctx.initial_state(), observer);

    let mut outcomes = Vec::with_capacity(events.len());
    for event in events {
        outcomes.push(picker.dispatch(event));
    }
    tracing::info!("Replayed {} events", outcomes.len());

    let (state, observer, log) = picker.into_parts();
    drop(observer);

    output::output_success(json!({
        "state": state,
        "outcomes": outcomes,
        "reported": reports,
        "log": log,
    }))
}
