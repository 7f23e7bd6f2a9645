use crate::cli::PageArgs;
use crate::context::CliContext;
use crate::handlers::entry_views;
use crate::output;
use picker_domain::{reduce, ListId, PickerEvent};
use serde_json::json;

pub fn handle(ctx: &CliContext, args: &PageArgs) -> anyhow::Result<()> {
    let list = ListId::from(args.list);
    let page = usize::try_from(args.page)?;

    let mut state = ctx.initial_state();
    if !args.search.is_empty() {
        state = reduce(
            &state,
            PickerEvent::Search {
                term: args.search.clone(),
            },
        )
        .state;
    }
    state = reduce(&state, PickerEvent::Paginate { list, page }).state;

    let view = state.page_view(list);
    output::output_success(json!({
        "list": list,
        "page": view,
        "summary": view.summary(),
        "has_previous": view.has_previous(),
        "has_next": view.has_next(),
        "entries": entry_views(state.page_entries(list), &ctx.workspaces),
    }))
}
