use crate::context::CliContext;
use crate::handlers::entry_views;
use crate::output;
use picker_domain::adapt;
use serde_json::json;

pub fn handle(ctx: &CliContext, search: &str) -> anyhow::Result<()> {
    let lists = adapt(&ctx.catalog, &ctx.selection, search);
    output::output_success(json!({
        "search": search,
        "available": entry_views(&lists.available, &ctx.workspaces),
        "selected": entry_views(&lists.selected, &ctx.workspaces),
    }))
}
