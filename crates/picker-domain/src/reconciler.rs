//! Keeps page cursors valid as entries leave a list or lists are rebuilt.

use crate::list::{ListId, PageSizes, Pagination};
use crate::trigger::ChangeSet;
use picker_core::page_offset;

/// Whether a page now starts exactly at the end of a non-empty list,
/// i.e. its last entry was just moved out.
pub fn is_page_vacated(page: usize, page_size: usize, remaining: usize) -> bool {
    remaining > 0 && page_offset(page, page_size) == remaining
}

/// Step `list` back one page if its current page was just vacated.
///
/// Only ever applied to the source list of a cross-list move.
pub fn step_back_if_vacated(
    pagination: &mut Pagination,
    list: ListId,
    sizes: &PageSizes,
    remaining: usize,
) -> bool {
    let page = pagination.page(list);
    if !is_page_vacated(page, sizes.size(list), remaining) {
        return false;
    }
    pagination.set_page(list, page - 1);
    tracing::debug!("Page {} of {} list vacated, stepping back", page, list);
    true
}

/// Reset cursors after a full rebuild.
///
/// The available list always returns to page 1. The selected list only does
/// when the external selection changed.
pub fn reset_after_rebuild(pagination: &mut Pagination, changes: ChangeSet) {
    pagination.set_page(ListId::Available, 1);
    if changes.selection {
        pagination.set_page(ListId::Selected, 1);
    }
}
