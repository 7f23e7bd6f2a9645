//! Picker state and the reducer that drives every transition.

use crate::adapter::adapt;
use crate::engine::{reorder, transfer, DragEvent};
use crate::item::{Entry, Widget};
use crate::list::{absolute_index, ListId, PageSizes, Pagination};
use crate::reconciler::{reset_after_rebuild, step_back_if_vacated};
use crate::trigger::{ChangeSet, InputSnapshot};
use picker_core::PageView;
use serde::{Deserialize, Serialize};

/// Everything the picker can react to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PickerEvent {
    /// New values for the external inputs.
    Refresh {
        catalog: Vec<Widget>,
        #[serde(default)]
        selection: Vec<Widget>,
    },
    /// The search box text changed.
    Search { term: String },
    /// A drag was released.
    Drag(DragEvent),
    /// A list's page control was used.
    Paginate { list: ListId, page: usize },
}

/// What a reduced event did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    Unchanged,
    Rebuilt { changes: ChangeSet },
    Reordered { list: ListId, id: String, from: usize, to: usize },
    Moved { id: String, from: ListId, to: ListId },
    Paged { list: ListId, page: usize },
}

/// The result of reducing one event.
#[derive(Debug, Clone)]
pub struct Transition {
    pub state: PickerState,
    pub outcome: Outcome,
    /// The selected list to report upward, when the selection changed.
    pub reported: Option<Vec<Entry<Widget>>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PickerState {
    available: Vec<Entry<Widget>>,
    selected: Vec<Entry<Widget>>,
    pagination: Pagination,
    page_sizes: PageSizes,
    search: String,
    #[serde(skip)]
    snapshot: InputSnapshot,
}

impl PickerState {
    /// Initial state: adapted with an empty search, both lists on page 1.
    pub fn new(catalog: Vec<Widget>, selection: Vec<Widget>, page_sizes: PageSizes) -> Self {
        let lists = adapt(&catalog, &selection, "");
        Self {
            available: lists.available,
            selected: lists.selected,
            pagination: Pagination::default(),
            page_sizes,
            search: String::new(),
            snapshot: InputSnapshot::new(catalog, selection, ""),
        }
    }

    pub fn available(&self) -> &[Entry<Widget>] {
        &self.available
    }

    pub fn selected(&self) -> &[Entry<Widget>] {
        &self.selected
    }

    pub fn list(&self, list: ListId) -> &[Entry<Widget>] {
        match list {
            ListId::Available => &self.available,
            ListId::Selected => &self.selected,
        }
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn page_sizes(&self) -> PageSizes {
        self.page_sizes
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn page_view(&self, list: ListId) -> PageView {
        PageView::new(
            self.list(list).len(),
            self.pagination.page(list),
            self.page_sizes.size(list),
        )
    }

    /// Entries shown on `list`'s current page. Empty for a page past the end.
    pub fn page_entries(&self, list: ListId) -> &[Entry<Widget>] {
        &self.list(list)[self.page_view(list).range()]
    }

    fn list_mut(&mut self, list: ListId) -> &mut Vec<Entry<Widget>> {
        match list {
            ListId::Available => &mut self.available,
            ListId::Selected => &mut self.selected,
        }
    }

    fn lists_mut(&mut self, source: ListId) -> (&mut Vec<Entry<Widget>>, &mut Vec<Entry<Widget>>) {
        match source {
            ListId::Available => (&mut self.available, &mut self.selected),
            ListId::Selected => (&mut self.selected, &mut self.available),
        }
    }

    /// Rebuild both lists if any input differs from the last snapshot.
    fn reconcile(&mut self, catalog: Vec<Widget>, selection: Vec<Widget>) -> Outcome {
        let changes = self.snapshot.changes(&catalog, &selection, &self.search);
        if !changes.any() {
            return Outcome::Unchanged;
        }

        let lists = if changes.selection {
            adapt(&catalog, &selection, &self.search)
        } else {
            let local: Vec<Widget> = self.selected.iter().map(|e| e.content.clone()).collect();
            adapt(&catalog, &local, &self.search)
        };
        tracing::debug!(
            "Rebuilt lists ({:?}): {} available, {} selected",
            changes,
            lists.available.len(),
            lists.selected.len()
        );

        self.available = lists.available;
        self.selected = lists.selected;
        reset_after_rebuild(&mut self.pagination, changes);
        self.snapshot = InputSnapshot::new(catalog, selection, self.search.clone());
        Outcome::Rebuilt { changes }
    }

    fn apply_drag(&mut self, drag: DragEvent) -> Outcome {
        let Some(destination) = drag.destination else {
            tracing::debug!("Drag from {} dropped outside, ignoring", drag.source.list);
            return Outcome::Unchanged;
        };
        let source = drag.source;
        let from = absolute_index(source.list, source.index, &self.pagination, &self.page_sizes);
        let to = absolute_index(
            destination.list,
            destination.index,
            &self.pagination,
            &self.page_sizes,
        );

        let Some(id) = self.list(source.list).get(from).map(|e| e.id.clone()) else {
            tracing::warn!(
                "Drag source {} index {} out of range ({} entries)",
                source.list,
                from,
                self.list(source.list).len()
            );
            return Outcome::Unchanged;
        };

        if source.list == destination.list {
            reorder(self.list_mut(source.list), from, to);
            return Outcome::Reordered {
                list: source.list,
                id,
                from,
                to,
            };
        }

        let (source_list, destination_list) = self.lists_mut(source.list);
        transfer(source_list, destination_list, from, to);
        let remaining = source_list.len();
        step_back_if_vacated(&mut self.pagination, source.list, &self.page_sizes, remaining);
        Outcome::Moved {
            id,
            from: source.list,
            to: destination.list,
        }
    }
}

/// Reduce one event against `state`, producing the next state.
///
/// Total for every input: malformed or out-of-range events reduce to
/// [`Outcome::Unchanged`].
pub fn reduce(state: &PickerState, event: PickerEvent) -> Transition {
    let mut next = state.clone();
    let outcome = match event {
        PickerEvent::Refresh { catalog, selection } => next.reconcile(catalog, selection),
        PickerEvent::Search { term } => {
            next.search = term;
            let catalog = next.snapshot.catalog.clone();
            let selection = next.snapshot.selection.clone();
            next.reconcile(catalog, selection)
        }
        PickerEvent::Drag(drag) => next.apply_drag(drag),
        PickerEvent::Paginate { list, page } => {
            if page == 0 {
                tracing::warn!("Page 0 requested for {} list, using page 1", list);
            }
            next.pagination.set_page(list, page);
            Outcome::Paged {
                list,
                page: next.pagination.page(list),
            }
        }
    };

    let reported = match &outcome {
        Outcome::Rebuilt { .. } | Outcome::Moved { .. } => Some(next.selected.clone()),
        Outcome::Reordered {
            list: ListId::Selected,
            ..
        } => Some(next.selected.clone()),
        _ => None,
    };

    Transition {
        state: next,
        outcome,
        reported,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::DragLocation;
    use crate::item::EmbeddableType;

    fn widget(id: i64) -> Widget {
        Widget::new(id, format!("Widget {}", id), EmbeddableType::Widget)
    }

    fn widgets(ids: impl IntoIterator<Item = i64>) -> Vec<Widget> {
        ids.into_iter().map(widget).collect()
    }

    fn ids(entries: &[Entry<Widget>]) -> Vec<String> {
        entries.iter().map(|e| e.id.clone()).collect()
    }

    fn drag(from: (ListId, usize), to: Option<(ListId, usize)>) -> PickerEvent {
        PickerEvent::Drag(DragEvent::new(
            DragLocation::new(from.0, from.1),
            to.map(|(list, index)| DragLocation::new(list, index)),
        ))
    }

    #[test]
    fn test_new_state_adapts_without_search() {
        let state = PickerState::new(widgets([1, 2, 3]), widgets([2]), PageSizes::default());
        assert_eq!(ids(state.available()), vec!["1", "3"]);
        assert_eq!(ids(state.selected()), vec!["2"]);
        assert_eq!(state.pagination(), Pagination::default());
        assert_eq!(state.search(), "");
    }

    #[test]
    fn test_move_available_to_selected() {
        let state = PickerState::new(widgets([1, 2]), vec![], PageSizes::uniform(10));
        let transition = reduce(&state, drag((ListId::Available, 0), Some((ListId::Selected, 0))));

        assert_eq!(ids(transition.state.available()), vec!["2"]);
        assert_eq!(ids(transition.state.selected()), vec!["1"]);
        assert_eq!(ids(&transition.reported.unwrap()), vec!["1"]);
        assert_eq!(
            transition.outcome,
            Outcome::Moved {
                id: "1".to_string(),
                from: ListId::Available,
                to: ListId::Selected,
            }
        );
    }

    #[test]
    fn test_drop_outside_is_noop() {
        let state = PickerState::new(widgets([1, 2]), vec![], PageSizes::default());
        let transition = reduce(&state, drag((ListId::Available, 0), None));

        assert_eq!(transition.state, state);
        assert_eq!(transition.outcome, Outcome::Unchanged);
        assert!(transition.reported.is_none());
    }

    #[test]
    fn test_reorder_available_does_not_report() {
        let state = PickerState::new(widgets([1, 2, 3]), vec![], PageSizes::default());
        let transition = reduce(&state, drag((ListId::Available, 0), Some((ListId::Available, 2))));

        assert_eq!(ids(transition.state.available()), vec!["2", "3", "1"]);
        assert!(transition.reported.is_none());
    }

    #[test]
    fn test_reorder_selected_reports() {
        let state = PickerState::new(vec![], widgets([1, 2, 3]), PageSizes::default());
        let transition = reduce(&state, drag((ListId::Selected, 2), Some((ListId::Selected, 0))));

        assert_eq!(ids(transition.state.selected()), vec!["3", "1", "2"]);
        assert_eq!(ids(&transition.reported.unwrap()), vec!["3", "1", "2"]);
    }

    #[test]
    fn test_reorder_on_second_page_uses_offset() {
        let mut state = PickerState::new(vec![], widgets(1..=6), PageSizes::uniform(3));
        state = reduce(&state, PickerEvent::Paginate { list: ListId::Selected, page: 2 }).state;

        let transition = reduce(&state, drag((ListId::Selected, 0), Some((ListId::Selected, 2))));
        assert_eq!(ids(transition.state.selected()), vec!["1", "2", "3", "5", "6", "4"]);
        assert_eq!(transition.state.pagination().selected_page, 2);
    }

    #[test]
    fn test_move_uses_each_lists_own_page() {
        let mut state = PickerState::new(widgets(1..=5), widgets(6..=9), PageSizes::uniform(2));
        state = reduce(&state, PickerEvent::Paginate { list: ListId::Available, page: 2 }).state;
        state = reduce(&state, PickerEvent::Paginate { list: ListId::Selected, page: 2 }).state;

        let transition = reduce(&state, drag((ListId::Available, 1), Some((ListId::Selected, 1))));
        assert_eq!(ids(transition.state.available()), vec!["1", "2", "3", "5"]);
        assert_eq!(ids(transition.state.selected()), vec!["6", "7", "8", "4", "9"]);
    }

    #[test]
    fn test_move_steps_back_vacated_source_page() {
        let mut state = PickerState::new(vec![], widgets(1..=11), PageSizes::uniform(10));
        state = reduce(&state, PickerEvent::Paginate { list: ListId::Selected, page: 2 }).state;

        let transition = reduce(&state, drag((ListId::Selected, 0), Some((ListId::Available, 0))));
        assert_eq!(transition.state.selected().len(), 10);
        assert_eq!(transition.state.pagination().selected_page, 1);
        assert_eq!(ids(transition.state.available()), vec!["11"]);
    }

    #[test]
    fn test_destination_page_is_never_adjusted() {
        let mut state = PickerState::new(widgets([1]), vec![], PageSizes::uniform(10));
        state = reduce(&state, PickerEvent::Paginate { list: ListId::Selected, page: 3 }).state;

        let transition = reduce(&state, drag((ListId::Available, 0), Some((ListId::Selected, 0))));
        assert_eq!(ids(transition.state.selected()), vec!["1"]);
        assert_eq!(transition.state.pagination().selected_page, 3);
    }

    #[test]
    fn test_out_of_range_source_is_noop() {
        let state = PickerState::new(widgets([1]), vec![], PageSizes::default());
        let transition = reduce(&state, drag((ListId::Available, 4), Some((ListId::Selected, 0))));

        assert_eq!(transition.state, state);
        assert!(transition.reported.is_none());
    }

    #[test]
    fn test_search_rebuild_keeps_local_selection_order() {
        let state = PickerState::new(widgets([1, 2]), widgets([3, 4]), PageSizes::default());
        let reordered =
            reduce(&state, drag((ListId::Selected, 1), Some((ListId::Selected, 0)))).state;

        let transition = reduce(&reordered, PickerEvent::Search { term: "1".to_string() });
        assert_eq!(ids(transition.state.available()), vec!["1"]);
        assert_eq!(ids(transition.state.selected()), vec!["4", "3"]);
        assert_eq!(ids(&transition.reported.unwrap()), vec!["4", "3"]);
    }

    #[test]
    fn test_search_resets_available_page_only() {
        let mut state = PickerState::new(widgets(1..=30), widgets(31..=50), PageSizes::uniform(5));
        state = reduce(&state, PickerEvent::Paginate { list: ListId::Available, page: 3 }).state;
        state = reduce(&state, PickerEvent::Paginate { list: ListId::Selected, page: 2 }).state;

        let transition = reduce(&state, PickerEvent::Search { term: "widget".to_string() });
        assert_eq!(
            transition.state.pagination(),
            Pagination {
                available_page: 1,
                selected_page: 2,
            }
        );
    }

    #[test]
    fn test_selection_refresh_resets_both_pages() {
        let mut state = PickerState::new(widgets(1..=30), widgets(31..=50), PageSizes::uniform(5));
        state = reduce(&state, PickerEvent::Paginate { list: ListId::Available, page: 3 }).state;
        state = reduce(&state, PickerEvent::Paginate { list: ListId::Selected, page: 2 }).state;

        let transition = reduce(
            &state,
            PickerEvent::Refresh {
                catalog: widgets(1..=30),
                selection: widgets([1]),
            },
        );
        assert_eq!(transition.state.pagination(), Pagination::default());
        assert_eq!(ids(transition.state.selected()), vec!["1"]);
        assert_eq!(transition.state.available().len(), 29);
    }

    #[test]
    fn test_identical_refresh_is_noop() {
        let state = PickerState::new(widgets([1, 2]), widgets([2]), PageSizes::default());
        let transition = reduce(
            &state,
            PickerEvent::Refresh {
                catalog: widgets([1, 2]),
                selection: widgets([2]),
            },
        );

        assert_eq!(transition.outcome, Outcome::Unchanged);
        assert_eq!(transition.state, state);
        assert!(transition.reported.is_none());
    }

    #[test]
    fn test_paginate_zero_clamps() {
        let state = PickerState::new(widgets([1]), vec![], PageSizes::default());
        let transition = reduce(&state, PickerEvent::Paginate { list: ListId::Available, page: 0 });
        assert_eq!(
            transition.outcome,
            Outcome::Paged {
                list: ListId::Available,
                page: 1,
            }
        );
    }

    #[test]
    fn test_huge_page_shows_nothing_and_drags_are_ignored() {
        let state = PickerState::new(widgets([1, 2]), widgets([3]), PageSizes::uniform(10));
        let state = reduce(
            &state,
            PickerEvent::Paginate {
                list: ListId::Available,
                page: usize::MAX,
            },
        )
        .state;
        assert!(state.page_entries(ListId::Available).is_empty());

        let transition = reduce(&state, drag((ListId::Available, 0), Some((ListId::Selected, 0))));
        assert_eq!(transition.outcome, Outcome::Unchanged);
        assert_eq!(transition.state, state);
        assert!(transition.reported.is_none());
    }

    #[test]
    fn test_drop_on_huge_destination_page_appends() {
        let state = PickerState::new(widgets([1, 2]), widgets([3]), PageSizes::uniform(10));
        let state = reduce(
            &state,
            PickerEvent::Paginate {
                list: ListId::Selected,
                page: usize::MAX,
            },
        )
        .state;

        let transition = reduce(&state, drag((ListId::Available, 0), Some((ListId::Selected, 0))));
        assert_eq!(ids(transition.state.selected()), vec!["3", "1"]);
        assert_eq!(transition.state.pagination().selected_page, usize::MAX);
    }

    #[test]
    fn test_page_entries_past_end_is_empty() {
        let state = PickerState::new(widgets([1, 2]), vec![], PageSizes::uniform(2));
        let state = reduce(
            &state,
            PickerEvent::Paginate {
                list: ListId::Available,
                page: 5,
            },
        )
        .state;
        assert!(state.page_entries(ListId::Available).is_empty());
        assert_eq!(state.page_view(ListId::Available).summary(), "0-0 of 2 items");
    }

    #[test]
    fn test_event_script_deserializes() {
        let json = r#"[
            {"type": "search", "term": "bo"},
            {"type": "paginate", "list": "selected", "page": 2},
            {"type": "drag", "source": {"list": "available", "index": 0},
             "destination": {"list": "selected", "index": 1}},
            {"type": "refresh", "catalog": [{"id": 1, "embeddableType": "widget"}]}
        ]"#;
        let events: Vec<PickerEvent> = serde_json::from_str(json).unwrap();
        assert_eq!(events.len(), 4);
        assert!(matches!(&events[2], PickerEvent::Drag(d) if !d.is_reorder()));
        assert!(matches!(
            &events[3],
            PickerEvent::Refresh { selection, .. } if selection.is_empty()
        ));
    }
}
