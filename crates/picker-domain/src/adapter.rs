//! Derives the two picker lists from the external inputs.

use crate::filter::{CompositeFilter, EligibleFilter, ExcludeIdsFilter, NameSearcher, WidgetFilter};
use crate::item::{Entry, Widget};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdaptedLists {
    pub available: Vec<Entry<Widget>>,
    pub selected: Vec<Entry<Widget>>,
}

/// Build the available and selected lists.
///
/// The selected list is the eligible part of `selection` in its given order.
/// The available list is the eligible part of `catalog`, minus anything
/// selected, narrowed by `search`, in catalog order. The search term never
/// touches the selected list.
pub fn adapt(catalog: &[Widget], selection: &[Widget], search: &str) -> AdaptedLists {
    let selected: Vec<Entry<Widget>> = selection
        .iter()
        .filter(|w| EligibleFilter.matches(w))
        .cloned()
        .filter_map(Entry::from_widget)
        .collect();

    let filter = CompositeFilter::new()
        .with_filter(Box::new(EligibleFilter))
        .with_filter(Box::new(ExcludeIdsFilter::new(
            selected.iter().filter_map(|entry| entry.content.key()),
        )))
        .with_filter(Box::new(NameSearcher::new(search)));

    let available = catalog
        .iter()
        .filter(|w| filter.matches(w))
        .cloned()
        .filter_map(Entry::from_widget)
        .collect();

    AdaptedLists {
        available,
        selected,
    }
}
