//! Widget filter implementations.

use crate::item::{Widget, WidgetId};
use std::collections::HashSet;

/// Trait for filtering widgets by various criteria.
pub trait WidgetFilter {
    /// Returns true if the widget passes the filter.
    fn matches(&self, widget: &Widget) -> bool;
}

/// Keeps widgets that can appear in the picker at all: a usable id and the
/// singular embeddable type. Collections never pass.
pub struct EligibleFilter;

impl WidgetFilter for EligibleFilter {
    fn matches(&self, widget: &Widget) -> bool {
        widget.key().is_some() && widget.is_singular()
    }
}

/// Drops widgets whose id is in the given set.
pub struct ExcludeIdsFilter {
    ids: HashSet<WidgetId>,
}

impl ExcludeIdsFilter {
    pub fn new(ids: impl IntoIterator<Item = WidgetId>) -> Self {
        Self {
            ids: ids.into_iter().collect(),
        }
    }
}

impl WidgetFilter for ExcludeIdsFilter {
    fn matches(&self, widget: &Widget) -> bool {
        widget.key().is_some_and(|id| !self.ids.contains(&id))
    }
}

/// Case-insensitive substring search on the widget name.
///
/// Widgets without a name (or with an empty one) always match.
pub struct NameSearcher {
    query: String,
}

impl NameSearcher {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into().to_lowercase(),
        }
    }
}

impl WidgetFilter for NameSearcher {
    fn matches(&self, widget: &Widget) -> bool {
        if self.query.is_empty() {
            return true;
        }
        match widget.name.as_deref() {
            Some(name) if !name.is_empty() => name.to_lowercase().contains(&self.query),
            _ => true,
        }
    }
}

/// Combine multiple filters with AND logic.
pub struct CompositeFilter {
    filters: Vec<Box<dyn WidgetFilter>>,
}

impl CompositeFilter {
    /// Create an empty composite filter (matches everything).
    pub fn new() -> Self {
        Self { filters: vec![] }
    }

    /// Add a filter to the composite (builder pattern).
    pub fn with_filter(mut self, filter: Box<dyn WidgetFilter>) -> Self {
        self.filters.push(filter);
        self
    }
}

impl Default for CompositeFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl WidgetFilter for CompositeFilter {
    fn matches(&self, widget: &Widget) -> bool {
        self.filters.iter().all(|f| f.matches(widget))
    }
}
