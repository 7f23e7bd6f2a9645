//! Widget filtering functionality.
//!
//! Provides the filters the adapter combines to derive both picker lists.

pub mod widget_filter;

pub use widget_filter::{
    CompositeFilter, EligibleFilter, ExcludeIdsFilter, NameSearcher, WidgetFilter,
};
