//! Change detection for the picker's external inputs.

use crate::item::Widget;
use serde::{Deserialize, Serialize};

/// Which inputs differ from the last values the picker rebuilt from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeSet {
    pub catalog: bool,
    pub selection: bool,
    pub search: bool,
}

impl ChangeSet {
    pub fn any(&self) -> bool {
        self.catalog || self.selection || self.search
    }
}

/// Inputs captured at the last rebuild, compared by value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputSnapshot {
    pub catalog: Vec<Widget>,
    pub selection: Vec<Widget>,
    pub search: String,
}

impl InputSnapshot {
    pub fn new(catalog: Vec<Widget>, selection: Vec<Widget>, search: impl Into<String>) -> Self {
        Self {
            catalog,
            selection,
            search: search.into(),
        }
    }

    pub fn changes(&self, catalog: &[Widget], selection: &[Widget], search: &str) -> ChangeSet {
        ChangeSet {
            catalog: self.catalog.as_slice() != catalog,
            selection: self.selection.as_slice() != selection,
            search: self.search != search,
        }
    }
}
