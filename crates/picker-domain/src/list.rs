use picker_core::{page_offset, PickerConfig, DEFAULT_PAGE_SIZE};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two paired lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListId {
    Available,
    Selected,
}

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available => write!(f, "available"),
            Self::Selected => write!(f, "selected"),
        }
    }
}

/// Current page of each list (1-indexed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub available_page: usize,
    pub selected_page: usize,
}

impl Pagination {
    pub fn page(&self, list: ListId) -> usize {
        match list {
            ListId::Available => self.available_page,
            ListId::Selected => self.selected_page,
        }
    }

    /// Set a list's page. Pages below 1 are raised to 1.
    pub fn set_page(&mut self, list: ListId, page: usize) {
        let page = page.max(1);
        match list {
            ListId::Available => self.available_page = page,
            ListId::Selected => self.selected_page = page,
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            available_page: 1,
            selected_page: 1,
        }
    }
}

/// Fixed page size of each list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSizes {
    pub available: usize,
    pub selected: usize,
}

impl PageSizes {
    pub fn uniform(size: usize) -> Self {
        Self {
            available: size,
            selected: size,
        }
    }

    pub fn from_config(config: &PickerConfig) -> Self {
        Self {
            available: config.effective_available_page_size(),
            selected: config.effective_selected_page_size(),
        }
    }

    pub fn size(&self, list: ListId) -> usize {
        match list {
            ListId::Available => self.available,
            ListId::Selected => self.selected,
        }
    }
}

impl Default for PageSizes {
    fn default() -> Self {
        Self::uniform(DEFAULT_PAGE_SIZE)
    }
}

/// Absolute index of the first entry on `list`'s current page.
pub fn list_offset(list: ListId, pagination: &Pagination, sizes: &PageSizes) -> usize {
    page_offset(pagination.page(list), sizes.size(list))
}

/// Translate an in-page index on `list`'s current page into an absolute index.
pub fn absolute_index(
    list: ListId,
    in_page_index: usize,
    pagination: &Pagination,
    sizes: &PageSizes,
) -> usize {
    list_offset(list, pagination, sizes).saturating_add(in_page_index)
}
