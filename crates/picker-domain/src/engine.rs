//! Reorder and move primitives over absolute indices.

use crate::list::ListId;
use serde::{Deserialize, Serialize};

/// A position on a list's current page, as reported by the drag source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragLocation {
    pub list: ListId,
    pub index: usize,
}

impl DragLocation {
    pub fn new(list: ListId, index: usize) -> Self {
        Self { list, index }
    }
}

/// A completed drag. No destination means the item was dropped outside both lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragEvent {
    pub source: DragLocation,
    #[serde(default)]
    pub destination: Option<DragLocation>,
}

impl DragEvent {
    pub fn new(source: DragLocation, destination: Option<DragLocation>) -> Self {
        Self {
            source,
            destination,
        }
    }

    pub fn is_reorder(&self) -> bool {
        self.destination
            .is_some_and(|destination| destination.list == self.source.list)
    }
}

/// Move the entry at `from` to `to` within one list.
///
/// Returns false without touching the list when `from` is out of range.
/// A `to` past the end appends.
pub fn reorder<T>(list: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from >= list.len() {
        return false;
    }
    let entry = list.remove(from);
    let to = to.min(list.len());
    list.insert(to, entry);
    true
}

/// Move the entry at `from` in `source` to `to` in `destination`.
///
/// Returns false without touching either list when `from` is out of range.
/// A `to` past the end appends.
pub fn transfer<T>(source: &mut Vec<T>, destination: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from >= source.len() {
        return false;
    }
    let entry = source.remove(from);
    let to = to.min(destination.len());
    destination.insert(to, entry);
    true
}
