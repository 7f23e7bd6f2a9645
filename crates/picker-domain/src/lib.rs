pub mod adapter;
pub mod describe;
pub mod engine;
pub mod filter;
pub mod item;
pub mod list;
pub mod picker;
pub mod reconciler;
pub mod state;
pub mod trigger;

pub use adapter::{adapt, AdaptedLists};
pub use describe::{describe, find_workspace};
pub use engine::{DragEvent, DragLocation};
pub use item::{EmbeddableType, Entry, Platform, Widget, WidgetId, Workspace};
pub use list::{absolute_index, list_offset, ListId, PageSizes, Pagination};
pub use picker::{Picker, SelectionObserver};
pub use state::{reduce, Outcome, PickerEvent, PickerState, Transition};
pub use trigger::{ChangeSet, InputSnapshot};
