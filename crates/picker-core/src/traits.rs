use crate::PickerResult;
use async_trait::async_trait;

/// Supplies one of the picker's external inputs (the catalog or the selection).
///
/// Fetching happens before the picker sees any data; implementations own all I/O.
#[async_trait]
pub trait ItemSource<T> {
    async fn load(&self) -> PickerResult<Vec<T>>;
}
