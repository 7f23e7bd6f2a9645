pub mod config;
pub mod error;
pub mod logging;
pub mod pagination;
pub mod result;
pub mod traits;

pub use config::{PickerConfig, DEFAULT_PAGE_SIZE};
pub use error::PickerError;
pub use logging::{LogEntry, Loggable};
pub use pagination::{page_offset, PageView};
pub use result::PickerResult;
pub use traits::ItemSource;
