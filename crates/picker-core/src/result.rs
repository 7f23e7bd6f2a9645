use crate::error::PickerError;

pub type PickerResult<T> = Result<T, PickerError>;
