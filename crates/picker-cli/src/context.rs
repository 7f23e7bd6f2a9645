use crate::cli::{Cli, InputArgs};
use async_trait::async_trait;
use picker_core::{ItemSource, PickerConfig, PickerError, PickerResult};
use picker_domain::{PageSizes, PickerState, Widget, Workspace};
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

/// Reads a JSON array from a file.
pub struct JsonFileSource<T> {
    path: PathBuf,
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonFileSource<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _marker: PhantomData,
        }
    }
}

#[async_trait]
impl<T> ItemSource<T> for JsonFileSource<T>
where
    T: DeserializeOwned + Send + 'static,
{
    async fn load(&self) -> PickerResult<Vec<T>> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            PickerError::NotFound(format!("{}: {}", self.path.display(), e))
        })?;
        serde_json::from_str(&content)
            .map_err(|e| PickerError::Serialization(format!("{}: {}", self.path.display(), e)))
    }
}

async fn load_optional<T>(path: Option<&Path>) -> PickerResult<Vec<T>>
where
    T: DeserializeOwned + Send + 'static,
{
    match path {
        Some(path) => JsonFileSource::new(path).load().await,
        None => Ok(Vec::new()),
    }
}

pub struct CliContext {
    pub catalog: Vec<Widget>,
    pub selection: Vec<Widget>,
    pub workspaces: Vec<Workspace>,
    pub page_sizes: PageSizes,
}

impl CliContext {
    pub async fn load(cli: &Cli, input: &InputArgs) -> anyhow::Result<Self> {
        let config = match &cli.config {
            Some(path) => PickerConfig::load_from(path)?,
            None => PickerConfig::load(),
        };
        let mut page_sizes = PageSizes::from_config(&config);
        if let Some(size) = cli.available_page_size {
            page_sizes.available = validate_page_size(size)?;
        }
        if let Some(size) = cli.selected_page_size {
            page_sizes.selected = validate_page_size(size)?;
        }

        let catalog: Vec<Widget> = JsonFileSource::new(&input.catalog).load().await?;
        let selection: Vec<Widget> = load_optional(input.selection.as_deref()).await?;
        let workspaces: Vec<Workspace> = load_optional(input.workspaces.as_deref()).await?;
        tracing::info!(
            "Loaded {} catalog and {} selection items",
            catalog.len(),
            selection.len()
        );

        Ok(Self {
            catalog,
            selection,
            workspaces,
            page_sizes,
        })
    }

    pub fn initial_state(&self) -> PickerState {
        PickerState::new(self.catalog.clone(), self.selection.clone(), self.page_sizes)
    }
}

fn validate_page_size(size: usize) -> PickerResult<usize> {
    if size == 0 {
        return Err(PickerError::Validation(
            "page size must be at least 1".to_string(),
        ));
    }
    Ok(size)
}
