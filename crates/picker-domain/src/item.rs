use serde::{Deserialize, Serialize};
use std::fmt;

pub type WidgetId = i64;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmbeddableType {
    Widget,
    WidgetCollection,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    All,
    #[serde(rename = "Data Studio")]
    DataStudio,
    #[serde(rename = "Power BI")]
    PowerBi,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "All"),
            Self::DataStudio => write!(f, "Data Studio"),
            Self::PowerBi => write!(f, "Power BI"),
        }
    }
}

/// A catalog or selection record.
///
/// Both external inputs share this shape. Only `id`, `embeddable_type` and
/// `name` drive the picker; the remaining fields ride along for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Widget {
    #[serde(default)]
    pub id: Option<WidgetId>,
    #[serde(default)]
    pub embeddable_type: EmbeddableType,
    #[serde(default)]
    pub embeddable_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
    /// Members of a collection-typed item.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub widgets: Vec<Widget>,
}

impl Widget {
    pub fn new(id: WidgetId, name: impl Into<String>, embeddable_type: EmbeddableType) -> Self {
        Self {
            id: Some(id),
            embeddable_type,
            embeddable_id: Some(id),
            name: Some(name.into()),
            title: None,
            subtitle: None,
            description: None,
            image_url: None,
            color: None,
            workspace_id: None,
            labels: None,
            platform: None,
            widgets: Vec::new(),
        }
    }

    /// Id usable as a list key. Zero counts as missing.
    pub fn key(&self) -> Option<WidgetId> {
        self.id.filter(|&id| id != 0)
    }

    pub fn is_singular(&self) -> bool {
        self.embeddable_type == EmbeddableType::Widget
    }

    /// Labels split on commas, kept exactly as written.
    pub fn labels(&self) -> Vec<&str> {
        self.labels
            .as_deref()
            .map(|labels| labels.split(',').collect())
            .unwrap_or_default()
    }
}

/// An addressable list entry: the item plus its stringified id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry<T> {
    pub id: String,
    pub content: T,
}

impl Entry<Widget> {
    /// Wrap a widget, or `None` when it has no usable id.
    pub fn from_widget(widget: Widget) -> Option<Self> {
        let id = widget.key()?;
        Some(Self {
            id: id.to_string(),
            content: widget,
        })
    }
}

/// Auxiliary workspace metadata. Opaque to the picker, used for descriptions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
