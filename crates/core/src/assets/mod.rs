//! Asset model for the shared catalog.
//!
//! Every asset carries an [`AssetBase`] (identity and descriptive fields)
//! plus kind-specific fields. [`Asset`] is the closed set of kinds; the
//! shared capabilities (`id`, `name`, `description`, `validate`) dispatch by
//! matching on the variant.

pub mod validation;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::AssetId;

/// Asset-domain validation error.
///
/// Produced only by the pure `validate` functions; storing an asset never
/// validates it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssetError {
    #[error("name is required")]
    NameRequired,

    #[error("chart type is required")]
    ChartTypeRequired,

    #[error("metric is required")]
    MetricRequired,

    #[error("value is required")]
    ValueRequired,

    #[error("segment is required")]
    SegmentRequired,

    #[error("size cannot be negative: {0}")]
    NegativeSize(i64),
}

/// Fields shared by every asset kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetBase {
    /// Globally unique, caller-assigned, immutable after creation.
    pub id: AssetId,
    /// Display name; must be non-empty to validate.
    #[serde(default)]
    pub name: String,
    /// Free-text summary, empty when absent.
    #[serde(default)]
    pub description: String,
}

impl AssetBase {
    pub fn new(id: impl Into<AssetId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// A chart, e.g. a bar or line chart over some data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chart {
    #[serde(flatten)]
    pub base: AssetBase,
    #[serde(default)]
    pub chart_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_source: Option<String>,
}

/// A single metric and its observed value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    #[serde(flatten)]
    pub base: AssetBase,
    #[serde(default)]
    pub metric: String,
    #[serde(default)]
    pub value: String,
}

/// An audience segment with an estimated size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Audience {
    #[serde(flatten)]
    pub base: AssetBase,
    #[serde(default)]
    pub segment: String,
    /// Signed so that a negative size can be represented and rejected by
    /// validation instead of failing to parse.
    #[serde(default)]
    pub size: i64,
}

/// Discriminant of an [`Asset`], used for logging and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
    Chart,
    Insight,
    Audience,
}

impl AssetKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AssetKind::Chart => "chart",
            AssetKind::Insight => "insight",
            AssetKind::Audience => "audience",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Any catalog asset.
///
/// Serialized with an internal `"type"` tag and the base fields flattened
/// alongside the kind-specific ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Asset {
    Chart(Chart),
    Insight(Insight),
    Audience(Audience),
}

impl Asset {
    pub fn base(&self) -> &AssetBase {
        match self {
            Asset::Chart(chart) => &chart.base,
            Asset::Insight(insight) => &insight.base,
            Asset::Audience(audience) => &audience.base,
        }
    }

    pub fn id(&self) -> &str {
        &self.base().id
    }

    pub fn name(&self) -> &str {
        &self.base().name
    }

    pub fn description(&self) -> &str {
        &self.base().description
    }

    pub fn kind(&self) -> AssetKind {
        match self {
            Asset::Chart(_) => AssetKind::Chart,
            Asset::Insight(_) => AssetKind::Insight,
            Asset::Audience(_) => AssetKind::Audience,
        }
    }

    /// Check the shared base rules, then the kind-specific ones.
    ///
    /// Returns the first rule that fails.
    pub fn validate(&self) -> Result<(), AssetError> {
        match self {
            Asset::Chart(chart) => chart.validate(),
            Asset::Insight(insight) => insight.validate(),
            Asset::Audience(audience) => audience.validate(),
        }
    }
}

impl From<Chart> for Asset {
    fn from(chart: Chart) -> Self {
        Asset::Chart(chart)
    }
}

impl From<Insight> for Asset {
    fn from(insight: Insight) -> Self {
        Asset::Insight(insight)
    }
}

impl From<Audience> for Asset {
    fn from(audience: Audience) -> Self {
        Asset::Audience(audience)
    }
}
