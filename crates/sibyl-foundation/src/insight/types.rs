//! Visualization descriptor types produced by the reply interpreter.

use serde::{Deserialize, Serialize};

/// Chart-shape classification driving dataset schema selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Sales,
    Comparison,
    Trend,
    Distribution,
    Radar,
    Gauge,
    Mixed,
}

impl ChartKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sales => "sales",
            Self::Comparison => "comparison",
            Self::Trend => "trend",
            Self::Distribution => "distribution",
            Self::Radar => "radar",
            Self::Gauge => "gauge",
            Self::Mixed => "mixed",
        }
    }
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of scanning a reply for no-data and demo-content phrases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplyClassification {
    /// False when the reply reports having no data without flagging itself
    /// as demo/sample content; such replies cannot be visualized.
    pub is_usable: bool,
    /// True when the reply carries synthesized or sample-labeled content
    /// rather than real figures.
    pub is_fallback: bool,
}

/// A labeled sub-series inside a composite dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesData {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

/// Headline scalars for the composite dashboard shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Kpis {
    pub current: f64,
    pub target: f64,
    pub progress: f64,
}

/// Chart-ready data, one fixed schema per [`ChartKind`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Dataset {
    /// Single series over month labels (sales, trend).
    Series { labels: Vec<String>, values: Vec<f64> },
    /// Two series of equal length over month labels.
    Comparison {
        labels: Vec<String>,
        primary: Vec<f64>,
        secondary: Vec<f64>,
    },
    /// Proportional slices over fixed category labels.
    Distribution { labels: Vec<String>, values: Vec<f64> },
    /// Current vs. previous period over fixed dimension axes.
    Radar {
        axes: Vec<String>,
        current: Vec<f64>,
        previous: Vec<f64>,
    },
    /// One value and its complement to 100, a two-slice proportion.
    Gauge { value: f64, remainder: f64 },
    /// KPI scalars plus trend and distribution sub-series.
    Composite {
        kpis: Kpis,
        trend: SeriesData,
        distribution: SeriesData,
    },
}

/// Renderable descriptor derived from one assistant reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Visualization {
    pub kind: ChartKind,
    pub title: String,
    pub description: String,
    pub dataset: Dataset,
    /// True when the numbers are synthesized or sample-labeled. Downstream
    /// consumers must never present fallback data as real figures.
    pub is_fallback: bool,
}

/// Failure modes of the reply interpreter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InsightError {
    /// The reply reports having no data and is not flagged as demo content.
    /// Recoverable: offer the user a demo visualization instead.
    #[error("no trained data available for this request; a demo visualization can be shown instead")]
    NoData,
}
