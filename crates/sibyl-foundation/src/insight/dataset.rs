//! Dataset synthesis: fixed slicing rules mapping a numeric pool onto each
//! chart shape. Short pools never fail; slices come up short and scalar
//! slots fall back to fixed defaults.

use super::types::{ChartKind, Dataset, Kpis, SeriesData, Visualization};

pub(crate) const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const DISTRIBUTION_LABELS: [&str; 4] = ["Category A", "Category B", "Category C", "Category D"];

const RADAR_AXES: [&str; 6] = [
    "Revenue",
    "Growth",
    "Satisfaction",
    "Retention",
    "Engagement",
    "Innovation",
];

/// Canned series shown when the caller opts into a demo visualization.
const DEMO_POOL: [f64; 12] = [
    65.0, 59.0, 80.0, 81.0, 56.0, 55.0, 28.0, 48.0, 40.0, 19.0, 86.0, 27.0,
];

fn month_labels(count: usize) -> Vec<String> {
    MONTHS.iter().take(count).map(|m| m.to_string()).collect()
}

fn labels(source: &[&str]) -> Vec<String> {
    source.iter().map(|l| l.to_string()).collect()
}

/// Values from `start` (inclusive) to `end` (exclusive), clipped to the pool.
fn slice(pool: &[f64], start: usize, end: usize) -> Vec<f64> {
    pool.iter().skip(start).take(end.saturating_sub(start)).copied().collect()
}

fn nth_or(pool: &[f64], index: usize, default: f64) -> f64 {
    pool.get(index).copied().unwrap_or(default)
}

/// Build the dataset for a chart shape from a numeric pool.
pub fn build_dataset(kind: ChartKind, pool: &[f64]) -> Dataset {
    match kind {
        ChartKind::Sales | ChartKind::Trend => Dataset::Series {
            labels: labels(&MONTHS),
            values: slice(pool, 0, 12),
        },
        ChartKind::Comparison => {
            let half = pool.len() / 2;
            Dataset::Comparison {
                labels: month_labels(half.min(12)),
                primary: slice(pool, 0, half),
                secondary: slice(pool, half, half * 2),
            }
        }
        ChartKind::Distribution => Dataset::Distribution {
            labels: labels(&DISTRIBUTION_LABELS),
            values: slice(pool, 0, 4),
        },
        ChartKind::Radar => Dataset::Radar {
            axes: labels(&RADAR_AXES),
            current: slice(pool, 0, 6),
            previous: slice(pool, 6, 12),
        },
        ChartKind::Gauge => {
            let value = nth_or(pool, 0, 75.0);
            Dataset::Gauge {
                value,
                remainder: 100.0 - value,
            }
        }
        ChartKind::Mixed => Dataset::Composite {
            kpis: Kpis {
                current: nth_or(pool, 0, 85.0),
                target: nth_or(pool, 1, 100.0),
                progress: nth_or(pool, 2, 75.0),
            },
            trend: SeriesData {
                labels: month_labels(6),
                values: slice(pool, 0, 6),
            },
            distribution: SeriesData {
                labels: vec!["A".into(), "B".into(), "C".into(), "D".into()],
                values: slice(pool, 6, 10),
            },
        },
    }
}

impl Visualization {
    /// Canned demo descriptor for the given shape, always flagged as
    /// fallback content.
    pub fn demo(kind: ChartKind) -> Self {
        Self {
            kind,
            title: "Demo Visualization".to_string(),
            description: "Sample data for demonstration purposes.".to_string(),
            dataset: build_dataset(kind, &DEMO_POOL),
            is_fallback: true,
        }
    }
}
