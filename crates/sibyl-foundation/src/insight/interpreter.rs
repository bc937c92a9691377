//! Reply interpretation: classify an assistant reply and derive a chart-ready
//! visualization descriptor from it. Pure string work, no I/O.

use super::dataset::build_dataset;
use super::types::{ChartKind, InsightError, ReplyClassification, Visualization};
use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;

/// Phrases that mark a reply as carrying no real data.
const NO_DATA_PHRASES: [&str; 7] = [
    "no data",
    "no information",
    "no trained",
    "cannot provide",
    "don't have",
    "do not have",
    "unavailable",
];

/// Phrases that flag a reply as demo/sample content.
const DEMO_PHRASES: [&str; 3] = ["dummy", "sample", "example"];

/// Ordered keyword table for category detection. Evaluated top to bottom;
/// the first group with any keyword present wins, so the order is the
/// priority and must stay a list, not a map.
const CATEGORY_KEYWORDS: [(ChartKind, &[&str]); 7] = [
    (ChartKind::Sales, &["sales", "revenue", "profit", "income"]),
    (ChartKind::Comparison, &["compare", "versus", "vs", "against"]),
    (ChartKind::Trend, &["trend", "growth", "increase", "decrease"]),
    (
        ChartKind::Distribution,
        &["distribution", "breakdown", "composition", "share"],
    ),
    (
        ChartKind::Radar,
        &["performance", "metrics", "attributes", "factors"],
    ),
    (ChartKind::Gauge, &["progress", "goal", "target", "achievement"]),
    (
        ChartKind::Mixed,
        &["overview", "dashboard", "summary", "analysis"],
    ),
];

/// Title used when a reply's first line is empty after stripping markup.
const DEFAULT_TITLE: &str = "Data Analysis";

/// Size of the synthesized pool when a reply contains no numbers at all.
const FALLBACK_POOL_LEN: usize = 12;

static NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+(?:\.\d+)?").expect("number pattern is valid"));

/// Scan a reply for no-data and demo-content phrases, case-insensitively.
///
/// A reply that admits having no data is only usable when it also flags
/// itself as demo/sample content; it then flows through as fallback data
/// rather than being rejected.
pub fn classify_reply(text: &str) -> ReplyClassification {
    let lowered = text.to_lowercase();
    let has_no_data = NO_DATA_PHRASES.iter().any(|p| lowered.contains(p));
    let has_demo = DEMO_PHRASES.iter().any(|p| lowered.contains(p));

    ReplyClassification {
        is_usable: !has_no_data || has_demo,
        is_fallback: has_demo || has_no_data,
    }
}

/// First keyword group matching the (lowercased) text wins; no match means
/// the composite dashboard shape.
pub fn detect_kind(text: &str) -> ChartKind {
    let lowered = text.to_lowercase();
    for (kind, keywords) in CATEGORY_KEYWORDS {
        if keywords.iter().any(|word| lowered.contains(word)) {
            return kind;
        }
    }
    ChartKind::Mixed
}

/// All integer/decimal substrings, left to right. Best-effort: no units,
/// currency, or magnitude handling.
pub fn extract_numbers(text: &str) -> Vec<f64> {
    NUMBER_RE
        .find_iter(text)
        .filter_map(|m| m.as_str().parse().ok())
        .collect()
}

fn synthesize_pool() -> Vec<f64> {
    let mut rng = rand::thread_rng();
    (0..FALLBACK_POOL_LEN)
        .map(|_| rng.gen_range(0..100) as f64)
        .collect()
}

/// Derive a visualization descriptor from an assistant reply.
///
/// Fails with [`InsightError::NoData`] for unusable replies (see
/// [`classify_reply`]); otherwise always produces a descriptor, synthesizing
/// a fallback numeric pool when the reply contains no digits.
pub fn interpret(reply: &str) -> Result<Visualization, InsightError> {
    let classification = classify_reply(reply);
    if !classification.is_usable {
        return Err(InsightError::NoData);
    }
    let mut is_fallback = classification.is_fallback;

    let mut lines = reply.lines();
    let title = lines
        .next()
        .map(|line| line.trim_start_matches(|c: char| c == '#' || c.is_whitespace()))
        .filter(|line| !line.is_empty())
        .unwrap_or(DEFAULT_TITLE)
        .to_string();
    let description = lines.next().unwrap_or("").to_string();

    let kind = detect_kind(reply);

    let mut numbers = extract_numbers(reply);
    if numbers.is_empty() {
        numbers = synthesize_pool();
        is_fallback = true;
    }

    Ok(Visualization {
        kind,
        title,
        description,
        dataset: build_dataset(kind, &numbers),
        is_fallback,
    })
}
