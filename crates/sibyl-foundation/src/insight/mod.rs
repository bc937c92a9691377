//! Reply interpretation.
//!
//! Turns a raw assistant reply into a renderable visualization descriptor:
//! classify the reply (usable? demo content?), pick a chart shape from an
//! ordered keyword table, extract the numeric pool, and build the shape's
//! fixed dataset schema. Deterministic and free of I/O; the only
//! nondeterminism is the synthesized pool for digit-free replies.

pub mod dataset;
pub mod interpreter;
pub mod types;

pub use dataset::build_dataset;
pub use interpreter::{classify_reply, detect_kind, extract_numbers, interpret};
pub use types::{
    ChartKind, Dataset, InsightError, Kpis, ReplyClassification, SeriesData, Visualization,
};
